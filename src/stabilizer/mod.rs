//! Gesture stabilizer - turns noisy per-tick classifications into committed symbols
//!
//! Re-exports only. All logic in submodules.

mod config;
mod machine;

pub use config::StabilizerConfig;
pub use machine::{GestureStabilizer, StabilizerState};
