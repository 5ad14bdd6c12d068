//! Capture quality gate - admission control for training samples
//!
//! Re-exports only. All logic in submodules.

mod position;
mod quality;
mod rate_limit;

pub use position::{PositionMemory, MAX_STATIC_STREAK, MEMORY_TIMEOUT_MS, MOVEMENT_THRESHOLD};
pub use quality::{GeometryError, QualityGate, QualityGateConfig};
pub use rate_limit::{CaptureRateLimiter, REENTRANCY_LOCK_MS};
