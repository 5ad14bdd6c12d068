//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.
//!
//! The detection/arithmetic path and the capture path own separate
//! thread-local sessions and share no mutable state.

mod calculator;
mod capture;
mod detection;

pub use calculator::{
    clear_expression, commit_symbol, get_expression_display, get_last_narration, get_last_result,
    get_operation_history,
};
pub use capture::{capture_tick, set_capture_label, start_capture_session, stop_capture_session};
pub use detection::{arithmetic_tick, start_arithmetic_session, stop_arithmetic_session};
