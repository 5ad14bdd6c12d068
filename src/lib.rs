//! Signcalc Web - hand-sign arithmetic core
//!
//! WASM module sitting between the per-frame landmark classifier (JS) and
//! the UI. Only contains:
//! - Pure signal-stabilization logic (stabilizer, expression, capture gate)
//! - wasm_bindgen entry points that delegate to the bridge submodules

mod bridge;

pub mod capture;
pub mod expression;
pub mod frame;
pub mod stabilizer;
pub mod vocab;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    arithmetic_tick, capture_tick, clear_expression, commit_symbol, get_expression_display,
    get_last_narration, get_last_result, get_operation_history, set_capture_label,
    start_arithmetic_session, start_capture_session, stop_arithmetic_session,
    stop_capture_session,
};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
