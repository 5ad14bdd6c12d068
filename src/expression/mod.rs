//! Expression engine - committed symbols in, evaluated operations out
//!
//! Re-exports only. All logic in submodules.

mod engine;
mod eval;
mod history;
mod speech;

pub use engine::{EvalOutcome, ExpressionEngine};
pub use eval::evaluate;
pub use history::{Operation, OperationHistory, HISTORY_CAPACITY};
pub use speech::narrate_operation;
