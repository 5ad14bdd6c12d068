//! Expression engine state and its JS-facing accessors
//!
//! One engine per page session. The stabilizer feeds it through
//! apply_committed; manual entry (keyboard fallback in the UI) goes through
//! commit_symbol with the same labels the classifier produces.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::expression::{narrate_operation, EvalOutcome, ExpressionEngine};
use crate::vocab::Symbol;

thread_local! {
    static ENGINE: RefCell<ExpressionEngine> = RefCell::new(ExpressionEngine::new());
    static LAST_NARRATION: RefCell<Option<String>> = RefCell::new(None);
}

/// Commit outcome as handed to JS
#[derive(Serialize)]
struct CommitResult {
    outcome: &'static str,
    result: Option<f64>,
}

impl From<EvalOutcome> for CommitResult {
    fn from(outcome: EvalOutcome) -> Self {
        match outcome {
            EvalOutcome::Unchanged => CommitResult { outcome: "unchanged", result: None },
            EvalOutcome::Appended => CommitResult { outcome: "appended", result: None },
            EvalOutcome::Evaluated(v) => CommitResult { outcome: "evaluated", result: Some(v) },
            EvalOutcome::EvaluationFailed => CommitResult { outcome: "failed", result: None },
        }
    }
}

/// Apply a stabilizer-committed symbol (internal API)
pub(crate) fn apply_committed(symbol: &Symbol, now_ms: f64) -> EvalOutcome {
    ENGINE.with(|engine| {
        let mut engine = engine.borrow_mut();
        let outcome = engine.commit(symbol, now_ms);
        if let EvalOutcome::Evaluated(_) = outcome {
            let narration = engine.history().latest().map(narrate_operation);
            LAST_NARRATION.with(|n| *n.borrow_mut() = narration);
        }
        outcome
    })
}

/// Commit a symbol by label (manual entry path). Unknown labels are a no-op.
#[wasm_bindgen]
pub fn commit_symbol(label: &str) -> JsValue {
    let outcome = match Symbol::from_label(label) {
        Some(symbol) => apply_committed(&symbol, js_sys::Date::now()),
        None => EvalOutcome::Unchanged,
    };
    serde_wasm_bindgen::to_value(&CommitResult::from(outcome)).unwrap_or(JsValue::NULL)
}

/// Finalized tokens plus the in-progress number, for the UI readout
#[wasm_bindgen]
pub fn get_expression_display() -> String {
    ENGINE.with(|engine| engine.borrow().display())
}

#[wasm_bindgen]
pub fn get_last_result() -> Option<f64> {
    ENGINE.with(|engine| engine.borrow().last_result())
}

/// Bounded history, most-recent-first
#[wasm_bindgen]
pub fn get_operation_history() -> JsValue {
    ENGINE.with(|engine| {
        serde_wasm_bindgen::to_value(&engine.borrow().history().to_vec()).unwrap_or(JsValue::NULL)
    })
}

/// Narration text for the most recent evaluation (for the audio sink)
#[wasm_bindgen]
pub fn get_last_narration() -> Option<String> {
    LAST_NARRATION.with(|n| n.borrow().clone())
}

/// Drop the in-progress expression. History and last result survive.
#[wasm_bindgen]
pub fn clear_expression() {
    ENGINE.with(|engine| engine.borrow_mut().clear());
}
