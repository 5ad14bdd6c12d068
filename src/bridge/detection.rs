//! Arithmetic detection path - per-tick stabilizer session
//!
//! JS polls the classifier on its own timer and forwards each result here.
//! Committed symbols flow straight into the expression engine; the return
//! value is only a notification for UI/audio feedback.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::expression::EvalOutcome;
use crate::frame::FrameSample;
use crate::stabilizer::{GestureStabilizer, StabilizerConfig};

use super::calculator;

thread_local! {
    static ARITHMETIC_SESSION: RefCell<Option<GestureStabilizer>> = RefCell::new(None);
}

/// Construct a fresh stabilizer session. Any previous session is discarded.
#[wasm_bindgen]
pub fn start_arithmetic_session(
    confidence_threshold: f32,
    required_stable_frames: u32,
    min_gesture_duration_ms: f64,
    cooldown_ms: f64,
    hand_absence_timeout_ms: f64,
) {
    let config = StabilizerConfig {
        confidence_threshold,
        required_stable_frames,
        min_gesture_duration_ms,
        cooldown_ms,
        hand_absence_timeout_ms,
    };
    ARITHMETIC_SESSION.with(|session| {
        *session.borrow_mut() = Some(GestureStabilizer::new(config));
    });
    web_sys::console::log_1(&"🖐️ Arithmetic session started".into());
}

/// Tear down the session synchronously. No partially-committed symbol
/// survives a stop/start cycle; the caller cancels its own poll timer.
#[wasm_bindgen]
pub fn stop_arithmetic_session() {
    ARITHMETIC_SESSION.with(|session| {
        *session.borrow_mut() = None;
    });
    web_sys::console::log_1(&"🛑 Arithmetic session stopped".into());
}

/// Feed one classifier poll result. Returns the committed symbol's label
/// when this tick crossed the stability gates, otherwise None.
#[wasm_bindgen]
pub fn arithmetic_tick(hand_present: bool, label: Option<String>, confidence: f32) -> Option<String> {
    let now_ms = js_sys::Date::now();
    let sample = FrameSample {
        hand_present,
        landmarks: None,
        label,
        confidence: Some(confidence),
    };

    let committed = ARITHMETIC_SESSION.with(|session| {
        session
            .borrow_mut()
            .as_mut()
            .and_then(|stabilizer| stabilizer.process(&sample, now_ms))
    })?;

    if let EvalOutcome::Evaluated(result) = calculator::apply_committed(&committed, now_ms) {
        web_sys::console::log_1(&format!("🧮 Evaluated: {}", result).into());
    }
    Some(committed.as_label())
}
