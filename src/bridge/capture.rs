//! Training-capture path - rate limiter + quality gate session
//!
//! JS sends raw landmark frames as a flat [x,y,z × 21] array, exactly as the
//! camera callback receives them; the return value tells the caller whether
//! to persist this sample as a training example.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::capture::{CaptureRateLimiter, QualityGate, QualityGateConfig};
use crate::frame::FrameSample;

struct CaptureSession {
    limiter: CaptureRateLimiter,
    gate: QualityGate,
}

thread_local! {
    static CAPTURE_SESSION: RefCell<Option<CaptureSession>> = RefCell::new(None);
}

/// Construct a fresh capture session. Any previous session is discarded.
#[wasm_bindgen]
pub fn start_capture_session(capture_interval_ms: f64, check_position_variety: bool) {
    let config = QualityGateConfig {
        check_position_variety,
        ..QualityGateConfig::default()
    };
    CAPTURE_SESSION.with(|session| {
        *session.borrow_mut() = Some(CaptureSession {
            limiter: CaptureRateLimiter::new(capture_interval_ms),
            gate: QualityGate::new(config),
        });
    });
    web_sys::console::log_1(&"📷 Capture session started".into());
}

#[wasm_bindgen]
pub fn stop_capture_session() {
    CAPTURE_SESSION.with(|session| {
        *session.borrow_mut() = None;
    });
    web_sys::console::log_1(&"🛑 Capture session stopped".into());
}

/// The user switched target labels: positional-variety memory restarts.
#[wasm_bindgen]
pub fn set_capture_label(label: &str) {
    CAPTURE_SESSION.with(|session| {
        if let Some(session) = session.borrow_mut().as_mut() {
            session.gate.reset_position_memory();
        }
    });
    web_sys::console::log_1(&format!("🏷️ Capture label: {}", label).into());
}

/// Evaluate one candidate sample. True means "persist this as a training
/// example". Returns false when no session is active or the attempt is
/// rate-limited, without consulting the gate.
#[wasm_bindgen]
pub fn capture_tick(flat_landmarks: &[f32]) -> bool {
    let now_ms = js_sys::Date::now();
    CAPTURE_SESSION.with(|session| {
        let mut session = session.borrow_mut();
        let session = match session.as_mut() {
            Some(s) => s,
            None => return false,
        };
        if !session.limiter.try_begin(now_ms) {
            return false;
        }

        let sample = FrameSample {
            hand_present: true,
            landmarks: FrameSample::landmarks_from_flat(flat_landmarks),
            label: None,
            confidence: None,
        };

        let fail_opens_before = session.gate.fail_open_admissions();
        let admitted = session.gate.admit(&sample, now_ms);
        if session.gate.fail_open_admissions() > fail_opens_before {
            web_sys::console::log_1(&"⚠️ Geometry check failed open, sample admitted".into());
        }
        admitted
    })
}
