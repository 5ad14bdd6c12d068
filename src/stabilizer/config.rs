//! Stabilizer tuning parameters
//!
//! All caller-supplied; defaults are the operative values for arithmetic mode.

/// Gating thresholds for symbol commitment
#[derive(Clone, Copy, Debug)]
pub struct StabilizerConfig {
    /// Minimum classifier confidence to consider a frame at all
    pub confidence_threshold: f32,
    /// Consecutive ticks a candidate must be observed before it can commit
    pub required_stable_frames: u32,
    /// Minimum wall-clock time a candidate must persist before it can commit
    pub min_gesture_duration_ms: f64,
    /// Suppression window after each commit
    pub cooldown_ms: f64,
    /// Hand absence longer than this resets the whole state machine
    pub hand_absence_timeout_ms: f64,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.95,
            required_stable_frames: 8,
            min_gesture_duration_ms: 800.0,
            cooldown_ms: 1200.0,
            hand_absence_timeout_ms: 1000.0,
        }
    }
}
