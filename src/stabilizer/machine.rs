//! Commitment state machine
//!
//! Double-gates every candidate behind a consecutive-frame run length AND a
//! minimum wall-clock duration, then suppresses repeats with a cooldown
//! window. Hand withdrawal past the absence timeout is an intentional reset
//! signal, not noise: it re-arms commitment even mid-cooldown.

use crate::frame::FrameSample;
use crate::vocab::Symbol;

use super::StabilizerConfig;

/// Mutable stabilizer state, advanced once per poll tick.
///
/// `candidate_started_at` and `cooldown_until` are deliberately separate
/// fields; conflating them makes the machine unauditable.
#[derive(Clone, Copy, Debug, Default)]
pub struct StabilizerState {
    pub hand_present: bool,
    pub candidate: Option<Symbol>,
    pub run_length: u32,
    pub candidate_started_at: Option<f64>,
    pub cooldown_until: Option<f64>,
    pub hand_absent_since: Option<f64>,
}

/// Converts the raw classification stream into sparse committed symbols
pub struct GestureStabilizer {
    config: StabilizerConfig,
    state: StabilizerState,
}

impl GestureStabilizer {
    pub fn new(config: StabilizerConfig) -> Self {
        Self {
            config,
            state: StabilizerState::default(),
        }
    }

    pub fn state(&self) -> &StabilizerState {
        &self.state
    }

    /// Clear all state synchronously (stop/start, hand withdrawal).
    /// No partially-built candidate survives this.
    pub fn reset(&mut self) {
        self.state = StabilizerState::default();
    }

    /// Advance one tick. Returns a symbol only when the current candidate
    /// has survived the run-length + duration gates outside cooldown.
    pub fn process(&mut self, sample: &FrameSample, now_ms: f64) -> Option<Symbol> {
        if !sample.hand_present {
            match self.state.hand_absent_since {
                None => {
                    // First absent tick: start the absence clock
                    self.state.hand_present = false;
                    self.state.hand_absent_since = Some(now_ms);
                }
                Some(since) if now_ms - since > self.config.hand_absence_timeout_ms => {
                    self.reset();
                }
                Some(_) => {}
            }
            return None;
        }

        // Low-confidence and out-of-vocabulary frames are ignored entirely:
        // no state change, not even hand-presence bookkeeping.
        let confident = sample
            .confidence
            .map_or(false, |c| c >= self.config.confidence_threshold);
        let symbol = match sample.label.as_deref().and_then(Symbol::from_label) {
            Some(s) if confident => s,
            _ => return None,
        };

        self.state.hand_present = true;
        self.state.hand_absent_since = None;

        if let Some(until) = self.state.cooldown_until {
            if now_ms < until {
                return None;
            }
            self.state.cooldown_until = None;
        }

        if self.state.candidate == Some(symbol) {
            self.state.run_length += 1;
            let held_long_enough = self
                .state
                .candidate_started_at
                .map_or(false, |t| now_ms - t >= self.config.min_gesture_duration_ms);
            if self.state.run_length >= self.config.required_stable_frames && held_long_enough {
                self.state.cooldown_until = Some(now_ms + self.config.cooldown_ms);
                self.state.run_length = 0;
                return Some(symbol);
            }
            None
        } else {
            // New candidate: fresh run
            self.state.candidate = Some(symbol);
            self.state.run_length = 1;
            self.state.candidate_started_at = Some(now_ms);
            None
        }
    }
}

impl Default for GestureStabilizer {
    fn default() -> Self {
        Self::new(StabilizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Operator;

    fn tick(stabilizer: &mut GestureStabilizer, label: &str, now_ms: f64) -> Option<Symbol> {
        stabilizer.process(&FrameSample::prediction(label, 0.99), now_ms)
    }

    fn absent_tick(stabilizer: &mut GestureStabilizer, now_ms: f64) -> Option<Symbol> {
        stabilizer.process(&FrameSample::absent(), now_ms)
    }

    #[test]
    fn test_short_run_never_commits() {
        let mut s = GestureStabilizer::default();
        for i in 0..7 {
            assert_eq!(tick(&mut s, "5", i as f64 * 100.0), None);
        }
    }

    #[test]
    fn test_commit_requires_run_length_and_duration() {
        let mut s = GestureStabilizer::default();
        // 8 ticks at t=0..700: run length met at t=700 but only 700ms elapsed
        for i in 0..8 {
            assert_eq!(tick(&mut s, "5", i as f64 * 100.0), None);
        }
        // 9th tick at t=800: both gates pass
        assert_eq!(tick(&mut s, "5", 800.0), Some(Symbol::Digit('5')));
    }

    #[test]
    fn test_cooldown_suppresses_held_pose() {
        let mut s = GestureStabilizer::default();
        let mut commits = 0;
        // Hold the same sign through the whole cooldown window (ends t=2000)
        for i in 0..20 {
            if tick(&mut s, "7", i as f64 * 100.0).is_some() {
                commits += 1;
            }
        }
        assert_eq!(commits, 1);
    }

    #[test]
    fn test_hand_withdrawal_rearms_through_cooldown() {
        let config = StabilizerConfig {
            cooldown_ms: 10_000.0,
            ..StabilizerConfig::default()
        };
        let mut s = GestureStabilizer::new(config);
        for i in 0..9 {
            tick(&mut s, "3", i as f64 * 100.0);
        }
        assert!(s.state().cooldown_until.is_some());

        // Withdraw the hand past the absence timeout
        absent_tick(&mut s, 900.0);
        absent_tick(&mut s, 2000.0);
        assert!(s.state().cooldown_until.is_none());

        // A fresh run commits long before the old cooldown would have ended
        let mut committed = None;
        for i in 0..9 {
            if let Some(sym) = tick(&mut s, "+", 2100.0 + i as f64 * 100.0) {
                committed = Some(sym);
            }
        }
        assert_eq!(committed, Some(Symbol::Op(Operator::Add)));
    }

    #[test]
    fn test_brief_absence_preserves_candidate() {
        let mut s = GestureStabilizer::default();
        for i in 0..5 {
            tick(&mut s, "2", i as f64 * 100.0);
        }
        // One absent tick, well under the timeout
        absent_tick(&mut s, 500.0);
        assert_eq!(s.state().run_length, 5);

        assert_eq!(tick(&mut s, "2", 600.0), None);
        assert_eq!(tick(&mut s, "2", 700.0), None);
        assert_eq!(tick(&mut s, "2", 800.0), Some(Symbol::Digit('2')));
    }

    #[test]
    fn test_low_confidence_frames_are_invisible() {
        let mut s = GestureStabilizer::default();
        for i in 0..5 {
            tick(&mut s, "9", i as f64 * 100.0);
        }
        // Low-confidence ticks change nothing, not even the run
        for i in 5..8 {
            let sample = FrameSample::prediction("9", 0.4);
            assert_eq!(s.process(&sample, i as f64 * 100.0), None);
        }
        assert_eq!(s.state().run_length, 5);

        assert_eq!(tick(&mut s, "9", 800.0), None);
        assert_eq!(tick(&mut s, "9", 900.0), None);
        assert_eq!(tick(&mut s, "9", 1000.0), Some(Symbol::Digit('9')));
    }

    #[test]
    fn test_out_of_vocabulary_frames_are_invisible() {
        let mut s = GestureStabilizer::default();
        for i in 0..4 {
            tick(&mut s, "1", i as f64 * 100.0);
        }
        tick(&mut s, "not-a-sign", 400.0);
        assert_eq!(s.state().run_length, 4);
        assert_eq!(s.state().candidate, Some(Symbol::Digit('1')));
    }

    #[test]
    fn test_flicker_between_labels_never_commits() {
        let mut s = GestureStabilizer::default();
        for i in 0..30 {
            let label = if i % 2 == 0 { "4" } else { "5" };
            assert_eq!(tick(&mut s, label, i as f64 * 100.0), None);
        }
        assert_eq!(s.state().run_length, 1);
    }

    #[test]
    fn test_candidate_switch_resets_run() {
        let mut s = GestureStabilizer::default();
        for i in 0..6 {
            tick(&mut s, "8", i as f64 * 100.0);
        }
        tick(&mut s, "6", 600.0);
        assert_eq!(s.state().candidate, Some(Symbol::Digit('6')));
        assert_eq!(s.state().run_length, 1);
        assert_eq!(s.state().candidate_started_at, Some(600.0));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut s = GestureStabilizer::default();
        for i in 0..9 {
            tick(&mut s, "5", i as f64 * 100.0);
        }
        s.reset();
        let state = s.state();
        assert!(!state.hand_present);
        assert_eq!(state.candidate, None);
        assert_eq!(state.run_length, 0);
        assert_eq!(state.cooldown_until, None);
    }
}
