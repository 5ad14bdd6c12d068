//! Positional-variety memory
//!
//! Rejects long runs of samples captured at a frozen wrist position so the
//! training set favors pose diversity over raw throughput.

/// Minimum 2D wrist movement (unit-square space) that counts as "moved"
pub const MOVEMENT_THRESHOLD: f32 = 0.015;

/// Static samples tolerated before further ones are rejected
pub const MAX_STATIC_STREAK: u32 = 5;

/// Idle time after which the memory self-clears
pub const MEMORY_TIMEOUT_MS: f64 = 2000.0;

/// Rolling memory of the last admitted wrist position
#[derive(Debug, Default)]
pub struct PositionMemory {
    last_admitted: Option<(f32, f32)>,
    static_streak: u32,
    last_update_ms: Option<f64>,
}

impl PositionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit reset (label change, mode switch)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn static_streak(&self) -> u32 {
        self.static_streak
    }

    /// Decide whether this wrist position shows enough variety to admit.
    /// The first sample after a reset always admits.
    pub fn check(&mut self, wrist: (f32, f32), now_ms: f64) -> bool {
        if let Some(last) = self.last_update_ms {
            if now_ms - last > MEMORY_TIMEOUT_MS {
                self.reset();
            }
        }
        self.last_update_ms = Some(now_ms);

        let admit = match self.last_admitted {
            None => true,
            Some(prev) => {
                let dx = wrist.0 - prev.0;
                let dy = wrist.1 - prev.1;
                let movement = (dx * dx + dy * dy).sqrt();
                if movement > MOVEMENT_THRESHOLD {
                    self.static_streak = 0;
                    true
                } else {
                    self.static_streak += 1;
                    self.static_streak <= MAX_STATIC_STREAK
                }
            }
        };

        if admit {
            self.last_admitted = Some(wrist);
        }
        admit
    }
}
