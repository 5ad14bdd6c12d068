//! Capture attempt rate limiting
//!
//! Two gates: a configured minimum interval since the last *attempted*
//! capture, and a short re-entrancy lock that stops overlapping calls from
//! double-capturing the same frame.

/// Re-entrancy lock window around each attempt
pub const REENTRANCY_LOCK_MS: f64 = 30.0;

/// Time-gates capture attempts
#[derive(Debug)]
pub struct CaptureRateLimiter {
    interval_ms: f64,
    last_attempt_ms: Option<f64>,
    locked_until_ms: f64,
}

impl CaptureRateLimiter {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_attempt_ms: None,
            locked_until_ms: 0.0,
        }
    }

    /// Try to begin a capture attempt. Returns false while locked or inside
    /// the minimum interval; true marks an attempt and arms the lock.
    pub fn try_begin(&mut self, now_ms: f64) -> bool {
        if now_ms < self.locked_until_ms {
            return false;
        }
        if let Some(last) = self.last_attempt_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_attempt_ms = Some(now_ms);
        self.locked_until_ms = now_ms + REENTRANCY_LOCK_MS;
        true
    }

    pub fn reset(&mut self) {
        self.last_attempt_ms = None;
        self.locked_until_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_allowed() {
        let mut limiter = CaptureRateLimiter::new(1000.0);
        assert!(limiter.try_begin(0.0));
    }

    #[test]
    fn test_interval_enforced_from_last_attempt() {
        let mut limiter = CaptureRateLimiter::new(1000.0);
        assert!(limiter.try_begin(0.0));
        assert!(!limiter.try_begin(500.0));
        assert!(!limiter.try_begin(999.0));
        assert!(limiter.try_begin(1000.0));
    }

    #[test]
    fn test_reentrancy_lock_blocks_overlapping_calls() {
        let mut limiter = CaptureRateLimiter::new(0.0);
        assert!(limiter.try_begin(100.0));
        // Interval already satisfied, but the lock is still held
        assert!(!limiter.try_begin(110.0));
        assert!(limiter.try_begin(131.0));
    }

    #[test]
    fn test_reset_forgets_last_attempt() {
        let mut limiter = CaptureRateLimiter::new(1000.0);
        assert!(limiter.try_begin(0.0));
        limiter.reset();
        assert!(limiter.try_begin(100.0));
    }
}
