//! Constant backoff with jitter.

use std::time::Duration;
use rand::Rng;

/// Fixed delay between attempts plus a random jitter in `[0, max_jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantBackoff {
    interval: Duration,
    max_jitter: Duration,
}

impl ConstantBackoff {
    pub fn new(interval: Duration, max_jitter: Duration) -> Self {
        Self { interval, max_jitter }
    }

    /// Delay to wait before the given retry attempt.
    ///
    /// The attempt number does not change the delay; it only exists so the
    /// retry loop can ask the same question an exponential policy would answer.
    pub fn next(&self, _attempt: u32) -> Duration {
        self.interval + jitter(self.max_jitter)
    }
}

fn jitter(max: Duration) -> Duration {
    let max_ms = max.as_millis() as u64;
    if max_ms == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::thread_rng().gen_range(0..max_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_backoff_bounds() {
        let backoff = ConstantBackoff::new(Duration::from_millis(2), Duration::from_millis(5));
        for attempt in 1..50 {
            let delay = backoff.next(attempt);
            assert!(delay >= Duration::from_millis(2));
            assert!(delay < Duration::from_millis(7));
        }
    }

    #[test]
    fn test_zero_jitter_is_exact() {
        let backoff = ConstantBackoff::new(Duration::from_millis(10), Duration::ZERO);
        assert_eq!(backoff.next(1), Duration::from_millis(10));
        assert_eq!(backoff.next(9), Duration::from_millis(10));
    }
}
