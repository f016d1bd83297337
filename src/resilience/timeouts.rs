//! Timeout enforcement.
//!
//! # Responsibilities
//! - Clamp requested timeouts to the client floor
//! - Every attempt to the config server carries a deadline
//!
//! # Design Decisions
//! - A timeout shorter than the floor is ignored, never an error
//! - Timed-out attempts count as transport failures and are retried

use std::time::Duration;

use crate::config::schema::DEFAULT_TIMEOUT_MS;

/// Lowest per-attempt timeout the client will use.
pub const MIN_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);

/// Returns `requested` when it is at least [`MIN_TIMEOUT`], otherwise the floor.
pub fn effective_timeout(requested: Duration) -> Duration {
    requested.max(MIN_TIMEOUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_floor() {
        assert_eq!(effective_timeout(Duration::from_millis(500)), MIN_TIMEOUT);
        assert_eq!(effective_timeout(Duration::ZERO), MIN_TIMEOUT);
        assert_eq!(effective_timeout(Duration::from_secs(10)), Duration::from_secs(10));
        assert_eq!(effective_timeout(MIN_TIMEOUT), MIN_TIMEOUT);
    }
}
