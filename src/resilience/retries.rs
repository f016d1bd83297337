//! Retry logic.
//!
//! # Responsibilities
//! - Decide whether an attempt outcome is retryable
//! - Bound the number of attempts
//!
//! # Design Decisions
//! - Connection errors and timeouts always retryable
//! - 5xx responses retryable; the last one is handed back if retries run out
//! - 4xx and other statuses are final

use reqwest::StatusCode;

use crate::resilience::backoff::ConstantBackoff;

/// Fixed-count retry policy with constant backoff.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub retry_count: u32,
    pub backoff: ConstantBackoff,
}

impl RetryPolicy {
    pub fn new(retry_count: u32, backoff: ConstantBackoff) -> Self {
        Self { retry_count, backoff }
    }

    /// Total number of attempts, first one included.
    pub fn max_attempts(&self) -> u32 {
        self.retry_count.saturating_add(1)
    }

    /// Whether another attempt may follow the given (1-based) attempt.
    pub fn can_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts()
    }
}

/// Whether a response status warrants another attempt.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error()
}

/// Whether a transport error warrants another attempt.
///
/// Builder errors (bad URL, bad header) fail the same way every time.
pub fn is_retryable_error(err: &reqwest::Error) -> bool {
    !err.is_builder()
}
