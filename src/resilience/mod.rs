//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to config server:
//!     → timeouts.rs (per-attempt deadline, floored)
//!     → On failure: retries.rs (retryable? attempts left?)
//!     → backoff.rs (constant delay + jitter before next attempt)
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every attempt has a deadline
//! - Fixed retry count, no budget: one fetch per call
//! - Backoff is constant; jitter is the only variation between delays

pub mod backoff;
pub mod retries;
pub mod timeouts;
