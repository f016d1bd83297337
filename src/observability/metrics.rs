//! Metrics collection.
//!
//! # Metrics
//! - `config_fetch_attempts_total` (counter): attempts by outcome
//! - `config_fetch_retries_total` (counter): attempts that were retried
//! - `config_routes_resolved` (gauge): routes in the last resolved table
//! - `config_route_parse_errors_total` (counter): unparsable route URLs
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host application installs the
//!   recorder/exporter, without one every call is a no-op
//! - Recording can be switched off per fetcher via configuration

/// Record one exchange attempt.
///
/// `outcome` is one of `success`, `status`, `error`, `timeout`.
pub fn record_fetch_attempt(outcome: &'static str) {
    metrics::counter!("config_fetch_attempts_total", "outcome" => outcome).increment(1);
}

pub fn record_retry() {
    metrics::counter!("config_fetch_retries_total").increment(1);
}

/// Record the result of one resolution pass.
pub fn record_resolution(routes: usize, parse_errors: usize) {
    metrics::gauge!("config_routes_resolved").set(routes as f64);
    if parse_errors > 0 {
        metrics::counter!("config_route_parse_errors_total").increment(parse_errors as u64);
    }
}
