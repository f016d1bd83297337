//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! transport + routing produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Whatever metrics recorder the host application installs
//! ```

pub mod logging;
pub mod metrics;
