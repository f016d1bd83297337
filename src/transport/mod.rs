//! Transport subsystem.
//!
//! # Data Flow
//! ```text
//! RequestAttr (url, method, body, headers, timeout)
//!     → request.rs (validate required fields)
//!     → client.rs (send with deadline, retry, backoff)
//!     → reqwest::Response or RoutesError
//! ```

pub mod client;
pub mod request;

pub use client::HttpClient;
pub use request::RequestAttr;
