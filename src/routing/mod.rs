//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! PropertySource (flat key → value)
//!     → filter.rs (accept/rename each key)
//!     → resolver.rs (split on .url / .path)
//!     → placeholder.rs (resolve ${...} in url values)
//!     → table.rs (upsert into RouteTable)
//! ```
//!
//! # Design Decisions
//! - Filter and environment are injected, so resolution is a pure function
//!   of its inputs
//! - Partial routes are valid output; strictness is opt-in

pub mod filter;
pub mod placeholder;
pub mod resolver;
pub mod table;

pub use filter::{filter_fn, filter_from_predicate, IdentityFilter, KeyFilter, PrefixFilter};
pub use placeholder::{resolve_value, EnvLookup, ProcessEnv};
pub use resolver::{resolve_entries, resolve_routes};
pub use table::{RouteKeySuffix, RouteRecord, RouteTable, RouteTarget};
