//! Reverse-proxy routes from a remote config server.
//!
//! # Architecture Overview
//!
//! ```text
//!   RoutesConfig (TOML)
//!        │
//!        ▼
//!   ┌──────────────┐   exchange    ┌──────────────┐   decode   ┌──────────────┐
//!   │ RouteFetcher │──────────────▶│  transport   │───────────▶│   envelope   │
//!   └──────┬───────┘  retry/backoff└──────────────┘            └──────┬───────┘
//!          │                                                          │ propertySources[0]
//!          ▼                                                          ▼
//!   ┌──────────────┐   filter keys, split .url/.path, resolve ${...}
//!   │   routing    │◀───────────────────────────────────────────────────
//!   └──────┬───────┘
//!          ▼
//!     RouteTable { name → scheme, host, reverse_proxy_path, front_path }
//! ```
//!
//! # Example
//!
//! ```no_run
//! use cloud_routes::{HttpClient, PrefixFilter, RequestAttr, RouteFetcher};
//!
//! # async fn run() -> Result<(), cloud_routes::RoutesError> {
//! let request = RequestAttr::get("http://config.local:7000/gateway/stage")?;
//! let fetcher = RouteFetcher::new(HttpClient::default(), request);
//!
//! let routes = fetcher.fetch_routes(&PrefixFilter::new("zuul.routes.")).await?;
//! for (name, route) in routes.iter() {
//!     println!("{} {}://{}{} <- {}", name, route.scheme, route.host, route.reverse_proxy_path, route.front_path);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod fetcher;
pub mod observability;
pub mod resilience;
pub mod routing;
pub mod transport;

pub use config::RoutesConfig;
pub use envelope::{ConfigDocument, PropertySource};
pub use error::{RouteParseError, RoutesError, RoutesResult};
pub use fetcher::RouteFetcher;
pub use routing::{
    EnvLookup, IdentityFilter, KeyFilter, PrefixFilter, ProcessEnv, RouteRecord, RouteTable,
};
pub use transport::{HttpClient, RequestAttr};
