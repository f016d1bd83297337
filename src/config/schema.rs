//! Configuration schema definitions.
//!
//! This module defines the settings needed to reach the config server and
//! turn its property sources into routes. All types derive Serde traits for
//! deserialization from config files.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default per-attempt timeout in milliseconds. Also the lowest accepted value.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Default number of retries after the first attempt.
pub const DEFAULT_RETRY_COUNT: u32 = 4;

/// Default constant backoff between attempts in milliseconds.
pub const DEFAULT_BACKOFF_INTERVAL_MS: u64 = 2;

/// Default upper bound of the random jitter added to the backoff.
pub const DEFAULT_MAX_JITTER_MS: u64 = 5;

/// Default routing-table prefix stripped from property keys.
pub const DEFAULT_ROUTE_PREFIX: &str = "zuul.routes.";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutesConfig {
    /// Where to fetch the config document from.
    pub config_server: ConfigServerConfig,

    /// Transport tuning.
    pub client: ClientConfig,

    /// Key filtering.
    pub routing: RoutingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Config server request settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigServerConfig {
    /// Full document URL, e.g. "http://config:7000/gateway/stage".
    pub url: String,

    /// HTTP method used for the fetch.
    pub method: String,

    /// Extra request headers.
    pub headers: HashMap<String, String>,

    /// Optional request body.
    pub body: Option<String>,
}

impl Default for ConfigServerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: "GET".to_string(),
            headers: HashMap::new(),
            body: None,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Per-attempt timeout in milliseconds (never below the default).
    pub timeout_ms: u64,

    /// Retries after the first attempt.
    pub retry_count: u32,

    /// Constant delay between attempts in milliseconds.
    pub backoff_interval_ms: u64,

    /// Maximum random jitter added to each delay in milliseconds.
    pub max_jitter_ms: u64,

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` and connect directly.
    pub no_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry_count: DEFAULT_RETRY_COUNT,
            backoff_interval_ms: DEFAULT_BACKOFF_INTERVAL_MS,
            max_jitter_ms: DEFAULT_MAX_JITTER_MS,
            no_proxy: false,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn backoff_interval(&self) -> Duration {
        Duration::from_millis(self.backoff_interval_ms)
    }

    pub fn max_jitter(&self) -> Duration {
        Duration::from_millis(self.max_jitter_ms)
    }
}

/// Key filtering settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Prefix a key must carry to take part in routing. Empty accepts all keys.
    pub prefix: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ROUTE_PREFIX.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,

    /// Record fetch metrics through the `metrics` facade.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: true,
        }
    }
}
