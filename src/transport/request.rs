//! Request descriptor for a single config server exchange.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Method, Url};

use crate::config::ConfigServerConfig;
use crate::error::{RoutesError, RoutesResult};

/// Everything needed to issue one request. `url` and `method` are required.
#[derive(Debug, Clone, Default)]
pub struct RequestAttr {
    pub url: Option<Url>,
    pub method: Option<Method>,
    pub body: Option<String>,
    pub headers: HashMap<String, String>,
    /// Per-request timeout; floored like the client timeout.
    pub timeout: Option<Duration>,
}

impl RequestAttr {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            url: Some(url),
            method: Some(method),
            ..Self::default()
        }
    }

    /// Shorthand for a GET of `url`.
    pub fn get(url: &str) -> RoutesResult<Self> {
        let url = Url::parse(url)
            .map_err(|e| RoutesError::Validation(format!("invalid URL '{}': {}", url, e)))?;
        Ok(Self::new(Method::GET, url))
    }

    /// Build the descriptor described by the `[config_server]` section.
    pub fn from_config(config: &ConfigServerConfig) -> RoutesResult<Self> {
        let url = Url::parse(&config.url).map_err(|e| {
            RoutesError::Validation(format!("invalid URL '{}': {}", config.url, e))
        })?;
        let method = Method::from_bytes(config.method.as_bytes()).map_err(|_| {
            RoutesError::Validation(format!("invalid method '{}'", config.method))
        })?;

        Ok(Self {
            url: Some(url),
            method: Some(method),
            body: config.body.clone(),
            headers: config.headers.clone(),
            timeout: None,
        })
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check the required fields before anything is sent.
    pub fn validate(&self) -> RoutesResult<(&Url, &Method)> {
        match (&self.url, &self.method) {
            (Some(url), Some(method)) => Ok((url, method)),
            _ => Err(RoutesError::Validation(
                "URL or method not specified".to_string(),
            )),
        }
    }
}
