//! Fetch a config document and turn it into routes.
//!
//! # Responsibilities
//! - One exchange with the config server per call
//! - Treat any non-2xx answer as fatal for the fetch
//! - Decode the envelope and resolve its first property source
//!
//! Refreshing is the caller's business: nothing is cached between calls.

use std::fmt;
use std::sync::Arc;

use crate::config::RoutesConfig;
use crate::envelope::ConfigDocument;
use crate::error::{RoutesError, RoutesResult};
use crate::observability::metrics;
use crate::routing::filter::{IdentityFilter, KeyFilter, PrefixFilter};
use crate::routing::placeholder::{EnvLookup, ProcessEnv};
use crate::routing::resolver::resolve_routes;
use crate::routing::table::RouteTable;
use crate::transport::{HttpClient, RequestAttr};

/// Route source backed by a remote config server.
#[derive(Clone)]
pub struct RouteFetcher {
    client: HttpClient,
    request: RequestAttr,
    env: Arc<dyn EnvLookup>,
    filter: Arc<dyn KeyFilter>,
    metrics_enabled: bool,
}

impl RouteFetcher {
    /// Fetcher reading the process environment and accepting every key.
    pub fn new(client: HttpClient, request: RequestAttr) -> Self {
        Self {
            client,
            request,
            env: Arc::new(ProcessEnv),
            filter: Arc::new(IdentityFilter),
            metrics_enabled: true,
        }
    }

    /// Build client, request and default filter from configuration.
    ///
    /// An empty `routing.prefix` accepts every key.
    pub fn from_config(config: &RoutesConfig) -> RoutesResult<Self> {
        let metrics_enabled = config.observability.metrics_enabled;
        let client = HttpClient::new(&config.client).with_metrics(metrics_enabled);
        let request = RequestAttr::from_config(&config.config_server)?;

        let fetcher = Self::new(client, request).with_metrics(metrics_enabled);
        Ok(if config.routing.prefix.is_empty() {
            fetcher
        } else {
            fetcher.with_filter(PrefixFilter::new(config.routing.prefix.clone()))
        })
    }

    /// Replace the environment used for `${...}` indirection.
    pub fn with_env(mut self, env: impl EnvLookup + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the filter used by [`RouteFetcher::fetch_configured_routes`].
    pub fn with_filter(mut self, filter: impl KeyFilter + 'static) -> Self {
        self.filter = Arc::new(filter);
        self
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    pub fn request(&self) -> &RequestAttr {
        &self.request
    }

    /// Fetch and decode the config document.
    pub async fn fetch_document(&self) -> RoutesResult<ConfigDocument> {
        let response = self.client.exchange(&self.request).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "Config server returned non-success status");
            return Err(RoutesError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RoutesError::Transport { attempts: 1, source: e })?;

        let document = ConfigDocument::from_slice(&body)?;
        tracing::info!(
            name = %document.name,
            profiles = ?document.profiles,
            version = ?document.version,
            sources = document.property_sources.len(),
            "Config document fetched"
        );
        Ok(document)
    }

    /// Fetch the document and resolve its routes with `filter`.
    pub async fn fetch_routes(&self, filter: &dyn KeyFilter) -> RoutesResult<RouteTable> {
        let document = self.fetch_document().await?;
        let table = resolve_routes(&document.property_sources, filter, self.env.as_ref())?;

        if self.metrics_enabled {
            metrics::record_resolution(table.len(), table.parse_errors().len());
        }
        tracing::info!(
            routes = table.len(),
            parse_errors = table.parse_errors().len(),
            "Routes loaded from config server"
        );
        Ok(table)
    }

    /// Fetch with the filter set at construction.
    pub async fn fetch_configured_routes(&self) -> RoutesResult<RouteTable> {
        self.fetch_routes(self.filter.as_ref()).await
    }
}

impl fmt::Debug for RouteFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteFetcher")
            .field("url", &self.request.url.as_ref().map(|u| u.as_str()))
            .field("method", &self.request.method)
            .field("timeout", &self.client.timeout())
            .finish()
    }
}
