//! HTTP client with timeout, fixed retries and jittered constant backoff.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};

use crate::config::ClientConfig;
use crate::error::{RoutesError, RoutesResult};
use crate::observability::metrics;
use crate::resilience::backoff::ConstantBackoff;
use crate::resilience::retries::{is_retryable_error, is_retryable_status, RetryPolicy};
use crate::resilience::timeouts::effective_timeout;
use crate::transport::request::RequestAttr;

/// Config server client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
    retry: RetryPolicy,
    metrics_enabled: bool,
}

impl HttpClient {
    /// Create a client from transport settings.
    ///
    /// A timeout below the default floor is replaced by the floor.
    pub fn new(config: &ClientConfig) -> Self {
        let backoff = ConstantBackoff::new(config.backoff_interval(), config.max_jitter());

        let mut builder = Client::builder();
        if config.no_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to build configured HTTP client, using defaults");
            Client::new()
        });

        Self {
            client,
            timeout: effective_timeout(config.timeout()),
            retry: RetryPolicy::new(config.retry_count, backoff),
            metrics_enabled: true,
        }
    }

    /// Enable or disable metrics recording.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Issue the request, retrying transport failures and 5xx responses.
    ///
    /// Non-5xx responses are returned as-is whatever their status; interpreting
    /// them is the caller's job. If every attempt ends in a 5xx the last
    /// response is returned.
    pub async fn exchange(&self, attr: &RequestAttr) -> RoutesResult<Response> {
        let (url, method) = attr.validate()?;
        let timeout = attr.timeout.map(effective_timeout).unwrap_or(self.timeout);

        let mut attempt = 0;
        loop {
            attempt += 1;
            tracing::debug!(%method, %url, attempt, "Sending config server request");

            match self.build(method, url, attr, timeout).send().await {
                Ok(response) => {
                    let status = response.status();
                    if !is_retryable_status(status) {
                        self.record_attempt(if status.is_success() { "success" } else { "status" });
                        return Ok(response);
                    }

                    self.record_attempt("status");
                    if !self.retry.can_retry(attempt) {
                        tracing::warn!(%url, %status, attempts = attempt, "Retries exhausted on server error");
                        return Ok(response);
                    }
                    tracing::warn!(%url, %status, attempt, "Server error, retrying");
                }
                Err(e) => {
                    self.record_attempt(if e.is_timeout() { "timeout" } else { "error" });
                    if !is_retryable_error(&e) || !self.retry.can_retry(attempt) {
                        tracing::error!(%url, error = %e, attempts = attempt, "Config server request failed");
                        return Err(RoutesError::Transport {
                            attempts: attempt,
                            source: e,
                        });
                    }
                    tracing::warn!(%url, error = %e, attempt, "Request failed, retrying");
                }
            }

            if self.metrics_enabled {
                metrics::record_retry();
            }
            tokio::time::sleep(self.retry.backoff.next(attempt)).await;
        }
    }

    fn build(&self, method: &Method, url: &Url, attr: &RequestAttr, timeout: Duration) -> RequestBuilder {
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .timeout(timeout);

        for (name, value) in &attr.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &attr.body {
            request = request.body(body.clone());
        }
        request
    }

    fn record_attempt(&self, outcome: &'static str) {
        if self.metrics_enabled {
            metrics::record_fetch_attempt(outcome);
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_floored() {
        let config = ClientConfig {
            timeout_ms: 100,
            ..ClientConfig::default()
        };
        assert_eq!(HttpClient::new(&config).timeout(), Duration::from_millis(3000));

        let config = ClientConfig {
            timeout_ms: 10_000,
            ..ClientConfig::default()
        };
        assert_eq!(HttpClient::new(&config).timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_default_retry_count() {
        let client = HttpClient::default();
        assert_eq!(client.retry_policy().retry_count, 4);
        assert_eq!(client.retry_policy().max_attempts(), 5);
    }

    #[tokio::test]
    async fn test_exchange_rejects_incomplete_request() {
        let client = HttpClient::default();
        let result = client.exchange(&RequestAttr::default()).await;
        assert!(matches!(result, Err(RoutesError::Validation(_))));
    }
}
