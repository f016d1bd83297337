//! Error definitions shared by the fetch and resolution pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while fetching and resolving routes.
#[derive(Debug, Error)]
pub enum RoutesError {
    /// Request descriptor is missing a URL or method.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Network failure that survived every retry attempt.
    #[error("Transport error after {attempts} attempt(s): {source}")]
    Transport {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    /// Config server answered with a non-2xx status.
    #[error("Config server returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    /// Response body is not a valid config document.
    #[error("Failed to decode config document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Document carries no usable property source.
    #[error("Config document has no property source")]
    NoPropertySource,

    /// Resolved URL of a route could not be parsed.
    #[error("Route '{route}' has an unparsable url: {reason}")]
    RouteParse { route: String, reason: String },

    /// Route is missing its url or path half.
    #[error("Route '{route}' is incomplete: missing {missing}")]
    IncompleteRoute { route: String, missing: &'static str },
}

/// A route whose resolved URL could not be parsed.
///
/// Kept on the route table instead of aborting resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Route '{route}' has an unparsable url: {reason}")]
pub struct RouteParseError {
    pub route: String,
    pub reason: String,
}

impl From<RouteParseError> for RoutesError {
    fn from(err: RouteParseError) -> Self {
        RoutesError::RouteParse {
            route: err.route,
            reason: err.reason,
        }
    }
}

/// Result alias for route operations.
pub type RoutesResult<T> = Result<T, RoutesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_route() {
        let err = RoutesError::RouteParse {
            route: "orders".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(err.to_string().contains("'orders'"));

        let err = RoutesError::UnexpectedStatus { status: 404 };
        assert_eq!(err.to_string(), "Config server returned unexpected status 404");

        let issue = RouteParseError {
            route: "orders".to_string(),
            reason: "empty host".to_string(),
        };
        assert_eq!(issue.to_string(), RoutesError::from(issue.clone()).to_string());
    }
}
