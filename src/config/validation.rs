//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Config server URL must be present and absolute
//! - Method must be a valid HTTP token
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RoutesConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use reqwest::Method;
use url::Url;

use crate::config::schema::RoutesConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RoutesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let server = &config.config_server;
    if server.url.trim().is_empty() {
        errors.push(ValidationError::new("config_server.url", "must be set"));
    } else if let Err(e) = Url::parse(&server.url) {
        errors.push(ValidationError::new(
            "config_server.url",
            format!("'{}' is not a valid URL: {}", server.url, e),
        ));
    }

    if server.method.trim().is_empty() {
        errors.push(ValidationError::new("config_server.method", "must be set"));
    } else if Method::from_bytes(server.method.as_bytes()).is_err() {
        errors.push(ValidationError::new(
            "config_server.method",
            format!("'{}' is not a valid HTTP method", server.method),
        ));
    }

    if config.observability.log_level.trim().is_empty() {
        errors.push(ValidationError::new("observability.log_level", "must be set"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> RoutesConfig {
        let mut config = RoutesConfig::default();
        config.config_server.url = "http://config.local:7000/gateway/stage".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_reports_every_problem() {
        let mut config = valid_config();
        config.config_server.url = String::new();
        config.config_server.method = "GE T".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "config_server.url");
        assert_eq!(errors[1].field, "config_server.method");
    }

    #[test]
    fn test_relative_url_rejected() {
        let mut config = valid_config();
        config.config_server.url = "gateway/stage".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].message.contains("not a valid URL"));
    }
}
