//! Config server envelope.
//!
//! The document carries the application name, active profiles and an ordered
//! list of property sources, highest precedence first. Each source is a flat
//! map of dotted keys to scalar values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RoutesResult;

/// The whole config server response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigDocument {
    pub name: String,
    pub profiles: Vec<String>,
    pub label: Option<String>,
    pub version: Option<String>,
    pub property_sources: Vec<PropertySource>,
}

/// One named block of flat properties.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PropertySource {
    pub name: String,
    pub source: Map<String, Value>,
}

impl ConfigDocument {
    /// Decode a response body.
    pub fn from_slice(bytes: &[u8]) -> RoutesResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The highest-precedence source. Later sources are not consulted.
    pub fn primary_source(&self) -> Option<&PropertySource> {
        self.property_sources.first()
    }
}

impl PropertySource {
    pub fn new(name: impl Into<String>, source: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// Render a scalar property value as text.
///
/// Null renders as the empty string; nested values fall back to their JSON form.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutesError;
    use serde_json::json;

    #[test]
    fn test_decode_document() {
        let body = json!({
            "name": "gateway",
            "profiles": ["stage"],
            "label": null,
            "version": "3f2a9c1",
            "propertySources": [
                {
                    "name": "git:gateway-stage.yml",
                    "source": {
                        "zuul.routes.orders.url": "http://orders.internal",
                        "zuul.routes.orders.path": "/orders/**"
                    }
                },
                { "name": "git:application.yml", "source": { "server.port": 8080 } }
            ]
        });

        let doc = ConfigDocument::from_slice(body.to_string().as_bytes()).unwrap();
        assert_eq!(doc.name, "gateway");
        assert_eq!(doc.profiles, vec!["stage"]);
        assert_eq!(doc.label, None);
        assert_eq!(doc.property_sources.len(), 2);

        let primary = doc.primary_source().unwrap();
        assert_eq!(primary.name, "git:gateway-stage.yml");
        assert_eq!(primary.source.len(), 2);
    }

    #[test]
    fn test_missing_sources_decode_as_empty() {
        let doc = ConfigDocument::from_slice(br#"{"name":"gateway","profiles":[]}"#).unwrap();
        assert!(doc.primary_source().is_none());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let result = ConfigDocument::from_slice(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(RoutesError::Decode(_))));
    }

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&json!("x")), "x");
        assert_eq!(scalar_to_string(&json!(8080)), "8080");
        assert_eq!(scalar_to_string(&json!(true)), "true");
        assert_eq!(scalar_to_string(&Value::Null), "");
    }
}
