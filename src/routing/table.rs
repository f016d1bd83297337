//! Route table: the resolved output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{RouteParseError, RoutesError, RoutesResult};

/// Structural key suffixes that carry route data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKeySuffix {
    /// `<name>.url`: upstream target.
    Url,
    /// `<name>.path`: public path pattern.
    Path,
}

impl RouteKeySuffix {
    pub const ALL: [RouteKeySuffix; 2] = [RouteKeySuffix::Url, RouteKeySuffix::Path];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteKeySuffix::Url => ".url",
            RouteKeySuffix::Path => ".path",
        }
    }

    /// Split a filtered key into route name and suffix.
    pub fn split(key: &str) -> Option<(&str, RouteKeySuffix)> {
        Self::ALL
            .into_iter()
            .find_map(|suffix| key.strip_suffix(suffix.as_str()).map(|name| (name, suffix)))
    }
}

/// One reverse-proxy route. Any field may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub name: String,
    /// Upstream scheme, e.g. `http`.
    pub scheme: String,
    /// Upstream host, with port when one is given.
    pub host: String,
    /// Upstream path prefix.
    pub reverse_proxy_path: String,
    /// Public path pattern, e.g. `/orders/*`.
    pub front_path: String,
}

impl RouteRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_target(&self) -> bool {
        !self.host.is_empty()
    }

    pub fn has_front_path(&self) -> bool {
        !self.front_path.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.has_target() && self.has_front_path()
    }
}

/// Upstream target parsed from a `.url` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTarget {
    pub scheme: String,
    pub host: String,
    pub path: String,
}

/// Route name → record, plus the URL problems met while building it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteTable {
    routes: HashMap<String, RouteRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parse_errors: Vec<RouteParseError>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch-or-create the record for `name` and let `update` change it.
    ///
    /// Fields the closure does not touch keep their value.
    pub fn upsert<F>(&mut self, name: &str, update: F) -> &RouteRecord
    where
        F: FnOnce(&mut RouteRecord),
    {
        let record = self
            .routes
            .entry(name.to_string())
            .or_insert_with(|| RouteRecord::new(name));
        update(record);
        record
    }

    /// Set the upstream fields of `name`.
    pub fn set_target(&mut self, name: &str, target: RouteTarget) {
        self.upsert(name, |record| {
            record.scheme = target.scheme;
            record.host = target.host;
            record.reverse_proxy_path = target.path;
        });
    }

    /// Set the public path of `name`.
    pub fn set_front_path(&mut self, name: &str, front_path: String) {
        self.upsert(name, |record| record.front_path = front_path);
    }

    /// Record an unparsable URL; the route itself stays in the table.
    pub fn push_parse_error(&mut self, error: RouteParseError) {
        self.parse_errors.push(error);
    }

    pub fn get(&self, name: &str) -> Option<&RouteRecord> {
        self.routes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RouteRecord)> {
        self.routes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Errors for routes whose URL did not parse.
    pub fn parse_errors(&self) -> &[RouteParseError] {
        &self.parse_errors
    }

    pub fn into_routes(self) -> HashMap<String, RouteRecord> {
        self.routes
    }

    /// Strict check for callers that cannot use partial routes.
    ///
    /// Fails on the first URL parse error, then on the first record (by name)
    /// missing its target or its front path.
    pub fn ensure_complete(&self) -> RoutesResult<()> {
        if let Some(error) = self.parse_errors.first() {
            return Err(error.clone().into());
        }

        let mut names: Vec<&String> = self.routes.keys().collect();
        names.sort();
        for name in names {
            let record = &self.routes[name];
            if !record.has_target() {
                return Err(RoutesError::IncompleteRoute {
                    route: name.clone(),
                    missing: "url",
                });
            }
            if !record.has_front_path() {
                return Err(RoutesError::IncompleteRoute {
                    route: name.clone(),
                    missing: "path",
                });
            }
        }
        Ok(())
    }
}

impl IntoIterator for RouteTable {
    type Item = (String, RouteRecord);
    type IntoIter = std::collections::hash_map::IntoIter<String, RouteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(host: &str) -> RouteTarget {
        RouteTarget {
            scheme: "http".to_string(),
            host: host.to_string(),
            path: "/api".to_string(),
        }
    }

    #[test]
    fn test_split_suffix() {
        assert_eq!(RouteKeySuffix::split("orders.url"), Some(("orders", RouteKeySuffix::Url)));
        assert_eq!(RouteKeySuffix::split("a.b.path"), Some(("a.b", RouteKeySuffix::Path)));
        assert_eq!(RouteKeySuffix::split("orders.url.timeout"), None);
        assert_eq!(RouteKeySuffix::split("orders"), None);
    }

    #[test]
    fn test_merge_keeps_existing_fields() {
        let mut table = RouteTable::new();
        table.set_front_path("orders", "/orders/*".to_string());
        table.set_target("orders", target("orders.internal"));

        assert_eq!(table.len(), 1);
        let record = table.get("orders").unwrap();
        assert_eq!(record.name, "orders");
        assert_eq!(record.host, "orders.internal");
        assert_eq!(record.front_path, "/orders/*");
        assert!(record.is_complete());
    }

    #[test]
    fn test_ensure_complete() {
        let mut table = RouteTable::new();
        table.set_target("orders", target("orders.internal"));
        table.set_front_path("orders", "/orders/*".to_string());
        assert!(table.ensure_complete().is_ok());

        table.set_front_path("billing", "/billing/*".to_string());
        assert!(matches!(
            table.ensure_complete(),
            Err(RoutesError::IncompleteRoute { ref route, missing: "url" }) if route == "billing"
        ));
    }

    #[test]
    fn test_parse_errors_fail_strict_check() {
        let mut table = RouteTable::new();
        table.upsert("broken", |_| {});
        table.push_parse_error(RouteParseError {
            route: "broken".to_string(),
            reason: "empty host".to_string(),
        });

        assert!(table.contains("broken"));
        assert_eq!(table.parse_errors().len(), 1);
        assert!(matches!(table.ensure_complete(), Err(RoutesError::RouteParse { .. })));
    }
}
