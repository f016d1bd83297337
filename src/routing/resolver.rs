//! Route reconstruction from a flat property source.
//!
//! # Responsibilities
//! - Run every key through the caller's filter
//! - Split filtered keys on `.url` / `.path` into route name + field
//! - Resolve placeholders in `.url` values and parse them
//! - Merge both halves of a route into one record
//!
//! # Design Decisions
//! - Only the first property source is read; override layers are ignored
//! - Entry order does not matter: each half only touches its own fields
//! - An unparsable URL is recorded on the table, the route is still emitted
//! - Unresolvable placeholders become empty strings, not errors

use serde_json::{Map, Value};
use url::Url;

use crate::envelope::{scalar_to_string, PropertySource};
use crate::error::{RouteParseError, RoutesError, RoutesResult};
use crate::routing::filter::KeyFilter;
use crate::routing::placeholder::{resolve_value, EnvLookup};
use crate::routing::table::{RouteKeySuffix, RouteTable, RouteTarget};

/// Build the route table from the first of `sources`.
///
/// Fails with [`RoutesError::NoPropertySource`] when there is no source or the
/// first one has no entries.
pub fn resolve_routes(
    sources: &[PropertySource],
    filter: &dyn KeyFilter,
    env: &dyn EnvLookup,
) -> RoutesResult<RouteTable> {
    let source = match sources.first() {
        Some(source) if !source.is_empty() => source,
        _ => return Err(RoutesError::NoPropertySource),
    };

    if sources.len() > 1 {
        tracing::debug!(
            used = %source.name,
            ignored = sources.len() - 1,
            "Only the first property source is used for routes"
        );
    }

    Ok(resolve_entries(&source.source, filter, env))
}

/// Build a route table from one flat key/value map.
pub fn resolve_entries(
    entries: &Map<String, Value>,
    filter: &dyn KeyFilter,
    env: &dyn EnvLookup,
) -> RouteTable {
    let mut table = RouteTable::new();

    for (raw_key, value) in entries {
        let Some(key) = filter.filter_key(raw_key) else {
            continue;
        };
        let Some((name, suffix)) = RouteKeySuffix::split(&key) else {
            continue;
        };

        match suffix {
            RouteKeySuffix::Url => {
                let resolved = resolve_value(&scalar_to_string(value), entries, env);
                match parse_target(&resolved) {
                    Ok(target) => table.set_target(name, target),
                    Err(reason) => {
                        tracing::warn!(route = name, url = %resolved, %reason, "Unparsable route url");
                        table.upsert(name, |_| {});
                        table.push_parse_error(RouteParseError {
                            route: name.to_string(),
                            reason,
                        });
                    }
                }
            }
            RouteKeySuffix::Path => {
                table.set_front_path(name, normalize_front_path(&scalar_to_string(value)));
            }
        }
    }

    tracing::debug!(
        routes = table.len(),
        parse_errors = table.parse_errors().len(),
        "Routes resolved"
    );
    table
}

/// Rewrite the first `/**` of a path pattern to `/*`.
pub fn normalize_front_path(pattern: &str) -> String {
    pattern.replacen("/**", "/*", 1)
}

/// Split a resolved upstream URL into scheme, host and path.
///
/// The host keeps an explicit non-default port. A URL without a path segment
/// (`http://h.test`) yields an empty path.
pub fn parse_target(raw: &str) -> Result<RouteTarget, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;

    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };

    let path = if url.path() == "/" && !has_explicit_path(raw) {
        String::new()
    } else {
        url.path().to_string()
    };

    Ok(RouteTarget {
        scheme: url.scheme().to_string(),
        host,
        path,
    })
}

fn has_explicit_path(raw: &str) -> bool {
    let rest = raw.split_once("://").map_or(raw, |(_, rest)| rest);
    let authority_end = rest.find(['?', '#']).unwrap_or(rest.len());
    rest[..authority_end].contains('/')
}
