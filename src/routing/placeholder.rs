//! `${...}` placeholder resolution.
//!
//! A value like `${other.key}/api/path` is resolved by looking up `other.key`
//! in the same property source. When that value is itself `${NAME}`, `NAME`
//! is read from the environment. One level of each, never more:
//!
//! ```text
//! env:  SOME_HOST=http://google.com
//! other.key.url = "${SOME_HOST}"
//! url           = "${other.key.url}/api/path"   →   http://google.com/api/path
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::envelope::scalar_to_string;

/// Source of environment variables.
pub trait EnvLookup: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// A located `${key}` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder<'a> {
    key: &'a str,
    /// Byte offset just past the closing brace.
    end: usize,
}

/// Find the first `${...}` span in `raw`.
fn find_placeholder(raw: &str) -> Option<Placeholder<'_>> {
    let start = raw.find("${")?;
    let key_start = start + 2;
    let close = raw[key_start..].find('}')? + key_start;
    Some(Placeholder {
        key: &raw[key_start..close],
        end: close + 1,
    })
}

/// Resolve a value found behind a placeholder: `${NAME}` reads the environment.
fn env_value(value: &str, env: &dyn EnvLookup) -> String {
    match find_placeholder(value) {
        Some(placeholder) => env.var(placeholder.key).unwrap_or_default(),
        None => value.to_string(),
    }
}

/// Resolve the first placeholder of `raw` against `entries` and `env`.
///
/// - no placeholder: `raw` unchanged
/// - placeholder key not in `entries`: empty string
/// - otherwise the resolved value followed by the text after the placeholder
pub fn resolve_value(raw: &str, entries: &Map<String, Value>, env: &dyn EnvLookup) -> String {
    let Some(placeholder) = find_placeholder(raw) else {
        return raw.to_string();
    };

    let Some(target) = entries.get(placeholder.key) else {
        tracing::debug!(key = placeholder.key, "Placeholder key not found, resolving to empty");
        return String::new();
    };

    let resolved = env_value(&scalar_to_string(target), env);
    format!("{}{}", resolved, &raw[placeholder.end..])
}
