//! Key filters.
//!
//! A filter sees one raw property key at a time and either renames it
//! (`Some(new_key)`) or drops it from route resolution (`None`).

/// Decides which property keys take part in route resolution.
pub trait KeyFilter: Send + Sync {
    fn filter_key(&self, key: &str) -> Option<String>;
}

/// Accepts every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFilter;

impl KeyFilter for IdentityFilter {
    fn filter_key(&self, key: &str) -> Option<String> {
        Some(key.to_string())
    }
}

/// Accepts keys carrying a routing-table prefix and strips it.
///
/// `zuul.routes.orders.url` with prefix `zuul.routes.` becomes `orders.url`.
#[derive(Debug, Clone)]
pub struct PrefixFilter {
    prefix: String,
}

impl PrefixFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl KeyFilter for PrefixFilter {
    fn filter_key(&self, key: &str) -> Option<String> {
        key.strip_prefix(self.prefix.as_str()).map(str::to_string)
    }
}

/// Adapts a closure into a [`KeyFilter`].
pub struct FnFilter<F>(F);

impl<F> KeyFilter for FnFilter<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn filter_key(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

/// Wrap a `key -> Option<new key>` closure.
pub fn filter_fn<F>(f: F) -> FnFilter<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    FnFilter(f)
}

/// Wrap a closure returning `(new key, accepted)`.
///
/// The key is used only when the flag is set and a key is present.
pub fn filter_from_predicate<F>(f: F) -> FnFilter<impl Fn(&str) -> Option<String> + Send + Sync>
where
    F: Fn(&str) -> (Option<String>, bool) + Send + Sync,
{
    FnFilter(move |key: &str| match f(key) {
        (Some(new_key), true) => Some(new_key),
        _ => None,
    })
}

impl<T: KeyFilter + ?Sized> KeyFilter for &T {
    fn filter_key(&self, key: &str) -> Option<String> {
        (**self).filter_key(key)
    }
}

impl<T: KeyFilter + ?Sized> KeyFilter for Box<T> {
    fn filter_key(&self, key: &str) -> Option<String> {
        (**self).filter_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_filter() {
        let filter = PrefixFilter::new("zuul.routes.");
        assert_eq!(filter.filter_key("zuul.routes.orders.url").as_deref(), Some("orders.url"));
        assert_eq!(filter.filter_key("spring.datasource.url"), None);
        assert_eq!(filter.filter_key("zuul.routesorders.url"), None);
    }

    #[test]
    fn test_identity_filter() {
        assert_eq!(IdentityFilter.filter_key("a.b.url").as_deref(), Some("a.b.url"));
    }

    #[test]
    fn test_predicate_filter_requires_flag_and_key() {
        let filter = filter_from_predicate(|key: &str| match key.strip_prefix("gw.") {
            Some(rest) => (Some(rest.to_string()), true),
            None => (Some(key.to_string()), false),
        });
        assert_eq!(filter.filter_key("gw.orders.path").as_deref(), Some("orders.path"));
        assert_eq!(filter.filter_key("orders.path"), None);

        let flag_without_key = filter_from_predicate(|_: &str| (None, true));
        assert_eq!(flag_without_key.filter_key("gw.orders.path"), None);
    }

    #[test]
    fn test_boxed_filter() {
        let filter: Box<dyn KeyFilter> = Box::new(filter_fn(|key: &str| {
            key.ends_with(".url").then(|| key.to_uppercase())
        }));
        assert_eq!(filter.filter_key("a.url").as_deref(), Some("A.URL"));
        assert_eq!(filter.filter_key("a.path"), None);
    }
}
