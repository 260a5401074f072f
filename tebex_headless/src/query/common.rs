//! Shared query infrastructure: the [`Query`] trait, [`QueryValue`] and [`QueryParams`].

use url::Url;

/// Trait implemented by everything that can contribute query-string
/// parameters to a request URL.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// A query with no parameters must return the URL untouched (no bare `?`).
    fn add_to_url(&self, url: &Url) -> Url;
}

/// A scalar query-string value.
///
/// Booleans go over the wire as `1` / `0`; every other variant is written
/// with its natural `Display` form.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl std::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryValue::Bool(true) => write!(f, "1"),
            QueryValue::Bool(false) => write!(f, "0"),
            QueryValue::Int(v) => write!(f, "{}", v),
            QueryValue::Float(v) => write!(f, "{}", v),
            QueryValue::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

/// Ordered, free-form query parameters.
///
/// Parameters are written in insertion order. `None` values are dropped when
/// added, so optional filters can be passed straight through.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` if `value` is present.
    pub fn with<V>(mut self, key: &str, value: Option<V>) -> Self
    where
        V: Into<QueryValue>,
    {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.into()));
        }
        self
    }

    /// Adds `key` unconditionally.
    pub fn with_value<V>(self, key: &str, value: V) -> Self
    where
        V: Into<QueryValue>,
    {
        self.with(key, Some(value))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The parameters as wire-ready string pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl Query for QueryParams {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (key, value) in self.pairs.iter() {
            url.query_pairs_mut()
                .append_pair(key, value.to_string().as_str());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{Query, QueryParams, QueryValue};

    fn base_url() -> Url {
        Url::parse("https://example.com/api/accounts/store/categories").unwrap()
    }

    #[test]
    fn test_bools_become_digits() {
        assert_eq!(QueryValue::Bool(true).to_string(), "1");
        assert_eq!(QueryValue::Bool(false).to_string(), "0");
    }

    #[test]
    fn test_other_scalars_untouched() {
        assert_eq!(QueryValue::Int(42).to_string(), "42");
        assert_eq!(QueryValue::Float(1.5).to_string(), "1.5");
        assert_eq!(QueryValue::from("true").to_string(), "true");
    }

    #[test]
    fn test_none_values_are_omitted() {
        let params = QueryParams::new()
            .with("includePackages", Some(true))
            .with::<&str>("basketIdent", None)
            .with("ipAddress", Some("127.0.0.1"));
        assert_eq!(params.len(), 2);
        assert!(params.get("basketIdent").is_none());
    }

    #[test]
    fn test_empty_params_leave_url_alone() {
        let url = QueryParams::new().add_to_url(&base_url());
        assert_eq!(url.query(), None);
        assert!(!url.as_str().ends_with('?'));
    }

    #[test]
    fn test_query_params_url() {
        insta::assert_snapshot!(
            QueryParams::new()
                .with_value("includePackages", false)
                .with_value("page", 2)
                .with_value("returnUrl", "https://shop.example/done")
                .add_to_url(&base_url())
                .to_string(),
            @"https://example.com/api/accounts/store/categories?includePackages=0&page=2&returnUrl=https%3A%2F%2Fshop.example%2Fdone"
        );
    }
}
