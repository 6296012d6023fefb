//! Query-string construction for list-records requests
//!
//! The API expects array parameters (such as `fields[]` or `sort[0][field]`
//! style keys) to be sent as repeated keys, `fields%5B%5D=A&fields%5B%5D=B`,
//! never as a single comma-joined value. [`QueryParams`] keeps parameters in
//! insertion order and expands list values into one pair per item.

use crate::error::Result;
use url::Url;

/// Page size requested on every call (the API maximum)
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Query key carrying the continuation token
pub const OFFSET_PARAM: &str = "offset";

/// Query key carrying the page size
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Value of a single query parameter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// Sent once as `key=value`
    Single(String),
    /// Sent as `key=item` once per item, in order
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Single(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Single(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Single(v.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::List(v)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(v: Vec<&str>) -> Self {
        ParamValue::List(v.into_iter().map(str::to_string).collect())
    }
}

/// Ordered set of query parameters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Set `key` only when a value is present; `None` leaves the set untouched
    pub fn set_opt<V: Into<ParamValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(v) = value {
            self.set(key, v);
        }
        self
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// True if no parameters are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Percent-encoded query string without the leading `?`
    ///
    /// Lists expand into repeated keys; an empty list contributes nothing.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        for (key, value) in &self.entries {
            let key = urlencoding::encode(key);
            match value {
                ParamValue::Single(v) => {
                    parts.push(format!("{}={}", key, urlencoding::encode(v)));
                }
                ParamValue::List(items) => {
                    for item in items {
                        parts.push(format!("{}={}", key, urlencoding::encode(item)));
                    }
                }
            }
        }
        parts.join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Build the list-records URL for a table
///
/// `pageSize=100` always comes first; entries in `extra` follow in their own
/// order and may override it. The table identifier is fully percent-encoded
/// so table names containing `/` or spaces stay a single path segment.
pub fn build_table_url(
    api_url: &str,
    base_id: &str,
    table_id: &str,
    extra: Option<&QueryParams>,
) -> Result<String> {
    let base = format!(
        "{}/{}/{}",
        api_url.trim_end_matches('/'),
        base_id,
        urlencoding::encode(table_id)
    );

    let mut params = QueryParams::new().with(PAGE_SIZE_PARAM, DEFAULT_PAGE_SIZE);
    if let Some(extra) = extra {
        for (k, v) in &extra.entries {
            params.set(k.clone(), v.clone());
        }
    }

    let query = params.to_query_string();
    let url = if query.is_empty() {
        base
    } else {
        format!("{base}?{query}")
    };

    // Validates the result without re-encoding it.
    Url::parse(&url)?;
    Ok(url)
}
