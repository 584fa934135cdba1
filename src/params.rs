//! Select query parameters
//!
//! [`SelectParams`] is an order-irrelevant string-to-string mapping with
//! builder-style helpers for the parameters Solr echoes back in its
//! response header. Anything else goes through [`SelectParams::param`]
//! untouched, so facet/grouping/highlight parameters pass straight to the
//! engine.

use std::collections::HashMap;

/// Query parameter carrying the continuation token
pub const CURSOR_MARK: &str = "cursorMark";

/// Sentinel cursor value meaning "start from the beginning"
pub const CURSOR_START: &str = "*";

/// The match-all query used when `q` is absent
pub const MATCH_ALL: &str = "*:*";

/// Query parameters for a select request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectParams {
    params: HashMap<String, String>,
}

impl SelectParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query string (`q`)
    #[must_use]
    pub fn q(self, query: impl Into<String>) -> Self {
        self.param("q", query)
    }

    /// Set the field list (`fl`)
    #[must_use]
    pub fn fl(self, fields: impl Into<String>) -> Self {
        self.param("fl", fields)
    }

    /// Set the sort clause (`sort`)
    ///
    /// Cursor queries require a sort that includes the collection's
    /// unique key, e.g. `score desc, id asc`.
    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        self.param("sort", sort)
    }

    /// Set the page size (`rows`)
    #[must_use]
    pub fn rows(self, rows: u32) -> Self {
        self.param("rows", rows.to_string())
    }

    /// Set the result offset (`start`)
    #[must_use]
    pub fn start(self, start: u64) -> Self {
        self.param("start", start.to_string())
    }

    /// Set the continuation token (`cursorMark`)
    #[must_use]
    pub fn cursor_mark(self, mark: impl Into<String>) -> Self {
        self.param(CURSOR_MARK, mark)
    }

    /// Set an arbitrary parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Insert or replace a parameter value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Whether a parameter is present
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over all parameters, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the parameter set is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl From<HashMap<String, String>> for SelectParams {
    fn from(params: HashMap<String, String>) -> Self {
        Self { params }
    }
}

impl FromIterator<(String, String)> for SelectParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_helpers() {
        let params = SelectParams::new()
            .q("title:rust")
            .fl("id,title")
            .sort("id asc")
            .rows(50)
            .start(100)
            .cursor_mark("AoE1");

        assert_eq!(params.get("q"), Some("title:rust"));
        assert_eq!(params.get("fl"), Some("id,title"));
        assert_eq!(params.get("sort"), Some("id asc"));
        assert_eq!(params.get("rows"), Some("50"));
        assert_eq!(params.get("start"), Some("100"));
        assert_eq!(params.get(CURSOR_MARK), Some("AoE1"));
        assert_eq!(params.len(), 6);
    }

    #[test]
    fn test_param_passthrough() {
        let params = SelectParams::new()
            .param("facet", "true")
            .param("facet.field", "genre");

        assert_eq!(params.get("facet"), Some("true"));
        assert_eq!(params.get("facet.field"), Some("genre"));
    }

    #[test]
    fn test_set_replaces() {
        let mut params = SelectParams::new().cursor_mark(CURSOR_START);
        params.set(CURSOR_MARK, "AoE2");
        assert_eq!(params.get(CURSOR_MARK), Some("AoE2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_from_hashmap() {
        let mut map = HashMap::new();
        map.insert("q".to_string(), "*:*".to_string());
        let params = SelectParams::from(map);
        assert_eq!(params.get("q"), Some(MATCH_ALL));
        assert!(!params.is_empty());
    }

    #[test]
    fn test_empty() {
        let params = SelectParams::new();
        assert!(params.is_empty());
        assert!(!params.contains("q"));
        assert_eq!(params.get("q"), None);
    }
}
