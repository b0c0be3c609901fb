//! The listing page's `search` URL parameter.

use crate::search::decode_query;
use serde::{Deserialize, Serialize};

/// Name of the query-string parameter carrying the search text.
pub const SEARCH_PARAM: &str = "search";

/// A listing search as carried in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Decoded search text, `None` when absent or blank.
    pub term: Option<String>,
}

impl SearchQuery {
    /// Create a query for the given text. Blank text means "all products".
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        if term.trim().is_empty() {
            Self::default()
        } else {
            Self { term: Some(term) }
        }
    }

    /// Parse from a URL query string (`?search=red+shoe&page=2`).
    ///
    /// Only the first `search` parameter is read; everything else is
    /// ignored. Values that fail to decode are kept literally.
    pub fn from_query_string(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);

        qs.split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_query(key) == SEARCH_PARAM).then_some(value)
            })
            .next()
            .map(|value| Self::new(decode_query(value).into_owned()))
            .unwrap_or_default()
    }

    /// The trimmed search text, or "" when absent.
    pub fn text(&self) -> &str {
        self.term.as_deref().map(str::trim).unwrap_or("")
    }

    /// Check if this query shows every product.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Render as a query string without the leading `?`.
    ///
    /// Returns `None` for an empty query.
    pub fn to_query_string(&self) -> Option<String> {
        self.term
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| format!("{SEARCH_PARAM}={}", urlencoding::encode(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_param() {
        let q = SearchQuery::from_query_string("?search=red+shoe");
        assert_eq!(q.term.as_deref(), Some("red shoe"));
        assert_eq!(q.text(), "red shoe");
    }

    #[test]
    fn test_parse_percent_escape() {
        let q = SearchQuery::from_query_string("search=100%25+off");
        assert_eq!(q.text(), "100% off");
    }

    #[test]
    fn test_parse_ignores_other_params_and_takes_first() {
        let q = SearchQuery::from_query_string("?page=2&search=hat&search=shoe");
        assert_eq!(q.text(), "hat");
    }

    #[test]
    fn test_absent_or_empty_means_all() {
        assert!(SearchQuery::from_query_string("").is_empty());
        assert!(SearchQuery::from_query_string("?").is_empty());
        assert!(SearchQuery::from_query_string("?search=").is_empty());
        assert!(SearchQuery::from_query_string("?search=+++").is_empty());
        assert!(SearchQuery::from_query_string("?page=3").is_empty());
        assert!(SearchQuery::from_query_string("?search").is_empty());
    }

    #[test]
    fn test_malformed_value_is_literal() {
        let q = SearchQuery::from_query_string("?search=%E0%A6");
        assert_eq!(q.text(), "%E0%A6");
    }

    #[test]
    fn test_to_query_string_encodes() {
        let q = SearchQuery::new("100% off");
        assert_eq!(q.to_query_string().as_deref(), Some("search=100%25%20off"));
        assert_eq!(SearchQuery::new("  ").to_query_string(), None);
    }

    #[test]
    fn test_encoding_survives_a_parse() {
        let original = SearchQuery::new("caf\u{e9} & bar");
        let qs = original.to_query_string().unwrap();
        assert_eq!(SearchQuery::from_query_string(&qs), original);
    }
}
