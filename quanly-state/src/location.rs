//! Read-only view of the current navigation location.

use url::form_urlencoded;

/// Query parameter naming the active sub-menu entry or tab.
pub const TAB_PARAM: &str = "tab";

/// Parsed `path?query#fragment` location as reported by the router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    /// Parse a raw location string.
    ///
    /// The fragment is discarded. Query pairs are decoded with
    /// `application/x-www-form-urlencoded` rules, so `+` and percent escapes
    /// (including UTF-8 sequences) are accepted. Parsing never fails.
    pub fn parse(raw: &str) -> Self {
        let without_fragment = match raw.split_once('#') {
            Some((head, _)) => head,
            None => raw,
        };
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };

        Self {
            path: path.to_owned(),
            query: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Return the first non-empty value of query parameter `name`.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .find(|value| !value.is_empty())
    }

    /// Return the value of the `tab` query parameter.
    pub fn tab(&self) -> Option<&str> {
        self.query_value(TAB_PARAM)
    }
}
