//! Request descriptor for the multiple-range search.

use std::fmt;

/// One fully composed range search request.
///
/// Station codes and time budgets are colon-joined, index-aligned lists,
/// in the order the search conditions were given.
#[derive(Clone, PartialEq, Eq)]
pub struct RangeQuery {
    pub key: String,
    pub base_list: String,
    pub upper_minute: String,
}

impl RangeQuery {
    /// Full request URL against `base_url`.
    ///
    /// The query string is composed verbatim; the API expects the colon
    /// separators unescaped.
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}?key={}&baseList={}&upperMinute={}",
            base_url, self.key, self.base_list, self.upper_minute
        )
    }
}

impl fmt::Debug for RangeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeQuery")
            .field("key", &"<redacted>")
            .field("base_list", &self.base_list)
            .field("upper_minute", &self.upper_minute)
            .finish()
    }
}
