use serde::{Deserialize, Serialize};

use crate::config;

/// Query-string parameters shared by every list endpoint:
/// `?q=<substring>&page=<1-based>&per_page=<n>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListQuery {
    /// Non-empty search term, if one was supplied.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// 1-based page number, never below 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size clamped to the configured maximum.
    pub fn per_page(&self) -> i64 {
        let api = &config::config().api;
        self.per_page
            .unwrap_or(api.default_page_size)
            .clamp(1, api.max_page_size)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }
}

/// One page of results plus the paging envelope returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_ignores_whitespace_only_input() {
        let query = ListQuery {
            q: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.term(), None);

        let query = ListQuery {
            q: Some("  valve ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.term(), Some("valve"));
    }

    #[test]
    fn page_and_per_page_are_clamped() {
        let query = ListQuery {
            page: Some(0),
            per_page: Some(100_000),
            ..Default::default()
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.offset(), 0);
        assert!(query.per_page() <= crate::config::config().api.max_page_size);

        let query = ListQuery {
            page: Some(3),
            per_page: Some(10),
            ..Default::default()
        };
        assert_eq!(query.offset(), 20);
    }
}
