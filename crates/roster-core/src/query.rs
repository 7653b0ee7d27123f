//! The dashboard's list query: search, sort and page selection.

use crate::{PageSize, UserField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// What part of the user list is visible, and in which order.
///
/// Owned by the dashboard and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Free-text search over the four text fields.
    pub search_text: String,
    /// Column to sort by; `None` keeps the server order.
    pub sort_key: Option<UserField>,
    /// Sort direction, meaningful only when `sort_key` is set.
    pub sort_order: SortOrder,
    /// Rows per page.
    pub page_size: PageSize,
    /// 1-indexed page number.
    pub current_page: usize,
}

impl ListQuery {
    /// Creates the initial query with the given page size.
    #[must_use]
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Returns the search text when it should filter the list.
    ///
    /// Only blank-ness is decided on the trimmed text; the untrimmed text is
    /// what gets matched.
    #[must_use]
    pub fn active_search(&self) -> Option<&str> {
        if self.search_text.trim().is_empty() {
            None
        } else {
            Some(&self.search_text)
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: None,
            sort_order: SortOrder::Asc,
            page_size: PageSize::DEFAULT,
            current_page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = ListQuery::default();
        assert_eq!(query.current_page, 1);
        assert_eq!(query.page_size.get(), 10);
        assert_eq!(query.sort_key, None);
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert!(query.search_text.is_empty());
    }

    #[test]
    fn test_sort_order_flip() {
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
    }

    #[test]
    fn test_active_search_ignores_blank_text() {
        let mut query = ListQuery::default();
        assert_eq!(query.active_search(), None);
        query.search_text = "   ".to_string();
        assert_eq!(query.active_search(), None);
        query.search_text = " eng".to_string();
        assert_eq!(query.active_search(), Some(" eng"));
    }

    #[test]
    fn test_with_page_size() {
        let query = ListQuery::with_page_size(PageSize::new(25).unwrap());
        assert_eq!(query.page_size.get(), 25);
        assert_eq!(query.current_page, 1);
    }
}
