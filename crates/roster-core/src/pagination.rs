//! Pagination types for the user list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Number of rows shown per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

/// Error returned for a zero page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Page size must be positive")]
pub struct ZeroPageSize;

impl PageSize {
    /// Sizes offered by the page-size selector.
    pub const OPTIONS: [usize; 4] = [10, 25, 50, 100];

    /// The default page size.
    pub const DEFAULT: Self = Self(match NonZeroUsize::new(10) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// Creates a page size, rejecting zero.
    pub fn new(size: usize) -> Result<Self, ZeroPageSize> {
        NonZeroUsize::new(size).map(Self).ok_or(ZeroPageSize)
    }

    /// Returns the size as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns true if the size is one of [`Self::OPTIONS`].
    #[must_use]
    pub fn is_option(self) -> bool {
        Self::OPTIONS.contains(&self.get())
    }

    /// Number of pages needed for `total_items`; at least one.
    #[must_use]
    pub const fn total_pages(self, total_items: usize) -> usize {
        let pages = total_items.div_ceil(self.get());
        if pages == 0 {
            1
        } else {
            pages
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ZeroPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The current page number (1-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
    /// The total number of items across all pages.
    pub total_elements: usize,
    /// The total number of pages; at least one.
    pub total_pages: usize,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// The number of items on this page.
    pub number_of_elements: usize,
}

impl PageInfo {
    /// Creates a new page info.
    #[must_use]
    pub const fn new(page: usize, size: PageSize, total_elements: usize, number_of_elements: usize) -> Self {
        let total_pages = size.total_pages(total_elements);
        Self {
            page,
            size: size.get(),
            total_elements,
            total_pages,
            first: page <= 1,
            last: page >= total_pages,
            number_of_elements,
        }
    }

    /// Returns true if there is a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        !self.last
    }

    /// Returns true if there is a previous page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        !self.first
    }
}

/// A page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, page: usize, size: PageSize, total_elements: usize) -> Self {
        let number_of_elements = content.len();
        Self {
            content,
            info: PageInfo::new(page, size, total_elements, number_of_elements),
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns the total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> usize {
        self.info.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.info.total_pages
    }

    /// Returns the current page number.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.info.page
    }
}
