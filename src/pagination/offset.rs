//! Offset-based pagination
//!
//! Pages are addressed by absolute position: page number times page size.

use super::types::{validate_page, validate_page_size, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::error::PaginationError;
use crate::meta::PageMeta;
use crate::sort::SortOption;
use serde::ser::{Serialize, SerializeStruct, Serializer};

// ============================================================================
// Page Request
// ============================================================================

/// A validated offset pagination request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u32,
    sort: Vec<SortOption>,
}

impl PageRequest {
    /// Create a validated page request.
    ///
    /// The page is checked before the page size, so a request where both
    /// are wrong reports [`PaginationError::InvalidPage`].
    pub fn new(page: i64, page_size: i64) -> Result<Self, PaginationError> {
        let page = validate_page(page)?;
        let page_size = validate_page_size(page_size)?;
        Ok(Self {
            page,
            page_size,
            sort: Vec::new(),
        })
    }

    /// First page with the default page size
    pub fn with_defaults() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }

    /// Return a copy sorted by `sort`, replacing any previous clauses
    pub fn with_sort<I>(&self, sort: I) -> Self
    where
        I: IntoIterator<Item = SortOption>,
    {
        Self {
            page: self.page,
            page_size: self.page_size,
            sort: sort.into_iter().collect(),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Sort clauses, primary key first
    pub fn sort(&self) -> &[SortOption] {
        &self.sort
    }

    /// Rows to skip: `(page - 1) * page_size`
    ///
    /// Saturates at `u64::MAX` for absurdly large page numbers.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(u64::from(self.page_size))
    }

    /// Rows to fetch
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Build the result for this request from the fetched rows and the
    /// total row count of the whole dataset
    pub fn to_result<T>(&self, items: Vec<T>, total_items: u64) -> PageResult<T> {
        PageResult::new(items, self.page, self.page_size, total_items)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Page Result
// ============================================================================

/// One page of items plus totals for navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    items: Vec<T>,
    page: u64,
    page_size: u32,
    total_items: u64,
    total_pages: u64,
}

impl<T> PageResult<T> {
    /// Create a page result.
    ///
    /// `page` and `page_size` should come from a validated [`PageRequest`]
    /// (see [`PageRequest::to_result`]). A `page_size` of 0 is not
    /// rejected; it yields zero total pages instead of dividing by zero.
    pub fn new(items: Vec<T>, page: u64, page_size: u32, total_items: u64) -> Self {
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages: total_pages(total_items, page_size),
        }
    }

    /// Zero-result sentinel: first page, default size, nothing found
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            total_pages: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the result and keep only the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Row count across the whole dataset, not just this page
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Navigation metadata for a response body
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            page: self.page,
            page_size: self.page_size,
            total: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next(),
            has_prev: self.has_prev(),
        }
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Serialize> Serialize for PageResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PageResult", 2)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("meta", &self.meta())?;
        state.end()
    }
}

/// `floor(total / size)` plus one for a partial trailing page
fn total_pages(total_items: u64, page_size: u32) -> u64 {
    let size = u64::from(page_size);
    if size == 0 {
        return 0;
    }
    total_items / size + u64::from(total_items % size > 0)
}
