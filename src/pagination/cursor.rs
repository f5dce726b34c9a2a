//! Cursor-based pagination
//!
//! Pages are addressed by an opaque token anchored to the sort-key values
//! of the last row seen. Use [`crate::codec`] to build and read tokens.

use super::types::{validate_page_size, DEFAULT_PAGE_SIZE};
use crate::codec::decode_cursor;
use crate::error::PaginationError;
use crate::meta::CursorMeta;
use crate::sort::SortOption;
use serde::ser::{Serialize, SerializeStruct, Serializer};

// ============================================================================
// Cursor Request
// ============================================================================

/// A validated cursor pagination request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorRequest {
    cursor: String,
    page_size: u32,
    sort: Vec<SortOption>,
}

impl CursorRequest {
    /// Create a validated cursor request.
    ///
    /// Only the page size is checked. The cursor is kept as-is; whether it
    /// is well formed is only known once it is decoded.
    pub fn new(cursor: impl Into<String>, page_size: i64) -> Result<Self, PaginationError> {
        let page_size = validate_page_size(page_size)?;
        Ok(Self {
            cursor: cursor.into(),
            page_size,
            sort: Vec::new(),
        })
    }

    /// Start of the dataset with the default page size
    pub fn with_defaults() -> Self {
        Self {
            cursor: String::new(),
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
            cursor: self.cursor.clone(),
            page_size: self.page_size,
            sort: sort.into_iter().collect(),
        }
    }

    /// Raw cursor token; empty means "from the start"
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn sort(&self) -> &[SortOption] {
        &self.sort
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    pub fn has_cursor(&self) -> bool {
        !self.cursor.is_empty()
    }

    /// Decode the request cursor into its values
    pub fn decode_cursor(&self) -> Result<Vec<String>, PaginationError> {
        decode_cursor(&self.cursor)
    }
}

impl Default for CursorRequest {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Cursor Result
// ============================================================================

/// One chunk of items plus the cursors around it
///
/// `has_more` is independent of `next_cursor`: a data layer may know more
/// rows exist without having computed a trailing cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorResult<T> {
    items: Vec<T>,
    next_cursor: String,
    prev_cursor: String,
    has_more: bool,
}

impl<T> CursorResult<T> {
    /// Aggregate a cursor result. Nothing is derived; the data layer owns
    /// the sort-key values of boundary rows and computes the cursors.
    pub fn new(
        items: Vec<T>,
        next_cursor: impl Into<String>,
        prev_cursor: impl Into<String>,
        has_more: bool,
    ) -> Self {
        Self {
            items,
            next_cursor: next_cursor.into(),
            prev_cursor: prev_cursor.into(),
            has_more,
        }
    }

    /// No items, no cursors, nothing more
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: String::new(),
            prev_cursor: String::new(),
            has_more: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the result and keep only the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Token for the following chunk; empty when there is none
    pub fn next_cursor(&self) -> &str {
        &self.next_cursor
    }

    /// Token for the preceding chunk; empty when there is none
    pub fn prev_cursor(&self) -> &str {
        &self.prev_cursor
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Navigation metadata for a response body
    pub fn meta(&self) -> CursorMeta {
        CursorMeta {
            next_cursor: self.next_cursor.clone(),
            prev_cursor: self.prev_cursor.clone(),
            has_more: self.has_more,
        }
    }
}

impl<T> Default for CursorResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Serialize> Serialize for CursorResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CursorResult", 2)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("meta", &self.meta())?;
        state.end()
    }
}
