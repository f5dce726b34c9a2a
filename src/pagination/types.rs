//! Pagination constants and shared validation
//!
//! Both pagination styles share the same page-size policy.

use crate::error::PaginationError;

/// First page number
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the caller gives none
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a request may ask for
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Check a requested page number, which must be at least 1
pub(crate) fn validate_page(page: i64) -> Result<u64, PaginationError> {
    u64::try_from(page)
        .ok()
        .filter(|p| *p >= DEFAULT_PAGE)
        .ok_or(PaginationError::InvalidPage { page })
}

/// Check a requested page size against `1..=MAX_PAGE_SIZE`
pub(crate) fn validate_page_size(page_size: i64) -> Result<u32, PaginationError> {
    u32::try_from(page_size)
        .ok()
        .filter(|s| (1..=MAX_PAGE_SIZE).contains(s))
        .ok_or(PaginationError::InvalidPageSize { page_size })
}
