//! Response metadata
//!
//! Serializable shapes an HTTP or gRPC adapter can embed in list
//! responses, and the error body for rejected pagination input.

use crate::error::PaginationError;
use serde::{Deserialize, Serialize};

/// Navigation block for offset pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u64,
    pub page_size: u32,
    /// Row count across the whole dataset
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Navigation block for cursor pagination
///
/// Empty cursors are left out of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_cursor: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prev_cursor: String,
    pub has_more: bool,
}

// ============================================================================
// Error Bodies
// ============================================================================

/// Code used for every rejected pagination input
pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";

/// A problem with one request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    /// Stable code of the specific failure, e.g. `INVALID_PAGE_SIZE`
    pub code: String,
    pub message: String,
}

/// Client-facing error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
    /// HTTP status the adapter should answer with
    #[serde(skip)]
    pub status: u16,
}

impl From<&PaginationError> for ErrorBody {
    fn from(err: &PaginationError) -> Self {
        Self {
            code: VALIDATION_FAILED.to_string(),
            message: "validation failed".to_string(),
            details: vec![FieldError {
                field: err.field().to_string(),
                code: err.code().to_string(),
                message: err.to_string(),
            }],
            status: err.http_status(),
        }
    }
}

impl From<PaginationError> for ErrorBody {
    fn from(err: PaginationError) -> Self {
        Self::from(&err)
    }
}
