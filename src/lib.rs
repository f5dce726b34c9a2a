//! # pagekit
//!
//! Offset and cursor pagination as immutable value types, plus a
//! deterministic codec for opaque cursor tokens.
//!
//! The crate describes *how much* data to fetch and in *what order*. It
//! never fetches anything itself, so any data layer can use it.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::codec::{decode_cursor, encode_cursor};
//! use pagekit::{CursorRequest, CursorResult, PageRequest, SortOption};
//!
//! // Offset pagination
//! let req = PageRequest::new(1, 20)?.with_sort([SortOption::desc("created_at")]);
//! let page = req.to_result(vec!["order-1", "order-2"], 50);
//! assert_eq!(page.total_pages(), 3);
//! assert!(page.has_next());
//!
//! // Cursor pagination
//! let req = CursorRequest::new(encode_cursor(["2024-01-01", "order-123"]), 20)?;
//! let after = req.decode_cursor()?;
//! assert_eq!(after, vec!["2024-01-01", "order-123"]);
//!
//! let next = encode_cursor(["2024-01-02", "order-140"]);
//! let chunk = CursorResult::new(vec!["order-124"], next, "", true);
//! assert!(chunk.has_more());
//! # Ok::<(), pagekit::PaginationError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │          cli (encode / decode / page) + config           │
//! ├──────────────────────────────┬───────────────────────────┤
//! │   pagination::offset         │   pagination::cursor      │
//! │   PageRequest / PageResult   │   CursorRequest / Result  │
//! ├──────────────────────────────┼───────────────────────────┤
//! │   sort (SortOption)          │   codec (cursor tokens)   │
//! └──────────────────────────────┴───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Shared enums for logging and output
pub mod types;

/// Sort clauses
pub mod sort;

/// Cursor token codec
pub mod codec;

/// Offset and cursor pagination
pub mod pagination;

/// Serializable response metadata
pub mod meta;

/// Configuration for the command-line tool
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, PaginationError, Result};
pub use pagination::{
    CursorRequest, CursorResult, PageRequest, PageResult, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
pub use sort::{SortDirection, SortOption};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
