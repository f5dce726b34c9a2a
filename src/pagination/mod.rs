//! Pagination module
//!
//! Supports: Offset (page number + page size), Cursor (opaque token)
//!
//! # Overview
//!
//! Requests and results are immutable values. Requests only describe how
//! much data to fetch and in what order; executing the query belongs to
//! the data layer. "Changing" a request with `with_sort` returns a new
//! value and leaves the original alone.
//!
//! | Style  | Request          | Result              | Navigation             |
//! |--------|------------------|---------------------|------------------------|
//! | Offset | [`PageRequest`]  | [`PageResult<T>`]   | `has_next` / `has_prev` derived from totals |
//! | Cursor | [`CursorRequest`]| [`CursorResult<T>`] | `has_more` + cursors supplied by the caller |
//!
//! # Example
//!
//! ```
//! use pagekit::{PageRequest, SortOption};
//!
//! let req = PageRequest::new(3, 10)
//!     .unwrap()
//!     .with_sort([SortOption::desc("created_at"), SortOption::asc("id")]);
//! assert_eq!(req.offset(), 20);
//! assert_eq!(req.limit(), 10);
//!
//! let result = req.to_result(vec!["row"; 10], 50);
//! assert_eq!(result.total_pages(), 5);
//! assert!(result.has_next());
//! ```

mod cursor;
mod offset;
mod types;

pub use cursor::{CursorRequest, CursorResult};
pub use offset::{PageRequest, PageResult};
pub use types::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
