//! Error types for pagekit
//!
//! This module defines the error hierarchy for the crate.
//!
//! - [`PaginationError`] - validation failures raised while building
//!   requests or decoding cursors. These are client errors.
//! - [`Error`] - everything the library and CLI can return, including
//!   configuration and I/O failures.

use thiserror::Error;

// ============================================================================
// Pagination Errors
// ============================================================================

/// Validation errors for pagination input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page number must be greater than 0, got {page}")]
    InvalidPage { page: i64 },

    #[error("page size must be between 1 and 1000, got {page_size}")]
    InvalidPageSize { page_size: i64 },

    #[error("invalid cursor format")]
    InvalidCursor,
}

impl PaginationError {
    /// Stable machine-readable code for API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPage { .. } => "INVALID_PAGE",
            Self::InvalidPageSize { .. } => "INVALID_PAGE_SIZE",
            Self::InvalidCursor => "INVALID_CURSOR",
        }
    }

    /// Name of the request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidPage { .. } => "page",
            Self::InvalidPageSize { .. } => "page_size",
            Self::InvalidCursor => "cursor",
        }
    }

    /// HTTP status an adapter should answer with
    pub fn http_status(&self) -> u16 {
        400
    }
}

// ============================================================================
// Crate Errors
// ============================================================================

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns the pagination error if this is a client validation failure
    pub fn as_pagination(&self) -> Option<&PaginationError> {
        match self {
            Self::Pagination(e) => Some(e),
            Self::Context { source, .. } => source.as_pagination(),
            _ => None,
        }
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;

/// Attaches what was being attempted to a failure
pub trait ResultExt<T> {
    /// Wrap the error with a lazily built description
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_display() {
        let err = PaginationError::InvalidPage { page: 0 };
        assert_eq!(err.to_string(), "page number must be greater than 0, got 0");

        let err = PaginationError::InvalidPageSize { page_size: 1001 };
        assert_eq!(
            err.to_string(),
            "page size must be between 1 and 1000, got 1001"
        );

        assert_eq!(
            PaginationError::InvalidCursor.to_string(),
            "invalid cursor format"
        );

        let err = Error::config("missing file");
        assert_eq!(err.to_string(), "Configuration error: missing file");
    }

    #[test_case(PaginationError::InvalidPage { page: -1 }, "INVALID_PAGE", "page" ; "invalid page")]
    #[test_case(PaginationError::InvalidPageSize { page_size: 0 }, "INVALID_PAGE_SIZE", "page_size" ; "invalid page size")]
    #[test_case(PaginationError::InvalidCursor, "INVALID_CURSOR", "cursor" ; "invalid cursor")]
    fn test_error_codes(err: PaginationError, code: &str, field: &str) {
        assert_eq!(err.code(), code);
        assert_eq!(err.field(), field);
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn test_pagination_error_is_transparent() {
        let err: Error = PaginationError::InvalidCursor.into();
        assert_eq!(err.to_string(), "invalid cursor format");
        assert_eq!(err.as_pagination(), Some(&PaginationError::InvalidCursor));
        assert!(Error::config("x").as_pagination().is_none());
    }

    #[test]
    fn test_with_context_keeps_source() {
        use std::error::Error as _;

        let result: std::result::Result<(), PaginationError> = Err(PaginationError::InvalidCursor);
        let err = result.with_context(|| "reading token".to_string()).unwrap_err();

        assert_eq!(err.to_string(), "reading token: invalid cursor format");
        assert_eq!(err.as_pagination(), Some(&PaginationError::InvalidCursor));
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("invalid cursor format")
        );
    }
}
