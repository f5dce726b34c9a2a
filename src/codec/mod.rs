//! Cursor codec
//!
//! Turns an ordered list of raw string values into one opaque token and
//! back. The codec knows nothing about pagination, so it also works for
//! composite keys in other contexts.
//!
//! # Wire format
//!
//! ```text
//! token = base64url_padded( value_0 NUL value_1 NUL ... value_n )
//! ```
//!
//! The separator and alphabet are fixed: tokens issued by earlier
//! deployments must keep decoding. Values must not contain a NUL byte;
//! the format has no escaping.
//!
//! # Example
//!
//! ```
//! use pagekit::codec::{decode_cursor, encode_cursor};
//!
//! let token = encode_cursor(["2024-01-01", "order-123"]);
//! let values = decode_cursor(&token).unwrap();
//! assert_eq!(values, vec!["2024-01-01", "order-123"]);
//! ```

mod cursor;

pub use cursor::{decode_cursor, decode_cursor_single, encode_cursor, CURSOR_SEPARATOR};
