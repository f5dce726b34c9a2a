//! Cursor token encoding and decoding

use crate::error::PaginationError;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

/// Joins values inside a token
pub const CURSOR_SEPARATOR: char = '\0';

/// Encode values into a cursor token.
///
/// An empty input yields `""`, the "no cursor" sentinel. Encoding is
/// deterministic: the same ordered values always give the same token.
pub fn encode_cursor<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    let mut any = false;
    for value in values {
        if any {
            joined.push(CURSOR_SEPARATOR);
        }
        joined.push_str(value.as_ref());
        any = true;
    }

    if !any {
        return String::new();
    }
    URL_SAFE.encode(joined.as_bytes())
}

/// Decode a cursor token back into its values.
///
/// `""` decodes to an empty list. Anything that is not padded URL-safe
/// base64 of UTF-8 text is [`PaginationError::InvalidCursor`].
pub fn decode_cursor(token: &str) -> Result<Vec<String>, PaginationError> {
    if token.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = URL_SAFE
        .decode(token)
        .map_err(|_| PaginationError::InvalidCursor)?;
    let joined = String::from_utf8(bytes).map_err(|_| PaginationError::InvalidCursor)?;

    Ok(joined.split(CURSOR_SEPARATOR).map(String::from).collect())
}

/// Decode a token that must carry exactly one value.
pub fn decode_cursor_single(token: &str) -> Result<String, PaginationError> {
    let mut values = decode_cursor(token)?;
    if values.len() != 1 {
        return Err(PaginationError::InvalidCursor);
    }
    values.pop().ok_or(PaginationError::InvalidCursor)
}
