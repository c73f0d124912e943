//! Parsing of caller-supplied shift keys.
//!
//! Whether a bad key falls back to a default is up to the caller; this
//! module only reports it.

use crate::error::CaesarCryptError;

/// Key callers conventionally fall back to when input is not numeric.
pub const FALLBACK_KEY: i64 = 3;

/// Parses a decimal integer key, ignoring surrounding whitespace.
///
/// # Errors
/// Returns [`CaesarCryptError::NonNumericKey`] if `input` is not an integer.
///
/// # Examples
///
/// ```
/// use caesarcrypt::key::parse_key;
///
/// assert_eq!(parse_key(" 13 ").unwrap(), 13);
/// assert!(parse_key("three").is_err());
/// ```
pub fn parse_key(input: &str) -> Result<i64, CaesarCryptError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CaesarCryptError::NonNumericKey {
            input: input.to_string(),
        })
}
