//! The two fixed symbol sets the shift cipher operates on.
//!
//! A symbol's position inside its set is its numeric value for the modular
//! arithmetic. Characters outside both sets pass through every transform.

/// Uppercase Latin letters, in order.
pub const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits, in order.
pub const DIGITS: &[u8; 10] = b"0123456789";

/// Rotates `symbol` by `offset` positions inside whichever set it belongs to.
///
/// The offset is reduced with true (Euclidean) modulo against the set size,
/// so negative and oversized offsets are valid. Symbols in neither set are
/// returned unchanged.
pub(crate) fn rotate(symbol: char, offset: i64) -> char {
    match symbol {
        'A'..='Z' => rotate_in(LETTERS, symbol, offset),
        '0'..='9' => rotate_in(DIGITS, symbol, offset),
        _ => symbol,
    }
}

fn rotate_in<const N: usize>(set: &[u8; N], symbol: char, offset: i64) -> char {
    let size = N as i64;
    // ASCII-only sets, so the byte offset from the first symbol is the index
    let index = (symbol as u8 - set[0]) as i64;
    let shifted = (index + offset.rem_euclid(size)).rem_euclid(size);
    set[shifted as usize] as char
}
