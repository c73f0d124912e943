//! ShiftCodec: the Caesar shift transform.
//!
//! Applies one integer key to every alphanumeric symbol of a message,
//! modulo 26 for letters and modulo 10 for digits. The message is
//! uppercased before the transform, so output is always uppercase.

use serde::{Deserialize, Serialize};

use crate::alphabet;

/// Direction of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Adds the key to each symbol position.
    Encode,
    /// Subtracts the key from each symbol position.
    Decode,
}

/// Shifts every letter and digit of `message` by `key` in `direction`.
///
/// # Parameters
/// - `direction`: [`Direction::Encode`] adds the key, [`Direction::Decode`]
///   subtracts it.
/// - `key`: Any integer. Reduced modulo the size of each alphabet.
/// - `message`: Input text. Uppercased before shifting.
///
/// # Returns
/// The transformed, uppercase message. Non-alphanumeric characters are
/// copied unchanged.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{shift, Direction};
///
/// assert_eq!(shift(Direction::Encode, 3, "charline1337"), "FKDUOLQH4660");
/// assert_eq!(shift(Direction::Decode, 3, "FKDUOLQH4660"), "CHARLINE1337");
/// ```
pub fn shift(direction: Direction, key: i64, message: &str) -> String {
    let offset = match direction {
        Direction::Encode => key,
        // Negating i64::MIN overflows; reducing first keeps the offset equivalent
        Direction::Decode => -(key.rem_euclid(26 * 10)),
    };
    message
        .to_uppercase()
        .chars()
        .map(|c| alphabet::rotate(c, offset))
        .collect()
}

/// Encrypts `message` with `key`.
///
/// # Examples
///
/// ```
/// use caesarcrypt::encode;
///
/// assert_eq!(encode(1, "Zz 9"), "AA 0");
/// ```
pub fn encode(key: i64, message: &str) -> String {
    shift(Direction::Encode, key, message)
}

/// Decrypts `message` with `key`. Exact inverse of [`encode`].
///
/// # Examples
///
/// ```
/// use caesarcrypt::{decode, encode};
///
/// let cipher = encode(11, "Hello, World 42!");
/// assert_eq!(decode(11, &cipher), "HELLO, WORLD 42!");
/// ```
pub fn decode(key: i64, message: &str) -> String {
    shift(Direction::Decode, key, message)
}
