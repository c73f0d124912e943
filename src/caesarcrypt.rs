//! CaesarCrypt: shift cipher engine with automatic key recovery.
//!
//! Bundles the shift transform and the plausibility search behind one
//! handle that borrows a ready [`Dictionary`].

use crate::dictionary::Dictionary;
use crate::error::CaesarCryptError;
use crate::search::{Decryption, PlausibilitySearch, DEFAULT_REQUIREMENT};
use crate::shift_codec;

/// Shift cipher engine bound to a dictionary.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{CaesarCrypt, WordList};
///
/// let words = WordList::from_words(["charline"]);
/// let cc = CaesarCrypt::new(&words);
///
/// let cipher = cc.encode(3, "charline");
/// assert_eq!(cipher, "FKDUOLQH");
///
/// let found = cc.auto_decrypt(&cipher).unwrap().unwrap();
/// assert_eq!(found.key, 3);
/// assert_eq!(found.plaintext, "charline");
/// ```
pub struct CaesarCrypt<'d, D: ?Sized> {
    dictionary: &'d D,
    requirement: f64,
}

impl<'d, D: Dictionary + ?Sized> CaesarCrypt<'d, D> {
    /// Creates an engine that scores decryptions against `dictionary`.
    pub fn new(dictionary: &'d D) -> Self {
        CaesarCrypt {
            dictionary,
            requirement: DEFAULT_REQUIREMENT,
        }
    }

    /// Sets the starting requirement level for [`auto_decrypt`](Self::auto_decrypt).
    ///
    /// Higher levels accept decryptions with fewer recognised words.
    ///
    /// # Errors
    /// Returns [`CaesarCryptError::InvalidRequirement`] if `requirement` is
    /// not a positive finite number.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::{CaesarCrypt, WordList};
    ///
    /// let words = WordList::default();
    /// assert!(CaesarCrypt::new(&words).with_requirement(2.0).is_ok());
    /// assert!(CaesarCrypt::new(&words).with_requirement(0.0).is_err());
    /// ```
    pub fn with_requirement(mut self, requirement: f64) -> Result<Self, CaesarCryptError> {
        if !requirement.is_finite() || requirement <= 0.0 {
            return Err(CaesarCryptError::InvalidRequirement { value: requirement });
        }
        self.requirement = requirement;
        Ok(self)
    }

    /// Starting requirement level.
    pub fn requirement(&self) -> f64 {
        self.requirement
    }

    /// Encrypts `message` with `key`. See [`shift_codec::encode`].
    pub fn encode(&self, key: i64, message: &str) -> String {
        shift_codec::encode(key, message)
    }

    /// Decrypts `message` with `key`. See [`shift_codec::decode`].
    pub fn decode(&self, key: i64, message: &str) -> String {
        shift_codec::decode(key, message)
    }

    /// Recovers the key of `message` without knowing it.
    ///
    /// Returns `Ok(None)` when no key qualifies.
    ///
    /// # Errors
    /// See [`PlausibilitySearch::run`].
    pub fn auto_decrypt(&self, message: &str) -> Result<Option<Decryption>, CaesarCryptError> {
        PlausibilitySearch::new(self.dictionary).run(message, self.requirement)
    }
}
