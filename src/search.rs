//! PlausibilitySearch: brute-force key recovery for the shift cipher.
//!
//! Every key in `[0, 26)` is tried in ascending order. Each candidate
//! decoding is scored by the number of its space-separated tokens the
//! [`Dictionary`] recognises. The first key whose score reaches the margin
//! `total_tokens / requirement` is accepted.
//!
//! When no key reaches the margin, the requirement level is raised by
//! [`REQUIREMENT_STEP`] (lowering the margin) and the keys are tried again,
//! up to [`MAX_REQUIREMENT`]. Starting from the default level this is at
//! most 31 rounds.
//!
//! Scores are cached per key for the duration of one search, so later
//! rounds never query the dictionary again.

use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::error::CaesarCryptError;
use crate::reliability::{self, Reliability};
use crate::shift_codec;

/// Number of candidate keys tried per round.
pub const KEY_SPACE: i64 = 26;

/// Requirement level used when the caller does not pick one.
pub const DEFAULT_REQUIREMENT: f64 = 1.0;

/// Requirement level at which the search gives up.
pub const MAX_REQUIREMENT: f64 = 4.0;

/// Increase of the requirement level per relaxation round.
pub const REQUIREMENT_STEP: f64 = 0.10;

/// Tolerance when comparing a level against [`MAX_REQUIREMENT`].
const LEVEL_EPSILON: f64 = 1e-9;

/// Separator used to split messages into words.
const TOKEN_SEPARATOR: char = ' ';

/// Outcome of decoding and scoring one candidate key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAttempt {
    /// Candidate key.
    pub key: i64,
    /// Decoded text, lowercased.
    pub decoded: String,
    /// Tokens the dictionary recognised.
    pub valid_words: usize,
    /// All tokens, including empty ones between consecutive spaces.
    pub total_words: usize,
}

/// An accepted automatic decryption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decryption {
    /// Decoded message, lowercased.
    pub plaintext: String,
    /// Key that produced `plaintext`.
    pub key: i64,
    /// Reliability tier of `percent`.
    pub reliability: Reliability,
    /// Share of recognised words, rounded half to even.
    pub percent: u32,
    /// Tokens the dictionary recognised.
    pub valid_words: usize,
    /// All tokens of the message.
    pub total_words: usize,
    /// Requirement level at which the key was accepted.
    pub requirement: f64,
}

impl Decryption {
    fn from_attempt(attempt: &SearchAttempt, requirement: f64) -> Self {
        let percent = reliability::percent(attempt.valid_words, attempt.total_words);
        Decryption {
            plaintext: attempt.decoded.clone(),
            key: attempt.key,
            reliability: Reliability::from_percent(percent),
            percent,
            valid_words: attempt.valid_words,
            total_words: attempt.total_words,
            requirement,
        }
    }
}

/// Key search bound to a dictionary.
///
/// The dictionary is borrowed; the search never builds or owns one.
pub struct PlausibilitySearch<'d, D: ?Sized> {
    dictionary: &'d D,
}

impl<'d, D: Dictionary + ?Sized> PlausibilitySearch<'d, D> {
    /// Creates a search that scores candidates against `dictionary`.
    pub fn new(dictionary: &'d D) -> Self {
        PlausibilitySearch { dictionary }
    }

    /// Recovers the key of `ciphertext`.
    ///
    /// # Parameters
    /// - `ciphertext`: Encrypted message. Leading and trailing whitespace is
    ///   ignored.
    /// - `require`: Starting requirement level, normally
    ///   [`DEFAULT_REQUIREMENT`].
    ///
    /// # Returns
    /// `Ok(Some(_))` with the first accepted key, or `Ok(None)` when no key
    /// qualifies even at [`MAX_REQUIREMENT`].
    ///
    /// # Errors
    /// - [`CaesarCryptError::InvalidInput`] if the message is blank.
    /// - [`CaesarCryptError::InvalidRequirement`] if `require` is not a
    ///   positive finite number.
    /// - [`CaesarCryptError::Dictionary`] if the dictionary fails.
    pub fn run(
        &self,
        ciphertext: &str,
        require: f64,
    ) -> Result<Option<Decryption>, CaesarCryptError> {
        let message = ciphertext.trim();
        if message.is_empty() {
            return Err(CaesarCryptError::InvalidInput);
        }
        if !require.is_finite() || require <= 0.0 {
            return Err(CaesarCryptError::InvalidRequirement { value: require });
        }

        let total_words = message.split(TOKEN_SEPARATOR).count();
        // Filled in key order; round one stops early, later rounds reuse it
        let mut attempts: Vec<SearchAttempt> = Vec::with_capacity(KEY_SPACE as usize);

        'relax: for (round, level) in requirement_levels(require).enumerate() {
            let margin = total_words as f64 / level;
            tracing::debug!(
                round,
                requirement = level,
                margin = margin.round(),
                "testing candidate keys"
            );

            for key in 0..KEY_SPACE {
                let index = key as usize;
                if attempts.len() == index {
                    attempts.push(self.attempt(key, message)?);
                }
                let attempt = &attempts[index];

                if attempt.valid_words as f64 >= margin {
                    let decryption = Decryption::from_attempt(attempt, level);
                    tracing::info!(
                        key = decryption.key,
                        valid_words = decryption.valid_words,
                        percent = decryption.percent,
                        reliability = %decryption.reliability,
                        "auto decrypted"
                    );
                    return Ok(Some(decryption));
                }
            }

            if level >= MAX_REQUIREMENT - LEVEL_EPSILON {
                break 'relax;
            }
        }

        tracing::info!(total_words, "no decryption found");
        Ok(None)
    }

    /// Decodes `message` with `key` and scores it against the dictionary.
    ///
    /// Empty tokens count toward the total but are never looked up.
    ///
    /// # Errors
    /// Returns [`CaesarCryptError::Dictionary`] if the dictionary fails.
    pub fn attempt(&self, key: i64, message: &str) -> Result<SearchAttempt, CaesarCryptError> {
        let decoded = shift_codec::decode(key, message).to_lowercase();

        let mut valid_words = 0;
        let mut total_words = 0;
        for token in decoded.split(TOKEN_SEPARATOR) {
            total_words += 1;
            if !token.is_empty() && self.dictionary.is_valid_word(token)? {
                valid_words += 1;
            }
        }

        tracing::trace!(key, valid_words, total_words, "scored candidate");
        Ok(SearchAttempt {
            key,
            decoded,
            valid_words,
            total_words,
        })
    }
}

/// Recovers the key of `ciphertext` using `dictionary`.
///
/// Shorthand for [`PlausibilitySearch::run`].
///
/// # Examples
///
/// ```
/// use caesarcrypt::{auto_decrypt, encode, Reliability, WordList};
///
/// let words = WordList::from_words(["meet", "me", "at", "noon"]);
/// let cipher = encode(7, "meet me at noon");
///
/// let found = auto_decrypt(&words, &cipher, 1.0).unwrap().unwrap();
/// assert_eq!(found.key, 7);
/// assert_eq!(found.plaintext, "meet me at noon");
/// assert_eq!(found.reliability, Reliability::VeryReliable);
/// ```
pub fn auto_decrypt<D: Dictionary + ?Sized>(
    dictionary: &D,
    ciphertext: &str,
    require: f64,
) -> Result<Option<Decryption>, CaesarCryptError> {
    PlausibilitySearch::new(dictionary).run(ciphertext, require)
}

/// Requirement levels visited by one search, starting at `start`.
///
/// Levels are computed from the round index rather than accumulated so that
/// the cap is hit exactly.
pub(crate) fn requirement_levels(start: f64) -> impl Iterator<Item = f64> {
    let mut round = 0u32;
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let level = if start >= MAX_REQUIREMENT {
            start
        } else {
            (start + f64::from(round) * REQUIREMENT_STEP).min(MAX_REQUIREMENT)
        };
        done = level >= MAX_REQUIREMENT - LEVEL_EPSILON;
        round += 1;
        Some(level)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;
    use crate::error::DictionaryError;
    use crate::shift_codec::encode;
    use std::cell::Cell;

    /// Counts queries and delegates to a word list.
    struct CountingDictionary {
        inner: WordList,
        queries: Cell<usize>,
    }

    impl CountingDictionary {
        fn new(words: &[&str]) -> Self {
            CountingDictionary {
                inner: WordList::from_words(words),
                queries: Cell::new(0),
            }
        }
    }

    impl Dictionary for CountingDictionary {
        fn is_valid_word(&self, token: &str) -> Result<bool, DictionaryError> {
            self.queries.set(self.queries.get() + 1);
            self.inner.is_valid_word(token)
        }
    }

    struct BrokenDictionary;

    impl Dictionary for BrokenDictionary {
        fn is_valid_word(&self, _token: &str) -> Result<bool, DictionaryError> {
            Err(DictionaryError::Unavailable {
                reason: "no data".to_string(),
            })
        }
    }

    fn words(list: &[&str]) -> WordList {
        WordList::from_words(list)
    }

    #[test]
    fn test_recovers_key_and_plaintext() {
        let dict = words(&["the", "quick", "brown", "fox", "jumps"]);
        let cipher = encode(13, "The quick brown fox jumps");
        let found = auto_decrypt(&dict, &cipher, DEFAULT_REQUIREMENT)
            .unwrap()
            .unwrap();
        assert_eq!(found.key, 13);
        assert_eq!(found.plaintext, "the quick brown fox jumps");
        assert_eq!(found.valid_words, 5);
        assert_eq!(found.total_words, 5);
        assert_eq!(found.percent, 100);
        assert_eq!(found.reliability, Reliability::VeryReliable);
        assert_eq!(found.requirement, 1.0);
    }

    #[test]
    fn test_key_zero_is_tried_first() {
        let dict = words(&["plain", "text"]);
        let found = auto_decrypt(&dict, "plain text", 1.0).unwrap().unwrap();
        assert_eq!(found.key, 0);
    }

    #[test]
    fn test_smallest_qualifying_key_wins() {
        // "KHOOR" is "HELLO" under key 3 and "FCJJM" under key 5
        let dict = words(&["hello", "fcjjm"]);
        let found = auto_decrypt(&dict, "KHOOR", 1.0).unwrap().unwrap();
        assert_eq!(found.key, 3);
        assert_eq!(found.plaintext, "hello");
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let dict = words(&["a"]);
        for input in ["", "   ", "\t\n "] {
            let err = auto_decrypt(&dict, input, 1.0).unwrap_err();
            assert!(matches!(err, CaesarCryptError::InvalidInput));
        }
    }

    #[test]
    fn test_invalid_requirement_is_rejected() {
        let dict = words(&["a"]);
        for require in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = auto_decrypt(&dict, "abc", require).unwrap_err();
            assert!(matches!(err, CaesarCryptError::InvalidRequirement { .. }));
        }
    }

    #[test]
    fn test_relaxes_until_margin_is_met() {
        // two of four words recognisable: needs level 2.0
        let dict = words(&["secret", "message"]);
        let cipher = encode(4, "secret message qzxv wkpj");
        let found = auto_decrypt(&dict, &cipher, 1.0).unwrap().unwrap();
        assert_eq!(found.key, 4);
        assert_eq!(found.valid_words, 2);
        assert_eq!(found.percent, 50);
        assert_eq!(found.reliability, Reliability::Unreliable);
        assert!((found.requirement - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_exhausted_search_returns_none() {
        let dict = words(&["hello"]);
        let result = auto_decrypt(&dict, "1234 5678 9012", 1.0).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_exhausted_at_max_requirement() {
        let dict = words(&["hello"]);
        let result = auto_decrypt(&dict, "31337 42", MAX_REQUIREMENT).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_scores_are_cached_across_rounds() {
        let dict = CountingDictionary::new(&["hello"]);
        let result = auto_decrypt(&dict, "1234 5678", 1.0).unwrap();
        assert!(result.is_none());
        // 26 keys, two tokens each, queried once
        assert_eq!(dict.queries.get(), 52);
    }

    #[test]
    fn test_first_round_stops_at_accepted_key() {
        let dict = CountingDictionary::new(&["hello"]);
        let found = auto_decrypt(&dict, &encode(2, "hello"), 1.0)
            .unwrap()
            .unwrap();
        assert_eq!(found.key, 2);
        // keys 0, 1 and 2 only
        assert_eq!(dict.queries.get(), 3);
    }

    #[test]
    fn test_empty_tokens_count_but_are_not_queried() {
        let dict = CountingDictionary::new(&["go", "now"]);
        let found = auto_decrypt(&dict, &encode(1, "go  now"), 1.0)
            .unwrap()
            .unwrap();
        assert_eq!(found.key, 1);
        assert_eq!(found.total_words, 3);
        assert_eq!(found.valid_words, 2);
        assert_eq!(found.plaintext, "go  now");
        // round one scores every key on the two non-empty tokens
        assert_eq!(dict.queries.get(), 52);
    }

    #[test]
    fn test_dictionary_failure_propagates() {
        let err = auto_decrypt(&BrokenDictionary, "abc def", 1.0).unwrap_err();
        assert!(matches!(
            err,
            CaesarCryptError::Dictionary(DictionaryError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let dict = words(&["fine"]);
        let found = auto_decrypt(&dict, &format!("  {}\n", encode(9, "fine")), 1.0)
            .unwrap()
            .unwrap();
        assert_eq!(found.key, 9);
        assert_eq!(found.total_words, 1);
    }

    #[test]
    fn test_attempt_scores_single_key() {
        let dict = words(&["ok"]);
        let search = PlausibilitySearch::new(&dict);
        let attempt = search.attempt(5, &encode(5, "ok 123")).unwrap();
        assert_eq!(attempt.key, 5);
        assert_eq!(attempt.decoded, "ok 123");
        assert_eq!(attempt.valid_words, 1);
        assert_eq!(attempt.total_words, 2);
    }

    #[test]
    fn test_default_levels_run_thirty_one_rounds() {
        let levels: Vec<f64> = requirement_levels(DEFAULT_REQUIREMENT).collect();
        assert_eq!(levels.len(), 31);
        assert_eq!(levels[0], 1.0);
        assert_eq!(*levels.last().unwrap(), MAX_REQUIREMENT);
        assert!(levels.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_levels_cap_at_max() {
        let levels: Vec<f64> = requirement_levels(3.95).collect();
        assert_eq!(levels, vec![3.95, MAX_REQUIREMENT]);
    }

    #[test]
    fn test_levels_at_or_above_max_run_once() {
        assert_eq!(requirement_levels(4.0).count(), 1);
        assert_eq!(requirement_levels(7.5).collect::<Vec<_>>(), vec![7.5]);
    }
}
