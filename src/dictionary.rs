//! Dictionary oracle used to score candidate decryptions.
//!
//! The search only needs a yes/no answer per token, so any word source can
//! sit behind the [`Dictionary`] trait. [`WordList`] is the bundled
//! implementation, backed by a word-per-line file such as
//! `/usr/share/dict/words`.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::DictionaryError;

/// Default word list location on Unix-like systems.
pub const DEFAULT_WORD_LIST_PATH: &str = "/usr/share/dict/words";

/// Answers whether a token is a valid word of the reference language.
///
/// Lookups are case-insensitive. Implementations must be free of observable
/// side effects: the search may skip or repeat queries.
pub trait Dictionary {
    /// Returns `Ok(true)` if `token` is a valid word.
    ///
    /// # Errors
    /// Returns [`DictionaryError`] if the backend cannot answer. The error
    /// is propagated to the caller of the search untouched.
    fn is_valid_word(&self, token: &str) -> Result<bool, DictionaryError>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid_word(&self, token: &str) -> Result<bool, DictionaryError> {
        (**self).is_valid_word(token)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_valid_word(&self, token: &str) -> Result<bool, DictionaryError> {
        (**self).is_valid_word(token)
    }
}

/// In-memory set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Builds a word list from an iterator of words.
    ///
    /// Words are trimmed and lowercased. Blank entries are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::{Dictionary, WordList};
    ///
    /// let words = WordList::from_words(["Hello", "world"]);
    /// assert!(words.is_valid_word("HELLO").unwrap());
    /// assert!(!words.is_valid_word("helo").unwrap());
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        WordList { words }
    }

    /// Reads one word per line from `reader`.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Unavailable`] if a line cannot be read.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(|e| DictionaryError::Unavailable {
                reason: e.to_string(),
            })?;
            if let Some(word) = normalize(&line) {
                words.insert(word);
            }
        }
        Ok(WordList { words })
    }

    /// Loads a word-per-line file.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Io`] if the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let io_err = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let mut words = HashSet::new();
        for line in BufReader::new(file).lines() {
            if let Some(word) = normalize(&line.map_err(io_err)?) {
                words.insert(word);
            }
        }
        tracing::debug!(path = %path.display(), words = words.len(), "loaded word list");
        Ok(WordList { words })
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, token: &str) -> Result<bool, DictionaryError> {
        Ok(self.words.contains(&token.to_lowercase()))
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}
