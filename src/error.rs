//! Error types for the CaesarCrypt library.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by a [`Dictionary`](crate::dictionary::Dictionary) backend.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list file could not be read.
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        /// Path of the word list.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The dictionary backend cannot answer queries.
    #[error("dictionary unavailable: {reason}")]
    Unavailable {
        /// Description of the backend failure.
        reason: String,
    },
}

/// Errors produced by the CaesarCrypt library.
///
/// An exhausted key search is not an error: [`auto_decrypt`](crate::auto_decrypt)
/// reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum CaesarCryptError {
    /// Message is empty or contains only whitespace.
    #[error("Message must contain at least one non-whitespace character")]
    InvalidInput,

    /// Starting requirement level is not a positive finite number.
    #[error("Requirement level must be a positive finite number, got {value}")]
    InvalidRequirement {
        /// The rejected value.
        value: f64,
    },

    /// Key string does not parse as an integer.
    #[error("Key must be an integer, got '{input}'")]
    NonNumericKey {
        /// The rejected input.
        input: String,
    },

    /// The dictionary oracle failed while scoring a candidate.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}
