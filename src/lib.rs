//! CaesarCrypt shift cipher with automatic key recovery.
//!
//! CaesarCrypt shifts letters (modulo 26) and digits (modulo 10) by a single
//! integer key. Every other character passes through and output is always
//! uppercase.
//!
//! Without the key, [`auto_decrypt`] brute-forces all 26 candidates and
//! accepts the first whose decoding contains enough dictionary words. When no
//! candidate qualifies, the acceptance margin is relaxed round by round until
//! a bounded limit.
//!
//! # Architecture
//!
//! ```text
//! alphabet            (LETTERS / DIGITS, modular rotation)
//!     ↑
//! shift_codec         (encode / decode)
//!     ↑
//! search              (PlausibilitySearch: key loop, scoring, relaxation)
//!     ↑ scores with          ↑ classifies with
//! dictionary          reliability
//!     ↑
//! CaesarCrypt         (facade bound to an injected dictionary)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a known key:
//!
//! ```
//! use caesarcrypt::{decode, encode};
//!
//! assert_eq!(encode(3, "charline1337"), "FKDUOLQH4660");
//! assert_eq!(decode(3, "FKDUOLQH4660"), "CHARLINE1337");
//! ```
//!
//! Recover an unknown key:
//!
//! ```
//! use caesarcrypt::{CaesarCrypt, Reliability, WordList};
//!
//! let words = WordList::from_words(["hold", "the", "line"]);
//! let cc = CaesarCrypt::new(&words);
//!
//! let found = cc.auto_decrypt("KROG WKH OLQH").unwrap().unwrap();
//! assert_eq!(found.key, 3);
//! assert_eq!(found.plaintext, "hold the line");
//! assert_eq!(found.reliability, Reliability::VeryReliable);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod dictionary;
pub mod error;
pub mod key;
pub mod reliability;
pub mod search;
pub mod shift_codec;

mod caesarcrypt;

pub use caesarcrypt::CaesarCrypt;
pub use dictionary::{Dictionary, WordList};
pub use error::{CaesarCryptError, DictionaryError};
pub use reliability::Reliability;
pub use search::{auto_decrypt, Decryption, PlausibilitySearch, SearchAttempt};
pub use shift_codec::{decode, encode, shift, Direction};
