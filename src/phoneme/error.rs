//! Error types for phoneme and pronunciation parsing.

use thiserror::Error;

/// Errors produced when a symbol cannot be used as a [`Phoneme`](super::Phoneme).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhonemeError {
    /// The symbol was the empty string.
    #[error("Phoneme symbol is empty")]
    Empty,

    /// The symbol is longer than a phoneme can hold.
    ///
    /// Phonemes are at most [`MAX_PHONEME_LEN`](super::MAX_PHONEME_LEN) bytes:
    /// an ARPAbet base of one or two letters plus an optional stress digit.
    #[error("Phoneme symbol {symbol:?} is {len} bytes long (maximum is {max})")]
    TooLong {
        /// The rejected symbol.
        symbol: String,
        /// Its length in bytes.
        len: usize,
        /// The maximum accepted length.
        max: usize,
    },

    /// The symbol contains a character that is not ASCII alphanumeric.
    #[error("Phoneme symbol {symbol:?} contains invalid character {character:?}")]
    InvalidCharacter {
        /// The rejected symbol.
        symbol: String,
        /// The first offending character.
        character: char,
    },

    /// The symbol has no letters, only stress digits.
    #[error("Phoneme symbol {0:?} has no base letter")]
    MissingBase(String),

    /// The symbol has a digit anywhere but the last position.
    ///
    /// Only a single trailing stress digit may follow the letters.
    #[error("Phoneme symbol {0:?} has a digit before its last character")]
    MisplacedStress(String),

    /// The trailing stress digit is outside `0..=2`.
    #[error("Phoneme symbol {symbol:?} has stress {digit} (expected 0, 1 or 2)")]
    InvalidStress {
        /// The rejected symbol.
        symbol: String,
        /// The stress digit it carries.
        digit: u8,
    },
}

/// Errors produced when parsing a whitespace-separated pronunciation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PronunciationError {
    /// A token in the pronunciation is not a valid phoneme.
    #[error("Invalid phoneme at position {position}: {source}")]
    InvalidPhoneme {
        /// Zero-based index of the token within the pronunciation.
        position: usize,
        /// Why the token was rejected.
        #[source]
        source: PhonemeError,
    },
}

/// A specialized `Result` type for phoneme parsing.
pub type Result<T> = std::result::Result<T, PhonemeError>;
