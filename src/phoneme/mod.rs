//! Phoneme symbols and pronunciations.
//!
//! A [`Phoneme`] is a short, fixed-size symbol in the form used by the CMU
//! pronouncing dictionary: an ARPAbet base of one or two letters followed by
//! an optional stress digit (`K`, `CH`, `AH0`, `EY1`). Phonemes are `Copy` and
//! compare by their exact symbol text, which is all the edit distance needs.
//!
//! # Example
//!
//! ```rust
//! use extended_rhymer::phoneme::{parse_pronunciation, Phoneme};
//!
//! let cat = parse_pronunciation("K AE1 T").unwrap();
//! assert_eq!(cat.len(), 3);
//! assert_eq!(cat[1].stress(), Some(1));
//! assert_eq!(cat[1].base(), "AE".parse::<Phoneme>().unwrap());
//! ```

pub mod error;

use std::fmt;
use std::str::FromStr;

pub use error::{PhonemeError, PronunciationError};

/// Maximum length of a phoneme symbol, in bytes.
pub const MAX_PHONEME_LEN: usize = 3;

/// A single phonetic unit.
///
/// Stored inline as up to [`MAX_PHONEME_LEN`] ASCII alphanumeric bytes, padded
/// with zeros. Construction validates the symbol, so every `Phoneme` has at
/// least one letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Phoneme {
    bytes: [u8; MAX_PHONEME_LEN],
    len: u8,
}

impl Phoneme {
    /// Create a phoneme from its symbol text.
    ///
    /// # Errors
    ///
    /// Returns a [`PhonemeError`] if `symbol` is empty, longer than
    /// [`MAX_PHONEME_LEN`] bytes, contains anything other than ASCII letters
    /// and digits, contains no letter at all, has a digit before its last
    /// character, or ends in a stress digit other than `0`, `1` or `2`.
    pub fn new(symbol: &str) -> error::Result<Self> {
        if symbol.is_empty() {
            return Err(PhonemeError::Empty);
        }

        if let Some(character) = symbol.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(PhonemeError::InvalidCharacter {
                symbol: symbol.to_owned(),
                character,
            });
        }

        if symbol.len() > MAX_PHONEME_LEN {
            return Err(PhonemeError::TooLong {
                symbol: symbol.to_owned(),
                len: symbol.len(),
                max: MAX_PHONEME_LEN,
            });
        }

        if !symbol.bytes().any(|b| b.is_ascii_alphabetic()) {
            return Err(PhonemeError::MissingBase(symbol.to_owned()));
        }

        let bytes = symbol.as_bytes();
        let (head, last) = (&bytes[..bytes.len() - 1], bytes[bytes.len() - 1]);

        if head.iter().any(u8::is_ascii_digit) {
            return Err(PhonemeError::MisplacedStress(symbol.to_owned()));
        }

        if last.is_ascii_digit() && last > b'2' {
            return Err(PhonemeError::InvalidStress {
                symbol: symbol.to_owned(),
                digit: last - b'0',
            });
        }

        Ok(Self::from_ascii(symbol.bytes()))
    }

    // Callers guarantee at most MAX_PHONEME_LEN ASCII bytes.
    fn from_ascii(symbol: impl Iterator<Item = u8>) -> Self {
        let mut bytes = [0u8; MAX_PHONEME_LEN];
        let mut len = 0u8;
        for (slot, b) in bytes.iter_mut().zip(symbol) {
            *slot = b;
            len += 1;
        }
        Self { bytes, len }
    }

    /// The symbol text, exactly as it was given.
    #[inline]
    pub fn as_str(&self) -> &str {
        let symbol = std::str::from_utf8(&self.bytes[..self.len as usize]);
        // Construction only admits ASCII, so this never falls back.
        debug_assert!(symbol.is_ok(), "non-ASCII bytes in phoneme {:?}", self.bytes);
        symbol.unwrap_or_default()
    }

    /// Number of bytes in the symbol.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// The trailing stress digit, if the symbol has one.
    ///
    /// Vowels carry `0` (no stress), `1` (primary) or `2` (secondary);
    /// consonants carry none. Other digits are rejected at construction.
    ///
    /// ```rust
    /// use extended_rhymer::Phoneme;
    ///
    /// assert_eq!(Phoneme::new("AH0").unwrap().stress(), Some(0));
    /// assert_eq!(Phoneme::new("K").unwrap().stress(), None);
    /// ```
    pub fn stress(&self) -> Option<u8> {
        let last = self.bytes[self.len() - 1];
        last.is_ascii_digit().then(|| last - b'0')
    }

    /// The symbol with its stress digit removed (`AH0` becomes `AH`).
    ///
    /// Two phonemes that differ only in stress share a base.
    pub fn base(&self) -> Phoneme {
        let len = self.len() - usize::from(self.stress().is_some());
        Self::from_ascii(self.bytes[..len].iter().copied())
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phoneme({})", self.as_str())
    }
}

impl FromStr for Phoneme {
    type Err = PhonemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Phoneme {
    type Error = PhonemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Phoneme {
    type Error = PhonemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Phoneme> for String {
    fn from(phoneme: Phoneme) -> Self {
        phoneme.as_str().to_owned()
    }
}

impl AsRef<str> for Phoneme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Parse a whitespace-separated pronunciation such as `"K AE1 T"`.
///
/// This is the pronunciation column of a CMU dictionary line. Blank input
/// gives an empty pronunciation.
///
/// # Errors
///
/// Returns [`PronunciationError::InvalidPhoneme`] for the first token that is
/// not a valid [`Phoneme`], with its zero-based position.
pub fn parse_pronunciation(text: &str) -> Result<Vec<Phoneme>, PronunciationError> {
    text.split_ascii_whitespace()
        .enumerate()
        .map(|(position, token)| {
            Phoneme::new(token).map_err(|source| {
                tracing::debug!(position, token, error = %source, "rejected phoneme token");
                PronunciationError::InvalidPhoneme { position, source }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(symbol: &str) -> Phoneme {
        Phoneme::new(symbol).unwrap()
    }

    #[test]
    fn test_accepts_cmu_symbols() {
        for symbol in ["K", "CH", "AH0", "EY1", "ER2", "ZH"] {
            let phoneme = p(symbol);
            assert_eq!(phoneme.as_str(), symbol);
            assert_eq!(phoneme.len(), symbol.len());
            assert_eq!(phoneme.to_string(), symbol);
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Phoneme::new(""), Err(PhonemeError::Empty));
    }

    #[test]
    fn test_rejects_too_long() {
        assert_eq!(
            Phoneme::new("AH01"),
            Err(PhonemeError::TooLong {
                symbol: "AH01".to_string(),
                len: 4,
                max: MAX_PHONEME_LEN,
            })
        );
    }

    #[test]
    fn test_rejects_invalid_character() {
        assert_eq!(
            Phoneme::new("A-"),
            Err(PhonemeError::InvalidCharacter {
                symbol: "A-".to_string(),
                character: '-',
            })
        );
        // Non-ASCII is reported as a character, not as a byte length.
        assert!(matches!(
            Phoneme::new("é"),
            Err(PhonemeError::InvalidCharacter { character: 'é', .. })
        ));
    }

    #[test]
    fn test_rejects_digits_only() {
        assert_eq!(
            Phoneme::new("10"),
            Err(PhonemeError::MissingBase("10".to_string()))
        );
    }

    #[test]
    fn test_rejects_digit_before_last_position() {
        for symbol in ["0A", "A0B", "9AA", "A00"] {
            assert_eq!(
                Phoneme::new(symbol),
                Err(PhonemeError::MisplacedStress(symbol.to_string())),
                "{symbol} should be rejected"
            );
        }
        // Otherwise A0B would collapse onto AB.
        assert!(Phoneme::new("AB").is_ok());
    }

    #[test]
    fn test_rejects_stress_out_of_range() {
        assert_eq!(
            Phoneme::new("A9"),
            Err(PhonemeError::InvalidStress {
                symbol: "A9".to_string(),
                digit: 9,
            })
        );
        assert!(matches!(
            Phoneme::new("AH3"),
            Err(PhonemeError::InvalidStress { digit: 3, .. })
        ));
        for symbol in ["AH0", "AH1", "AH2"] {
            assert!(Phoneme::new(symbol).is_ok());
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(p("ah0"), p("AH0"));
    }

    #[test]
    fn test_stress() {
        assert_eq!(p("AH0").stress(), Some(0));
        assert_eq!(p("EY1").stress(), Some(1));
        assert_eq!(p("ER2").stress(), Some(2));
        assert_eq!(p("T").stress(), None);
        assert_eq!(p("CH").stress(), None);
    }

    #[test]
    fn test_base_strips_stress() {
        assert_eq!(p("AH0").base(), p("AH"));
        assert_eq!(p("AH1").base(), p("AH0").base());
        assert_eq!(p("K").base(), p("K"));
        assert_eq!(p("AH0").base().len(), 2);
    }

    #[test]
    fn test_ordering_follows_symbol_text() {
        let mut phonemes = vec![p("B"), p("AH1"), p("AA"), p("AH0"), p("A")];
        phonemes.sort();
        let symbols: Vec<_> = phonemes.iter().map(Phoneme::as_str).collect();
        assert_eq!(symbols, vec!["A", "AA", "AH0", "AH1", "B"]);
    }

    #[test]
    fn test_parse_pronunciation() {
        let cat = parse_pronunciation("K AE1 T").unwrap();
        assert_eq!(cat, vec![p("K"), p("AE1"), p("T")]);

        let spaced = parse_pronunciation("  K\tAE1   T \n").unwrap();
        assert_eq!(spaced, cat);
    }

    #[test]
    fn test_parse_blank_pronunciation() {
        assert!(parse_pronunciation("").unwrap().is_empty());
        assert!(parse_pronunciation("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_pronunciation_reports_position() {
        let err = parse_pronunciation("K AE1 T!").unwrap_err();
        assert_eq!(
            err,
            PronunciationError::InvalidPhoneme {
                position: 2,
                source: PhonemeError::InvalidCharacter {
                    symbol: "T!".to_string(),
                    character: '!',
                },
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid phoneme at position 2: Phoneme symbol \"T!\" contains invalid character '!'"
        );
    }

    #[test]
    fn test_string_conversions() {
        let phoneme = Phoneme::try_from("OW1").unwrap();
        assert_eq!(String::from(phoneme), "OW1");
        assert_eq!(Phoneme::try_from("OW1".to_string()), Ok(phoneme));
        assert_eq!(format!("{:?}", phoneme), "Phoneme(OW1)");
    }
}
