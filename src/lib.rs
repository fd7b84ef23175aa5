//! # extended_rhymer
//!
//! Phoneme-level edit distance for rhyme similarity.
//!
//! Words are compared by their pronunciations: sequences of [`Phoneme`]
//! symbols in CMU pronouncing dictionary form. [`levenshtein_distance`]
//! returns the minimum number of phoneme insertions, deletions and
//! substitutions separating two pronunciations, which a rhymer can threshold
//! to find near rhymes.
//!
//! ## Example
//!
//! ```rust
//! use extended_rhymer::prelude::*;
//!
//! let orange = parse_pronunciation("AO1 R AH0 N JH").unwrap();
//! let door_hinge = parse_pronunciation("D AO1 R HH IH0 N JH").unwrap();
//!
//! assert_eq!(levenshtein_distance(&orange, &door_hinge), 3);
//! ```
//!
//! ## Features
//!
//! - `serialization`: `serde` support for [`Phoneme`], encoded as its symbol
//!   string.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod phoneme;

pub use distance::{levenshtein_distance, Distance};
pub use phoneme::{parse_pronunciation, Phoneme, PhonemeError, PronunciationError};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{levenshtein_distance, Distance};
    pub use crate::phoneme::{
        parse_pronunciation, Phoneme, PhonemeError, PronunciationError, MAX_PHONEME_LEN,
    };
}
