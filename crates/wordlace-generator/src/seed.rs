//! Puzzle seeds for reproducible generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated puzzle.
///
/// Given the same word list, configuration, and seed, generation produces a
/// byte-identical result. Seeds render as 64 lowercase hex characters and
/// parse back from the same form, so a puzzle printed with its seed can
/// always be regenerated.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use wordlace_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("Summer Picnic");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(PuzzleSeed::from_str(&hex).unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; Self::LEN]);

impl PuzzleSeed {
    /// The seed length in bytes.
    pub const LEN: usize = 32;

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; Self::LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a phrase, such as a puzzle name.
    ///
    /// The phrase is hashed with SHA-256, so the same name always yields the
    /// same puzzle for a given word list and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_generator::PuzzleSeed;
    ///
    /// assert_eq!(
    ///     PuzzleSeed::from_phrase("Autumn"),
    ///     PuzzleSeed::from_phrase("Autumn"),
    /// );
    /// assert_ne!(
    ///     PuzzleSeed::from_phrase("Autumn"),
    ///     PuzzleSeed::from_phrase("autumn"),
    /// );
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        Self(digest.into())
    }

    /// Returns the seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; Self::LEN] {
        self.0
    }

    /// Builds the deterministic random number generator for this seed.
    pub(crate) fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != Self::LEN * 2 {
            return Err(ParseSeedError::InvalidLength { length: chars.len() });
        }
        let mut bytes = [0; Self::LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = hex_value(chars[2 * i])?;
            let lo = hex_value(chars[2 * i + 1])?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

#[expect(clippy::cast_possible_truncation)]
fn hex_value(ch: char) -> Result<u8, ParseSeedError> {
    ch.to_digit(16)
        .map(|digit| digit as u8)
        .ok_or(ParseSeedError::InvalidHexDigit { ch })
}

/// An error returned when a seed string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string does not have exactly 64 characters.
    #[display("seed must be 64 hex characters, got {length}")]
    InvalidLength {
        /// The number of characters supplied.
        length: usize,
    },
    /// The string contains a character outside `[0-9a-fA-F]`.
    #[display("seed contains non-hex character {ch:?}")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
    },
}
