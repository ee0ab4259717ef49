//! Normalized puzzle words.

use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::Letter;

/// A normalized puzzle word: uppercase ASCII letters, length at least 2.
///
/// Normalization happens once at the boundary, in [`Word::new`]: the input
/// is trimmed, uppercased, and validated. Everything downstream (placement,
/// deduplication, priority lookup) can then rely on the invariant and
/// compare words by simple equality.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Word, WordError};
///
/// let word = Word::new("  giraffe ")?;
/// assert_eq!(word.as_str(), "GIRAFFE");
/// assert_eq!(word.len(), 7);
///
/// // Two spellings of the same word collapse to one value
/// assert_eq!(Word::new("Cat")?, Word::new("CAT")?);
///
/// assert_eq!(Word::new("a"), Err(WordError::TooShort { length: 1 }));
/// assert_eq!(Word::new("B2B"), Err(WordError::NotAlphabetic { ch: '2' }));
/// # Ok::<(), WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Creates a normalized word from raw input.
    ///
    /// The input is trimmed and uppercased. Every remaining character must
    /// be an ASCII letter, and at least two must remain.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] if nothing remains after trimming,
    /// [`WordError::TooShort`] for a single character, and
    /// [`WordError::NotAlphabetic`] for the first non-letter character.
    pub fn new(input: &str) -> Result<Self, WordError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }
        for ch in trimmed.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::NotAlphabetic { ch });
            }
        }
        if trimmed.len() < 2 {
            return Err(WordError::TooShort {
                length: trimmed.len(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the normalized word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of letters in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        // ASCII-only by construction, so bytes == letters
        self.0.len()
    }

    /// Returns `false`; retained for API symmetry with `len`.
    ///
    /// A word is never empty: [`Word::new`] requires at least two letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the word's letters in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{Letter, Word};
    ///
    /// let word = Word::new("ab").unwrap();
    /// let letters: Vec<_> = word.letters().collect();
    /// assert_eq!(letters, vec![Letter::from_index(0), Letter::from_index(1)]);
    /// ```
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.chars().map(|ch| {
            Letter::from_char(ch).expect("word invariant: ASCII letters only")
        })
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An error describing why raw input could not become a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    /// The input was empty (or whitespace only).
    Empty,
    /// The input was shorter than two letters after trimming.
    TooShort {
        /// The trimmed length.
        length: usize,
    },
    /// The input contained a character that is not an ASCII letter.
    NotAlphabetic {
        /// The offending character.
        ch: char,
    },
}

impl Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("word is empty"),
            Self::TooShort { length } => {
                write!(f, "word is too short ({length} letters, need at least 2)")
            }
            Self::NotAlphabetic { ch } => {
                write!(f, "word contains non-alphabetic character {ch:?}")
            }
        }
    }
}

impl Error for WordError {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(Word::new("cat").unwrap().as_str(), "CAT");
        assert_eq!(Word::new("  DoG\t").unwrap().as_str(), "DOG");
        assert_eq!(Word::new("ZEBRA").unwrap().len(), 5);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("x"), Err(WordError::TooShort { length: 1 }));
        assert_eq!(Word::new("no-go"), Err(WordError::NotAlphabetic { ch: '-' }));
        assert_eq!(
            Word::new("two words"),
            Err(WordError::NotAlphabetic { ch: ' ' })
        );
        assert_eq!(Word::new("r2"), Err(WordError::NotAlphabetic { ch: '2' }));
    }

    #[test]
    fn test_case_insensitive_equality() {
        let lower = Word::new("puzzle").unwrap();
        let upper = Word::new("PUZZLE").unwrap();
        let mixed = Word::new("PuZzLe").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(WordError::Empty.to_string(), "word is empty");
        assert_eq!(
            WordError::NotAlphabetic { ch: '3' }.to_string(),
            "word contains non-alphabetic character '3'"
        );
    }

    proptest! {
        #[test]
        fn prop_valid_words_normalize_to_uppercase(input in "[a-zA-Z]{2,16}") {
            let word = Word::new(&input).unwrap();
            prop_assert_eq!(word.as_str(), input.to_ascii_uppercase());
            prop_assert_eq!(word.len(), input.len());
            prop_assert_eq!(word.letters().count(), input.len());
        }

        #[test]
        fn prop_surrounding_whitespace_is_ignored(input in "[a-z]{2,12}") {
            let padded = format!("  {input}\t");
            prop_assert_eq!(Word::new(&padded), Word::new(&input));
        }

        #[test]
        fn prop_letters_spell_the_word(input in "[A-Z]{2,12}") {
            let word = Word::new(&input).unwrap();
            let spelled: String = word.letters().map(Letter::to_char).collect();
            prop_assert_eq!(spelled, input);
        }
    }
}
