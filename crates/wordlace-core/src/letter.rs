//! Uppercase letter representation.

use std::fmt::{self, Display};

/// An uppercase letter in the range A-Z.
///
/// This type provides type-safe representation of grid letters, preventing
/// invalid characters at construction time. Internally a letter is stored as
/// its alphabet index (0 for A, 25 for Z), which is also the form a random
/// source produces during grid fill.
///
/// # Examples
///
/// ```
/// use wordlace_core::Letter;
///
/// let letter = Letter::from_char('Q').unwrap();
/// assert_eq!(letter.to_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// // Lowercase input is accepted and normalized
/// assert_eq!(Letter::from_char('q'), Some(letter));
///
/// // Non-alphabetic input is rejected
/// assert_eq!(Letter::from_char('7'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The number of distinct letters (the alphabet size).
    pub const COUNT: u8 = 26;

    /// Creates a letter from its alphabet index (0 for A, 25 for Z).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-25.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::Letter;
    ///
    /// assert_eq!(Letter::from_index(0).to_char(), 'A');
    /// assert_eq!(Letter::from_index(25).to_char(), 'Z');
    /// ```
    ///
    /// ```should_panic
    /// use wordlace_core::Letter;
    ///
    /// // This will panic
    /// let _ = Letter::from_index(26);
    /// ```
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < Self::COUNT, "letter index out of range");
        Self(index)
    }

    /// Creates a letter from a character, normalizing lowercase to uppercase.
    ///
    /// Returns `None` if the character is not an ASCII letter.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self(ch.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Returns the alphabet index of this letter (0-25).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the uppercase character for this letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Returns an iterator over all 26 letters in alphabetical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::Letter;
    ///
    /// let letters: String = Letter::all().map(Letter::to_char).collect();
    /// assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    /// ```
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..Self::COUNT).map(Letter)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_char(), f)
    }
}
