//! Word collections with a priority subset.

use std::collections::HashSet;

use crate::Word;

/// A deduplicated, insertion-ordered collection of words, plus a set marking
/// which of them are *priority* words.
///
/// Priority words are the ones the puzzle must be about: the generator
/// places them first and gives them a larger retry budget. The flag is
/// tracked here as a separate set rather than on the word itself, so the
/// same [`Word`] value can be priority in one list and not in another.
///
/// Inserting a duplicate collapses to the existing entry; if either
/// insertion marked the word as priority, it stays priority.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Word, WordList};
///
/// let mut words = WordList::new();
/// words.insert(Word::new("cat")?, true);
/// words.insert(Word::new("dog")?, false);
/// words.insert(Word::new("CAT")?, false); // duplicate, collapses
///
/// assert_eq!(words.len(), 2);
/// assert!(words.is_priority(&Word::new("cat")?));
/// assert!(!words.is_priority(&Word::new("dog")?));
/// # Ok::<(), wordlace_core::WordError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    priority: HashSet<Word>,
}

impl WordList {
    /// Creates an empty word list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word, marking it as priority if `priority` is true.
    ///
    /// Duplicates collapse to one entry in insertion order. Priority flags
    /// combine with OR: once a word is priority, re-inserting it without the
    /// flag does not demote it.
    ///
    /// Returns `true` if the word was not previously in the list.
    pub fn insert(&mut self, word: Word, priority: bool) -> bool {
        let is_new = !self.words.contains(&word);
        if priority {
            self.priority.insert(word.clone());
        }
        if is_new {
            self.words.push(word);
        }
        is_new
    }

    /// Returns whether the word is marked as priority.
    #[must_use]
    pub fn is_priority(&self, word: &Word) -> bool {
        self.priority.contains(word)
    }

    /// Returns the words in insertion order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns an iterator over the words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether the list contains no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<(Word, bool)> for WordList {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Word, bool)>,
    {
        let mut list = Self::new();
        for (word, priority) in iter {
            list.insert(word, priority);
        }
        list
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut list = WordList::new();
        assert!(list.insert(word("apple"), false));
        assert!(!list.insert(word("APPLE"), false));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_priority_flags_or_together() {
        let mut list = WordList::new();
        list.insert(word("apple"), false);
        assert!(!list.is_priority(&word("apple")));

        // Second insert promotes, later inserts never demote
        list.insert(word("apple"), true);
        assert!(list.is_priority(&word("apple")));
        list.insert(word("apple"), false);
        assert!(list.is_priority(&word("apple")));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let list: WordList = [
            (word("cherry"), true),
            (word("apple"), false),
            (word("banana"), false),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = list.iter().map(Word::as_str).collect();
        assert_eq!(order, vec!["CHERRY", "APPLE", "BANANA"]);
        assert!(list.is_priority(&word("cherry")));
        assert!(!list.is_priority(&word("banana")));
    }

    #[test]
    fn test_empty_list() {
        let list = WordList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);
    }
}
