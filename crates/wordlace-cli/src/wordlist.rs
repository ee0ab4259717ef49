//! Word-list file ingestion.
//!
//! The expected format is one entry per line with two comma-separated
//! columns: the word and a `TRUE`/`FALSE` (or `1`/`0`) flag marking whether
//! the word is a priority word, e.g.
//!
//! ```text
//! word,find
//! COMPASS,TRUE
//! lantern,true
//! trail,FALSE
//! ```
//!
//! A header line is detected by its first column containing "word"
//! (case-insensitive) and skipped. Rows that are missing the flag column or
//! fail word validation are skipped with a warning; the core only ever sees
//! normalized words.

use std::{fs, io, path::Path};

use wordlace_core::{Word, WordList};

/// An error loading a word-list file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum WordListError {
    /// The file could not be read.
    #[display("failed to read word list: {_0}")]
    Io(io::Error),
    /// The file contained no usable words.
    #[display("word list contains no valid words")]
    NoWords,
}

/// Loads a word list from a two-column file.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read and
/// [`WordListError::NoWords`] if no line yields a valid word.
pub fn load(path: &Path) -> Result<WordList, WordListError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parses word-list content.
///
/// # Errors
///
/// Returns [`WordListError::NoWords`] if no line yields a valid word.
pub fn parse(content: &str) -> Result<WordList, WordListError> {
    let mut words = WordList::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut columns = line.splitn(2, ',');
        let raw_word = columns.next().unwrap_or_default().trim();

        // Header row, if present
        if i == 0 && raw_word.to_ascii_lowercase().contains("word") {
            continue;
        }

        let Some(flag) = columns.next() else {
            log::warn!("line {}: missing priority column, skipping", i + 1);
            continue;
        };

        match Word::new(raw_word) {
            Ok(word) => {
                words.insert(word, parse_priority_flag(flag));
            }
            Err(err) => {
                log::warn!("line {}: skipping {raw_word:?}: {err}", i + 1);
            }
        }
    }

    if words.is_empty() {
        return Err(WordListError::NoWords);
    }
    Ok(words)
}

fn parse_priority_flag(flag: &str) -> bool {
    let flag = flag.trim();
    flag.eq_ignore_ascii_case("true") || flag == "1"
}
