//! Core data structures for word-search puzzles.
//!
//! This crate provides the fundamental types shared by puzzle generation and
//! any consumer that renders or inspects a generated puzzle.
//!
//! # Overview
//!
//! - [`letter`]: Type-safe representation of the uppercase letters A-Z
//! - [`position`]: Grid cell `(row, col)` coordinates
//! - [`direction`]: The eight straight-line directions a word can run in
//! - [`grid`]: The square letter grid, with coordinate access and bulk fill
//! - [`word`]: Normalized puzzle words and their validation rules
//! - [`word_list`]: A deduplicated word collection with a priority set
//!
//! # Examples
//!
//! ```
//! use wordlace_core::{Grid, Letter, Position};
//!
//! let mut grid = Grid::new(15);
//! grid.set(Position::new(0, 0), Letter::from_char('W').unwrap());
//! assert_eq!(grid.get(Position::new(0, 0)).map(Letter::to_char), Some('W'));
//! assert!(grid.is_cell_empty(Position::new(0, 1)));
//! ```

pub mod direction;
pub mod grid;
pub mod letter;
pub mod position;
pub mod word;
pub mod word_list;

// Re-export commonly used types
pub use self::{
    direction::Direction,
    grid::Grid,
    letter::Letter,
    position::Position,
    word::{Word, WordError},
    word_list::WordList,
};
