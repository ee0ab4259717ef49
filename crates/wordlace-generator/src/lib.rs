//! Word-search puzzle generation.
//!
//! This crate turns a [`WordList`](wordlace_core::WordList) into a filled
//! letter grid. Words are placed one at a time along a random direction at a
//! random origin, retrying up to a per-word budget; priority words go first
//! and get a larger budget. Whatever cannot be placed is reported in the
//! result rather than failing the run. Empty cells are filled with random
//! letters as the final step.
//!
//! Generation is reproducible: every puzzle records the [`PuzzleSeed`] that
//! produced it, and [`PuzzleGenerator::generate_with_seed`] replays it
//! exactly.
//!
//! # Examples
//!
//! ```
//! use wordlace_core::{Word, WordList};
//! use wordlace_generator::PuzzleGenerator;
//!
//! let mut words = WordList::new();
//! words.insert(Word::new("cat").unwrap(), true);
//! words.insert(Word::new("dog").unwrap(), false);
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(&words).unwrap();
//!
//! // Every cell holds a letter once generation finishes
//! assert!(puzzle.grid.is_full());
//! assert_eq!(puzzle.placements.len() + puzzle.unplaced.len(), 2);
//!
//! // The recorded seed replays the identical puzzle
//! let replay = generator.generate_with_seed(&words, puzzle.seed).unwrap();
//! assert_eq!(replay.grid, puzzle.grid);
//! ```

pub mod generator;
pub mod placement;
pub mod seed;

pub use self::{
    generator::{GenerateError, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator},
    placement::{Placement, can_place, place},
    seed::{ParseSeedError, PuzzleSeed},
};
