//! Puzzle orchestration: placement order, retry budgets, and the final fill.

use rand::RngExt as _;
use wordlace_core::{Direction, Grid, Letter, Position, Word, WordList};

use crate::{
    placement::{self, Placement},
    seed::PuzzleSeed,
};

/// Tuning knobs for puzzle generation.
///
/// The defaults produce a 15×15 grid, attempt at most 20 non-priority
/// words, and give priority words 500 random placement attempts against 100
/// for the rest.
///
/// # Examples
///
/// ```
/// use wordlace_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .grid_size(12)
///     .secondary_limit(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    grid_size: usize,
    secondary_limit: usize,
    priority_attempts: usize,
    secondary_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            secondary_limit: 20,
            priority_attempts: 500,
            secondary_attempts: 100,
        }
    }
}

impl GeneratorConfig {
    /// Sets the side length of the grid.
    #[must_use]
    pub fn grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Sets the maximum number of non-priority words to attempt.
    ///
    /// Priority words are never truncated; this cap only keeps low-value
    /// words from crowding out grid space.
    #[must_use]
    pub fn secondary_limit(mut self, limit: usize) -> Self {
        self.secondary_limit = limit;
        self
    }

    /// Sets the random placement attempt budget for priority words.
    #[must_use]
    pub fn priority_attempts(mut self, attempts: usize) -> Self {
        self.priority_attempts = attempts;
        self
    }

    /// Sets the random placement attempt budget for non-priority words.
    #[must_use]
    pub fn secondary_attempts(mut self, attempts: usize) -> Self {
        self.secondary_attempts = attempts;
        self
    }
}

/// An error that prevents a generation run from starting.
///
/// These are configuration-level failures and abort before any grid
/// mutation. A word that merely fails to place is not an error; it lands in
/// [`GeneratedPuzzle::unplaced`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The configured grid size is 0.
    #[display("grid size must be at least 1")]
    InvalidGridSize,
    /// A word in the list is longer than the grid's side, so no straight
    /// placement could ever fit it.
    #[display("word {word} ({} letters) does not fit in a grid of side {size}", word.len())]
    WordTooLong {
        /// The word that cannot fit.
        word: Word,
        /// The configured grid side.
        size: usize,
    },
}

/// The immutable result of one generation run.
///
/// A run produces this snapshot atomically; a later run builds a new value
/// rather than mutating this one. The seed recorded here replays the run
/// exactly through [`PuzzleGenerator::generate_with_seed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The fully filled letter grid.
    pub grid: Grid,
    /// One record per word committed to the grid, in placement order
    /// (priority words first).
    pub placements: Vec<Placement>,
    /// Words whose retry budget ran out before a fit was found.
    pub unplaced: Vec<Word>,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the placements whose words are priority words in `words`.
    pub fn priority_placements<'a>(
        &'a self,
        words: &'a WordList,
    ) -> impl Iterator<Item = &'a Placement> {
        self.placements
            .iter()
            .filter(|placement| words.is_priority(placement.word()))
    }

    /// Returns the sorted list of priority words that made it into the grid.
    ///
    /// This is the "words to find" list a rendered puzzle shows: words that
    /// were both marked priority and successfully placed.
    #[must_use]
    pub fn words_to_find<'a>(&'a self, words: &'a WordList) -> Vec<&'a Word> {
        let mut found: Vec<_> = self.priority_placements(words).map(Placement::word).collect();
        found.sort();
        found
    }
}

/// Generates word-search puzzles from a word list.
///
/// Generation is best-effort: each word gets a bounded number of random
/// `(origin, direction)` draws, and words that never fit are reported in
/// the result's unplaced list rather than failing the run. Priority words
/// are attempted first, longest first, with a larger budget.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Word, WordList};
/// use wordlace_generator::{GeneratorConfig, PuzzleGenerator};
///
/// let mut words = WordList::new();
/// words.insert(Word::new("compass").unwrap(), true);
/// words.insert(Word::new("trail").unwrap(), false);
///
/// let generator = PuzzleGenerator::with_config(GeneratorConfig::default().grid_size(10));
/// let puzzle = generator.generate(&words).unwrap();
/// assert!(puzzle.grid.is_full());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// The seed is recorded in the result, so any generated puzzle can be
    /// reproduced later.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidGridSize`] if the configured size is
    /// 0, and [`GenerateError::WordTooLong`] if any word in the list is
    /// longer than the grid's side.
    pub fn generate(&self, words: &WordList) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// Given the same word list, configuration, and seed, the result is
    /// byte-identical: the grid, the placement list (order and content),
    /// and the unplaced list all reproduce exactly.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidGridSize`] if the configured size is
    /// 0, and [`GenerateError::WordTooLong`] if any word in the list is
    /// longer than the grid's side. Both checks run before any grid
    /// mutation, so a failed run leaves nothing half-built.
    pub fn generate_with_seed(
        &self,
        words: &WordList,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let size = self.config.grid_size;
        if size == 0 {
            return Err(GenerateError::InvalidGridSize);
        }
        if let Some(word) = words.iter().find(|word| word.len() > size) {
            return Err(GenerateError::WordTooLong {
                word: word.clone(),
                size,
            });
        }

        let mut rng = seed.rng();

        // Priority words first, longest first within each group: longer
        // words need contiguous space that shrinks as the grid fills. The
        // sorts are stable, so list order breaks length ties and the run
        // stays deterministic for a given seed.
        let (mut priority, mut secondary): (Vec<&Word>, Vec<&Word>) =
            words.iter().partition(|word| words.is_priority(word));
        priority.sort_by(|a, b| b.len().cmp(&a.len()));
        secondary.sort_by(|a, b| b.len().cmp(&a.len()));
        secondary.truncate(self.config.secondary_limit);

        let mut grid = Grid::new(size);
        let mut placements = Vec::new();
        let mut unplaced = Vec::new();

        for &word in priority.iter().chain(secondary.iter()) {
            let attempts = if words.is_priority(word) {
                self.config.priority_attempts
            } else {
                self.config.secondary_attempts
            };

            let mut placed = false;
            for _ in 0..attempts {
                let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                let origin = Position::new(rng.random_range(0..size), rng.random_range(0..size));
                if placement::can_place(&grid, word, origin, direction) {
                    placements.push(placement::place(&mut grid, word, origin, direction));
                    placed = true;
                    break;
                }
            }
            if !placed {
                unplaced.push(word.clone());
            }
        }

        grid.fill_empty(|| Letter::from_index(rng.random_range(0..Letter::COUNT)));

        Ok(GeneratedPuzzle {
            grid,
            placements,
            unplaced,
            seed,
        })
    }
}
