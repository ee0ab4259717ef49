//! The placement engine: fit-checking and committing words to the grid.

use wordlace_core::{Direction, Grid, Position, Word};

/// The committed record of a word's position within the grid.
///
/// A placement is produced only for words that were actually written into
/// the grid. Its coordinate list has exactly one entry per letter, in
/// direction order, so the letters read along `cells()` spell the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: Word,
    direction: Direction,
    cells: Vec<Position>,
}

impl Placement {
    /// Returns the placed word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the direction the word runs in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the cell of the word's first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.cells[0]
    }

    /// Returns the word's cells in letter order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }
}

/// Checks whether `word` fits into `grid` starting at `origin` and running
/// along `direction`.
///
/// The word fits when every cell it would cover lies inside the grid and is
/// either empty or already holds the same letter the word would write there.
/// The identical-letter crossing keeps the contract general; the puzzle
/// generator fills empty cells only after all placements, so during
/// generation a non-empty cell can only come from another placed word.
///
/// This is a pure check and never mutates the grid.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Direction, Grid, Position, Word};
/// use wordlace_generator::{can_place, place};
///
/// let mut grid = Grid::new(5);
/// let across = Word::new("stone").unwrap();
/// let down = Word::new("sap").unwrap();
/// let origin = Position::new(0, 0);
///
/// assert!(can_place(&grid, &across, origin, Direction::Right));
/// place(&mut grid, &across, origin, Direction::Right);
///
/// // "SAP" may cross "STONE" through the shared S, but cannot
/// // overwrite the T with its A
/// assert!(can_place(&grid, &down, origin, Direction::Down));
/// assert!(!can_place(&grid, &down, Position::new(0, 1), Direction::Down));
///
/// // Running off the grid never fits
/// assert!(!can_place(&grid, &across, Position::new(0, 2), Direction::Right));
/// ```
#[must_use]
pub fn can_place(grid: &Grid, word: &Word, origin: Position, direction: Direction) -> bool {
    for (i, letter) in word.letters().enumerate() {
        let Some(pos) = direction.step(origin, i) else {
            return false;
        };
        if !grid.contains(pos) {
            return false;
        }
        if let Some(existing) = grid.get(pos)
            && existing != letter
        {
            return false;
        }
    }
    true
}

/// Writes `word` into `grid` and returns its [`Placement`] record.
///
/// The caller must have verified the fit with [`can_place`] for the same
/// grid, word, origin, and direction; this function commits without
/// re-validating.
///
/// # Panics
///
/// Panics if the word runs outside the grid, which can only happen when the
/// [`can_place`] contract was violated.
pub fn place(grid: &mut Grid, word: &Word, origin: Position, direction: Direction) -> Placement {
    let mut cells = Vec::with_capacity(word.len());
    for (i, letter) in word.letters().enumerate() {
        let pos = direction
            .step(origin, i)
            .expect("placement was fit-checked with can_place");
        grid.set(pos, letter);
        cells.push(pos);
    }
    Placement {
        word: word.clone(),
        direction,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use wordlace_core::Letter;

    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn test_can_place_on_empty_grid() {
        let grid = Grid::new(5);
        let w = word("horse");
        assert!(can_place(&grid, &w, Position::new(0, 0), Direction::Right));
        assert!(can_place(&grid, &w, Position::new(0, 0), Direction::Down));
        assert!(can_place(&grid, &w, Position::new(0, 0), Direction::DownRight));
        assert!(can_place(&grid, &w, Position::new(4, 4), Direction::UpLeft));
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let grid = Grid::new(5);
        let w = word("horse");
        // Runs off the right edge
        assert!(!can_place(&grid, &w, Position::new(0, 1), Direction::Right));
        // Runs off the bottom edge
        assert!(!can_place(&grid, &w, Position::new(1, 0), Direction::Down));
        // Underflows past row 0
        assert!(!can_place(&grid, &w, Position::new(3, 0), Direction::Up));
        // Origin itself out of bounds
        assert!(!can_place(&grid, &w, Position::new(5, 0), Direction::Down));
    }

    #[test]
    fn test_can_place_rejects_conflicting_letters() {
        let mut grid = Grid::new(5);
        place(&mut grid, &word("stone"), Position::new(2, 0), Direction::Right);

        // "OX" would overwrite the T at (2, 1) with an X
        assert!(!can_place(
            &grid,
            &word("ox"),
            Position::new(1, 1),
            Direction::Down
        ));
    }

    #[test]
    fn test_can_place_allows_identical_letter_crossing() {
        let mut grid = Grid::new(5);
        place(&mut grid, &word("stone"), Position::new(2, 0), Direction::Right);

        // "NUT" crosses through the N of "STONE" at (2, 3)
        assert!(can_place(
            &grid,
            &word("nut"),
            Position::new(2, 3),
            Direction::Down
        ));
    }

    #[test]
    fn test_can_place_does_not_mutate() {
        let grid = Grid::new(4);
        let before = grid.clone();
        let _ = can_place(&grid, &word("slow"), Position::new(0, 0), Direction::Right);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_place_writes_letters_and_records_cells() {
        let mut grid = Grid::new(5);
        let w = word("dog");
        let placement = place(&mut grid, &w, Position::new(4, 4), Direction::UpLeft);

        assert_eq!(placement.word(), &w);
        assert_eq!(placement.direction(), Direction::UpLeft);
        assert_eq!(placement.start(), Position::new(4, 4));
        assert_eq!(
            placement.cells(),
            &[
                Position::new(4, 4),
                Position::new(3, 3),
                Position::new(2, 2)
            ]
        );

        let spelled: String = placement
            .cells()
            .iter()
            .map(|&pos| grid.get(pos).unwrap())
            .map(Letter::to_char)
            .collect();
        assert_eq!(spelled, "DOG");
    }

    #[test]
    fn test_place_records_one_cell_per_letter() {
        for direction in Direction::ALL {
            let mut grid = Grid::new(9);
            let w = word("quartz");
            let origin = Position::new(4, 4);
            if can_place(&grid, &w, origin, direction) {
                let placement = place(&mut grid, &w, origin, direction);
                assert_eq!(placement.cells().len(), w.len());
            }
        }
    }
}
