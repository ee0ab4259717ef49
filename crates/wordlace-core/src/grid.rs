//! The square letter grid.

use std::fmt::{self, Display};

use crate::{Letter, Position};

/// A square grid of letter cells.
///
/// Every cell is either empty or holds exactly one [`Letter`]. The side
/// length is fixed at construction and never changes for the grid's
/// lifetime; a new puzzle run builds a fresh grid rather than reusing one.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Grid, Letter, Position};
///
/// let mut grid = Grid::new(4);
/// assert!(grid.is_cell_empty(Position::new(1, 2)));
///
/// grid.set(Position::new(1, 2), Letter::from_char('X').unwrap());
/// assert_eq!(grid.get(Position::new(1, 2)).map(Letter::to_char), Some('X'));
///
/// // Fill the remaining cells from a letter source
/// let mut letters = Letter::all().cycle();
/// grid.fill_empty(|| letters.next().unwrap());
/// assert!(grid.is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Letter>>,
}

impl Grid {
    /// Creates a new grid of side `size` with all cells empty.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0. Callers that take the size from untrusted
    /// configuration should validate it first and report an error instead.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns whether the position lies within the grid bounds.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    const fn index(&self, pos: Position) -> usize {
        pos.row() * self.size + pos.col()
    }

    /// Returns the letter at the position, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        assert!(self.contains(pos), "position out of bounds: {pos}");
        self.cells[self.index(pos)]
    }

    /// Writes a letter into the cell at the position.
    ///
    /// Any previous letter in the cell is replaced.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, pos: Position, letter: Letter) {
        assert!(self.contains(pos), "position out of bounds: {pos}");
        let index = self.index(pos);
        self.cells[index] = Some(letter);
    }

    /// Returns whether the cell at the position is empty.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[must_use]
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns whether every cell holds a letter.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Writes one letter from `random_letter` into every empty cell.
    ///
    /// Cells that already hold a letter are untouched, so calling this on a
    /// full grid is a no-op and the source is not consulted. During puzzle
    /// generation this runs exactly once, after all placement attempts.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{Grid, Letter};
    ///
    /// let mut grid = Grid::new(3);
    /// grid.fill_empty(|| Letter::from_char('E').unwrap());
    /// assert!(grid.is_full());
    ///
    /// // Second fill is a no-op
    /// grid.fill_empty(|| unreachable!("grid is already full"));
    /// ```
    pub fn fill_empty<F>(&mut self, mut random_letter: F)
    where
        F: FnMut() -> Letter,
    {
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(random_letter());
            }
        }
    }

    /// Returns an iterator over the grid's rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Letter>]> {
        self.cells.chunks(self.size)
    }
}

impl Display for Grid {
    /// Formats the grid one row per line, `.` marking empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(letter) => write!(f, "{letter}")?,
                    None => f.write_str(".")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
