//! Grid cell coordinates.

use std::fmt::{self, Display};

/// A `(row, col)` cell coordinate in a letter grid.
///
/// Rows grow downward and columns grow rightward, with `(0, 0)` in the top
/// left corner. Positions carry no grid size; bounds are checked by the grid
/// (or direction stepping) that consumes them.
///
/// # Examples
///
/// ```
/// use wordlace_core::Position;
///
/// let pos = Position::new(3, 7);
/// assert_eq!(pos.row(), 3);
/// assert_eq!(pos.col(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
