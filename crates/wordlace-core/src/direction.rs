//! The eight straight-line directions a word can run in.

use std::fmt::{self, Display};

use crate::Position;

/// A unit direction vector `(Δrow, Δcol)` with components in `{-1, 0, 1}`,
/// excluding `(0, 0)`.
///
/// Words are written one letter per step along a direction, so a word of
/// length `n` starting at an origin covers the cells
/// `origin + i * delta` for `i` in `0..n`.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Direction, Position};
///
/// let dir = Direction::DownRight;
/// assert_eq!(dir.delta(), (1, 1));
/// assert_eq!(dir.step(Position::new(2, 2), 3), Some(Position::new(5, 5)));
///
/// // Stepping off the top or left edge yields None
/// assert_eq!(Direction::Up.step(Position::new(1, 0), 2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Horizontal, left to right.
    Right,
    /// Horizontal, right to left.
    Left,
    /// Vertical, top to bottom.
    Down,
    /// Vertical, bottom to top.
    Up,
    /// Diagonal, toward the bottom-right.
    DownRight,
    /// Diagonal, toward the top-left.
    UpLeft,
    /// Diagonal, toward the bottom-left.
    DownLeft,
    /// Diagonal, toward the top-right.
    UpRight,
}

impl Direction {
    /// Array containing all eight directions.
    ///
    /// The order is stable and part of the generation contract: a seeded
    /// random source indexes into this array, so reordering it would change
    /// every reproduced puzzle.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
        Self::DownRight,
        Self::UpLeft,
        Self::DownLeft,
        Self::UpRight,
    ];

    /// Returns the `(Δrow, Δcol)` unit vector for this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::DownRight => (1, 1),
            Self::UpLeft => (-1, -1),
            Self::DownLeft => (1, -1),
            Self::UpRight => (-1, 1),
        }
    }

    /// Returns the position `i` steps from `origin` along this direction.
    ///
    /// Returns `None` if the step would move above row 0 or left of column 0.
    /// Upper bounds are not a property of the direction and must be checked
    /// against the grid by the caller.
    #[must_use]
    pub fn step(self, origin: Position, i: usize) -> Option<Position> {
        let (d_row, d_col) = self.delta();
        let offset = |coord: usize, delta: isize| -> Option<usize> {
            let moved = isize::try_from(coord).ok()? + delta * isize::try_from(i).ok()?;
            usize::try_from(moved).ok()
        };
        Some(Position::new(
            offset(origin.row(), d_row)?,
            offset(origin.col(), d_col)?,
        ))
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Down => "down",
            Self::Up => "up",
            Self::DownRight => "down-right",
            Self::UpLeft => "up-left",
            Self::DownLeft => "down-left",
            Self::UpRight => "up-right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directions_are_distinct_unit_vectors() {
        assert_eq!(Direction::ALL.len(), 8);
        for (i, dir) in Direction::ALL.iter().enumerate() {
            let (d_row, d_col) = dir.delta();
            assert!((-1..=1).contains(&d_row));
            assert!((-1..=1).contains(&d_col));
            assert_ne!((d_row, d_col), (0, 0));
            for other in &Direction::ALL[i + 1..] {
                assert_ne!(dir.delta(), other.delta());
            }
        }
    }

    #[test]
    fn test_step_walks_along_delta() {
        let origin = Position::new(5, 5);
        assert_eq!(
            Direction::Right.step(origin, 3),
            Some(Position::new(5, 8))
        );
        assert_eq!(Direction::Up.step(origin, 5), Some(Position::new(0, 5)));
        assert_eq!(
            Direction::UpLeft.step(origin, 2),
            Some(Position::new(3, 3))
        );
        // Step 0 is the origin itself, for every direction
        for dir in Direction::ALL {
            assert_eq!(dir.step(origin, 0), Some(origin));
        }
    }

    #[test]
    fn test_step_underflow_returns_none() {
        assert_eq!(Direction::Up.step(Position::new(2, 0), 3), None);
        assert_eq!(Direction::Left.step(Position::new(0, 2), 3), None);
        assert_eq!(Direction::UpLeft.step(Position::new(1, 5), 2), None);
    }
}
