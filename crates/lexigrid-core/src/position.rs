//! Cell coordinates.

use std::fmt::{self, Display};

use crate::{Direction, GridSize};

/// A cell coordinate on a square grid.
///
/// Rows grow downwards and columns grow to the right; `(0, 0)` is the top-left
/// cell. The derived ordering is row-major, which is the order used to read a
/// selected set of cells.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Direction, GridSize, Position};
///
/// let size = GridSize::new(5)?;
/// let pos = Position::new(2, 3);
///
/// assert_eq!(pos.step(Direction::DiagonalDownRight, 1, size), Some(Position::new(3, 4)));
/// assert_eq!(pos.step(Direction::DiagonalDownRight, 2, size), None);
/// assert!(Position::new(0, 4) < Position::new(1, 0));
/// # Ok::<(), lexigrid_core::GridSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the position lies inside a grid of the given size.
    #[must_use]
    pub const fn is_within(self, size: GridSize) -> bool {
        self.row < size.get() && self.col < size.get()
    }

    /// Returns the cell `n` steps away along `direction`.
    ///
    /// Returns `None` if the result falls outside the grid.
    #[must_use]
    pub fn step(self, direction: Direction, n: usize, size: GridSize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let n = isize::try_from(n).ok()?;
        let row = self.row.checked_add_signed(d_row.checked_mul(n)?)?;
        let col = self.col.checked_add_signed(d_col.checked_mul(n)?)?;
        let pos = Self::new(row, col);
        pos.is_within(size).then_some(pos)
    }

    /// Returns the row-major index of this position in a grid of the given size.
    #[must_use]
    pub const fn index(self, size: GridSize) -> usize {
        self.row * size.get() + self.col
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_grid() {
        let size = GridSize::new(10).unwrap();
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::Horizontal, 3, size), Some(Position::new(5, 8)));
        assert_eq!(pos.step(Direction::VerticalReverse, 5, size), Some(Position::new(0, 5)));
        assert_eq!(pos.step(Direction::DiagonalUpLeft, 0, size), Some(pos));
    }

    #[test]
    fn test_step_leaves_grid() {
        let size = GridSize::new(3).unwrap();
        assert_eq!(Position::new(0, 0).step(Direction::HorizontalReverse, 1, size), None);
        assert_eq!(Position::new(2, 2).step(Direction::Vertical, 1, size), None);
        assert_eq!(Position::new(0, 2).step(Direction::DiagonalUpRight, 1, size), None);
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut cells = vec![
            Position::new(2, 0),
            Position::new(0, 2),
            Position::new(1, 1),
            Position::new(0, 0),
        ];
        cells.sort();
        assert_eq!(
            cells,
            [
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 1),
                Position::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_index() {
        let size = GridSize::new(4).unwrap();
        assert_eq!(Position::new(0, 0).index(size), 0);
        assert_eq!(Position::new(2, 3).index(size), 11);
    }
}
