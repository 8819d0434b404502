//! Straight segments between two cells.

use crate::{Direction, Position};

/// A segment of the grid running from `start` to `end`, both inclusive.
///
/// Placed word-search entries are recorded as lines, and a drag gesture is a
/// line from the cell where it began to the cell under the pointer.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Line, Position};
///
/// let line = Line::new(Position::new(0, 0), Position::new(3, 3));
/// assert!(line.contains(Position::new(2, 2)));
/// assert!(!line.contains(Position::new(2, 1)));
///
/// let cells: Vec<_> = line.cells().collect();
/// assert_eq!(cells.len(), 4);
/// assert_eq!(cells[1], Position::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// First cell of the segment.
    pub start: Position,
    /// Last cell of the segment.
    pub end: Position,
}

impl Line {
    /// Creates a line between two cells.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns the same segment walked the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the direction from `start` to `end`, if the segment is straight.
    ///
    /// A single-cell segment has no direction.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        Direction::between(self.start, self.end)
    }

    /// Returns `true` if the segment runs along a row, a column or a 45-degree
    /// diagonal, or covers a single cell.
    #[must_use]
    pub fn is_straight(self) -> bool {
        self.start == self.end || self.direction().is_some()
    }

    /// Returns the number of cells covered by a straight segment.
    ///
    /// Returns `None` for segments that are not straight.
    #[must_use]
    pub fn len(self) -> Option<usize> {
        self.is_straight().then(|| {
            let rows = self.start.row.abs_diff(self.end.row);
            let cols = self.start.col.abs_diff(self.end.col);
            rows.max(cols) + 1
        })
    }

    /// Checks whether a cell lies on this segment.
    ///
    /// The cell must fall inside the segment's bounding box. Horizontal and
    /// vertical segments then only need the constant coordinate to match; any
    /// other segment uses the cross-product collinearity test
    /// `(row - start.row) * col_diff == (col - start.col) * row_diff`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn contains(self, pos: Position) -> bool {
        let (start, end) = (self.start, self.end);
        let (min_row, max_row) = (start.row.min(end.row), start.row.max(end.row));
        let (min_col, max_col) = (start.col.min(end.col), start.col.max(end.col));
        if pos.row < min_row || pos.row > max_row || pos.col < min_col || pos.col > max_col {
            return false;
        }

        if start.row == end.row {
            return pos.row == start.row;
        }
        if start.col == end.col {
            return pos.col == start.col;
        }

        let row_diff = end.row as isize - start.row as isize;
        let col_diff = end.col as isize - start.col as isize;
        (pos.row as isize - start.row as isize) * col_diff
            == (pos.col as isize - start.col as isize) * row_diff
    }

    /// Iterates over the cells of the segment from `start` to `end`.
    ///
    /// Yields nothing if the segment is not straight.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let (d_row, d_col) = self.direction().map_or((0, 0), Direction::delta);
        let start = self.start;
        (0..self.len().unwrap_or(0)).filter_map(move |i| {
            let i = isize::try_from(i).ok()?;
            Some(Position::new(
                start.row.checked_add_signed(d_row * i)?,
                start.col.checked_add_signed(d_col * i)?,
            ))
        })
    }
}
