//! Step directions for placing words on a grid.

use std::cmp::Ordering;

use crate::Position;

/// One of the eight straight-line directions a word-search entry can run in.
///
/// Each direction is a unit step vector `(d_row, d_col)`. Reversed reading
/// orders are directions of their own, so a word placed along
/// [`Direction::HorizontalReverse`] reads right-to-left in the grid.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Direction, Position};
///
/// assert_eq!(Direction::DiagonalDownLeft.delta(), (1, -1));
/// assert_eq!(Direction::HorizontalReverse.to_string(), "horizontal-reverse");
///
/// let dir = Direction::between(Position::new(4, 0), Position::new(1, 3));
/// assert_eq!(dir, Some(Direction::DiagonalUpRight));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// Left to right.
    #[display("horizontal")]
    Horizontal,
    /// Top to bottom.
    #[display("vertical")]
    Vertical,
    /// Down and to the right.
    #[display("diagonal-down-right")]
    DiagonalDownRight,
    /// Down and to the left.
    #[display("diagonal-down-left")]
    DiagonalDownLeft,
    /// Right to left.
    #[display("horizontal-reverse")]
    HorizontalReverse,
    /// Bottom to top.
    #[display("vertical-reverse")]
    VerticalReverse,
    /// Up and to the left.
    #[display("diagonal-up-left")]
    DiagonalUpLeft,
    /// Up and to the right.
    #[display("diagonal-up-right")]
    DiagonalUpRight,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Self; 8] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDownRight,
        Self::DiagonalDownLeft,
        Self::HorizontalReverse,
        Self::VerticalReverse,
        Self::DiagonalUpLeft,
        Self::DiagonalUpRight,
    ];

    /// Returns the step vector `(d_row, d_col)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalDownRight => (1, 1),
            Self::DiagonalDownLeft => (1, -1),
            Self::HorizontalReverse => (0, -1),
            Self::VerticalReverse => (-1, 0),
            Self::DiagonalUpLeft => (-1, -1),
            Self::DiagonalUpRight => (-1, 1),
        }
    }

    /// Looks up the direction with the given step vector.
    #[must_use]
    pub fn from_delta(delta: (isize, isize)) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.delta() == delta)
    }

    /// Returns the direction pointing the opposite way.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Horizontal => Self::HorizontalReverse,
            Self::Vertical => Self::VerticalReverse,
            Self::DiagonalDownRight => Self::DiagonalUpLeft,
            Self::DiagonalDownLeft => Self::DiagonalUpRight,
            Self::HorizontalReverse => Self::Horizontal,
            Self::VerticalReverse => Self::Vertical,
            Self::DiagonalUpLeft => Self::DiagonalDownRight,
            Self::DiagonalUpRight => Self::DiagonalDownLeft,
        }
    }

    /// Returns the direction of the straight segment from `start` to `end`.
    ///
    /// Returns `None` if the two cells are equal or do not share a row, a column
    /// or a 45-degree diagonal.
    #[must_use]
    pub fn between(start: Position, end: Position) -> Option<Self> {
        let rows = start.row.abs_diff(end.row);
        let cols = start.col.abs_diff(end.col);
        if (rows, cols) == (0, 0) || (rows != 0 && cols != 0 && rows != cols) {
            return None;
        }
        Self::from_delta((signum(end.row.cmp(&start.row)), signum(end.col.cmp(&start.col))))
    }
}

fn signum(ordering: Ordering) -> isize {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// The reading direction of a crossword entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Orientation {
    /// Left to right along a row.
    #[display("across")]
    Across,
    /// Top to bottom along a column.
    #[display("down")]
    Down,
}

impl Orientation {
    /// Both orientations, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the equivalent word-search direction.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Across => Direction::Horizontal,
            Self::Down => Direction::Vertical,
        }
    }
}

impl From<Orientation> for Direction {
    fn from(orientation: Orientation) -> Self {
        orientation.direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_negates_delta() {
        for dir in Direction::ALL {
            let (r, c) = dir.delta();
            assert_eq!(dir.reverse().delta(), (-r, -c));
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }

    #[test]
    fn test_deltas_are_distinct_unit_steps() {
        for (i, a) in Direction::ALL.into_iter().enumerate() {
            let (r, c) = a.delta();
            assert!(r.abs() <= 1 && c.abs() <= 1 && (r, c) != (0, 0));
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }

    #[test]
    fn test_between() {
        let origin = Position::new(3, 3);
        let between = |row, col| Direction::between(origin, Position::new(row, col));
        assert_eq!(between(3, 7), Some(Direction::Horizontal));
        assert_eq!(between(0, 3), Some(Direction::VerticalReverse));
        assert_eq!(between(5, 1), Some(Direction::DiagonalDownLeft));
        assert_eq!(between(0, 0), Some(Direction::DiagonalUpLeft));
        assert_eq!(between(3, 3), None);
        assert_eq!(between(4, 5), None);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Direction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            [
                "horizontal",
                "vertical",
                "diagonal-down-right",
                "diagonal-down-left",
                "horizontal-reverse",
                "vertical-reverse",
                "diagonal-up-left",
                "diagonal-up-right",
            ]
        );
        assert_eq!(Orientation::Across.to_string(), "across");
        assert_eq!(Orientation::Down.direction(), Direction::Vertical);
    }
}
