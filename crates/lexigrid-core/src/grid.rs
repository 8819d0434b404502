//! A fixed-size square container.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use crate::{GridSize, Position};

/// A `size x size` grid of values stored in row-major order.
///
/// The size is fixed at construction; a grid is never resized.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Grid, GridSize, Position};
///
/// let size = GridSize::new(3)?;
/// let grid = Grid::from_fn(size, |pos| pos.row * 3 + pos.col);
///
/// assert_eq!(grid[Position::new(1, 2)], 5);
/// assert_eq!(grid.get(Position::new(3, 0)), None);
/// assert_eq!(grid.rows().nth(2), Some(&[6, 7, 8][..]));
/// # Ok::<(), lexigrid_core::GridSizeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: GridSize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn new(size: GridSize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            cells: vec![value; size.cell_count()],
        }
    }

    /// Creates a grid by calling `f` for every position in row-major order.
    #[must_use]
    pub fn from_fn<F>(size: GridSize, mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        let cells = positions(size).map(&mut f).collect();
        Self { size, cells }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the value at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        pos.is_within(self.size)
            .then(|| &self.cells[pos.index(self.size)])
    }

    /// Returns a mutable reference to the value at `pos`, or `None` if `pos` is
    /// outside the grid.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if pos.is_within(self.size) {
            Some(&mut self.cells[pos.index(self.size)])
        } else {
            None
        }
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        positions(self.size)
    }

    /// Iterates over the values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Iterates over `(position, value)` pairs in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (Position, &T)> {
        positions(self.size).zip(&self.cells)
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.get())
    }

    /// Builds a grid of the same size by transforming every value.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Grid<U>
    where
        F: FnMut(T) -> U,
    {
        Grid {
            size: self.size,
            cells: self.cells.into_iter().map(f).collect(),
        }
    }
}

fn positions(size: GridSize) -> impl Iterator<Item = Position> {
    let n = size.get();
    (0..n).flat_map(move |row| (0..n).map(move |col| Position::new(row, col)))
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(pos.is_within(self.size), "position {pos} outside {} grid", self.size);
        &self.cells[pos.index(self.size)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        assert!(pos.is_within(self.size), "position {pos} outside {} grid", self.size);
        &mut self.cells[pos.index(self.size)]
    }
}

/// Formats one row per line with values separated by single spaces.
impl<T> Display for Grid<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
