//! Square grid dimensions.

use std::{
    fmt::{self, Display},
    num::NonZeroUsize,
};

/// Error returned when a grid dimension is not usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridSizeError {
    /// The requested size was zero.
    #[display("grid size must be at least 1")]
    Zero,
}

/// The side length of a square puzzle grid.
///
/// A `GridSize` is never zero. It is fixed when a puzzle is generated and never
/// changes afterwards.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{GridSize, GridSizeError};
///
/// let size = GridSize::new(10)?;
/// assert_eq!(size.get(), 10);
/// assert_eq!(size.cell_count(), 100);
///
/// assert_eq!(GridSize::new(0), Err(GridSizeError::Zero));
/// # Ok::<(), GridSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(NonZeroUsize);

impl GridSize {
    /// Creates a grid size.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError::Zero`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, GridSizeError> {
        NonZeroUsize::new(size).map(Self).ok_or(GridSizeError::Zero)
    }

    /// Returns the side length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the number of cells in the grid (`size * size`).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0.get() * self.0.get()
    }

    /// Returns `true` if a word of `len` letters can fit on one line of the grid.
    ///
    /// Zero-length words never fit.
    #[must_use]
    pub const fn fits(self, len: usize) -> bool {
        len > 0 && len <= self.0.get()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = GridSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.get()
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.get())
    }
}
