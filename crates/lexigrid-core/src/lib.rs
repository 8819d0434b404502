//! Core data structures for letter-grid puzzles.
//!
//! This crate provides the value types shared by the word-search and crossword
//! generators and by the play-state types built on top of them.
//!
//! # Overview
//!
//! 1. **Geometry**
//!    - [`size`]: Validated square grid dimension ([`GridSize`])
//!    - [`position`]: Cell coordinates ([`Position`])
//!    - [`direction`]: The eight word-search step vectors ([`Direction`]) and the
//!      two crossword orientations ([`Orientation`])
//!    - [`line`]: Straight segments between two cells ([`Line`])
//!
//! 2. **Containers**
//!    - [`grid`]: A fixed-size square container indexed by [`Position`] ([`Grid`])
//!
//! 3. **Words**
//!    - [`word`]: Normalized placement keys ([`CleanWord`])
//!
//! # Examples
//!
//! ```
//! use lexigrid_core::{CleanWord, Direction, Grid, GridSize, Position};
//!
//! let size = GridSize::new(5)?;
//! let mut grid = Grid::new(size, '.');
//!
//! let word = CleanWord::new("cat!");
//! assert_eq!(word.as_str(), "CAT");
//!
//! let start = Position::new(1, 0);
//! for (i, letter) in word.letters().enumerate() {
//!     let pos = start.step(Direction::Horizontal, i, size).unwrap();
//!     grid[pos] = letter;
//! }
//! assert_eq!(grid[Position::new(1, 2)], 'T');
//! # Ok::<(), lexigrid_core::GridSizeError>(())
//! ```

pub mod direction;
pub mod grid;
pub mod line;
pub mod position;
pub mod size;
pub mod word;

pub use self::{
    direction::{Direction, Orientation},
    grid::Grid,
    line::Line,
    position::Position,
    size::{GridSize, GridSizeError},
    word::CleanWord,
};
