//! Play state for generated letter-grid puzzles.
//!
//! A generated puzzle never changes while it is played. The types here keep the
//! player's progress next to it instead:
//!
//! - [`WordSearchGame`]: which placed words have been found, and matching of
//!   dragged selections against the hidden words
//! - [`CrosswordGame`] / [`CrosswordEntries`]: the letters typed into each open
//!   cell, and checking them against the clues
//!
//! # Example
//!
//! ```
//! use lexigrid_core::GridSize;
//! use lexigrid_game::CrosswordGame;
//! use lexigrid_generator::{CrosswordGenerator, PuzzleSeed, WordDefinition};
//!
//! let words = [WordDefinition::new("CAT", "A feline"), WordDefinition::new("DOG", "A canine")];
//! let puzzle = CrosswordGenerator::new(GridSize::new(10)?)
//!     .generate_with_seed(&words, PuzzleSeed::from_phrase("pets"));
//! let mut game = CrosswordGame::new(puzzle);
//!
//! assert!(!game.is_solved());
//! game.reveal();
//! assert!(game.is_solved());
//! # Ok::<(), lexigrid_core::GridSizeError>(())
//! ```

pub use self::{crossword::*, error::*, word_search::*};

mod crossword;
mod error;
mod word_search;
