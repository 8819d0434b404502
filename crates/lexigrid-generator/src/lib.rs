//! Word-search and crossword puzzle generation.
//!
//! Both generators take a caller-supplied word list and a [`GridSize`] and place
//! words at random under the same rules: a word may only cover cells that are
//! still free or already hold the letter it needs, each word gets a bounded
//! number of random attempts, and words that cannot be placed are quietly left
//! out. Placement is best effort, so a returned puzzle may hold fewer words than
//! were requested.
//!
//! All randomness comes from an explicit random source. [`PuzzleSeed`] wraps a
//! 256-bit seed that reproduces a puzzle exactly.
//!
//! - [`WordSearchGenerator`]: eight directions, random filler letters
//! - [`CrosswordGenerator`]: across and down only, numbered clues
//!
//! [`GridSize`]: lexigrid_core::GridSize
//!
//! # Examples
//!
//! ```
//! use lexigrid_core::GridSize;
//! use lexigrid_generator::{WordSearchGenerator, check_word_in_grid};
//!
//! let generator = WordSearchGenerator::new(GridSize::new(10)?);
//! let generated = generator.generate(&["CAT", "DOG", "BIRD", "FISH", "LION"]);
//! println!("seed: {}", generated.seed);
//!
//! let puzzle = generated.puzzle;
//! for word in puzzle.words() {
//!     assert!(check_word_in_grid(puzzle.grid(), word.word.as_str(), word.start, word.end));
//! }
//! # Ok::<(), lexigrid_core::GridSizeError>(())
//! ```

pub use self::{crossword::*, seed::*, word_search::*};

mod crossword;
mod placement;
mod seed;
mod word_search;
