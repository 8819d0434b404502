//! Command-line front end for lexigrid.
//!
//! Reads a word list (or uses a built-in sample), generates a word search or
//! crossword and prints it as text or JSON.
//!
//! ```text
//! lexigrid word-search --input words.txt --size 12 --max-tries 8
//! lexigrid crossword --seed-phrase "monday" --solution
//! lexigrid crossword --input - --format json < pairs.txt
//! ```

pub use self::{app::*, cli::*, logging::*};

mod app;
mod cli;
pub mod dto;
mod logging;
pub mod render;
pub mod samples;
pub mod settings;
pub mod wordlist;
