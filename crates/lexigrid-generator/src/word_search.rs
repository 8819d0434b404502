//! Word-search generation.

use lexigrid_core::{CleanWord, Direction, Grid, GridSize, Line, Position};
use rand::Rng;

use crate::{
    Generated, PuzzleSeed,
    placement::{Placement, try_place},
};

/// Default number of random placements tried per word.
pub const WORD_SEARCH_MAX_ATTEMPTS: usize = 100;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A word hidden in a word-search grid.
///
/// Walking from `start` to `end` one `direction` step at a time spells `word`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedWord {
    /// The cleaned word.
    pub word: CleanWord,
    /// Cell holding the first letter.
    pub start: Position,
    /// Cell holding the last letter.
    pub end: Position,
    /// Direction from `start` to `end`.
    pub direction: Direction,
}

impl PlacedWord {
    /// Returns the segment covered by the word.
    #[must_use]
    pub const fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }

    /// Iterates over the covered cells from `start` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = Position> + use<> {
        self.line().cells()
    }
}

/// A generated word-search puzzle.
///
/// Every cell holds a letter in `A-Z`: either part of a placed word or random
/// filler. The puzzle is immutable; which words the player has found is tracked
/// separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearchPuzzle {
    grid: Grid<char>,
    words: Vec<PlacedWord>,
}

impl WordSearchPuzzle {
    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    /// Returns the placed words in placement order.
    ///
    /// Words that could not be placed are absent, so this list may be shorter
    /// than the list passed to the generator.
    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Checks whether `word` can be read between `start` and `end`.
    ///
    /// See [`check_word_in_grid`].
    #[must_use]
    pub fn check_word(&self, word: &str, start: Position, end: Position) -> bool {
        check_word_in_grid(&self.grid, word, start, end)
    }
}

/// Checks whether the straight segment from `start` to `end` spells `word`,
/// reading either forwards or backwards. Letters compare case-insensitively.
///
/// Returns `false` if the segment is not straight, leaves the grid, or does not
/// have exactly one cell per letter.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Grid, GridSize, Position};
/// use lexigrid_generator::check_word_in_grid;
///
/// let size = GridSize::new(3)?;
/// let rows = ["CAT", "XOX", "XXG"];
/// let grid = Grid::from_fn(size, |pos| rows[pos.row].as_bytes()[pos.col] as char);
///
/// assert!(check_word_in_grid(&grid, "CAT", Position::new(0, 0), Position::new(0, 2)));
/// assert!(check_word_in_grid(&grid, "tac", Position::new(0, 0), Position::new(0, 2)));
/// assert!(check_word_in_grid(&grid, "COG", Position::new(0, 0), Position::new(2, 2)));
/// assert!(!check_word_in_grid(&grid, "CA", Position::new(0, 0), Position::new(0, 2)));
/// # Ok::<(), lexigrid_core::GridSizeError>(())
/// ```
#[must_use]
pub fn check_word_in_grid(grid: &Grid<char>, word: &str, start: Position, end: Position) -> bool {
    let line = Line::new(start, end);
    if line.len() != Some(word.chars().count()) {
        return false;
    }
    let Some(read) = line
        .cells()
        .map(|pos| grid.get(pos).copied())
        .collect::<Option<Vec<char>>>()
    else {
        return false;
    };
    let same = |a: &char, b: char| a.eq_ignore_ascii_case(&b);
    read.iter().zip(word.chars()).all(|(a, b)| same(a, b))
        || read.iter().rev().zip(word.chars()).all(|(a, b)| same(a, b))
}

/// Generates word-search puzzles.
///
/// Each word is cleaned, then up to [`max_attempts`](Self::with_max_attempts)
/// random placements are tried along any of the eight [`Direction`]s. A
/// placement is legal when every covered cell is still empty or already holds
/// the letter the word needs there, so words may cross on shared letters.
/// Words that are too long for the grid or never find a legal placement are
/// silently left out. Remaining cells are filled with random letters.
///
/// Words are placed in the order given; sorting longer words first improves
/// the chance that every word fits.
///
/// # Examples
///
/// ```
/// use lexigrid_core::GridSize;
/// use lexigrid_generator::{PuzzleSeed, WordSearchGenerator};
///
/// let generator = WordSearchGenerator::new(GridSize::new(10)?);
/// let seed = PuzzleSeed::from_phrase("pets");
/// let puzzle = generator.generate_with_seed(&["cat", "dog", "bird"], seed);
///
/// for word in puzzle.words() {
///     assert!(puzzle.check_word(word.word.as_str(), word.start, word.end));
/// }
/// # Ok::<(), lexigrid_core::GridSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSearchGenerator {
    size: GridSize,
    max_attempts: usize,
}

impl WordSearchGenerator {
    /// Creates a generator for grids of the given size.
    #[must_use]
    pub const fn new(size: GridSize) -> Self {
        Self {
            size,
            max_attempts: WORD_SEARCH_MAX_ATTEMPTS,
        }
    }

    /// Sets how many random placements are tried per word.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the grid size this generator produces.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate<S>(&self, words: &[S]) -> Generated<WordSearchPuzzle>
    where
        S: AsRef<str>,
    {
        let seed = PuzzleSeed::random();
        Generated {
            seed,
            puzzle: self.generate_with_seed(words, seed),
        }
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed<S>(&self, words: &[S], seed: PuzzleSeed) -> WordSearchPuzzle
    where
        S: AsRef<str>,
    {
        self.generate_with_rng(words, &mut seed.rng())
    }

    /// Generates a puzzle drawing all randomness from `rng`.
    pub fn generate_with_rng<S, R>(&self, words: &[S], rng: &mut R) -> WordSearchPuzzle
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let size = self.size;
        let mut board = Grid::new(size, None);
        let mut placed = Vec::with_capacity(words.len());

        for raw in words {
            let word = CleanWord::new(raw.as_ref());
            if !size.fits(word.len()) {
                log::debug!(
                    "skipping {:?}: {} letters cannot fit a {size} grid",
                    raw.as_ref(),
                    word.len()
                );
                continue;
            }

            let placement = try_place(
                rng,
                &Direction::ALL,
                word.len(),
                size,
                self.max_attempts,
                |p| is_legal(&board, &word, p),
            );
            let Some(placement) = placement else {
                log::debug!(
                    "dropping {word}: no legal placement in {} attempts",
                    self.max_attempts
                );
                continue;
            };

            let cells: Vec<_> = placement.cells(size).flatten().collect();
            for (&pos, letter) in cells.iter().zip(word.letters()) {
                board[pos] = Some(letter);
            }
            let end = cells.last().copied().unwrap_or(placement.start);
            log::debug!(
                "placed {word} from {} to {end} ({})",
                placement.start,
                placement.direction
            );
            placed.push(PlacedWord {
                word,
                start: placement.start,
                end,
                direction: placement.direction,
            });
        }

        let grid = board.map(|cell| match cell {
            Some(letter) => letter,
            None => random_letter(rng),
        });
        log::info!(
            "word search {size}: placed {} of {} words",
            placed.len(),
            words.len()
        );
        WordSearchPuzzle {
            grid,
            words: placed,
        }
    }
}

fn is_legal(board: &Grid<Option<char>>, word: &CleanWord, placement: Placement<Direction>) -> bool {
    placement
        .cells(board.size())
        .zip(word.letters())
        .all(|(cell, letter)| {
            cell.is_some_and(|pos| board[pos].is_none_or(|existing| existing == letter))
        })
}

fn random_letter<R>(rng: &mut R) -> char
where
    R: Rng + ?Sized,
{
    char::from(ALPHABET[rng.random_range(0..ALPHABET.len())])
}
