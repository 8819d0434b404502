use std::time::Duration;

use lexigrid_core::{Grid, GridSize, Position};
use lexigrid_generator::{Clue, CrosswordCell, CrosswordPuzzle};

use crate::GameError;

/// Score awarded for solving instantly.
const MAX_SCORE: u64 = 1500;
/// Score never drops below this, however long the player takes.
const MIN_SCORE: u64 = 200;

/// The letters a player has typed into a crossword, keyed by cell.
///
/// Entries are stored upper-cased. They are kept apart from the puzzle so the
/// puzzle stays untouched while it is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordEntries {
    grid: Grid<Option<char>>,
}

impl CrosswordEntries {
    /// Creates an empty entry map for a grid of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            grid: Grid::new(size, None),
        }
    }

    /// Returns the size of the grid the entries belong to.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Returns the letter entered at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        self.grid.get(pos).copied().flatten()
    }

    /// Stores a letter at `pos`, replacing any earlier entry.
    ///
    /// Returns the previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the grid, or
    /// [`GameError::InvalidLetter`] if `letter` is not an ASCII letter.
    pub fn set(&mut self, pos: Position, letter: char) -> Result<Option<char>, GameError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter { ch: letter });
        }
        let slot = self.grid.get_mut(pos).ok_or(GameError::OutOfBounds { pos })?;
        Ok(slot.replace(letter.to_ascii_uppercase()))
    }

    /// Removes the entry at `pos` and returns it.
    pub fn clear(&mut self, pos: Position) -> Option<char> {
        self.grid.get_mut(pos).and_then(Option::take)
    }

    /// Returns the number of cells holding an entry.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.grid.iter().flatten().count()
    }
}

/// Returns `true` if every cell of `clue` holds the matching answer letter.
///
/// Letters compare case-insensitively.
#[must_use]
pub fn is_clue_complete(entries: &CrosswordEntries, clue: &Clue) -> bool {
    clue.cells()
        .zip(clue.answer.letters())
        .all(|(pos, letter)| {
            entries
                .get(pos)
                .is_some_and(|entry| entry.eq_ignore_ascii_case(&letter))
        })
}

/// Checks whether the entries solve the whole puzzle.
///
/// The puzzle is solved when every clue is complete at the same time. This
/// only reads its arguments, so it is safe to call after every keystroke.
///
/// # Examples
///
/// ```
/// use lexigrid_core::GridSize;
/// use lexigrid_game::{CrosswordEntries, validate_solution};
/// use lexigrid_generator::{CrosswordGenerator, PuzzleSeed, WordDefinition};
///
/// let words = [WordDefinition::new("ANT", "An insect")];
/// let puzzle = CrosswordGenerator::new(GridSize::new(5)?)
///     .generate_with_seed(&words, PuzzleSeed::from_phrase("ant"));
/// let mut entries = CrosswordEntries::new(puzzle.size());
/// assert!(!validate_solution(&puzzle, &entries));
///
/// for (pos, letter) in puzzle.clues()[0].cells().zip("ant".chars()) {
///     entries.set(pos, letter)?;
/// }
/// assert!(validate_solution(&puzzle, &entries));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn validate_solution(puzzle: &CrosswordPuzzle, entries: &CrosswordEntries) -> bool {
    puzzle
        .clues()
        .iter()
        .all(|clue| is_clue_complete(entries, clue))
}

/// A crossword puzzle being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordGame {
    puzzle: CrosswordPuzzle,
    entries: CrosswordEntries,
}

impl CrosswordGame {
    /// Starts a game with no letters entered.
    #[must_use]
    pub fn new(puzzle: CrosswordPuzzle) -> Self {
        let entries = CrosswordEntries::new(puzzle.size());
        Self { puzzle, entries }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &CrosswordPuzzle {
        &self.puzzle
    }

    /// Returns the player's entries.
    #[must_use]
    pub fn entries(&self) -> &CrosswordEntries {
        &self.entries
    }

    /// Returns the letter entered at `pos`, if any.
    #[must_use]
    pub fn entry(&self, pos: Position) -> Option<char> {
        self.entries.get(pos)
    }

    fn open_cell(&self, pos: Position) -> Result<(), GameError> {
        match self.puzzle.grid().get(pos) {
            None => Err(GameError::OutOfBounds { pos }),
            Some(CrosswordCell::Blocked) => Err(GameError::BlockedCell { pos }),
            Some(CrosswordCell::Open { .. }) => Ok(()),
        }
    }

    /// Enters a letter into an open cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] or [`GameError::BlockedCell`] if `pos`
    /// cannot hold a letter, or [`GameError::InvalidLetter`] if `letter` is not
    /// an ASCII letter.
    pub fn set_letter(&mut self, pos: Position, letter: char) -> Result<(), GameError> {
        self.open_cell(pos)?;
        self.entries.set(pos, letter)?;
        Ok(())
    }

    /// Clears the entry of an open cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] or [`GameError::BlockedCell`] if `pos`
    /// cannot hold a letter.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.open_cell(pos)?;
        self.entries.clear(pos);
        Ok(())
    }

    /// Returns `true` if the clue's cells spell its answer.
    #[must_use]
    pub fn is_clue_complete(&self, clue: &Clue) -> bool {
        is_clue_complete(&self.entries, clue)
    }

    /// Iterates over the clues whose answers are fully entered.
    pub fn completed_clues(&self) -> impl Iterator<Item = &Clue> {
        self.puzzle
            .clues()
            .iter()
            .filter(|clue| is_clue_complete(&self.entries, clue))
    }

    /// Returns `true` once every clue is complete.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        validate_solution(&self.puzzle, &self.entries)
    }

    /// Returns the score for solving the puzzle after `elapsed`.
    ///
    /// Starts at 1500 and loses a point per whole second, never dropping below
    /// 200. Returns `None` until the puzzle is solved.
    #[must_use]
    pub fn completion_score(&self, elapsed: Duration) -> Option<u32> {
        self.is_solved().then(|| {
            let score = MAX_SCORE.saturating_sub(elapsed.as_secs()).max(MIN_SCORE);
            u32::try_from(score).unwrap_or(u32::MAX)
        })
    }

    /// Fills every open cell with its solution letter.
    pub fn reveal(&mut self) {
        for (pos, cell) in self.puzzle.grid().enumerate() {
            if let Some(letter) = cell.letter() {
                self.entries.grid[pos] = Some(letter);
            }
        }
    }
}
