//! Crossword generation.

use std::cmp::Reverse;

use lexigrid_core::{CleanWord, Grid, GridSize, Orientation, Position};
use rand::Rng;

use crate::{
    Generated, PuzzleSeed,
    placement::{Placement, try_place},
};

/// Default number of random placements tried per word.
pub const CROSSWORD_MAX_ATTEMPTS: usize = 50;

/// A word paired with the clue text shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordDefinition {
    /// The raw answer word. It is cleaned before placement.
    pub word: String,
    /// The clue text, displayed verbatim.
    pub definition: String,
}

impl WordDefinition {
    /// Creates a word/definition pair.
    #[must_use]
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

/// A single cell of a crossword grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrosswordCell {
    /// A cell no word passes through. It holds no letter and cannot be entered.
    Blocked,
    /// A cell that is part of at least one answer.
    Open {
        /// The solution letter.
        letter: char,
        /// The clue number shown in the cell, if an answer starts here.
        number: Option<u32>,
    },
}

impl CrosswordCell {
    /// Returns `true` for blocked cells.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Returns the solution letter of an open cell.
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        match self {
            Self::Blocked => None,
            Self::Open { letter, .. } => Some(*letter),
        }
    }

    /// Returns the clue number shown in the cell, if any.
    #[must_use]
    pub const fn number(&self) -> Option<u32> {
        match self {
            Self::Blocked => None,
            Self::Open { number, .. } => *number,
        }
    }
}

/// A placed crossword answer and its clue.
///
/// The cells from `start`, stepping along `orientation`, spell `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    /// Sequential clue number, starting at 1 in placement order.
    pub number: u32,
    /// Clue text, taken verbatim from the definition.
    pub clue: String,
    /// The cleaned answer.
    pub answer: CleanWord,
    /// Reading direction of the answer.
    pub orientation: Orientation,
    /// Cell holding the first letter.
    pub start: Position,
}

impl Clue {
    /// Returns the number of cells (and letters) in the answer.
    #[must_use]
    pub fn length(&self) -> usize {
        self.answer.len()
    }

    /// Iterates over the answer's cells in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + use<> {
        let (start, orientation) = (self.start, self.orientation);
        (0..self.answer.len()).map(move |i| match orientation {
            Orientation::Across => Position::new(start.row, start.col + i),
            Orientation::Down => Position::new(start.row + i, start.col),
        })
    }

    /// Returns `true` if `pos` is one of the answer's cells.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        self.cells().any(|cell| cell == pos)
    }
}

/// A generated crossword puzzle.
///
/// The puzzle holds the solution and the clues. It is immutable; the player's
/// entries are tracked separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordPuzzle {
    grid: Grid<CrosswordCell>,
    clues: Vec<Clue>,
}

impl CrosswordPuzzle {
    /// Returns the cell grid.
    #[must_use]
    pub fn grid(&self) -> &Grid<CrosswordCell> {
        &self.grid
    }

    /// Returns every clue in placement order.
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Iterates over the clues with the given orientation, in placement order.
    pub fn clues_in(&self, orientation: Orientation) -> impl Iterator<Item = &Clue> {
        self.clues
            .iter()
            .filter(move |clue| clue.orientation == orientation)
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Returns the solution letter at `pos`, or `None` for blocked or
    /// out-of-grid cells.
    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.grid.get(pos).and_then(CrosswordCell::letter)
    }
}

/// Generates crossword puzzles.
///
/// Words are cleaned and placed longest first. Each word gets up to
/// [`max_attempts`](Self::with_max_attempts) random placements, across or down.
/// A placement is legal when every covered cell is still blocked or already
/// holds the same letter, so answers may cross on shared letters. Every placed
/// word receives the next clue number; its first cell shows that number unless
/// an earlier answer already numbered it. Words that are too long for the grid
/// or never find a legal placement are silently left out.
///
/// # Examples
///
/// ```
/// use lexigrid_core::GridSize;
/// use lexigrid_generator::{CrosswordGenerator, PuzzleSeed, WordDefinition};
///
/// let words = [
///     WordDefinition::new("CAT", "A feline"),
///     WordDefinition::new("DOG", "A canine"),
/// ];
/// let generator = CrosswordGenerator::new(GridSize::new(10)?);
/// let puzzle = generator.generate_with_seed(&words, PuzzleSeed::from_phrase("pets"));
///
/// for clue in puzzle.clues() {
///     let answer: String = clue.cells().filter_map(|pos| puzzle.letter(pos)).collect();
///     assert_eq!(answer, clue.answer.as_str());
/// }
/// # Ok::<(), lexigrid_core::GridSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosswordGenerator {
    size: GridSize,
    max_attempts: usize,
}

impl CrosswordGenerator {
    /// Creates a generator for grids of the given size.
    #[must_use]
    pub const fn new(size: GridSize) -> Self {
        Self {
            size,
            max_attempts: CROSSWORD_MAX_ATTEMPTS,
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
    pub fn generate(&self, words: &[WordDefinition]) -> Generated<CrosswordPuzzle> {
        let seed = PuzzleSeed::random();
        Generated {
            seed,
            puzzle: self.generate_with_seed(words, seed),
        }
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        words: &[WordDefinition],
        seed: PuzzleSeed,
    ) -> CrosswordPuzzle {
        self.generate_with_rng(words, &mut seed.rng())
    }

    /// Generates a puzzle drawing all randomness from `rng`.
    pub fn generate_with_rng<R>(&self, words: &[WordDefinition], rng: &mut R) -> CrosswordPuzzle
    where
        R: Rng + ?Sized,
    {
        let size = self.size;
        let mut entries: Vec<_> = words
            .iter()
            .map(|def| (CleanWord::new(&def.word), def.definition.as_str()))
            .collect();
        entries.sort_by_key(|(answer, _)| Reverse(answer.len()));

        let mut grid = Grid::new(size, CrosswordCell::Blocked);
        let mut clues = Vec::with_capacity(entries.len());
        let mut next_number = 1;

        for (answer, definition) in entries {
            if !size.fits(answer.len()) {
                log::debug!(
                    "skipping {answer}: {} letters cannot fit a {size} grid",
                    answer.len()
                );
                continue;
            }

            let placement = try_place(
                rng,
                &Orientation::ALL,
                answer.len(),
                size,
                self.max_attempts,
                |p| is_legal(&grid, &answer, p),
            );
            let Some(placement) = placement else {
                log::debug!(
                    "dropping {answer}: no legal placement in {} attempts",
                    self.max_attempts
                );
                continue;
            };

            let number = next_number;
            next_number += 1;
            let cells = placement.cells(size).flatten().zip(answer.letters());
            for (i, (pos, letter)) in cells.enumerate() {
                let shown = grid[pos].number();
                grid[pos] = CrosswordCell::Open {
                    letter,
                    number: if i == 0 { shown.or(Some(number)) } else { shown },
                };
            }
            log::debug!(
                "clue {number}: {answer} {} at {}",
                placement.direction,
                placement.start
            );
            clues.push(Clue {
                number,
                clue: definition.to_owned(),
                answer,
                orientation: placement.direction,
                start: placement.start,
            });
        }

        log::info!(
            "crossword {size}: placed {} of {} words",
            clues.len(),
            words.len()
        );
        CrosswordPuzzle { grid, clues }
    }
}

fn is_legal(
    grid: &Grid<CrosswordCell>,
    answer: &CleanWord,
    placement: Placement<Orientation>,
) -> bool {
    placement
        .cells(grid.size())
        .zip(answer.letters())
        .all(|(cell, letter)| {
            cell.is_some_and(|pos| match grid[pos] {
                CrosswordCell::Blocked => true,
                CrosswordCell::Open { letter: existing, .. } => existing == letter,
            })
        })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn generator(size: usize) -> CrosswordGenerator {
        CrosswordGenerator::new(GridSize::new(size).unwrap())
    }

    fn read(puzzle: &CrosswordPuzzle, clue: &Clue) -> Option<String> {
        clue.cells().map(|pos| puzzle.letter(pos)).collect()
    }

    fn pets() -> Vec<WordDefinition> {
        vec![
            WordDefinition::new("CAT", "A feline"),
            WordDefinition::new("DOG", "A canine"),
            WordDefinition::new("ANT", "An insect"),
        ]
    }

    #[test]
    fn test_places_pets() {
        for phrase in ["one", "two", "three"] {
            let seed = PuzzleSeed::from_phrase(phrase);
            let puzzle = generator(10).generate_with_seed(&pets(), seed);
            assert_eq!(puzzle.size().get(), 10);
            assert_eq!(puzzle.clues().len(), 3);
            for (i, clue) in (1..).zip(puzzle.clues()) {
                assert_eq!(clue.number, i);
                assert_eq!(clue.length(), 3);
                assert_eq!(read(&puzzle, clue).as_deref(), Some(clue.answer.as_str()));
                assert!(puzzle.grid()[clue.start].number().is_some());
            }
            let texts: Vec<_> = puzzle.clues().iter().map(|c| c.clue.as_str()).collect();
            assert_eq!(texts, ["A feline", "A canine", "An insect"]);
        }
    }

    #[test]
    fn test_longest_words_placed_first() {
        let words = [
            WordDefinition::new("io", "Input and output"),
            WordDefinition::new("kernel", "Core of an operating system"),
            WordDefinition::new("bus", "Shared data path"),
        ];
        let puzzle = generator(12).generate_with_seed(&words, PuzzleSeed::from_phrase("sorted"));
        let answers: Vec<_> = puzzle.clues().iter().map(|c| c.answer.as_str()).collect();
        assert_eq!(answers, ["KERNEL", "BUS", "IO"]);
        assert_eq!(puzzle.clues()[0].clue, "Core of an operating system");
    }

    #[test]
    fn test_too_long_word_is_skipped() {
        let words = [
            WordDefinition::new("CYBERSECURITY", "Protection of digital information"),
            WordDefinition::new("HASH", "Maps data to fixed-size values"),
        ];
        let puzzle = generator(6).generate_with_seed(&words, PuzzleSeed::from_phrase("skip"));
        assert_eq!(puzzle.clues().len(), 1);
        assert_eq!(puzzle.clues()[0].answer.as_str(), "HASH");
        assert_eq!(puzzle.clues()[0].number, 1);
    }

    #[test]
    fn test_conflicting_word_is_dropped() {
        let words = [
            WordDefinition::new("A", "first"),
            WordDefinition::new("B", "second"),
        ];
        let puzzle = generator(1).generate_with_seed(&words, PuzzleSeed::from_phrase("conflict"));
        assert_eq!(puzzle.clues().len(), 1);
        assert_eq!(puzzle.letter(Position::new(0, 0)), Some('A'));
    }

    #[test]
    fn test_shared_start_cell_keeps_both_numbers() {
        let words = [
            WordDefinition::new("A", "across"),
            WordDefinition::new("a", "down"),
        ];
        let puzzle = generator(1).generate_with_seed(&words, PuzzleSeed::from_phrase("shared"));
        let numbers: Vec<_> = puzzle.clues().iter().map(|c| c.number).collect();
        assert_eq!(numbers, [1, 2]);
        assert_eq!(puzzle.grid()[Position::new(0, 0)].number(), Some(1));
    }

    #[test]
    fn test_clues_in_orientation() {
        let puzzle = generator(10).generate_with_seed(&pets(), PuzzleSeed::from_phrase("split"));
        let across = puzzle.clues_in(Orientation::Across).count();
        let down = puzzle.clues_in(Orientation::Down).count();
        assert_eq!(across + down, puzzle.clues().len());
    }

    #[test]
    fn test_cell_accessors() {
        let open = CrosswordCell::Open {
            letter: 'Q',
            number: Some(4),
        };
        assert!(!open.is_blocked());
        assert_eq!(open.letter(), Some('Q'));
        assert_eq!(open.number(), Some(4));
        assert!(CrosswordCell::Blocked.is_blocked());
        assert_eq!(CrosswordCell::Blocked.letter(), None);
    }

    proptest! {
        #[test]
        fn test_clues_read_back(
            bytes in any::<[u8; 32]>(),
            n in 1_usize..12,
            words in prop::collection::vec("[a-z]{1,8}", 0..10),
        ) {
            let defs: Vec<_> = words
                .iter()
                .map(|w| WordDefinition::new(w.as_str(), "clue"))
                .collect();
            let puzzle = generator(n).generate_with_seed(&defs, PuzzleSeed::from_bytes(bytes));

            for (i, clue) in (1..).zip(puzzle.clues()) {
                prop_assert_eq!(clue.number, i);
                prop_assert!(clue.length() <= n);
                prop_assert_eq!(read(&puzzle, clue), Some(clue.answer.to_string()));
            }
            for (pos, cell) in puzzle.grid().enumerate() {
                if let Some(number) = cell.number() {
                    let starts_here = |c: &Clue| c.start == pos && c.number == number;
                    prop_assert!(puzzle.clues().iter().any(starts_here));
                }
                if !cell.is_blocked() {
                    prop_assert!(puzzle.clues().iter().any(|c| c.covers(pos)));
                }
            }
            let lengths: Vec<_> = puzzle.clues().iter().map(Clue::length).collect();
            prop_assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
