use std::time::Duration;

use lexigrid_core::{Line, Position};
use lexigrid_generator::{PlacedWord, WordSearchPuzzle};

/// Score awarded for finishing instantly.
const MAX_SCORE: u64 = 1000;
/// Score never drops below this, however long the player takes.
const MIN_SCORE: u64 = 100;

/// Result of checking a selection against the hidden words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The selection spelled a word that had not been found yet.
    Found(usize),
    /// The selection spelled a word that was already found.
    AlreadyFound(usize),
    /// The selection did not spell any placed word.
    NoMatch,
}

/// Reads the letters under a set of selected cells in row-major order.
///
/// Duplicate cells are read once. Returns `None` if any cell lies outside the
/// grid.
#[must_use]
pub fn selection_text(puzzle: &WordSearchPuzzle, cells: &[Position]) -> Option<String> {
    let mut cells = cells.to_vec();
    cells.sort_unstable();
    cells.dedup();
    cells
        .into_iter()
        .map(|pos| puzzle.grid().get(pos).copied())
        .collect()
}

fn spells(word: &PlacedWord, text: &str) -> bool {
    let word = word.word.as_str();
    word == text || word.chars().eq(text.chars().rev())
}

/// Finds the placed word spelled by a selection.
///
/// The selected cells are read in row-major order; the reading matches a word
/// if it equals the word or its reverse, since a line can be dragged from
/// either end. Returns the first matching word in placement order.
///
/// # Examples
///
/// ```
/// use lexigrid_core::GridSize;
/// use lexigrid_game::match_selection;
/// use lexigrid_generator::{PuzzleSeed, WordSearchGenerator};
///
/// let puzzle = WordSearchGenerator::new(GridSize::new(8)?)
///     .generate_with_seed(&["SOCKET"], PuzzleSeed::from_phrase("io"));
/// let socket = &puzzle.words()[0];
/// let cells: Vec<_> = socket.cells().collect();
///
/// assert_eq!(match_selection(&puzzle, &cells), Some(socket));
/// assert_eq!(match_selection(&puzzle, &cells[1..]), None);
/// # Ok::<(), lexigrid_core::GridSizeError>(())
/// ```
#[must_use]
pub fn match_selection<'a>(
    puzzle: &'a WordSearchPuzzle,
    cells: &[Position],
) -> Option<&'a PlacedWord> {
    let text = selection_text(puzzle, cells)?;
    puzzle.words().iter().find(|word| spells(word, &text))
}

/// A word-search puzzle being played.
///
/// Tracks which placed words have been found; the puzzle itself is never
/// modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearchGame {
    puzzle: WordSearchPuzzle,
    found: Vec<bool>,
}

impl WordSearchGame {
    /// Starts a game with no words found.
    #[must_use]
    pub fn new(puzzle: WordSearchPuzzle) -> Self {
        let found = vec![false; puzzle.words().len()];
        Self { puzzle, found }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &WordSearchPuzzle {
        &self.puzzle
    }

    /// Returns `true` if the placed word at `index` has been found.
    ///
    /// Out-of-range indices are never found.
    #[must_use]
    pub fn is_found(&self, index: usize) -> bool {
        self.found.get(index).copied().unwrap_or_default()
    }

    /// Iterates over the words found so far, in placement order.
    pub fn found_words(&self) -> impl Iterator<Item = &PlacedWord> {
        self.puzzle
            .words()
            .iter()
            .zip(&self.found)
            .filter_map(|(word, &found)| found.then_some(word))
    }

    /// Returns the number of words found.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|&&found| found).count()
    }

    /// Returns the number of words still hidden.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.found.len() - self.found_count()
    }

    /// Returns `true` once every placed word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.iter().all(|&found| found)
    }

    /// Checks a selection and marks the matching word as found.
    ///
    /// When the same word was placed more than once, a copy that has not been
    /// found yet is preferred.
    pub fn select(&mut self, cells: &[Position]) -> SelectionOutcome {
        let Some(text) = selection_text(&self.puzzle, cells) else {
            return SelectionOutcome::NoMatch;
        };
        let mut matches = self
            .puzzle
            .words()
            .iter()
            .enumerate()
            .filter(|(_, word)| spells(word, &text))
            .map(|(i, _)| i);
        let Some(first) = matches.next() else {
            return SelectionOutcome::NoMatch;
        };
        let index = if self.found[first] {
            matches.find(|&i| !self.found[i]).unwrap_or(first)
        } else {
            first
        };

        if self.found[index] {
            SelectionOutcome::AlreadyFound(index)
        } else {
            self.found[index] = true;
            SelectionOutcome::Found(index)
        }
    }

    /// Checks the straight line dragged from `start` to `end`.
    ///
    /// A line that is not horizontal, vertical or diagonal selects nothing.
    pub fn select_line(&mut self, start: Position, end: Position) -> SelectionOutcome {
        let cells: Vec<_> = Line::new(start, end).cells().collect();
        self.select(&cells)
    }

    /// Returns `true` if the cell belongs to any found word.
    #[must_use]
    pub fn is_cell_found(&self, pos: Position) -> bool {
        self.found_words().any(|word| word.line().contains(pos))
    }

    /// Returns the score for completing the puzzle after `elapsed`.
    ///
    /// Starts at 1000 and loses a point per whole second, never dropping below
    /// 100. Returns `None` while words remain hidden.
    #[must_use]
    pub fn completion_score(&self, elapsed: Duration) -> Option<u32> {
        self.is_complete().then(|| {
            let score = MAX_SCORE.saturating_sub(elapsed.as_secs()).max(MIN_SCORE);
            u32::try_from(score).unwrap_or(u32::MAX)
        })
    }
}

#[cfg(test)]
mod tests {
    use lexigrid_core::GridSize;
    use lexigrid_generator::{PuzzleSeed, WordSearchGenerator};
    use proptest::prelude::*;

    use super::*;

    fn game(words: &[&str], size: usize, phrase: &str) -> WordSearchGame {
        let puzzle = WordSearchGenerator::new(GridSize::new(size).unwrap())
            .generate_with_seed(words, PuzzleSeed::from_phrase(phrase));
        WordSearchGame::new(puzzle)
    }

    #[test]
    fn test_find_every_word() {
        let mut game = game(&["CAT", "DOG", "BIRD", "FISH", "LION"], 10, "zoo");
        assert_eq!(game.remaining(), 5);
        assert!(!game.is_complete());

        let words = game.puzzle().words().to_vec();
        for (i, word) in words.iter().enumerate() {
            assert_eq!(game.select_line(word.start, word.end), SelectionOutcome::Found(i));
            assert!(game.is_found(i));
        }
        assert!(game.is_complete());
        assert_eq!(game.found_count(), 5);
        assert_eq!(game.remaining(), 0);
    }

    #[test]
    fn test_reverse_drag_matches() {
        let mut game = game(&["PYTHON"], 8, "reverse");
        let word = game.puzzle().words()[0].clone();
        assert!(game.select_line(word.end, word.start).is_found());
        assert!(game.select_line(word.start, word.end).is_already_found());
    }

    #[test]
    fn test_partial_selection_does_not_match() {
        let mut game = game(&["COMPILER"], 10, "partial");
        let word = game.puzzle().words()[0].clone();
        let cells: Vec<_> = word.cells().take(4).collect();
        assert!(game.select(&cells).is_no_match());
        assert!(game.select(&[]).is_no_match());
        assert!(game.select(&[Position::new(10, 0)]).is_no_match());
        assert_eq!(game.found_count(), 0);
    }

    #[test]
    fn test_crooked_line_selects_nothing() {
        let mut game = game(&["RUST"], 6, "crooked");
        assert!(game.select_line(Position::new(0, 0), Position::new(1, 3)).is_no_match());
    }

    #[test]
    fn test_selection_order_does_not_matter() {
        let mut game = game(&["MEMORY"], 8, "shuffle");
        let word = game.puzzle().words()[0].clone();
        let mut cells: Vec<_> = word.cells().collect();
        cells.rotate_left(2);
        cells.push(cells[0]);
        assert_eq!(game.select(&cells), SelectionOutcome::Found(0));
    }

    #[test]
    fn test_duplicate_words_found_separately() {
        let mut game = game(&["A", "A"], 1, "twins");
        let cell = [Position::new(0, 0)];
        assert_eq!(game.select(&cell), SelectionOutcome::Found(0));
        assert_eq!(game.select(&cell), SelectionOutcome::Found(1));
        assert_eq!(game.select(&cell), SelectionOutcome::AlreadyFound(0));
        assert!(game.is_complete());
    }

    #[test]
    fn test_found_cells_highlight() {
        let mut game = game(&["SERVER"], 8, "highlight");
        let word = game.puzzle().words()[0].clone();
        assert!(!game.is_cell_found(word.start));
        game.select_line(word.start, word.end);
        for pos in word.cells() {
            assert!(game.is_cell_found(pos));
        }
        let highlighted = game
            .puzzle()
            .grid()
            .positions()
            .filter(|&pos| game.is_cell_found(pos))
            .count();
        assert_eq!(highlighted, word.word.len());
    }

    #[test]
    fn test_completion_score() {
        let mut game = game(&["CLOUD"], 6, "score");
        assert_eq!(game.completion_score(Duration::from_secs(5)), None);
        let word = game.puzzle().words()[0].clone();
        game.select_line(word.start, word.end);
        assert_eq!(game.completion_score(Duration::from_secs(0)), Some(1000));
        assert_eq!(game.completion_score(Duration::from_millis(42_900)), Some(958));
        assert_eq!(game.completion_score(Duration::from_secs(950)), Some(100));
        assert_eq!(game.completion_score(Duration::from_secs(5000)), Some(100));
    }

    proptest! {
        #[test]
        fn test_placed_words_match_both_ways(
            bytes in any::<[u8; 32]>(),
            words in prop::collection::vec("[A-Z]{2,6}", 1..6),
        ) {
            let puzzle = WordSearchGenerator::new(GridSize::new(8).unwrap())
                .generate_with_seed(&words, PuzzleSeed::from_bytes(bytes));
            for word in puzzle.words() {
                let forward: Vec<_> = word.cells().collect();
                let backward: Vec<_> = word.line().reversed().cells().collect();
                let found = match_selection(&puzzle, &forward);
                prop_assert!(found.is_some_and(|w| spells(w, word.word.as_str())));
                let found = match_selection(&puzzle, &backward);
                prop_assert!(found.is_some_and(|w| spells(w, word.word.as_str())));
            }
        }
    }
}
