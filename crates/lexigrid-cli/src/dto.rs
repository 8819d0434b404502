//! JSON representations of word lists and generated puzzles.

use lexigrid_core::Position;
use lexigrid_generator::{
    Clue, CrosswordCell, CrosswordPuzzle, Generated, PlacedWord, WordDefinition, WordSearchPuzzle,
};
use serde::{Deserialize, Serialize};

/// A word/definition pair as read from or written to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDefinitionDto {
    /// The answer word.
    pub word: String,
    /// The clue text.
    pub definition: String,
}

impl From<WordDefinitionDto> for WordDefinition {
    fn from(dto: WordDefinitionDto) -> Self {
        Self::new(dto.word, dto.definition)
    }
}

/// A generated word search.
///
/// Grid rows are strings of letters, one per row.
#[derive(Debug, Clone, Serialize)]
pub struct WordSearchDto {
    /// Hex seed that reproduces the puzzle.
    pub seed: String,
    /// Grid side length.
    pub size: usize,
    /// Grid rows, top to bottom.
    pub grid: Vec<String>,
    /// Placed words in placement order.
    pub words: Vec<PlacedWordDto>,
}

/// A placed word-search word. Coordinates are `[row, col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWordDto {
    /// The cleaned word.
    pub word: String,
    /// Cell of the first letter.
    pub start: [usize; 2],
    /// Cell of the last letter.
    pub end: [usize; 2],
    /// Direction label such as `diagonal-up-right`.
    pub direction: String,
    /// Whether the word has been found. Always `false` for a new puzzle.
    pub found: bool,
}

fn coords(pos: Position) -> [usize; 2] {
    [pos.row, pos.col]
}

impl From<&PlacedWord> for PlacedWordDto {
    fn from(word: &PlacedWord) -> Self {
        Self {
            word: word.word.to_string(),
            start: coords(word.start),
            end: coords(word.end),
            direction: word.direction.to_string(),
            found: false,
        }
    }
}

impl From<&Generated<WordSearchPuzzle>> for WordSearchDto {
    fn from(generated: &Generated<WordSearchPuzzle>) -> Self {
        let puzzle = &generated.puzzle;
        Self {
            seed: generated.seed.to_string(),
            size: puzzle.size().get(),
            grid: puzzle
                .grid()
                .rows()
                .map(|row| row.iter().collect())
                .collect(),
            words: puzzle.words().iter().map(PlacedWordDto::from).collect(),
        }
    }
}

/// A generated crossword.
#[derive(Debug, Clone, Serialize)]
pub struct CrosswordDto {
    /// Hex seed that reproduces the puzzle.
    pub seed: String,
    /// Grid side length.
    pub size: usize,
    /// Grid cells, row by row.
    pub grid: Vec<Vec<CrosswordCellDto>>,
    /// Clues in placement order.
    pub clues: Vec<ClueDto>,
}

/// A crossword cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordCellDto {
    /// Solution letter, absent for blocked cells.
    pub letter: Option<char>,
    /// Clue number shown in the cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Whether the cell is blocked.
    pub is_blocked: bool,
}

impl From<CrosswordCell> for CrosswordCellDto {
    fn from(cell: CrosswordCell) -> Self {
        Self {
            letter: cell.letter(),
            number: cell.number(),
            is_blocked: cell.is_blocked(),
        }
    }
}

/// A crossword clue. `start_x` is the column and `start_y` the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueDto {
    /// Clue number.
    pub number: u32,
    /// Clue text.
    pub clue: String,
    /// Cleaned answer.
    pub answer: String,
    /// `across` or `down`.
    pub direction: String,
    /// Column of the first letter.
    pub start_x: usize,
    /// Row of the first letter.
    pub start_y: usize,
    /// Answer length.
    pub length: usize,
}

impl From<&Clue> for ClueDto {
    fn from(clue: &Clue) -> Self {
        Self {
            number: clue.number,
            clue: clue.clue.clone(),
            answer: clue.answer.to_string(),
            direction: clue.orientation.to_string(),
            start_x: clue.start.col,
            start_y: clue.start.row,
            length: clue.length(),
        }
    }
}

impl From<&Generated<CrosswordPuzzle>> for CrosswordDto {
    fn from(generated: &Generated<CrosswordPuzzle>) -> Self {
        let puzzle = &generated.puzzle;
        Self {
            seed: generated.seed.to_string(),
            size: puzzle.size().get(),
            grid: puzzle
                .grid()
                .rows()
                .map(|row| row.iter().copied().map(CrosswordCellDto::from).collect())
                .collect(),
            clues: puzzle.clues().iter().map(ClueDto::from).collect(),
        }
    }
}
