//! Plain-text rendering of generated puzzles.

use std::io::{self, Write};

use lexigrid_core::{Grid, Orientation};
use lexigrid_generator::{CrosswordCell, CrosswordPuzzle, Generated, WordSearchPuzzle};

const HIDDEN: char = '.';
const BLOCKED: char = '#';

/// Writes a word search: seed, grid and word list.
///
/// With `solution`, a second grid shows only the letters of placed words and
/// every word is listed with its endpoints and direction.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_word_search<W>(
    out: &mut W,
    generated: &Generated<WordSearchPuzzle>,
    requested: usize,
    solution: bool,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let puzzle = &generated.puzzle;
    writeln!(out, "Seed: {}", generated.seed)?;
    writeln!(out, "Placed {} of {requested} words.", puzzle.words().len())?;
    writeln!(out)?;
    writeln!(out, "{}", puzzle.grid())?;

    writeln!(out)?;
    writeln!(out, "Words:")?;
    for word in puzzle.words() {
        if solution {
            writeln!(
                out,
                "  {} {} -> {} {}",
                word.word, word.start, word.end, word.direction
            )?;
        } else {
            writeln!(out, "  {}", word.word)?;
        }
    }

    if solution {
        let size = puzzle.size();
        let mut answers = Grid::new(size, HIDDEN);
        for word in puzzle.words() {
            for (pos, letter) in word.cells().zip(word.word.letters()) {
                answers[pos] = letter;
            }
        }
        writeln!(out)?;
        writeln!(out, "Solution:")?;
        writeln!(out, "{answers}")?;
    }
    Ok(())
}

/// Writes a crossword: seed, blank grid and numbered clue lists.
///
/// Blocked cells print as `#` and open cells as `.`. With `solution`, the
/// filled grid follows and every clue lists its answer.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_crossword<W>(
    out: &mut W,
    generated: &Generated<CrosswordPuzzle>,
    requested: usize,
    solution: bool,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let puzzle = &generated.puzzle;
    writeln!(out, "Seed: {}", generated.seed)?;
    writeln!(out, "Placed {} of {requested} words.", puzzle.clues().len())?;
    writeln!(out)?;
    let blank = puzzle.grid().clone().map(|cell| match cell {
        CrosswordCell::Blocked => BLOCKED,
        CrosswordCell::Open { .. } => HIDDEN,
    });
    writeln!(out, "{blank}")?;

    for orientation in Orientation::ALL {
        writeln!(out)?;
        writeln!(out, "{}:", title(orientation))?;
        for clue in puzzle.clues_in(orientation) {
            write!(out, "  {:>2}. {} ({})", clue.number, clue.clue, clue.length())?;
            if solution {
                write!(out, " {}", clue.answer)?;
            }
            writeln!(out)?;
        }
    }

    if solution {
        writeln!(out)?;
        writeln!(out, "Solution:")?;
        let filled = puzzle
            .grid()
            .clone()
            .map(|cell| cell.letter().unwrap_or(BLOCKED));
        writeln!(out, "{filled}")?;
    }
    Ok(())
}

fn title(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Across => "Across",
        Orientation::Down => "Down",
    }
}
