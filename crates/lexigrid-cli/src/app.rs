//! Ties the command line to the generators.

use std::{
    fs,
    io::{self, Read as _, Write},
    path::{Path, PathBuf},
};

use lexigrid_core::{CleanWord, GridSize, GridSizeError};
use lexigrid_generator::{
    CrosswordGenerator, CrosswordPuzzle, Generated, PuzzleSeed, WordSearchGenerator,
    WordSearchPuzzle,
};
use rayon::prelude::*;

use crate::{
    cli::{Cli, Command, OutputFormat, PuzzleArgs},
    dto::{CrosswordDto, WordSearchDto},
    render, samples,
    settings::Settings,
    wordlist::{self, ImportError},
};

/// Error returned by [`run`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// The word list file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    ReadInput {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The word list was rejected.
    #[display("{_0}")]
    #[from]
    Import(ImportError),
    /// The requested grid size is invalid.
    #[display("invalid grid size: {_0}")]
    #[from]
    Size(GridSizeError),
    /// Writing the puzzle failed.
    #[display("failed to write output: {_0}")]
    #[from]
    Output(io::Error),
    /// Encoding the puzzle as JSON failed.
    #[display("failed to encode output: {_0}")]
    #[from]
    Json(serde_json::Error),
}

/// Runs the command described by `cli`, printing the puzzle to stdout.
///
/// # Errors
///
/// Returns an error if the input cannot be read or imported, the grid size is
/// invalid, or the output cannot be written.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let args = cli.command.args();
    let mut settings = Settings::default();
    args.apply(&mut settings);
    let size = GridSize::new(settings.generation.size)?;
    let input = read_input(args.input.as_deref())?;
    let mut out = io::stdout().lock();

    match &cli.command {
        Command::WordSearch(_) => {
            let mut words = match &input {
                Some(text) => wordlist::parse_word_list(text, &settings.import)?,
                None => samples::word_search_words(),
            };
            words.sort_by_key(|word| std::cmp::Reverse(CleanWord::new(word).len()));
            let generator = WordSearchGenerator::new(size);
            let generated = generate_best(
                args,
                &settings,
                |seed| generator.generate_with_seed(&words, seed),
                |puzzle: &WordSearchPuzzle| puzzle.words().len(),
            );
            log::info!(
                "word search placed {} of {} words",
                generated.puzzle.words().len(),
                words.len()
            );
            write_word_search(&mut out, args, &generated, words.len())?;
        }
        Command::Crossword(_) => {
            let pairs = match &input {
                Some(text) => wordlist::parse_word_definitions(text, &settings.import)?,
                None => samples::crossword_words(),
            };
            let generator = CrosswordGenerator::new(size);
            let generated = generate_best(
                args,
                &settings,
                |seed| generator.generate_with_seed(&pairs, seed),
                |puzzle: &CrosswordPuzzle| puzzle.clues().len(),
            );
            log::info!(
                "crossword placed {} of {} words",
                generated.puzzle.clues().len(),
                pairs.len()
            );
            write_crossword(&mut out, args, &generated, pairs.len())?;
        }
    }
    out.flush()?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Option<String>, AppError> {
    let Some(path) = path else {
        log::info!("no input given, using the built-in sample list");
        return Ok(None);
    };
    let read = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };
    read.map(Some).map_err(|source| AppError::ReadInput {
        path: path.to_owned(),
        source,
    })
}

fn generate_best<P, G, K>(
    args: &PuzzleArgs,
    settings: &Settings,
    generate: G,
    placed: K,
) -> Generated<P>
where
    P: Send,
    G: Fn(PuzzleSeed) -> P + Sync,
    K: Fn(&P) -> usize + Sync,
{
    if let Some(seed) = args.fixed_seed() {
        return Generated {
            seed,
            puzzle: generate(seed),
        };
    }
    let tries = settings.generation.max_tries.get();
    best_of(PuzzleSeed::random(), tries - 1, generate, placed)
}

/// Generates from `first` and `extra` further random seeds in parallel and
/// keeps the puzzle with the highest `placed` count.
///
/// Ties keep the puzzle built from `first`.
pub fn best_of<P, G, K>(first: PuzzleSeed, extra: usize, generate: G, placed: K) -> Generated<P>
where
    P: Send,
    G: Fn(PuzzleSeed) -> P + Sync,
    K: Fn(&P) -> usize + Sync,
{
    let build = |seed| Generated {
        seed,
        puzzle: generate(seed),
    };
    let first = build(first);
    let challenger = (0..extra)
        .into_par_iter()
        .map(|_| build(PuzzleSeed::random()))
        .max_by_key(|candidate| placed(&candidate.puzzle));
    log::debug!("sampled {} seeds", extra + 1);
    match challenger {
        Some(candidate) if placed(&candidate.puzzle) > placed(&first.puzzle) => candidate,
        _ => first,
    }
}

fn write_word_search<W>(
    out: &mut W,
    args: &PuzzleArgs,
    generated: &Generated<WordSearchPuzzle>,
    requested: usize,
) -> Result<(), AppError>
where
    W: Write,
{
    match args.format {
        OutputFormat::Text => {
            render::write_word_search(out, generated, requested, args.solution)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &WordSearchDto::from(generated))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_crossword<W>(
    out: &mut W,
    args: &PuzzleArgs,
    generated: &Generated<CrosswordPuzzle>,
    requested: usize,
) -> Result<(), AppError>
where
    W: Write,
{
    match args.format {
        OutputFormat::Text => {
            render::write_crossword(out, generated, requested, args.solution)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &CrosswordDto::from(generated))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_of_keeps_most_placed() {
        let first = PuzzleSeed::from_bytes([0; 32]);
        let generated = best_of(first, 16, |seed| seed.as_bytes()[0], |&byte| usize::from(byte));
        assert_eq!(generated.puzzle, generated.seed.as_bytes()[0]);
        // 16 random seeds all starting with a zero byte is vanishingly unlikely.
        assert_ne!(generated.seed, first);
    }

    #[test]
    fn test_best_of_ties_keep_first() {
        let first = PuzzleSeed::from_phrase("first");
        let generated = best_of(first, 8, |_| (), |_| 0);
        assert_eq!(generated.seed, first);

        let generated = best_of(first, 0, |_| 7_u8, |_| 1);
        assert_eq!(generated.seed, first);
        assert_eq!(generated.puzzle, 7);
    }

    #[test]
    fn test_fixed_seed_skips_sampling() {
        let args = PuzzleArgs {
            input: None,
            size: None,
            seed: None,
            seed_phrase: Some("animals".to_owned()),
            max_tries: None,
            format: OutputFormat::Text,
            solution: false,
        };
        let generated = generate_best(&args, &Settings::default(), |seed| seed, |_| 0);
        assert_eq!(generated.seed, PuzzleSeed::from_phrase("animals"));
        assert_eq!(generated.puzzle, generated.seed);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/lexigrid/words.txt"))).unwrap_err();
        assert!(matches!(err, AppError::ReadInput { .. }));
        assert!(err.to_string().starts_with("failed to read /nonexistent/lexigrid/words.txt"));
        assert!(read_input(None).unwrap().is_none());
    }
}
