//! Command-line arguments.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use lexigrid_generator::PuzzleSeed;

use crate::settings::Settings;

/// Generate word-search and crossword puzzles from a word list.
#[derive(Debug, Parser)]
#[command(name = "lexigrid", version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Puzzle kind to generate.
    #[command(subcommand)]
    pub command: Command,
}

/// Puzzle kinds.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a word search from a list of words.
    WordSearch(PuzzleArgs),
    /// Generate a crossword from word/definition pairs.
    Crossword(PuzzleArgs),
}

impl Command {
    /// Returns the options shared by both puzzle kinds.
    #[must_use]
    pub fn args(&self) -> &PuzzleArgs {
        match self {
            Self::WordSearch(args) | Self::Crossword(args) => args,
        }
    }
}

/// Options shared by both puzzle kinds.
#[derive(Debug, Clone, clap::Args)]
pub struct PuzzleArgs {
    /// Word list to read, `-` for standard input. Uses the built-in sample when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Grid side length [default: 15].
    #[arg(short, long, value_name = "N")]
    pub size: Option<usize>,
    /// Hex seed reproducing an earlier puzzle.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    pub seed: Option<PuzzleSeed>,
    /// Derive the seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    pub seed_phrase: Option<String>,
    /// Sample this many random seeds and keep the puzzle placing the most words [default: 1].
    #[arg(long, value_name = "N", conflicts_with_all = ["seed", "seed_phrase"])]
    pub max_tries: Option<NonZeroUsize>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Also print the answers.
    #[arg(long)]
    pub solution: bool,
}

impl PuzzleArgs {
    /// Applies the flags on top of `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(size) = self.size {
            settings.generation.size = size;
        }
        if let Some(max_tries) = self.max_tries {
            settings.generation.max_tries = max_tries;
        }
    }

    /// Returns the seed fixed by `--seed` or `--seed-phrase`, if any.
    #[must_use]
    pub fn fixed_seed(&self) -> Option<PuzzleSeed> {
        self.seed
            .or_else(|| self.seed_phrase.as_deref().map(PuzzleSeed::from_phrase))
    }
}

/// How a generated puzzle is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable grid and word lists.
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lexigrid", "word-search"]).unwrap();
        assert_eq!(cli.verbose, 0);
        let args = cli.command.args();
        assert!(args.input.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.fixed_seed().is_none());

        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "lexigrid",
            "-vv",
            "crossword",
            "--input",
            "words.txt",
            "--size",
            "9",
            "--max-tries",
            "4",
            "--format",
            "json",
            "--solution",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Crossword(_)));
        let args = cli.command.args();
        assert_eq!(args.input.as_deref(), Some("words.txt".as_ref()));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.solution);

        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings.generation.size, 9);
        assert_eq!(settings.generation.max_tries.get(), 4);
    }

    #[test]
    fn test_seed_options() {
        let hex = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        let cli = Cli::try_parse_from(["lexigrid", "word-search", "--seed", hex]).unwrap();
        assert_eq!(cli.command.args().fixed_seed(), Some(hex.parse().unwrap()));

        let cli =
            Cli::try_parse_from(["lexigrid", "word-search", "--seed-phrase", "animals"]).unwrap();
        assert_eq!(
            cli.command.args().fixed_seed(),
            Some(PuzzleSeed::from_phrase("animals"))
        );

        assert!(Cli::try_parse_from(["lexigrid", "word-search", "--seed", "xyz"]).is_err());
        assert!(
            Cli::try_parse_from([
                "lexigrid",
                "word-search",
                "--seed",
                hex,
                "--seed-phrase",
                "animals"
            ])
            .is_err()
        );
        assert!(
            Cli::try_parse_from(["lexigrid", "crossword", "--max-tries", "0"]).is_err()
        );
    }
}
