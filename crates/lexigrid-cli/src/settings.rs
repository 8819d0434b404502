//! Generation and import settings with their defaults.

use std::num::NonZeroUsize;

/// All tunable settings of the command-line front end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How puzzles are generated.
    pub generation: GenerationSettings,
    /// How many words an imported list must hold.
    pub import: ImportLimits,
}

/// Settings that shape puzzle generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Side length of the generated grid.
    pub size: usize,
    /// Number of seeds to sample; the puzzle placing the most words is kept.
    pub max_tries: NonZeroUsize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            size: 15,
            max_tries: NonZeroUsize::MIN,
        }
    }
}

/// Bounds on the length of imported word lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLimits {
    /// Fewest words accepted for a word search.
    pub min_word_search_words: usize,
    /// Most words accepted for a word search.
    pub max_word_search_words: usize,
    /// Fewest word/definition pairs accepted for a crossword.
    pub min_crossword_words: usize,
}

impl Default for ImportLimits {
    fn default() -> Self {
        Self {
            min_word_search_words: 5,
            max_word_search_words: 50,
            min_crossword_words: 3,
        }
    }
}
