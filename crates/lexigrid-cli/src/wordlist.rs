//! Parsing of user-supplied word lists.
//!
//! Word-search lists are plain words separated by newlines or commas, or a
//! JSON array of strings. Crossword lists hold one `word: definition` pair per
//! line, one JSON object per line, or a single JSON array of objects.

use lexigrid_generator::WordDefinition;

use crate::{dto::WordDefinitionDto, settings::ImportLimits};

/// Error returned when a word list cannot be imported.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ImportError {
    /// The input held no usable entries.
    #[display("the word list is empty")]
    Empty,
    /// The input held fewer entries than the puzzle needs.
    #[display("at least {min} words are required, found {found}")]
    TooFewWords {
        /// Number of entries found.
        found: usize,
        /// Minimum number of entries.
        min: usize,
    },
    /// The input held more entries than the puzzle accepts.
    #[display("at most {max} words are allowed, found {found}")]
    TooManyWords {
        /// Number of entries found.
        found: usize,
        /// Maximum number of entries.
        max: usize,
    },
    /// A JSON document could not be decoded.
    #[display("invalid JSON word list: {_0}")]
    #[from]
    Json(serde_json::Error),
}

fn is_json_array(text: &str) -> bool {
    text.starts_with('[')
}

/// Parses a word-search word list.
///
/// # Errors
///
/// Returns an error if the list is empty, violates `limits`, or is a
/// malformed JSON array.
pub fn parse_word_list(text: &str, limits: &ImportLimits) -> Result<Vec<String>, ImportError> {
    let text = text.trim();
    let words: Vec<String> = if is_json_array(text) {
        serde_json::from_str::<Vec<String>>(text)?
            .into_iter()
            .map(|word| word.trim().to_owned())
            .filter(|word| !word.is_empty())
            .collect()
    } else {
        text.split(['\n', ','])
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect()
    };
    check_count(
        words.len(),
        limits.min_word_search_words,
        Some(limits.max_word_search_words),
    )?;
    log::debug!("imported {} word-search words", words.len());
    Ok(words)
}

/// Parses a crossword word/definition list.
///
/// Lines matching neither accepted shape are skipped.
///
/// # Errors
///
/// Returns an error if no pair is found, fewer than
/// `limits.min_crossword_words` pairs are found, or the whole input is a
/// malformed JSON array.
pub fn parse_word_definitions(
    text: &str,
    limits: &ImportLimits,
) -> Result<Vec<WordDefinition>, ImportError> {
    let text = text.trim();
    let pairs: Vec<WordDefinition> = if is_json_array(text) {
        serde_json::from_str::<Vec<WordDefinitionDto>>(text)?
            .into_iter()
            .filter_map(|dto| pair(&dto.word, &dto.definition))
            .collect()
    } else {
        text.lines().filter_map(parse_definition_line).collect()
    };
    check_count(pairs.len(), limits.min_crossword_words, None)?;
    log::debug!("imported {} crossword pairs", pairs.len());
    Ok(pairs)
}

fn parse_definition_line(line: &str) -> Option<WordDefinition> {
    let line = line.trim();
    if line.starts_with('{') && line.ends_with('}') {
        return match serde_json::from_str::<WordDefinitionDto>(line) {
            Ok(dto) => pair(&dto.word, &dto.definition),
            Err(err) => {
                log::warn!("skipping malformed JSON line {line:?}: {err}");
                None
            }
        };
    }
    let (word, definition) = line.split_once(':')?;
    pair(word, definition)
}

fn pair(word: &str, definition: &str) -> Option<WordDefinition> {
    let (word, definition) = (word.trim(), definition.trim());
    (!word.is_empty() && !definition.is_empty()).then(|| WordDefinition::new(word, definition))
}

fn check_count(found: usize, min: usize, max: Option<usize>) -> Result<(), ImportError> {
    if found == 0 {
        return Err(ImportError::Empty);
    }
    if found < min {
        return Err(ImportError::TooFewWords { found, min });
    }
    if let Some(max) = max
        && found > max
    {
        return Err(ImportError::TooManyWords { found, max });
    }
    Ok(())
}
