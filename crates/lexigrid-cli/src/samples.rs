//! Built-in word lists used when no input is given.

use lexigrid_generator::WordDefinition;

const VOCABULARY: [(&str, &str); 8] = [
    ("ALGORITHM", "Step-by-step procedure for solving a problem"),
    ("BLOCKCHAIN", "Distributed ledger technology"),
    ("CYBERSECURITY", "Protection of digital information"),
    ("DATABASE", "Organized collection of data"),
    ("ENCRYPTION", "Process of encoding information"),
    ("FRAMEWORK", "Reusable software platform"),
    ("GRAPHQL", "Query language for APIs"),
    ("HASH", "Function that maps data to fixed-size values"),
];

/// Returns the sample word-search list.
#[must_use]
pub fn word_search_words() -> Vec<String> {
    VOCABULARY
        .iter()
        .map(|(word, _)| *word)
        .chain(["INTERFACE", "JAVASCRIPT"])
        .map(str::to_owned)
        .collect()
}

/// Returns the sample crossword word/definition pairs.
#[must_use]
pub fn crossword_words() -> Vec<WordDefinition> {
    VOCABULARY
        .iter()
        .map(|&(word, definition)| WordDefinition::new(word, definition))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{settings::ImportLimits, wordlist};

    #[test]
    fn test_samples_satisfy_import_limits() {
        let limits = ImportLimits::default();
        let words = word_search_words();
        assert_eq!(words.len(), 10);
        assert!(wordlist::parse_word_list(&words.join("\n"), &limits).is_ok());

        let pairs = crossword_words();
        let text: Vec<_> = pairs
            .iter()
            .map(|pair| format!("{}: {}", pair.word, pair.definition))
            .collect();
        assert_eq!(wordlist::parse_word_definitions(&text.join("\n"), &limits).unwrap(), pairs);
    }
}
