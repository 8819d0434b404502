//! Word normalization.

use std::fmt::{self, Display};

/// A word reduced to the letters that can be placed on a grid.
///
/// Cleaning upper-cases the raw text and drops every character outside `A-Z`.
/// The result may be empty; an empty word never fits on any grid and is simply
/// not placed. Definitions and clue text are never cleaned.
///
/// # Examples
///
/// ```
/// use lexigrid_core::CleanWord;
///
/// assert_eq!(CleanWord::new("Graph-QL 2.0").as_str(), "GRAPHQL");
/// assert_eq!(CleanWord::new("k8s").len(), 2);
/// assert!(CleanWord::new("42").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CleanWord(String);

impl CleanWord {
    /// Cleans a raw word.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(
            raw.chars()
                .flat_map(char::to_uppercase)
                .filter(char::is_ascii_uppercase)
                .collect(),
        )
    }

    /// Returns the cleaned text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if cleaning left no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the letters in reading order.
    pub fn letters(&self) -> impl DoubleEndedIterator<Item = char> + ExactSizeIterator + '_ {
        self.0.bytes().map(char::from)
    }

    /// Returns the letter at `index`, if any.
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).copied().map(char::from)
    }

    /// Consumes the word and returns the cleaned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for CleanWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CleanWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CleanWord {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_uppercases_and_strips() {
        assert_eq!(CleanWord::new("cyber security").as_str(), "CYBERSECURITY");
        assert_eq!(CleanWord::new("  Hash_Map!  ").as_str(), "HASHMAP");
        assert_eq!(CleanWord::new("café").as_str(), "CAF");
    }

    #[test]
    fn test_unicode_uppercasing() {
        assert_eq!(CleanWord::new("straße").as_str(), "STRASSE");
        assert_eq!(CleanWord::new("ﬁle").as_str(), "FILE");
        assert_eq!(CleanWord::new("ıt").as_str(), "IT");
    }

    #[test]
    fn test_letter_access() {
        let word = CleanWord::new("dog");
        assert_eq!(word.letter(0), Some('D'));
        assert_eq!(word.letter(2), Some('G'));
        assert_eq!(word.letter(3), None);
        assert_eq!(word.letters().rev().collect::<String>(), "GOD");
    }

    proptest! {
        #[test]
        fn test_cleaned_words_are_ascii_uppercase(raw in ".*") {
            let word = CleanWord::new(&raw);
            prop_assert!(word.as_str().bytes().all(|b| b.is_ascii_uppercase()));
            prop_assert_eq!(CleanWord::new(word.as_str()), word.clone());
        }
    }
}
