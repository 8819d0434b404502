//! Seeds for reproducible puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Number of bytes in a [`PuzzleSeed`].
pub const SEED_LEN: usize = 32;

/// Error returned when parsing a [`PuzzleSeed`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text was not exactly 64 hex digits long.
    #[display("seed must be {} hex digits, got {len}", SEED_LEN * 2)]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The text contained a character that is not a hex digit.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Generating with the same seed, word list and grid size always yields the
/// same puzzle. Seeds display as 64 lowercase hex digits and parse back from
/// the same form.
///
/// # Examples
///
/// ```
/// use lexigrid_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("networking");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; SEED_LEN]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; SEED_LEN];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from arbitrary text using SHA-256.
    ///
    /// The same phrase always yields the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Creates the random number generator driven by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != SEED_LEN * 2 {
            return Err(SeedParseError::InvalidLength { len });
        }

        let mut bytes = [0; SEED_LEN];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let hi = hex_value(chars.next())?;
            let lo = hex_value(chars.next())?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(ch: Option<char>) -> Result<u8, SeedParseError> {
    let ch = ch.unwrap_or_default();
    ch.to_digit(16)
        .and_then(|d| u8::try_from(d).ok())
        .ok_or(SeedParseError::InvalidDigit { ch })
}

/// A generated puzzle together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<P> {
    /// Seed that reproduces `puzzle`.
    pub seed: PuzzleSeed,
    /// The generated puzzle.
    pub puzzle: P,
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    #[test]
    fn test_parse_display_round_trip() {
        let text = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        let seed = text.parse::<PuzzleSeed>().unwrap();
        assert_eq!(seed.to_string(), text);
        assert_eq!(seed.as_bytes()[0], 0xc1);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed = "AB".repeat(SEED_LEN).parse::<PuzzleSeed>().unwrap();
        assert_eq!(seed, PuzzleSeed::from_bytes([0xab; SEED_LEN]));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("{}zz", "0".repeat(62));
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidDigit { ch: 'z' })
        );
    }

    #[test]
    fn test_phrase_is_stable() {
        assert_eq!(PuzzleSeed::from_phrase("dns"), PuzzleSeed::from_phrase("dns"));
        assert_ne!(PuzzleSeed::from_phrase("dns"), PuzzleSeed::from_phrase("tcp"));
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = PuzzleSeed::from_phrase("stream");
        let a: Vec<u32> = (0..8).map(|_| seed.rng().random()).collect();
        let mut rng1 = seed.rng();
        let mut rng2 = seed.rng();
        let b: Vec<u32> = (0..8).map(|_| rng1.random()).collect();
        let c: Vec<u32> = (0..8).map(|_| rng2.random()).collect();
        assert_eq!(b, c);
        assert!(a.iter().all(|&x| x == a[0]));
    }
}
