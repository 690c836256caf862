//! Typographic quote glyphs.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Glyphs emitted by pulldown-cmark's smart punctuation.
const SMART: [char; 4] = ['“', '”', '‘', '’'];

/// Quote replacement set: open double, close double, open single, close single.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quotes([char; 4]);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("quotes must be exactly 4 characters (open/close double, open/close single), got {0:?}")]
pub struct QuotesError(pub String);

impl Default for Quotes {
    fn default() -> Self {
        Self(SMART)
    }
}

impl Quotes {
    pub fn is_default(&self) -> bool {
        self.0 == SMART
    }

    /// Swap the smart-punctuation glyphs for the configured ones.
    ///
    /// Curly quotes typed literally in the source are swapped too, since the
    /// engine does not tell them apart from generated ones.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| match SMART.iter().position(|&q| q == c) {
                Some(i) => self.0[i],
                None => c,
            })
            .collect()
    }
}

impl FromStr for Quotes {
    type Err = QuotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let glyphs: [char; 4] = chars.try_into().map_err(|_| QuotesError(s.to_string()))?;
        Ok(Self(glyphs))
    }
}

impl fmt::Display for Quotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let quotes: Quotes = "«»„“".parse().unwrap();
        assert_eq!(quotes.to_string(), "«»„“");
        assert!(!quotes.is_default());
        assert!("“”‘’".parse::<Quotes>().unwrap().is_default());
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            "«»".parse::<Quotes>(),
            Err(QuotesError("«»".to_string()))
        );
    }

    #[test]
    fn test_apply() {
        let quotes: Quotes = "«»‹›".parse().unwrap();
        assert_eq!(quotes.apply("“a” ‘b’ \"c\""), "«a» ‹b› \"c\"");
    }
}
