//! Pattern extraction with placeholder substitution.
//!
//! Each match is cut out of the text and replaced by a single placeholder
//! character. The scan restarts from the beginning of the *rewritten* text
//! after every replacement, so a match may span a placeholder left by an
//! earlier replacement.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Display math: `$$...$$` or `\[...\]`, may span lines.
pub static DISPLAY_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$|\\\[(.*?)\\\]").unwrap());

/// Inline math: `$...$` or `\(...\)`, single line.
pub static INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(.*?)\$|\\\((.*?)\\\)").unwrap());

/// Result of [`extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Captured contents in discovery order.
    pub matches: Vec<String>,
    /// Text with every match replaced by the placeholder.
    pub rewritten: String,
}

/// Replace every match of `pattern` with `placeholder`, collecting the
/// captured contents.
///
/// The captured content of a match is its first participating group, or the
/// empty string when no group participates.
pub fn extract(text: &str, pattern: &Regex, placeholder: char) -> Extraction {
    let mut rewritten = text.to_string();
    let mut matches = Vec::new();

    while let Some(caps) = pattern.captures(&rewritten) {
        // An empty match would be replaced forever.
        let Some(whole) = caps.get(0).filter(|m| !m.is_empty()) else {
            break;
        };

        let range = whole.range();
        matches.push(first_group(&caps).to_string());

        let mut buf = [0u8; 4];
        rewritten.replace_range(range, placeholder.encode_utf8(&mut buf));
    }

    Extraction { matches, rewritten }
}

/// First capture group that took part in the match.
fn first_group<'h>(caps: &Captures<'h>) -> &'h str {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map_or("", |m| m.as_str())
}
