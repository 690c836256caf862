//! Conversion error types.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of math environment.
///
/// Display math (`$$...$$`, `\[...\]`) and inline math (`$...$`, `\(...\)`)
/// are extracted, rendered and reinserted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathKind {
    Display,
    Inline,
}

impl MathKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Inline => "inline",
        }
    }
}

impl fmt::Display for MathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while converting a post.
///
/// Every variant is terminal for the conversion: no partial output is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{} does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("no title found: the document has no `# ` or `===` heading, pass one with --title")]
    NoTitleFound,

    #[error("invalid {kind} math #{} `{expr}`: {message}", .index + 1)]
    MathSyntax {
        kind: MathKind,
        /// Zero-based occurrence index among spans of the same kind.
        index: usize,
        expr: String,
        message: String,
    },

    #[error(
        "{kind} math placeholder mismatch: {expected} rendered fragment(s) but {found} placeholder(s) in the html"
    )]
    PlaceholderMismatch {
        kind: MathKind,
        expected: usize,
        found: usize,
    },

    #[error("source contains the reserved {kind} math placeholder {token:?}")]
    ReservedCharacter { kind: MathKind, token: char },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_syntax_display_is_one_based() {
        let err = Error::MathSyntax {
            kind: MathKind::Inline,
            index: 0,
            expr: "\\frac{1}{".into(),
            message: "unexpected end".into(),
        };
        let display = err.to_string();
        assert!(display.contains("inline math #1"));
        assert!(display.contains("\\frac{1}{"));
    }

    #[test]
    fn test_mismatch_display() {
        let err = Error::PlaceholderMismatch {
            kind: MathKind::Display,
            expected: 2,
            found: 1,
        };
        let display = err.to_string();
        assert!(display.contains("display math"));
        assert!(display.contains("2 rendered"));
        assert!(display.contains("1 placeholder"));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = Error::FileNotFound(PathBuf::from("post.md"));
        assert_eq!(err.to_string(), "post.md does not exist");
    }
}
