//! Title detection from the first level-1 heading.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// ATX (`# Title`) or Setext (`Title` over a line of `=`) level-1 heading.
///
/// Leftmost match wins, so the first heading in document order is used
/// whichever form it has.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:# (?P<atx>.*)|(?P<setext>.+)\r?\n=+[ \t]*\r?$)").unwrap()
});

/// Extract the document title from Markdown source.
///
/// Headings that are blank after trimming are skipped.
pub fn extract_title(text: &str) -> Result<String> {
    HEADING
        .captures_iter(text)
        .filter_map(|caps| caps.name("atx").or_else(|| caps.name("setext")))
        .map(|m| m.as_str().trim())
        .find(|title| !title.is_empty())
        .map(str::to_string)
        .ok_or(Error::NoTitleFound)
}
