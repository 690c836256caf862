//! Markdown → standalone HTML conversion.
//!
//! # Pipeline
//!
//! ```text
//! source ─▶ strip BOM ─▶ extract display math (〸) ─▶ extract inline math (〹)
//!                                                            │
//!        ┌── render each span (MathRenderer) ◀───────────────┤
//!        │                                                   ▼
//!        │                                      markdown engine (pulldown-cmark)
//!        │                                                   │
//!        └──────────────▶ reinsert 〸 fragments, then 〹 ◀────┘
//!                                      │
//!                  title (explicit or first heading) ─▶ page template
//! ```
//!
//! Math is cut out before the markdown engine runs so `*`, `_` and `\` inside
//! formulas are never read as markdown.

pub mod extract;
pub mod reinsert;
pub mod title;

use crate::debug;
use crate::error::{Error, MathKind, Result};
use crate::markdown::{self, MarkdownOptions};
use crate::math::{MathRenderer, render_all};
use crate::template::{PAGE_HTML, PageHead, PageVars};

use extract::{DISPLAY_MATH, INLINE_MATH, extract};
use reinsert::reinsert;

pub use title::extract_title;

/// Placeholder for display math.
pub const DISPLAY_PLACEHOLDER: char = '〸';
/// Placeholder for inline math.
pub const INLINE_PLACEHOLDER: char = '〹';

const BOM: char = '\u{FEFF}';

impl MathKind {
    /// Placeholder character reserved for this kind.
    pub const fn placeholder(self) -> char {
        match self {
            Self::Display => DISPLAY_PLACEHOLDER,
            Self::Inline => INLINE_PLACEHOLDER,
        }
    }
}

/// Remove a leading byte-order mark.
pub fn strip_bom(source: &str) -> &str {
    source.strip_prefix(BOM).unwrap_or(source)
}

/// Convert a post to a standalone HTML page.
///
/// Without an explicit `head.title`, the title is taken from the first
/// level-1 heading of the markdown source.
pub fn convert(
    source: &str,
    head: &PageHead,
    options: &MarkdownOptions,
    renderer: &dyn MathRenderer,
) -> Result<String> {
    let source = strip_bom(source);
    let body = render_body(source, options, renderer)?;

    let title = match &head.title {
        Some(title) => title.clone(),
        None => extract_title(source)?,
    };
    debug!("convert"; "title: {}", title);

    Ok(PAGE_HTML.render(&PageVars {
        head,
        title: &title,
        body: &body,
    }))
}

/// Convert a post to the HTML fragment placed inside `<article>`.
pub fn convert_fragment(
    source: &str,
    options: &MarkdownOptions,
    renderer: &dyn MathRenderer,
) -> Result<String> {
    render_body(strip_bom(source), options, renderer)
}

fn render_body(
    source: &str,
    options: &MarkdownOptions,
    renderer: &dyn MathRenderer,
) -> Result<String> {
    for kind in [MathKind::Display, MathKind::Inline] {
        let token = kind.placeholder();
        if source.contains(token) {
            return Err(Error::ReservedCharacter { kind, token });
        }
    }

    let display = extract(source, &DISPLAY_MATH, DISPLAY_PLACEHOLDER);
    let inline = extract(&display.rewritten, &INLINE_MATH, INLINE_PLACEHOLDER);
    debug!("math"; "{} display, {} inline", display.matches.len(), inline.matches.len());

    let display_html = render_all(renderer, MathKind::Display, &display.matches)?;
    let inline_html = render_all(renderer, MathKind::Inline, &inline.matches)?;

    let html = markdown::to_html(&inline.rewritten, options);

    let html = reinsert(&html, DISPLAY_PLACEHOLDER, MathKind::Display, display_html)?;
    reinsert(&html, INLINE_PLACEHOLDER, MathKind::Inline, inline_html)
}
