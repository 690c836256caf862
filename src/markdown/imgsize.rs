//! Image size syntax: `![alt](src =WxH)`.
//!
//! Either dimension may be omitted (`=100x`, `=x200`), and a quoted title may
//! sit between the source and the size. Matching images are rewritten to raw
//! `<img>` tags before the markdown engine runs. Code spans and code blocks
//! are located with a first parse and left as written.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use pulldown_cmark::{Event, Options, Parser, Tag};
use regex::{Captures, Regex};

use crate::utils::html;

static SIZED_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"!\[(?P<alt>[^\]]*)\]\((?P<src>[^\s)]+)(?:\s+"(?P<title>[^"]*)")?\s+=(?P<w>\d*)x(?P<h>\d*)\)"#,
    )
    .unwrap()
});

/// Rewrite sized images to `<img>` tags, leaving everything else as is.
pub fn rewrite(markdown: &str, options: Options) -> Cow<'_, str> {
    if !SIZED_IMAGE.is_match(markdown) {
        return Cow::Borrowed(markdown);
    }

    let code = code_ranges(markdown, options);
    SIZED_IMAGE.replace_all(markdown, |caps: &Captures<'_>| {
        let whole = &caps[0];
        let start = caps.get(0).map_or(0, |m| m.start());
        if code.iter().any(|range| range.contains(&start)) {
            return whole.to_string();
        }

        let width = caps.name("w").map_or("", |m| m.as_str());
        let height = caps.name("h").map_or("", |m| m.as_str());
        // `=x` carries no size at all
        if width.is_empty() && height.is_empty() {
            return whole.to_string();
        }

        let mut attrs = vec![("src", &caps["src"]), ("alt", &caps["alt"])];
        if let Some(title) = caps.name("title") {
            attrs.push(("title", title.as_str()));
        }
        if !width.is_empty() {
            attrs.push(("width", width));
        }
        if !height.is_empty() {
            attrs.push(("height", height));
        }
        html::void_tag("img", &attrs)
    })
}

/// Byte ranges of code spans and code blocks.
fn code_ranges(markdown: &str, options: Options) -> Vec<Range<usize>> {
    Parser::new_ext(markdown, options)
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::Code(_) | Event::Start(Tag::CodeBlock(_)) => Some(range),
            _ => None,
        })
        .collect()
}
