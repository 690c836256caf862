//! Markdown → HTML rendering via `pulldown-cmark`.
//!
//! The engine sees text where math has already been replaced by placeholder
//! characters; it must pass those through untouched, which `pulldown-cmark`
//! does for any character outside link destinations.

mod imgsize;
mod quotes;

use std::borrow::Cow;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

pub use quotes::{Quotes, QuotesError};

/// Options for markdown conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Pass raw HTML through (otherwise it is escaped as text)
    pub html: bool,
    /// Render soft line breaks as `<br />`
    pub breaks: bool,
    /// Enable smart punctuation (curly quotes, dashes, ellipsis)
    pub typographer: bool,
    /// Quote glyphs used by the typographer
    pub quotes: Quotes,
    /// Infer `width`/`height` from `![alt](src =WxH)`
    pub image_size: bool,
    /// Enable tables extension
    pub tables: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            html: true,
            breaks: true,
            typographer: true,
            quotes: Quotes::default(),
            image_size: true,
            tables: true,
            strikethrough: true,
        }
    }
}

impl MarkdownOptions {
    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.typographer {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        opts
    }

    /// Apply the options pulldown-cmark has no switch for.
    ///
    /// Text inside a code block is passed through untouched.
    fn adapt<'a>(&self, event: Event<'a>, in_code_block: bool) -> Event<'a> {
        match event {
            Event::SoftBreak if self.breaks => Event::HardBreak,
            Event::Html(raw) | Event::InlineHtml(raw) if !self.html => Event::Text(raw),
            Event::Text(text)
                if self.typographer && !self.quotes.is_default() && !in_code_block =>
            {
                Event::Text(self.quotes.apply(&text).into())
            }
            other => other,
        }
    }
}

/// Render markdown to an HTML fragment.
pub fn to_html(markdown: &str, options: &MarkdownOptions) -> String {
    let pulldown_options = options.to_pulldown_options();
    let source = if options.image_size && options.html {
        imgsize::rewrite(markdown, pulldown_options)
    } else {
        if options.image_size {
            crate::debug!("markdown"; "image size inference needs raw html, skipped");
        }
        Cow::Borrowed(markdown)
    };

    let mut in_code_block = false;
    let events = Parser::new_ext(&source, pulldown_options).map(|event| {
        match &event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            _ => {}
        }
        options.adapt(event, in_code_block)
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, events);
    output
}
