//! Standalone post page.
//!
//! ```text
//! <!DOCTYPE html>
//! <html lang="en">
//! <head>
//! <meta charset="utf-8">
//! <meta name="description" content="...">
//! <title>...</title>
//! <meta name="viewport" content="width=device-width">
//! <link rel="stylesheet" ...> <link rel="stylesheet" ...>
//! <script src="..."></script> <script src="..."></script>
//! <link rel="shortcut icon" type="..." href="...">
//! <link rel="alternate" type="application/rss+xml" href="...">
//! </head>
//! <body>
//! <article>...</article>
//! </body>
//! </html>
//! ```

use std::path::Path;

use super::{Template, TemplateVars};
use crate::utils::{html, mime};

/// Document-level metadata placed in `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHead {
    /// Explicit title; derived from the first heading when `None`.
    pub title: Option<String>,
    pub description: Option<String>,
    /// Value of `<html lang>`.
    pub language: String,
    /// Favicon href; its MIME type comes from the extension.
    pub favicon: Option<String>,
    pub styles: Vec<String>,
    pub scripts: Vec<String>,
    /// RSS feed href.
    pub feed: Option<String>,
}

impl Default for PageHead {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            language: "en".into(),
            favicon: None,
            styles: Vec::new(),
            scripts: Vec::new(),
            feed: None,
        }
    }
}

impl PageHead {
    /// Render the `<head>` children, one per line.
    fn render(&self, title: &str) -> String {
        let mut lines = vec![r#"<meta charset="utf-8">"#.to_string()];

        if let Some(description) = &self.description {
            lines.push(html::void_tag(
                "meta",
                &[("name", "description"), ("content", description)],
            ));
        }

        lines.push(format!("<title>{}</title>", html::escape(title)));
        lines.push(r#"<meta name="viewport" content="width=device-width">"#.to_string());

        if !self.styles.is_empty() {
            lines.push(join(&self.styles, stylesheet_tag));
        }
        if !self.scripts.is_empty() {
            lines.push(join(&self.scripts, script_tag));
        }

        if let Some(favicon) = &self.favicon {
            lines.push(html::void_tag(
                "link",
                &[
                    ("rel", "shortcut icon"),
                    ("type", mime::for_icon(Path::new(favicon))),
                    ("href", favicon),
                ],
            ));
        }

        if let Some(feed) = &self.feed {
            lines.push(html::void_tag(
                "link",
                &[
                    ("rel", "alternate"),
                    ("type", mime::types::RSS),
                    ("href", feed),
                ],
            ));
        }

        lines.join("\n")
    }
}

/// Space-join the tags for a list of hrefs.
fn join(hrefs: &[String], tag: fn(&str) -> String) -> String {
    hrefs.iter().map(|href| tag(href)).collect::<Vec<_>>().join(" ")
}

fn stylesheet_tag(href: &str) -> String {
    html::void_tag(
        "link",
        &[("rel", "stylesheet"), ("type", "text/css"), ("href", href)],
    )
}

fn script_tag(src: &str) -> String {
    format!(r#"<script src="{}"></script>"#, html::escape_attr(src))
}

/// Variables for page.html template.
pub struct PageVars<'a> {
    pub head: &'a PageHead,
    /// Resolved title (explicit or derived).
    pub title: &'a str,
    /// Rendered article HTML.
    pub body: &'a str,
}

impl TemplateVars for PageVars<'_> {
    fn apply(&self, content: &str) -> String {
        let language = html::escape_attr(&self.head.language);
        let head = self.head.render(self.title);
        fill_slots(
            content,
            &[
                ("__MDPOST_LANG__", &*language),
                ("__MDPOST_HEAD__", head.as_str()),
                ("__MDPOST_BODY__", self.body),
            ],
        )
    }
}

/// Replace each slot in a single pass over `content`.
///
/// Inserted values are never searched for slots.
fn fill_slots(content: &str, slots: &[(&str, &str)]) -> String {
    let extra: usize = slots.iter().map(|(_, value)| value.len()).sum();
    let mut output = String::with_capacity(content.len() + extra);
    let mut rest = content;

    while let Some((pos, name, value)) = slots
        .iter()
        .filter_map(|&(name, value)| rest.find(name).map(|pos| (pos, name, value)))
        .min_by_key(|&(pos, _, _)| pos)
    {
        output.push_str(&rest[..pos]);
        output.push_str(value);
        rest = &rest[pos + name.len()..];
    }
    output.push_str(rest);
    output
}

/// Standalone page template.
pub const PAGE_HTML: Template<PageVars<'static>> = Template::new(include_str!("page.html"));
