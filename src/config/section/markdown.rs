//! `[markdown]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! html = true            # pass raw HTML through
//! breaks = true          # soft line breaks become <br />
//! typographer = true     # smart quotes and dashes
//! quotes = "“”‘’"        # open/close double, open/close single
//! image_size = true      # ![alt](src =WxH)
//! tables = true
//! strikethrough = true
//! ```

use serde::{Deserialize, Serialize};

use crate::markdown::{MarkdownOptions, Quotes, QuotesError};

/// Markdown engine switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub html: bool,
    pub breaks: bool,
    pub typographer: bool,
    /// Exactly four glyphs, validated by [`MarkdownConfig::to_options`].
    pub quotes: String,
    pub image_size: bool,
    pub tables: bool,
    pub strikethrough: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        let options = MarkdownOptions::default();
        Self {
            html: options.html,
            breaks: options.breaks,
            typographer: options.typographer,
            quotes: options.quotes.to_string(),
            image_size: options.image_size,
            tables: options.tables,
            strikethrough: options.strikethrough,
        }
    }
}

impl MarkdownConfig {
    /// Build engine options, validating the quote glyphs.
    pub fn to_options(&self) -> Result<MarkdownOptions, QuotesError> {
        Ok(MarkdownOptions {
            html: self.html,
            breaks: self.breaks,
            typographer: self.typographer,
            quotes: self.quotes.parse::<Quotes>()?,
            image_size: self.image_size,
            tables: self.tables,
            strikethrough: self.strikethrough,
        })
    }
}
