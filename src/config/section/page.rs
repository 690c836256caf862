//! `[page]` section configuration.
//!
//! Document-level defaults shared by every converted post.
//!
//! # Example
//!
//! ```toml
//! [page]
//! language = "en"                           # <html lang>
//! favicon = "../favicon.png"                # type inferred from extension
//! styles = ["style.css", "katex.min.css"]   # <link rel="stylesheet">
//! scripts = []                              # <script src>
//! feed = "/feed.xml"                        # RSS alternate link
//! ```

use serde::{Deserialize, Serialize};

/// Page head defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Value of `<html lang>`.
    pub language: String,
    pub favicon: Option<String>,
    /// Stylesheet hrefs, in order.
    pub styles: Vec<String>,
    /// Script srcs, in order.
    pub scripts: Vec<String>,
    /// RSS feed href.
    pub feed: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            language: "en".into(),
            favicon: None,
            styles: Vec::new(),
            scripts: Vec::new(),
            feed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.page.language, "en");
        assert!(config.page.favicon.is_none());
        assert!(config.page.styles.is_empty());
        assert!(config.page.feed.is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[page]\nlanguage = \"de\"\nstyles = [\"a.css\", \"b.css\"]\nfeed = \"/rss.xml\"",
        );
        assert_eq!(config.page.language, "de");
        assert_eq!(config.page.styles, vec!["a.css", "b.css"]);
        assert_eq!(config.page.feed.as_deref(), Some("/rss.xml"));
    }
}
