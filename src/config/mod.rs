//! Post configuration management for `mdpost.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── markdown   # [markdown]
//! │   ├── math       # [math]
//! │   └── page       # [page]
//! ├── error          # ConfigError
//! ├── util           # find_config_file
//! └── mod.rs         # PostConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[page]`     | Head defaults (language, favicon, styles, feed)  |
//! | `[markdown]` | Markdown engine switches and quote glyphs        |
//! | `[math]`     | Strict or lenient math rendering                 |
//!
//! The file is optional: without one every section takes its defaults.
//! Command-line flags override the file.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{MarkdownConfig, MathConfig, PageConfig};

use util::find_config_file;

use crate::{
    cli::{Cli, ConvertArgs},
    debug, log,
    markdown::MarkdownOptions,
    template::PageHead,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from cwd.
pub const CONFIG_FILE: &str = "mdpost.toml";

type Result<T> = std::result::Result<T, ConfigError>;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing mdpost.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Page head defaults
    pub page: PageConfig,

    /// Markdown engine settings
    pub markdown: MarkdownConfig,

    /// Math rendering settings
    pub math: MathConfig,
}

impl PostConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// An explicit `--config` must exist; otherwise `mdpost.toml` is searched
    /// upward from cwd and defaults are used when none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => match find_config_file(Path::new(CONFIG_FILE)) {
                Some(path) => path,
                None => {
                    debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
            },
        };

        let mut config = Self::from_path(&path)?;
        config.config_path = Some(path);
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        // Surface bad quotes at load time rather than mid-conversion
        config.markdown.to_options()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Markdown engine options from the `[markdown]` section.
    pub fn markdown_options(&self) -> Result<MarkdownOptions> {
        Ok(self.markdown.to_options()?)
    }

    /// Whether math errors abort the conversion.
    pub fn strict_math(&self, args: &ConvertArgs) -> bool {
        self.math.strict && !args.no_strict_math
    }

    /// Page head from the `[page]` section with command-line overrides.
    ///
    /// Title and description only come from the command line. Styles and
    /// scripts given there replace the configured lists.
    pub fn page_head(&self, args: &ConvertArgs) -> PageHead {
        let page = &self.page;
        PageHead {
            title: args.title.clone(),
            description: args.description.clone(),
            language: args
                .language
                .clone()
                .unwrap_or_else(|| page.language.clone()),
            favicon: args.favicon.clone().or_else(|| page.favicon.clone()),
            styles: Self::override_list(&args.styles, &page.styles),
            scripts: Self::override_list(&args.scripts, &page.scripts),
            feed: args.feed.clone().or_else(|| page.feed.clone()),
        }
    }

    fn override_list(cli: &[String], config: &[String]) -> Vec<String> {
        let list = if cli.is_empty() { config } else { cli };
        list.to_vec()
    }
}

// ============================================================================
// test helpers
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PostConfig {
    let (parsed, ignored) = PostConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn convert_args(args: &[&str]) -> ConvertArgs {
        let argv = ["mdpost", "convert"].into_iter().chain(args.iter().copied());
        match Cli::parse_from(argv).command {
            crate::cli::Commands::Convert { args } => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = PostConfig::parse_with_ignored("[page\nlanguage = \"en\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(test_parse_config(""), PostConfig::default());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[page]\nlanguage = \"fr\"\nfavicon_url = \"x\"\n[unknown_section]\nfield = 1";
        let (config, ignored) = PostConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.page.language, "fr");
        assert!(ignored.iter().any(|f| f.contains("favicon_url")));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[page]\nlanguage = \"en\"\n[math]\nstrict = false";
        let (_, ignored) = PostConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path_rejects_bad_quotes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[markdown]\nquotes = \"abc\"").unwrap();

        let err = PostConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Quotes(_)));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let cli = Cli::parse_from([
            "mdpost",
            "-C",
            missing.to_str().unwrap(),
            "title",
            "post.md",
        ]);

        let err = PostConfig::load(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::Io(path, _) if path == missing));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blog.toml");
        fs::write(&path, "[page]\nstyles = [\"s.css\"]").unwrap();
        let cli = Cli::parse_from(["mdpost", "-C", path.to_str().unwrap(), "title", "p.md"]);

        let config = PostConfig::load(&cli).unwrap();
        assert_eq!(config.page.styles, vec!["s.css"]);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_page_head_uses_config() {
        let config = test_parse_config(
            "[page]\nlanguage = \"de\"\nfavicon = \"f.ico\"\nstyles = [\"a.css\"]\nscripts = [\"a.js\"]\nfeed = \"/feed.xml\"",
        );
        let head = config.page_head(&convert_args(&["post.md"]));

        assert_eq!(head.title, None);
        assert_eq!(head.language, "de");
        assert_eq!(head.favicon.as_deref(), Some("f.ico"));
        assert_eq!(head.styles, vec!["a.css"]);
        assert_eq!(head.scripts, vec!["a.js"]);
        assert_eq!(head.feed.as_deref(), Some("/feed.xml"));
    }

    #[test]
    fn test_page_head_cli_overrides() {
        let config = test_parse_config(
            "[page]\nlanguage = \"de\"\nfavicon = \"f.ico\"\nstyles = [\"a.css\"]\nscripts = [\"a.js\"]",
        );
        let args = convert_args(&[
            "post.md", "-t", "T", "-d", "D", "-l", "en", "-f", "g.png", "-s", "b.css", "-s",
            "c.css",
        ]);
        let head = config.page_head(&args);

        assert_eq!(head.title.as_deref(), Some("T"));
        assert_eq!(head.description.as_deref(), Some("D"));
        assert_eq!(head.language, "en");
        assert_eq!(head.favicon.as_deref(), Some("g.png"));
        assert_eq!(head.styles, vec!["b.css", "c.css"]);
        // not given on the command line, so the configured list stays
        assert_eq!(head.scripts, vec!["a.js"]);
    }

    #[test]
    fn test_strict_math_override() {
        let config = PostConfig::default();
        assert!(config.strict_math(&convert_args(&["p.md"])));
        assert!(!config.strict_math(&convert_args(&["p.md", "--no-strict-math"])));

        let lenient = test_parse_config("[math]\nstrict = false");
        assert!(!lenient.strict_math(&convert_args(&["p.md"])));
    }
}
