//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Convert markdown blog posts with LaTeX math into standalone HTML pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search for mdpost.toml upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print debug messages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert a markdown post to a standalone HTML page
    #[command(visible_alias = "c")]
    Convert {
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Print the title derived from a post's first heading
    #[command(visible_alias = "t")]
    Title {
        /// Markdown file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,
    },
}

/// Convert command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Markdown file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Page title (default: first `#` or `===` heading)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Page description for `<meta name="description">`
    #[arg(short, long)]
    pub description: Option<String>,

    /// Favicon href; type is inferred from the extension
    #[arg(short, long)]
    pub favicon: Option<String>,

    /// Stylesheet href (repeatable, replaces configured styles)
    #[arg(short, long = "style", value_name = "HREF")]
    pub styles: Vec<String>,

    /// Script src (repeatable, replaces configured scripts)
    #[arg(short = 'j', long = "script", value_name = "SRC")]
    pub scripts: Vec<String>,

    /// RSS feed href
    #[arg(long, value_name = "HREF")]
    pub feed: Option<String>,

    /// Value of `<html lang>`
    #[arg(short, long = "lang", value_name = "LANG")]
    pub language: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Render invalid math as an inline error instead of failing
    #[arg(long)]
    pub no_strict_math: bool,

    /// Print only the article body, without the page around it
    #[arg(long)]
    pub fragment: bool,
}
