//! Title command implementation.

use std::path::Path;

use anyhow::Result;

use super::common::read_post;
use crate::pipeline::{extract_title, strip_bom};

/// Derive the title of a post.
pub fn post_title(input: &Path) -> Result<String> {
    let source = read_post(input)?;
    Ok(extract_title(strip_bom(&source))?)
}

/// Print the title of a post to stdout.
pub fn print_title(input: &Path) -> Result<()> {
    println!("{}", post_title(input)?);
    Ok(())
}
