//! Command-line interface module.

mod args;
mod common;
pub mod convert;
pub mod title;

pub use args::{Cli, Commands, ConvertArgs};
