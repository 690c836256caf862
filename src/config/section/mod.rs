//! Configuration sections of `mdpost.toml`.

mod markdown;
mod math;
mod page;

pub use markdown::MarkdownConfig;
pub use math::MathConfig;
pub use page::PageConfig;
