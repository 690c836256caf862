//! Utility modules shared by the pipeline and the page template.

pub mod html;
pub mod mime;
