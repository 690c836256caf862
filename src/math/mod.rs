//! Math rendering backends.
//!
//! - [`MathRenderer`] - backend seam used by the conversion pipeline
//! - [`MathMLRenderer`] - server-side LaTeX → MathML via `latex2mathml`

mod mathml;

pub use self::mathml::MathMLRenderer;

use crate::error::{Error, MathKind, Result};

/// Trait for math renderers.
///
/// Implementations must be pure: the same expression and kind always yield
/// the same markup.
pub trait MathRenderer {
    /// Render one expression, failing on invalid syntax when strict.
    ///
    /// The error message is wrapped by [`render_all`] with the span's
    /// position, so it only needs to describe the syntax problem.
    fn render(&self, expr: &str, kind: MathKind) -> std::result::Result<String, String>;
}

/// Render every expression of one kind, in order.
///
/// Failures carry the kind, occurrence index and source of the offending
/// expression.
pub fn render_all(
    renderer: &dyn MathRenderer,
    kind: MathKind,
    exprs: &[String],
) -> Result<Vec<String>> {
    exprs
        .iter()
        .enumerate()
        .map(|(index, expr)| {
            renderer
                .render(expr, kind)
                .map_err(|message| Error::MathSyntax {
                    kind,
                    index,
                    expr: expr.clone(),
                    message,
                })
        })
        .collect()
}
