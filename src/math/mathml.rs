//! MathML renderer.

use latex2mathml::{DisplayStyle, latex_to_mathml};

use super::MathRenderer;
use crate::error::MathKind;
use crate::utils::html;

/// Renderer that converts LaTeX to MathML.
#[derive(Debug, Clone, Copy)]
pub struct MathMLRenderer {
    /// Raise on invalid syntax instead of emitting an error span.
    strict: bool,
}

impl MathMLRenderer {
    /// Create a new MathML renderer.
    pub const fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Markup used in place of an expression that failed to parse.
    fn fallback(expr: &str, kind: MathKind) -> String {
        format!(
            r#"<span class="math {kind} math-error">{}</span>"#,
            html::escape(expr)
        )
    }
}

/// Marker `latex2mathml` writes into its output for input it could not parse.
const PARSE_ERROR: &str = "[PARSE ERROR: ";

/// Parse failure embedded in otherwise successful output.
fn embedded_error(mathml: &str) -> Option<&str> {
    let start = mathml.find(PARSE_ERROR)? + PARSE_ERROR.len();
    let rest = &mathml[start..];
    let end = rest.find("]</mtext>").unwrap_or(rest.len());
    Some(&rest[..end])
}

impl Default for MathMLRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MathRenderer for MathMLRenderer {
    fn render(&self, expr: &str, kind: MathKind) -> Result<String, String> {
        let style = match kind {
            MathKind::Display => DisplayStyle::Block,
            MathKind::Inline => DisplayStyle::Inline,
        };

        let error = match latex_to_mathml(expr, style) {
            Ok(mathml) => match embedded_error(&mathml) {
                None => return Ok(format!(r#"<span class="math {kind}">{mathml}</span>"#)),
                Some(message) => message.to_string(),
            },
            Err(e) => e.to_string(),
        };

        if self.strict {
            return Err(error);
        }
        crate::log!("math"; "rendering `{}` as source: {}", expr, error);
        Ok(Self::fallback(expr, kind))
    }
}
