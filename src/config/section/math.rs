//! `[math]` section configuration.
//!
//! ```toml
//! [math]
//! strict = true   # fail on invalid LaTeX instead of rendering an error span
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    pub strict: bool,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}
