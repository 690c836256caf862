//! MIME type detection for `<head>` links.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    // Web feeds
    pub const RSS: &str = "application/rss+xml";

    // Images
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
}

/// Get MIME type for favicon/icon files.
///
/// Defaults to `image/x-icon` for unknown types, which is what browsers
/// assume for favicons anyway.
pub fn for_icon(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).map(|s| s.to_lowercase()) {
        Some(ext) => match ext.as_str() {
            "png" => types::PNG,
            "svg" => types::SVG,
            "avif" => types::AVIF,
            "webp" => types::WEBP,
            "gif" => types::GIF,
            "jpg" | "jpeg" => types::JPEG,
            _ => types::ICO,
        },
        None => types::ICO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_for_icon() {
        assert_eq!(for_icon(&PathBuf::from("favicon.ico")), types::ICO);
        assert_eq!(for_icon(&PathBuf::from("../favicon.png")), types::PNG);
        assert_eq!(for_icon(&PathBuf::from("favicon.gif")), types::GIF);
        assert_eq!(for_icon(&PathBuf::from("favicon.svg")), types::SVG);
        assert_eq!(for_icon(&PathBuf::from("FAVICON.PNG")), types::PNG);
        assert_eq!(for_icon(&PathBuf::from("favicon.unknown")), types::ICO);
        assert_eq!(for_icon(&PathBuf::from("favicon")), types::ICO);
    }
}
