//! Common utilities shared across CLI commands.

use std::fs;
use std::path::Path;

use crate::debug;
use crate::error::{Error, Result};

/// Read a markdown post, reporting a missing file distinctly from other I/O errors.
pub fn read_post(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let source = fs::read_to_string(path)?;
    debug!("read"; "{} ({} bytes)", path.display(), source.len());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_post() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "# Hi\n").unwrap();
        assert_eq!(read_post(&path).unwrap(), "# Hi\n");
    }

    #[test]
    fn test_missing_post() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");
        assert!(matches!(read_post(&path), Err(Error::FileNotFound(p)) if p == path));
    }

    #[test]
    fn test_directory_is_not_a_post() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(read_post(dir.path()), Err(Error::FileNotFound(_))));
    }
}
