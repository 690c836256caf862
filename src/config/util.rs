//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/posts/drafts/  ← cwd
/// /home/user/blog/mdpost.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("posts/drafts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("mdpost.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("mdpost.toml")).unwrap();
        assert_eq!(found, dir.path().join("mdpost.toml"));
    }

    #[test]
    fn test_nearest_wins() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("mdpost.toml"), "").unwrap();
        fs::write(nested.join("mdpost.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("mdpost.toml")).unwrap();
        assert_eq!(found, nested.join("mdpost.toml"));
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("x.toml")).unwrap();
        assert!(find_config_from(dir.path(), Path::new("x.toml")).is_none());
    }
}
