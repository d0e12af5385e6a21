//! Data-directory resolution
//!
//! The workbench keeps its blobs under one directory. Resolution order:
//! `SAHAM_DATA_DIR` when set, otherwise `.sahamlab` under the home
//! directory, otherwise `.sahamlab` relative to the working directory.

use std::path::PathBuf;

const DATA_DIR_ENV: &str = "SAHAM_DATA_DIR";
const DATA_DIR_NAME: &str = ".sahamlab";

/// Resolve the workbench data directory
pub fn data_dir() -> PathBuf {
    let explicit = std::env::var(DATA_DIR_ENV).ok();
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok();
    resolve(explicit.as_deref(), home.as_deref())
}

fn resolve(explicit: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(dir) = explicit {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    match home {
        Some(home) => PathBuf::from(home).join(DATA_DIR_NAME),
        None => PathBuf::from(DATA_DIR_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_override_wins() {
        let dir = resolve(Some("/srv/saham"), Some("/home/adi"));
        assert_eq!(dir, PathBuf::from("/srv/saham"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let dir = resolve(Some("  "), Some("/home/adi"));
        assert_eq!(dir, PathBuf::from("/home/adi/.sahamlab"));
    }

    #[test]
    fn test_falls_back_to_relative_without_home() {
        assert_eq!(resolve(None, None), PathBuf::from(DATA_DIR_NAME));
    }
}
