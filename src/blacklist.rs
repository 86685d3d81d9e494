//! Blacklist management module
//!
//! Optional list of common passwords, loaded from the file named by
//! `--blacklist` / `MEOWPASS_BLACKLIST_PATH`. Candidates found in it lose
//! strength points and carry a reason; they are still shown.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// A loaded set of common passwords. Entries are stored trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Reads one password per line; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();
        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist not found: {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist: Blacklist = content.lines().collect();

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist is empty: {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist loaded: {} passwords from {}",
            blacklist.len(),
            path.display()
        );

        Ok(blacklist)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|l| l.as_ref().trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_file_not_found() {
        let result = Blacklist::from_path("/nonexistent/path/common.txt");
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));
    }

    #[test]
    fn test_load_blank_file_is_empty() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "   ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");

        let result = Blacklist::from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    fn test_load_success_and_lookup() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Password123").expect("Failed to write");
        writeln!(temp_file, "  qwerty  ").expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");

        let blacklist = Blacklist::from_path(temp_file.path()).unwrap();
        assert_eq!(blacklist.len(), 2);
        assert!(blacklist.contains("password123"));
        assert!(blacklist.contains("QWERTY"));
        assert!(!blacklist.contains("x7#Kq!pL2@vN9$wR"));
    }

    #[test]
    fn test_separate_lists_do_not_interfere() {
        let first: Blacklist = ["alpha"].into_iter().collect();
        let second: Blacklist = ["beta"].into_iter().collect();

        assert!(first.contains("alpha"));
        assert!(!first.contains("beta"));
        assert!(second.contains("beta"));
        assert!(Blacklist::default().is_empty());
    }
}
