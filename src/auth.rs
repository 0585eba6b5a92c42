//! Persisted credential store: a single access token in a flat file.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

/// Stores the access token as one trimmed line on disk.
///
/// The store never caches the token in memory; `load` re-reads the file so
/// that a token removed out-of-band is noticed on the next use.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        debug!(path = %self.path.display(), "saved token");
        Ok(())
    }

    /// Returns the stored token, or `None` when absent or empty.
    pub fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn is_present(&self) -> bool {
        self.load().is_some()
    }
}
