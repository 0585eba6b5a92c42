use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{BulletinError, Result};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl Config {
    /// Load `bulletin.yml` from the platform config directory, falling back
    /// to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        match Self::config_file() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "bulletin")
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("bulletin.yml"))
    }

    /// Where the access token is persisted between sessions.
    pub fn token_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()
            .ok_or_else(|| BulletinError::Config("No home directory available".to_string()))?;
        Ok(dirs.data_dir().join("token"))
    }
}
