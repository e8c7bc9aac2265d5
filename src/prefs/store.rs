//! File-backed preference store

use super::traits::PreferenceStore;
use crate::state::ThemeMode;
use anyhow::Result;
use async_trait::async_trait;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// On-disk preference document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct StoredPrefs {
    /// Theme choice, `"light"` or `"dark"`
    theme: Option<ThemeMode>,
}

/// Preference store writing JSON under the platform config directory
#[derive(Debug)]
pub struct FilePreferences {
    path: Option<PathBuf>,
}

impl FilePreferences {
    pub fn new() -> Self {
        Self {
            path: Self::prefs_path(),
        }
    }

    #[cfg(test)]
    fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Get the preference file path
    fn prefs_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "frontdesk", "frontdesk-tui")
            .map(|dirs| dirs.config_dir().join("prefs.json"))
    }

    fn read(&self) -> StoredPrefs {
        let Some(path) = &self.path else {
            return StoredPrefs::default();
        };
        if !path.exists() {
            return StoredPrefs::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(%err, "preference file unreadable, using defaults");
                StoredPrefs::default()
            }),
            Err(err) => {
                tracing::warn!(%err, "preference file unreadable, using defaults");
                StoredPrefs::default()
            }
        }
    }

    fn write(&self, prefs: &StoredPrefs) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(prefs)?;
            fs::write(path, content)?;
        }
        Ok(())
    }
}

impl Default for FilePreferences {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for FilePreferences {
    async fn load_theme(&self) -> Option<ThemeMode> {
        self.read().theme
    }

    async fn save_theme(&mut self, mode: ThemeMode) -> Result<()> {
        let mut prefs = self.read();
        prefs.theme = Some(mode);
        self.write(&prefs)
    }
}
