//! Trait abstraction for the preference store to enable mocking in tests

use crate::state::ThemeMode;
use anyhow::Result;
use async_trait::async_trait;

/// Trait for preference persistence, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Load the stored theme, if any was ever saved
    async fn load_theme(&self) -> Option<ThemeMode>;

    /// Persist the theme choice
    async fn save_theme(&mut self, mode: ThemeMode) -> Result<()>;
}
