//! Persistence of the theme preference

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::domain::theme::Theme;

pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Option<Theme>,
}

/// Key-value storage for the user's theme choice
pub trait ThemeStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Theme>>;
    fn save(&self, theme: Theme) -> Result<()>;
}

/// Stores the preference as JSON in the data directory
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("Failed to read {}", self.path.display()))?;
        let prefs: Preferences = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(prefs.theme)
    }

    fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        let prefs = Preferences { theme: Some(theme) };
        let json = serde_json::to_string_pretty(&prefs)?;
        fs::write(&self.path, json)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Process-local store, used when no data directory is wanted
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Mutex<Option<Theme>>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>> {
        let theme = self.theme.lock().map_err(|e| eyre!("{e}"))?;
        Ok(*theme)
    }

    fn save(&self, theme: Theme) -> Result<()> {
        let mut slot = self.theme.lock().map_err(|e| eyre!("{e}"))?;
        *slot = Some(theme);
        Ok(())
    }
}

/// Saved preference if any, otherwise the system preference.
/// An unreadable store is treated as "nothing saved".
pub fn initial_theme(store: &dyn ThemeStore, system: Theme) -> Theme {
    match store.load() {
        Ok(Some(theme)) => theme,
        Ok(None) => system,
        Err(e) => {
            log::warn!("Ignoring unreadable theme preference: {e:#}");
            system
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_loads_none() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileThemeStore::in_dir(dir.path());
        assert_eq!(store.load()?, None);
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileThemeStore::in_dir(&dir.path().join("nested"));
        store.save(Theme::Light)?;
        assert_eq!(store.load()?, Some(Theme::Light));

        let raw = fs::read_to_string(store.path())?;
        assert!(raw.contains("\"light\""));
        Ok(())
    }

    #[test]
    fn test_initial_theme_prefers_saved_value() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileThemeStore::in_dir(dir.path());
        assert_eq!(initial_theme(&store, Theme::Dark), Theme::Dark);
        store.save(Theme::Light)?;
        assert_eq!(initial_theme(&store, Theme::Dark), Theme::Light);
        Ok(())
    }

    #[test]
    fn test_corrupt_file_falls_back_to_system() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileThemeStore::in_dir(dir.path());
        fs::write(store.path(), "{not json")?;
        assert!(store.load().is_err());
        assert_eq!(initial_theme(&store, Theme::Light), Theme::Light);
        Ok(())
    }

    #[test]
    fn test_memory_store() -> Result<()> {
        let store = MemoryThemeStore::default();
        assert_eq!(store.load()?, None);
        store.save(Theme::Dark)?;
        assert_eq!(store.load()?, Some(Theme::Dark));
        Ok(())
    }
}
