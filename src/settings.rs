//! Persisted plugin settings
//!
//! The only state that outlives one invocation is the default heading level
//! pre-filled in the level prompt. It is stored as a small JSON record:
//!
//! ```json
//! { "defaultLevel": 4 }
//! ```
//!
//! Location priority:
//! 1. `HEADER_COUNT_SETTINGS` environment variable
//! 2. `<config dir>/header-count/settings.json`

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{ENV_SETTINGS_PATH, SETTINGS_DIR, SETTINGS_FILENAME};
use crate::error::{HeaderCountError, Result};
use crate::level::HeadingLevel;

/// Plugin settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub default_level: HeadingLevel,
}

/// Host-managed storage for [`Settings`]
pub trait SettingsStore {
    /// Load settings, falling back to defaults when nothing usable is stored
    fn load(&self) -> Result<Settings>;

    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Resolve the settings file path from the environment or the config dir
pub fn settings_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = std::env::var(ENV_SETTINGS_PATH).ok().filter(|s| !s.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|p| p.join(SETTINGS_DIR).join(SETTINGS_FILENAME))
}

/// Settings kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Settings file unreadable, using defaults"
                );
                return Ok(Settings::default());
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Ignoring unusable settings file"
                );
                Ok(Settings::default())
            }
        }
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let write_failed = |source| HeaderCountError::SettingsWriteFailed {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content).map_err(write_failed)?;
        debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

/// Settings held in memory only
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: RefCell<Option<Settings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RefCell::new(Some(settings)),
        }
    }

    /// Whatever was last saved, if anything
    pub fn saved(&self) -> Option<Settings> {
        *self.settings.borrow()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Settings> {
        Ok(self.settings.borrow().unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        *self.settings.borrow_mut() = Some(*settings);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSettingsStore::new(temp_dir.path().join("settings.json"));
        assert_eq!(store.load().unwrap().default_level.get(), 4);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");
        let store = JsonSettingsStore::new(&path);

        let settings = Settings {
            default_level: HeadingLevel::new(2).unwrap(),
        };
        store.save(&settings).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"defaultLevel\": 2"));
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonSettingsStore::new(&path);
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_unreadable_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();
        let store = JsonSettingsStore::new(&path);
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_directory_path_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSettingsStore::new(temp_dir.path());
        assert_eq!(store.load().unwrap().default_level.get(), 4);
    }

    #[test]
    fn test_unreadable_file_can_be_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, [0xff, 0xfe]).unwrap();
        let store = JsonSettingsStore::new(&path);

        let settings = Settings {
            default_level: HeadingLevel::new(3).unwrap(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_out_of_range_level_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{"defaultLevel": 9}"#).unwrap();
        let store = JsonSettingsStore::new(&path);
        assert_eq!(store.load().unwrap().default_level.get(), 4);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();
        let store = JsonSettingsStore::new(&path);
        assert_eq!(store.load().unwrap().default_level.get(), 4);
    }

    #[test]
    fn test_settings_path_explicit_wins() {
        let path = settings_path(Some("/tmp/custom.json")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.load().unwrap(), Settings::default());
        assert!(store.saved().is_none());

        let settings = Settings {
            default_level: HeadingLevel::new(6).unwrap(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.saved(), Some(settings));
        assert_eq!(store.load().unwrap(), settings);
    }
}
