//! Persistent user settings
//!
//! Settings live in a small JSON file that is rewritten in full on every
//! save. Loading merges the file over the defaults key by key, so one
//! invalid value keeps its default while the other keys survive. An
//! unreadable file or one that is not a JSON object yields the defaults.

use crate::error::SettingsError;
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding the settings file
const SETTINGS_DIR: &str = ".python_module_explorer";

/// Settings file name
const SETTINGS_FILE: &str = "config.json";

/// Default window size string
const DEFAULT_WINDOW_SIZE: &str = "900x700";

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::De => write!(f, "de"),
            Language::En => write!(f, "en"),
        }
    }
}

/// Everything persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Package names the user has marked
    pub selected_modules: BTreeSet<String>,
    pub theme: Theme,
    pub language: Language,
    /// Window geometry as `WIDTHxHEIGHT`
    pub window_size: String,
    pub auto_update: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_modules: BTreeSet::new(),
            theme: Theme::default(),
            language: Language::default(),
            window_size: DEFAULT_WINDOW_SIZE.to_string(),
            auto_update: false,
        }
    }
}

/// Reads and writes [`Settings`] at a fixed path
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user default location
    pub fn at_default_location() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                tracing::debug!("no settings file at {}, using defaults", self.path.display());
                Settings::default()
            }
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Settings::default()
            }
        }
    }

    /// Load settings, reporting why loading failed. `Ok(None)` means no file.
    pub fn try_load(&self) -> Result<Option<Settings>, SettingsError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| SettingsError::read_error(&self.path, e))?;
        let root: Value = serde_json::from_str(&content)
            .map_err(|e| SettingsError::parse_error(&self.path, e.to_string()))?;
        let Value::Object(fields) = root else {
            return Err(SettingsError::parse_error(
                &self.path,
                "expected a JSON object at the top level",
            ));
        };
        Ok(Some(self.merge(&fields)))
    }

    /// Apply each known key over the defaults; a bad value only costs its own key
    fn merge(&self, fields: &Map<String, Value>) -> Settings {
        let mut settings = Settings::default();
        self.merge_field(fields, "selected_modules", &mut settings.selected_modules);
        self.merge_field(fields, "theme", &mut settings.theme);
        self.merge_field(fields, "language", &mut settings.language);
        self.merge_field(fields, "window_size", &mut settings.window_size);
        self.merge_field(fields, "auto_update", &mut settings.auto_update);
        settings
    }

    fn merge_field<T: DeserializeOwned>(
        &self,
        fields: &Map<String, Value>,
        key: &str,
        slot: &mut T,
    ) {
        let Some(value) = fields.get(key) else {
            return;
        };
        match T::deserialize(value) {
            Ok(parsed) => *slot = parsed,
            Err(e) => tracing::warn!(
                "ignoring invalid '{}' in {}: {}",
                key,
                self.path.display(),
                e
            ),
        }
    }

    /// Overwrite the settings file with `settings`
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SettingsError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(settings).map_err(|e| {
            SettingsError::SerializeError {
                message: e.to_string(),
            }
        })?;
        fs::write(&self.path, json).map_err(|e| SettingsError::write_error(&self.path, e))
    }
}

/// `~/.python_module_explorer/config.json`, relative to the working directory
/// when no home directory is known
pub fn default_settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(SETTINGS_DIR)
        .join(SETTINGS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("nested").join("config.json"))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.selected_modules.is_empty());
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::De);
        assert_eq!(settings.window_size, "900x700");
        assert!(!settings.auto_update);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.try_load().unwrap().is_none());
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut settings = Settings::default();
        settings.selected_modules.insert("numpy".to_string());
        settings.theme = Theme::Dark;
        store.save(&settings).unwrap();

        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme": "dark", "unknown_key": 42}"#).unwrap();

        let settings = SettingsStore::new(&path).load();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.language, Language::De);
        assert_eq!(settings.window_size, "900x700");
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SettingsStore::new(&path);
        assert!(matches!(
            store.try_load(),
            Err(SettingsError::ParseError { .. })
        ));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_invalid_field_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"selected_modules": ["numpy", "pandas"], "theme": "Dark", "auto_update": "yes", "language": "en"}"#,
        )
        .unwrap();

        let settings = SettingsStore::new(&path).load();
        assert!(settings.selected_modules.contains("numpy"));
        assert!(settings.selected_modules.contains("pandas"));
        assert_eq!(settings.theme, Theme::Light);
        assert!(!settings.auto_update);
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn test_null_selection_falls_back_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"selected_modules": null, "theme": "dark"}"#).unwrap();

        let settings = SettingsStore::new(&path).load();
        assert!(settings.selected_modules.is_empty());
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_selection_survives_bad_theme_and_next_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"selected_modules": ["numpy", "pandas"], "theme": "Dark"}"#,
        )
        .unwrap();

        let mut session = crate::session::SelectionSession::load(SettingsStore::new(&path));
        assert!(session.contains("numpy"));
        session.add("x");

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written["selected_modules"],
            serde_json::json!(["numpy", "pandas", "x"])
        );
        assert_eq!(written["theme"], "light");
    }

    #[test]
    fn test_non_object_root_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"["numpy"]"#).unwrap();

        let store = SettingsStore::new(&path);
        assert!(matches!(
            store.try_load(),
            Err(SettingsError::ParseError { .. })
        ));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"selected_modules": ["b", "a", "b"]}"#).unwrap();

        let settings = SettingsStore::new(&path).load();
        let names: Vec<&str> = settings.selected_modules.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_file_uses_documented_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Settings::default()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        for key in [
            "selected_modules",
            "theme",
            "language",
            "window_size",
            "auto_update",
        ] {
            assert!(raw.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(raw["theme"], "light");
        assert_eq!(raw["language"], "de");
    }

    #[test]
    fn test_default_path_shape() {
        let path = default_settings_path();
        assert!(path.ends_with(".python_module_explorer/config.json"));
    }
}
