//! Selection session
//!
//! One [`SelectionSession`] exists per application instance. It owns the
//! loaded [`Settings`] and writes them through to disk on every mutation.
//! A failed write is logged and the in-memory state stays authoritative.

use crate::config::{Language, Settings, SettingsStore, Theme};
use std::collections::BTreeSet;

/// The user's marked packages and preferences
#[derive(Debug)]
pub struct SelectionSession {
    store: SettingsStore,
    settings: Settings,
}

impl SelectionSession {
    /// Load the session from `store`, falling back to defaults
    pub fn load(store: SettingsStore) -> Self {
        let settings = store.load();
        tracing::debug!(
            "loaded {} selected module(s) from {}",
            settings.selected_modules.len(),
            store.path().display()
        );
        Self { store, settings }
    }

    /// Session over already-loaded settings
    pub fn with_settings(store: SettingsStore, settings: Settings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Mark a package. Returns true if it was not marked before.
    pub fn add(&mut self, name: &str) -> bool {
        let inserted = self.settings.selected_modules.insert(name.to_string());
        self.persist();
        inserted
    }

    /// Mark several packages with a single write. Returns how many were new.
    pub fn add_all<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = names
            .into_iter()
            .filter(|n| self.settings.selected_modules.insert(n.as_ref().to_string()))
            .count();
        self.persist();
        added
    }

    /// Unmark a package. Returns true if it was marked.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.settings.selected_modules.remove(name);
        self.persist();
        removed
    }

    /// Unmark every package. Returns how many were marked.
    pub fn clear(&mut self) -> usize {
        let count = self.settings.selected_modules.len();
        self.settings.selected_modules.clear();
        self.persist();
        count
    }

    pub fn contains(&self, name: &str) -> bool {
        self.settings.selected_modules.contains(name)
    }

    /// Marked packages in sorted order
    pub fn all(&self) -> &BTreeSet<String> {
        &self.settings.selected_modules
    }

    pub fn is_empty(&self) -> bool {
        self.settings.selected_modules.is_empty()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.persist();
    }

    pub fn set_language(&mut self, language: Language) {
        self.settings.language = language;
        self.persist();
    }

    pub fn set_window_size(&mut self, size: &str) {
        self.settings.window_size = size.to_string();
        self.persist();
    }

    pub fn set_auto_update(&mut self, enabled: bool) {
        self.settings.auto_update = enabled;
        self.persist();
    }

    /// Write the full settings object. Returns false if the write failed.
    pub fn persist(&self) -> bool {
        match self.store.save(&self.settings) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("could not save settings: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_in(dir: &tempfile::TempDir) -> SelectionSession {
        SelectionSession::load(SettingsStore::new(dir.path().join("config.json")))
    }

    #[test]
    fn test_add_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        assert!(session.add("x"));

        let reloaded = session_in(&dir);
        assert!(reloaded.contains("x"));
    }

    #[test]
    fn test_add_is_set_semantics() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        assert!(session.add("numpy"));
        assert!(!session.add("numpy"));
        assert_eq!(session.all().len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        session.add("Flask");
        assert!(session.contains("Flask"));
        assert!(!session.contains("flask"));
    }

    #[test]
    fn test_remove_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        assert_eq!(session.add_all(["a", "b", "c"]), 3);
        assert!(session.remove("b"));
        assert!(!session.remove("b"));
        assert_eq!(session.clear(), 2);
        assert!(session.is_empty());

        assert!(session_in(&dir).is_empty());
    }

    #[test]
    fn test_preferences_persist() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        session.set_theme(Theme::Dark);
        session.set_language(Language::En);
        session.set_window_size("1024x768");
        session.set_auto_update(true);

        let settings = session_in(&dir).settings().clone();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.window_size, "1024x768");
        assert!(settings.auto_update);
    }

    #[test]
    fn test_failed_persist_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every write fail
        let path = dir.path().join("config.json");
        std::fs::create_dir(&path).unwrap();

        let mut session =
            SelectionSession::with_settings(SettingsStore::new(&path), Settings::default());
        session.add("pandas");
        assert!(session.contains("pandas"));
        assert!(!session.persist());
    }
}
