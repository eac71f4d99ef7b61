//! Theme preference: the single persisted flag of the site.
//!
//! The stored value is the string `"light"` or `"dark"` under the `theme`
//! key. Anything other than `"light"` (including a missing or unreadable
//! store) means dark, which is the site default.

use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

const THEME_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preference file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value store holding local preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Colour scheme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a stored value. Only `"light"` selects the light theme.
    pub fn from_stored(value: &str) -> Self {
        if value == "light" {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme plus the operations the page needs on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    mode: ThemeMode,
}

impl ThemePreference {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Read the stored preference, falling back to dark on any store error.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(Some(v)) => ThemeMode::from_stored(&v),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                tracing::warn!(error = %e, "theme preference unreadable, using dark");
                ThemeMode::default()
            }
        };
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip between dark and light and return the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "theme toggled");
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    pub fn persist(&self, store: &mut dyn PreferenceStore) -> Result<(), PreferenceError> {
        store.set(THEME_KEY, self.mode.as_str())
    }
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// In-memory store, for tests and for hosts without a writable disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore(HashMap<String, String>);

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk, e.g. `~/.config/folio/preferences.json`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, PreferenceError> {
        let src = match std::fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(source) => {
                return Err(PreferenceError::Io { path: self.path.clone(), source });
            }
        };
        serde_json::from_str(&src)
            .map_err(|source| PreferenceError::Parse { path: self.path.clone(), source })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let io_err = |source: std::io::Error| PreferenceError::Io { path: self.path.clone(), source };
        let mut all = self.read_all()?;
        all.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(&all)
            .map_err(|source| PreferenceError::Parse { path: self.path.clone(), source })?;
        std::fs::write(&self.path, body).map_err(io_err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
