//! Configuration types for folio.
//!
//! [`Config::load`] reads `~/.config/folio/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::dropdown::DropdownSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
min_query_chars = 2
max_suggestions = 6
blur_grace_ms   = 150
fallback_path   = "/search"

[site]
base_url = "http://127.0.0.1:5000"

[ui]
toast_duration_ms    = 3000
carousel_interval_ms = 5000

[keybindings]
search_focus = "/"
command      = ":"
toggle_theme = "t"
help         = "?"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Grace delay between the input losing focus and the list closing.
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,
}

fn default_min_query_chars() -> usize { 2 }
fn default_max_suggestions() -> usize { 6 }
fn default_blur_grace_ms() -> u64 { 150 }
fn default_fallback_path() -> String { "/search".to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: default_min_query_chars(),
            max_suggestions: default_max_suggestions(),
            blur_grace_ms: default_blur_grace_ms(),
            fallback_path: default_fallback_path(),
        }
    }
}

impl SearchConfig {
    pub fn dropdown_settings(&self) -> DropdownSettings {
        DropdownSettings {
            min_query_chars: self.min_query_chars,
            max_suggestions: self.max_suggestions,
            fallback_path: self.fallback_path.clone(),
        }
        .clamped()
    }
}

/// `[site]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Origin the contact, newsletter and testimonial endpoints live on.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String { "http://127.0.0.1:5000".to_string() }

impl Default for SiteConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_carousel_interval_ms")]
    pub carousel_interval_ms: u64,
}

fn default_toast_duration_ms() -> u64 { 3_000 }
fn default_carousel_interval_ms() -> u64 { 5_000 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            carousel_interval_ms: default_carousel_interval_ms(),
        }
    }
}

impl UiConfig {
    /// Toast lifetime. Values too large for a chrono duration saturate.
    pub fn toast_duration(&self) -> chrono::Duration {
        i64::try_from(self.toast_duration_ms)
            .ok()
            .and_then(chrono::Duration::try_milliseconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_search_focus")]
    pub search_focus: String,
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_toggle_theme")]
    pub toggle_theme: String,
    #[serde(default = "default_help")]
    pub help: String,
}

fn default_search_focus() -> String { "/".to_string() }
fn default_command() -> String { ":".to_string() }
fn default_toggle_theme() -> String { "t".to_string() }
fn default_help() -> String { "?".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            search_focus: default_search_focus(),
            command: default_command(),
            toggle_theme: default_toggle_theme(),
            help: default_help(),
        }
    }
}

impl KeybindingsConfig {
    /// First character of a binding, for single-key matching.
    pub fn key(binding: &str) -> Option<char> {
        binding.chars().next()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/folio/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_dir().join("config.toml");

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on top of the built-in defaults. A
    /// missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `$XDG_CONFIG_HOME/folio`, falling back to `~/.config/folio`.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("folio")
}

/// Location of the persisted theme preference.
pub fn preferences_path() -> PathBuf {
    config_dir().join("preferences.json")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
