//! folio TUI: ratatui shell around the search dropdown.
//!
//! The shell is one more host for `folio-core`: it implements the dropdown's
//! `Renderer` (the suggestion list under the search bar) and `Navigator`
//! (the section pane), and arms the close-on-blur with a real deadline.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use folio_core::{
    config::{preferences_path, Config},
    preference::FilePreferenceStore,
};

/// Start the TUI with the theme preference stored next to the config file.
pub fn run(config: Config) -> anyhow::Result<()> {
    let prefs = FilePreferenceStore::new(preferences_path());
    tracing::debug!(path = %prefs.path().display(), "preference store");
    App::new(config, Box::new(prefs))?.run()
}
