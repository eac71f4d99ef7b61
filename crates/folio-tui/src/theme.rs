//! Colour themes for the folio TUI.
//!
//! Themes are defined as TOML files embedded in the binary via
//! [`include_str!`], one per [`ThemeMode`]. Call [`Theme::for_mode`] with the
//! persisted preference at startup and again whenever it is toggled.

use config::{Config, File, FileFormat};
use folio_core::{preference::ThemeMode, toast::ToastKind};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DARK_THEME_SRC: &str = include_str!("themes/dark.toml");
const LIGHT_THEME_SRC: &str = include_str!("themes/light.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let flags = [
            (self.bold, Modifier::BOLD),
            (self.dim, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ];
        let base = Style {
            fg: self.fg.as_deref().and_then(color),
            bg: self.bg.as_deref().and_then(color),
            ..Style::default()
        };
        flags
            .into_iter()
            .filter(|(on, _)| *on)
            .fold(base, |style, (_, m)| style.add_modifier(m))
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
    command_bar: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawDropdown {
    title: RawStyle,
    description: RawStyle,
    tag: RawStyle,
    focused: RawStyle,
    placeholder: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawToasts {
    success: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    heading: RawStyle,
    body: RawStyle,
    footer: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    dropdown: RawDropdown,
    toasts: RawToasts,
    page: RawPage,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,

    pub border_focused: Style,
    pub border_unfocused: Style,
    pub border_command_bar: Style,

    /// Suggestion row title.
    pub row_title: Style,
    pub row_description: Style,
    /// `#tag` badge after the title.
    pub row_tag: Style,
    /// Whole-row highlight of the keyboard-focused suggestion.
    pub row_focused: Style,
    /// The "No matches found" row.
    pub placeholder: Style,

    pub toast_success: Style,
    pub toast_error: Style,

    pub heading: Style,
    pub body: Style,
    pub footer: Style,
}

impl Theme {
    /// Embedded theme for `mode`.
    ///
    /// # Panics
    ///
    /// Panics if an embedded TOML file is malformed; both are covered by
    /// unit tests.
    pub fn for_mode(mode: ThemeMode) -> Self {
        let src = match mode {
            ThemeMode::Dark => DARK_THEME_SRC,
            ThemeMode::Light => LIGHT_THEME_SRC,
        };
        Self::from_toml_str(src, mode).expect("embedded theme must be valid TOML")
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str, mode: ThemeMode) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            mode,
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            row_title: raw.dropdown.title.into_style(),
            row_description: raw.dropdown.description.into_style(),
            row_tag: raw.dropdown.tag.into_style(),
            row_focused: raw.dropdown.focused.into_style(),
            placeholder: raw.dropdown.placeholder.into_style(),
            toast_success: raw.toasts.success.into_style(),
            toast_error: raw.toasts.error.into_style(),
            heading: raw.page.heading.into_style(),
            body: raw.page.body.into_style(),
            footer: raw.page.footer.into_style(),
        })
    }

    pub fn toast_style(&self, kind: ToastKind) -> Style {
        match kind {
            ToastKind::Success => self.toast_success,
            ToastKind::Error => self.toast_error,
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a colour with ratatui's own parser: names such as `dark_gray`,
/// `#rrggbb` hex, or a bare 256-colour index. Unknown names leave the slot
/// unset and are logged.
fn color(s: &str) -> Option<Color> {
    match s.parse::<Color>() {
        Ok(c) => Some(c),
        Err(_) => {
            tracing::warn!(color = s, "unknown theme colour ignored");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
