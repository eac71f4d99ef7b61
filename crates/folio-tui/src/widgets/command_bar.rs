//! Vim-style command bar: a single-line overlay at the bottom of the screen.
//!
//! Activated by the command key (`:` by default) whenever the search bar is
//! not focused. `Enter` parses the line; `Escape` cancels.
//!
//! # Supported commands
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme [light\|dark\|toggle]` | Switch theme (no argument toggles) |
//! | `subscribe <email>` | Subscribe to the newsletter |

use super::{next_boundary, prev_boundary};
use crate::commands::{Command, CommandError};
use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// How the command bar was left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandBarExit {
    Cancelled,
    Run(Command),
}

/// Persistent state for the command bar.
#[derive(Debug, Default)]
pub struct CommandBarState {
    /// The text typed after the `:` prefix.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
    /// Error message from the last failed command, cleared on the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    /// Reset to a blank, error-free state. Call when opening the bar.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// Handle a key while the bar is focused. `Some` means the bar should
    /// close; `None` keeps it open (editing, or a parse error on display).
    pub fn handle(&mut self, event: &AppEvent) -> Option<CommandBarExit> {
        // Any keypress dismisses the error display so the user can edit again.
        self.error = None;

        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.clear();
                Some(CommandBarExit::Cancelled)
            }
            AppEvent::Enter => match Command::parse(&self.input) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "command parsed");
                    self.clear();
                    Some(CommandBarExit::Run(cmd))
                }
                Err(CommandError::Empty) => {
                    self.clear();
                    Some(CommandBarExit::Cancelled)
                }
                Err(e) => {
                    self.error = Some(e.to_string());
                    None
                }
            },
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                None
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_boundary(&self.input, self.cursor);
                    self.input.remove(prev);
                    self.cursor = prev;
                }
                None
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = prev_boundary(&self.input, self.cursor);
                }
                None
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.input.len() {
                    self.cursor = next_boundary(&self.input, self.cursor);
                }
                None
            }
            _ => None,
        }
    }

    /// Absolute terminal column of the text cursor within `area`.
    ///
    /// The `:` glyph occupies column 0, so the cursor starts at column 1.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = 1 + self.input[..self.cursor].chars().count() as u16;
        (area.x + col).min(area.right().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Single-row command-bar overlay. The caller passes a 1-row `Rect` at the
/// bottom of the terminal.
pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = if let Some(ref err) = self.state.error {
            Line::from(Span::styled(format!("E  {err}"), self.theme.toast_error))
        } else {
            Line::from(vec![
                Span::styled(":", self.theme.border_command_bar.add_modifier(Modifier::BOLD)),
                Span::styled(self.state.input.as_str(), Style::default()),
            ])
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ThemeArg;

    fn type_str(s: &mut CommandBarState, text: &str) {
        for c in text.chars() {
            s.handle(&AppEvent::Char(c));
        }
    }

    #[test]
    fn char_insert_and_backspace() {
        let mut s = CommandBarState::default();
        type_str(&mut s, "foo");
        assert_eq!(s.input, "foo");
        assert_eq!(s.cursor, 3);
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input, "fo");
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn enter_runs_a_valid_command() {
        let mut s = CommandBarState::default();
        type_str(&mut s, "theme");
        assert_eq!(
            s.handle(&AppEvent::Enter),
            Some(CommandBarExit::Run(Command::Theme(ThemeArg::Toggle)))
        );
        assert!(s.input.is_empty());
    }

    #[test]
    fn invalid_command_keeps_bar_open_with_error() {
        let mut s = CommandBarState::default();
        type_str(&mut s, "nope");
        assert_eq!(s.handle(&AppEvent::Enter), None);
        assert_eq!(s.error.as_deref(), Some("unknown command: nope"));
        assert_eq!(s.input, "nope");
    }

    #[test]
    fn error_cleared_on_next_key() {
        let mut s = CommandBarState::default();
        s.error = Some("oops".to_string());
        s.handle(&AppEvent::Char('x'));
        assert!(s.error.is_none());
    }

    #[test]
    fn empty_enter_and_escape_cancel() {
        let mut s = CommandBarState::default();
        assert_eq!(s.handle(&AppEvent::Enter), Some(CommandBarExit::Cancelled));
        type_str(&mut s, "he");
        assert_eq!(s.handle(&AppEvent::Escape), Some(CommandBarExit::Cancelled));
        assert!(s.input.is_empty());
    }
}
