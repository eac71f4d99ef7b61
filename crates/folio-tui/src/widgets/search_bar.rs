//! Search bar widget: the single-line input the dropdown hangs off.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! [`SearchBarState::handle`] reports whether the text changed so the app
//! shell knows when to feed the dropdown controller.

use super::{next_boundary, prev_boundary};
use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// The text typed by the user.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
}

impl SearchBarState {
    /// Apply an editing event. Returns `true` when `input` changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(input = %self.input, cursor = self.cursor, "search: char inserted");
                true
            }
            AppEvent::Backspace if self.cursor > 0 => {
                let prev = prev_boundary(&self.input, self.cursor);
                self.input.remove(prev);
                self.cursor = prev;
                tracing::debug!(input = %self.input, cursor = self.cursor, "search: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = prev_boundary(&self.input, self.cursor);
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.input.len() {
                    self.cursor = next_boundary(&self.input, self.cursor);
                }
                false
            }
            _ => false,
        }
    }

    /// Empty the input, e.g. after a successful commit.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    focused: bool,
    theme: &'a Theme,
    hint: &'a str,
}

impl<'a> SearchBar<'a> {
    /// `hint` is the key that focuses the bar, shown while it is empty.
    pub fn new(state: &'a SearchBarState, focused: bool, theme: &'a Theme, hint: &'a str) -> Self {
        Self { state, focused, theme, hint }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.input[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Search ")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.input.is_empty() && !self.focused {
            Line::from(Span::styled(
                format!("press {} to search sections", self.hint),
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.input.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}
