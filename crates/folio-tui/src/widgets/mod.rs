//! Ratatui widgets for the folio TUI.

pub mod command_bar;
pub mod help;
pub mod search_bar;
pub mod section_view;
pub mod suggestions;
pub mod toasts;

use ratatui::layout::Rect;

/// Byte offset of the char boundary before `cursor`.
pub(crate) fn prev_boundary(text: &str, cursor: usize) -> usize {
    text[..cursor].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

/// Byte offset of the char boundary after `cursor`.
pub(crate) fn next_boundary(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| cursor + i)
        .unwrap_or(text.len())
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

pub(crate) fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
