//! Toast overlay: stacked notifications in the top-right corner.

use crate::theme::Theme;
use folio_core::toast::{ToastKind, ToastQueue};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

const MAX_WIDTH: u16 = 48;

pub struct ToastOverlay<'a> {
    queue: &'a ToastQueue,
    theme: &'a Theme,
}

impl<'a> ToastOverlay<'a> {
    pub fn new(queue: &'a ToastQueue, theme: &'a Theme) -> Self {
        Self { queue, theme }
    }
}

impl Widget for ToastOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = MAX_WIDTH.min(area.width);
        let x = area.right().saturating_sub(width);

        for (i, toast) in self.queue.visible().iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            let row = Rect { x, y, width, height: 1 };
            Clear.render(row, buf);
            let icon = match toast.kind {
                ToastKind::Success => "✓",
                ToastKind::Error => "✗",
            };
            let style = self.theme.toast_style(toast.kind);
            let line = Line::from(Span::styled(format!(" {icon} {} ", toast.message), style));
            buf.set_style(row, style);
            buf.set_line(row.x, row.y, &line, row.width);
        }
    }
}
