//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with the help key (`?` by default); close with it or `Escape`.

use super::centered_rect;
use crate::theme::Theme;
use folio_core::config::KeybindingsConfig;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    theme: &'a Theme,
    keys: &'a KeybindingsConfig,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme, keys: &'a KeybindingsConfig) -> Self {
        Self { theme, keys }
    }

    fn bindings(&self) -> Vec<(String, &'static str)> {
        vec![
            (self.keys.search_focus.clone(), "Focus the search bar"),
            ("Tab".into(), "Leave the search bar (list closes shortly after)"),
            ("↓  /  ↑".into(), "Move through suggestions; ↑ on the first returns to input"),
            ("Enter".into(), "Open focused suggestion, or best match for the query"),
            ("Escape".into(), "Close suggestions / leave a row"),
            ("click".into(), "Open a suggestion; clicking elsewhere closes the list"),
            (self.keys.toggle_theme.clone(), "Toggle light / dark theme"),
            (self.keys.command.clone(), "Command line (q, help, theme, subscribe)"),
            ("q  /  Ctrl+c".into(), "Quit"),
            (self.keys.help.clone(), "Toggle this help popup"),
        ]
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(78, 14, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(format!(" folio — keybindings ({} to close) ", self.keys.help))
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = self.theme.body.add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = self
            .bindings()
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {key:<14}"), key_style),
                    Span::styled(desc, self.theme.body),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
