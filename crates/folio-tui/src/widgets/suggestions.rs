//! Suggestion list: the terminal [`Renderer`] for the search dropdown.
//!
//! [`SuggestionList`] records what the controller asked to draw; the
//! [`Suggestions`] widget paints it under the search bar. Each suggestion
//! takes two lines (title + `#tag`, then the description). The placeholder
//! row takes the same space but is never highlighted.

use crate::theme::Theme;
use folio_core::{
    dropdown::{DropdownView, Focus, Renderer, NO_MATCHES_HINT, NO_MATCHES_LABEL},
    SearchEntry,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Terminal lines per suggestion row.
pub const ROW_HEIGHT: u16 = 2;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rows {
    Results(Vec<SearchEntry>),
    NoMatches,
}

/// What is currently drawn. `rows == None` means the list is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    pub rows: Option<Rows>,
    pub focus: Focus,
    /// Query that produced `rows`.
    pub query: String,
}

impl Default for SuggestionList {
    fn default() -> Self {
        Self { rows: None, focus: Focus::Input, query: String::new() }
    }
}

impl SuggestionList {
    pub fn is_visible(&self) -> bool {
        self.rows.is_some()
    }

    /// Number of drawn rows, counting the placeholder.
    pub fn row_count(&self) -> usize {
        match &self.rows {
            Some(Rows::Results(r)) => r.len(),
            Some(Rows::NoMatches) => 1,
            None => 0,
        }
    }

    /// Outer height including the border.
    pub fn height(&self) -> u16 {
        match self.row_count() {
            0 => 0,
            n => n as u16 * ROW_HEIGHT + 2,
        }
    }

    /// Index of the real result row under (`column`, `row`), if any.
    pub fn row_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let Some(Rows::Results(results)) = &self.rows else {
            return None;
        };
        let inner = Block::bordered().inner(area);
        if !super::contains(inner, column, row) {
            return None;
        }
        let i = ((row - inner.y) / ROW_HEIGHT) as usize;
        (i < results.len()).then_some(i)
    }
}

impl Renderer for SuggestionList {
    fn render(&mut self, view: DropdownView<'_>, query: &str) {
        self.rows = Some(match view {
            DropdownView::Results(r) => Rows::Results(r.to_vec()),
            DropdownView::NoMatches => Rows::NoMatches,
        });
        self.focus = Focus::Input;
        self.query = query.to_string();
    }

    fn focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    fn clear(&mut self) {
        self.rows = None;
        self.focus = Focus::Input;
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Suggestions<'a> {
    state: &'a SuggestionList,
    theme: &'a Theme,
}

impl<'a> Suggestions<'a> {
    pub fn new(state: &'a SuggestionList, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn entry_lines(&self, i: usize, entry: &'a SearchEntry) -> [Line<'a>; 2] {
        let mut title = vec![Span::styled(entry.title.as_str(), self.theme.row_title)];
        if let Some(tag) = entry.primary_tag() {
            title.push(Span::raw(" "));
            title.push(Span::styled(format!("#{tag}"), self.theme.row_tag));
        }
        let desc = Line::from(Span::styled(
            format!("  {}", entry.description),
            self.theme.row_description,
        ));
        let mut lines = [Line::from(title), desc];
        if self.state.focus == Focus::Row(i) {
            for line in &mut lines {
                *line = line.clone().style(self.theme.row_focused);
            }
        }
        lines
    }
}

impl Widget for Suggestions<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(rows) = &self.state.rows else {
            return;
        };
        Clear.render(area, buf);

        let block = Block::bordered().border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = match rows {
            Rows::Results(results) => results
                .iter()
                .enumerate()
                .flat_map(|(i, e)| self.entry_lines(i, e))
                .collect(),
            Rows::NoMatches => vec![
                Line::from(Span::styled(NO_MATCHES_LABEL, self.theme.placeholder)),
                Line::from(Span::styled(format!("  {NO_MATCHES_HINT}"), self.theme.placeholder)),
            ],
        };
        Paragraph::new(lines).render(inner, buf);
    }
}
