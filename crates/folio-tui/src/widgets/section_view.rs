//! Section pane: where the dropdown last navigated to.
//!
//! [`SectionNavigator`] is the terminal [`Navigator`]: it keeps a history of
//! visited targets instead of scrolling a page. [`SectionView`] renders the
//! most recent one.

use crate::theme::Theme;
use chrono::Datelike;
use folio_core::{dropdown::Navigator, NavTarget};
use phf::phf_map;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// Page sections by fragment: (heading, one-line summary).
static SECTIONS: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "#about" => ("About Me", "Professional summary, principles and background."),
    "#hobbies" => ("Hobbies", "Photography, lifestyle and creative work."),
    "#skills" => ("Technical Skills", "Frontend, backend, DevOps and content tooling."),
    "#work" => ("Portfolio Work", "Featured projects and case studies."),
    "#blog" => ("Blog", "Research notes, AI insights and content strategy."),
    "#testimonials" => ("Testimonials", "What clients and collaborators say."),
    "#timeline" => ("Timeline", "Career milestones."),
    "#certifications" => ("Certifications", "Professional achievements and recognitions."),
    "#newsletter" => ("Newsletter", "Subscribe with :subscribe <email>."),
    "#contact" => ("Contact", "Reach out to discuss a project."),
};

/// Heading for a fragment, if it names a known section.
pub fn section_heading(fragment: &str) -> Option<&'static str> {
    SECTIONS.get(fragment).map(|(heading, _)| *heading)
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SectionNavigator {
    history: Vec<NavTarget>,
}

impl SectionNavigator {
    pub fn current(&self) -> Option<&NavTarget> {
        self.history.last()
    }

    pub fn history(&self) -> &[NavTarget] {
        &self.history
    }
}

impl Navigator for SectionNavigator {
    fn navigate(&mut self, target: NavTarget) {
        tracing::debug!(target = %target, "navigate");
        self.history.push(target);
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SectionView<'a> {
    navigator: &'a SectionNavigator,
    theme: &'a Theme,
}

impl<'a> SectionView<'a> {
    pub fn new(navigator: &'a SectionNavigator, theme: &'a Theme) -> Self {
        Self { navigator, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        match self.navigator.current() {
            None => vec![
                Line::from(Span::styled("Welcome", self.theme.heading)),
                Line::from(""),
                Line::from(Span::styled(
                    "Type at least two characters in the search bar to find a section.",
                    self.theme.body,
                )),
            ],
            Some(NavTarget::Fragment(fragment)) => {
                let (heading, summary) = SECTIONS
                    .get(fragment.as_str())
                    .copied()
                    .unwrap_or(("Unknown section", ""));
                vec![
                    Line::from(Span::styled(heading, self.theme.heading)),
                    Line::from(Span::styled(fragment.clone(), self.theme.footer)),
                    Line::from(""),
                    Line::from(Span::styled(summary, self.theme.body)),
                ]
            }
            Some(NavTarget::FullTextSearch(url)) => vec![
                Line::from(Span::styled("Full-text search", self.theme.heading)),
                Line::from(Span::styled(url.clone(), self.theme.footer)),
                Line::from(""),
                Line::from(Span::styled(
                    "No section matched; the query was handed to the site search.",
                    self.theme.body,
                )),
            ],
        }
    }
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let year = chrono::Local::now().year();
        let block = Block::bordered()
            .border_style(self.theme.border_unfocused)
            .title_bottom(Line::from(Span::styled(
                format!(" © {year} folio · {} visited ", self.navigator.history().len()),
                self.theme.footer,
            )));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SearchIndex;

    #[test]
    fn every_indexed_fragment_has_a_heading() {
        for entry in SearchIndex::portfolio().entries() {
            assert!(
                section_heading(&entry.url).is_some(),
                "no heading for {}",
                entry.url
            );
        }
    }

    #[test]
    fn navigator_keeps_history() {
        let mut nav = SectionNavigator::default();
        assert!(nav.current().is_none());
        nav.navigate(NavTarget::Fragment("#blog".into()));
        nav.navigate(NavTarget::FullTextSearch("/search?q=x".into()));
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.current(), Some(&NavTarget::FullTextSearch("/search?q=x".into())));
    }

    #[test]
    fn unknown_fragment_has_no_heading() {
        assert_eq!(section_heading("#nowhere"), None);
        assert_eq!(section_heading("#skills"), Some("Technical Skills"));
    }
}
