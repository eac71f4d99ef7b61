//! Headless host: drives the dropdown with a renderer that writes each
//! rendered row as one JSON object per line.

use folio_core::{
    config::Config,
    dropdown::{DropdownView, Focus, Navigator, Renderer, NO_MATCHES_HINT, NO_MATCHES_LABEL},
    DropdownController, NavTarget, SearchIndex,
};
use serde::Serialize;
use std::io::{self, Write};

/// One output line.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Row<'a> {
    Result {
        title: &'a str,
        description: &'a str,
        url: &'a str,
        tag: Option<&'a str>,
    },
    NoMatches {
        label: &'a str,
        hint: &'a str,
    },
}

/// [`Renderer`] that serializes every render call. The trait cannot fail, so
/// the first write error is kept and surfaced by [`JsonLinesRenderer::finish`].
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(mut self) -> io::Result<W> {
        match self.error.take() {
            Some(e) => Err(e),
            None => {
                self.out.flush()?;
                Ok(self.out)
            }
        }
    }

    fn write_row(&mut self, row: &Row<'_>) {
        if self.error.is_some() {
            return;
        }
        let res = serde_json::to_writer(&mut self.out, row)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = res {
            self.error = Some(e);
        }
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, view: DropdownView<'_>, _query: &str) {
        match view {
            DropdownView::Results(results) => {
                for e in results {
                    self.write_row(&Row::Result {
                        title: &e.title,
                        description: &e.description,
                        url: &e.url,
                        tag: e.primary_tag(),
                    });
                }
            }
            DropdownView::NoMatches => self.write_row(&Row::NoMatches {
                label: NO_MATCHES_LABEL,
                hint: NO_MATCHES_HINT,
            }),
        }
    }

    fn focus(&mut self, _focus: Focus) {}

    fn clear(&mut self) {}
}

/// Headless runs never navigate.
struct Stay;

impl Navigator for Stay {
    fn navigate(&mut self, target: NavTarget) {
        tracing::debug!(target = %target, "headless: navigation ignored");
    }
}

/// Feed `query` to a fresh dropdown and write whatever it renders to `out`.
/// A query below the minimum length renders nothing.
pub fn write_suggestions<W: Write>(config: &Config, query: &str, out: W) -> io::Result<W> {
    let mut dropdown = DropdownController::with_settings(
        SearchIndex::portfolio(),
        config.search.dropdown_settings(),
        JsonLinesRenderer::new(out),
        Stay,
    );
    dropdown.on_input(query);
    tracing::debug!(query, rows = dropdown.results().len(), "headless query");
    dropdown.into_renderer().finish()
}
