//! Test builders: ergonomic constructors for entries, indexes and
//! controllers.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use super::recording::{History, Screen};
use folio_core::{dropdown::DropdownSettings, DropdownController, SearchEntry, SearchIndex};

// ---------------------------------------------------------------------------
// SearchEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchEntry`] fixtures.
///
/// ```rust
/// let entry = SearchEntryBuilder::new("Rust Notes")
///     .description("Ownership and borrowing")
///     .url("#rust")
///     .tag("rust")
///     .build();
/// ```
pub struct SearchEntryBuilder {
    title: String,
    description: String,
    url: String,
    tags: Vec<String>,
}

impl SearchEntryBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            url: "#top".to_string(),
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, d: impl Into<String>) -> Self {
        self.description = d.into();
        self
    }

    pub fn url(mut self, u: impl Into<String>) -> Self {
        self.url = u.into();
        self
    }

    pub fn tag(mut self, t: impl Into<String>) -> Self {
        self.tags.push(t.into());
        self
    }

    pub fn build(self) -> SearchEntry {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        SearchEntry::new(self.title, self.description, self.url, &tags)
    }
}

// ---------------------------------------------------------------------------
// Controllers
// ---------------------------------------------------------------------------

pub type TestController = DropdownController<Screen, History>;

/// Controller over the built-in portfolio table with recording collaborators.
pub fn portfolio_controller() -> TestController {
    DropdownController::new(SearchIndex::portfolio(), Screen::default(), History::default())
}

/// Controller over `n` entries that all match the query `"item"`.
pub fn uniform_controller(n: usize) -> TestController {
    let entries = (0..n)
        .map(|i| {
            SearchEntryBuilder::new(format!("Item {i}"))
                .url(format!("#item-{i}"))
                .tag("item")
                .build()
        })
        .collect();
    DropdownController::with_settings(
        SearchIndex::new(entries),
        DropdownSettings::default(),
        Screen::default(),
        History::default(),
    )
}
