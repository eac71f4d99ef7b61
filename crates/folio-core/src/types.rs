//! Core types for folio-core.
//!
//! This module defines the data shared across the search layer and its
//! collaborators: the static [`SearchEntry`] descriptor and the
//! [`NavTarget`] a navigator is asked to visit.

use serde::{Deserialize, Serialize};

/// One static, navigable page section descriptor.
///
/// Entries are created once at startup and never mutated. Tags are stored
/// lowercase so that matching only has to lowercase the query and the
/// free-text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Display title.
    pub title: String,
    /// One-line display description.
    pub description: String,
    /// Fragment identifier of the target section (`#skills`, `#blog`, …).
    pub url: String,
    /// Ordered lowercase keywords.
    pub tags: Vec<String>,
}

impl SearchEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            tags: tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// First tag, shown as a `#tag` badge next to the row.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// A location the navigator is asked to move to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NavTarget {
    /// In-page jump to a section (`#work`).
    Fragment(String),
    /// Absolute path with an encoded query string (`/search?q=rust%20tui`).
    /// Handled by the server-side full-text search.
    FullTextSearch(String),
}

impl NavTarget {
    pub fn as_str(&self) -> &str {
        match self {
            NavTarget::Fragment(s) | NavTarget::FullTextSearch(s) => s,
        }
    }
}

impl std::fmt::Display for NavTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_lowercased() {
        let e = SearchEntry::new("About", "Bio", "#about", &["About", "PROFILE"]);
        assert_eq!(e.tags, vec!["about", "profile"]);
        assert_eq!(e.primary_tag(), Some("about"));
    }

    #[test]
    fn nav_target_displays_raw_location() {
        assert_eq!(NavTarget::Fragment("#blog".into()).to_string(), "#blog");
        assert_eq!(
            NavTarget::FullTextSearch("/search?q=x".into()).to_string(),
            "/search?q=x"
        );
    }
}
