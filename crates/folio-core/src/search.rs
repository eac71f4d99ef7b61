//! Search layer: the static section index and the suggestion filter.
//!
//! Matching is a case-insensitive raw substring test against the title, the
//! description and every tag of an entry. There is no scoring: results keep
//! the insertion order of the table.

use crate::types::{NavTarget, SearchEntry};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Maximum number of rows the dropdown renders.
pub const DISPLAY_LIMIT: usize = 6;

/// Queries shorter than this (in characters) never open the dropdown.
pub const MIN_QUERY_CHARS: usize = 2;

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Ordered, immutable table of searchable sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl SearchIndex {
    /// Build an index from an explicit table. Tags are normalised to
    /// lowercase so entries loaded from config behave like the built-ins.
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut e| {
                for tag in &mut e.tags {
                    *tag = tag.to_lowercase();
                }
                e
            })
            .collect();
        Self { entries }
    }

    /// The portfolio site's built-in section table.
    pub fn portfolio() -> Self {
        Self::new(vec![
            SearchEntry::new(
                "About Me",
                "Professional summary, principles, background",
                "#about",
                &["about", "profile", "summary"],
            ),
            SearchEntry::new(
                "Hobbies Gallery",
                "Photography, lifestyle, creative hobbies",
                "#hobbies",
                &["hobbies", "gallery", "photos"],
            ),
            SearchEntry::new(
                "Technical Skills",
                "Frontend, backend, DevOps, content creation tools",
                "#skills",
                &["skills", "tech", "stack", "tools"],
            ),
            SearchEntry::new(
                "Portfolio Work",
                "Featured projects and case studies",
                "#work",
                &["projects", "portfolio", "case study"],
            ),
            SearchEntry::new(
                "Blog Articles",
                "Latest research, AI insights, content strategy",
                "#blog",
                &["blog", "articles", "research", "ai"],
            ),
            SearchEntry::new(
                "Testimonials",
                "What clients and collaborators say",
                "#testimonials",
                &["testimonials", "reviews", "feedback"],
            ),
            SearchEntry::new(
                "Timeline",
                "Career milestones and journey",
                "#timeline",
                &["timeline", "journey", "career"],
            ),
            SearchEntry::new(
                "Certifications",
                "Professional achievements and recognitions",
                "#certifications",
                &["certifications", "achievements", "awards"],
            ),
            SearchEntry::new(
                "Newsletter",
                "Subscribe for updates and insights",
                "#newsletter",
                &["newsletter", "subscribe", "updates"],
            ),
            SearchEntry::new(
                "Contact Form",
                "Reach out to discuss your project",
                "#contact",
                &["contact", "email", "form"],
            ),
            SearchEntry::new(
                "HE Coffee — Cafe Management App",
                "Internal cafe management system",
                "#work",
                &["he coffee", "cafe", "management"],
            ),
            SearchEntry::new(
                "LearnLangs — Language Learning App",
                "AI-powered language learning platform",
                "#work",
                &["learnlangs", "language", "learning", "ai"],
            ),
            SearchEntry::new(
                "typingtest — Typing Practice App",
                "Minimalist typing trainer inspired by Monkeytype",
                "#work",
                &["typingtest", "typing", "practice"],
            ),
        ])
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry matching `query`, in table order.
    ///
    /// Total: an empty query matches everything and no match yields an empty
    /// vector. Length policy belongs to the caller.
    pub fn filter(&self, query: &str) -> Vec<&SearchEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| matches(e, &needle))
            .collect()
    }

    /// The display slice of [`filter`](Self::filter): at most `limit` rows.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<&SearchEntry> {
        let mut hits = self.filter(query);
        hits.truncate(limit);
        hits
    }
}

/// `needle` must already be lowercase.
fn matches(entry: &SearchEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry.tags.iter().any(|t| t.contains(needle))
}

/// Location of the server-side full-text search for `query`
/// (`<path>?q=<encodeURIComponent(query)>`).
pub fn full_text_target(path: &str, query: &str) -> NavTarget {
    let encoded = utf8_percent_encode(query, URI_COMPONENT);
    NavTarget::FullTextSearch(format!("{path}?q={encoded}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
