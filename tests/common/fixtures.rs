//! Static query corpora used across harnesses.

/// Queries that match at least one portfolio entry.
pub const MATCHING_QUERIES: &[&str] = &[
    "about", "blog", "skills", "tech", "ai", "work", "coffee", "Typing", "CONTACT", "journey",
];

/// Queries that match nothing in the portfolio table.
pub const MISSING_QUERIES: &[&str] = &["zzz", "kubernetes", "xyzzy", "qq"];

/// Queries that are too short to open the dropdown.
pub const SHORT_QUERIES: &[&str] = &["", "a", "z", "é"];
