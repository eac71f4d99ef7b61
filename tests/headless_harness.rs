#![allow(unused)]
//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness runs `folio` as a compiled binary via
//! [`std::process::Command`] and checks what another tool piping its output
//! would observe:
//!
//! - **`--query`**: one JSON object per rendered row, capped at six.
//! - **Placeholder**: a query with no match prints the single
//!   `no_matches` row.
//! - **Short query**: prints nothing and exits 0.
//! - **`--config`**: settings from an explicit file are honoured.
//! - **Exit codes**: bad flags exit non-zero.
//!
//! # What this does NOT cover
//!
//! - TUI rendering (that requires a real terminal)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::Command;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A config file in a temp dir, so runs never touch the user's config.
fn config_file(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    f.write_all(body.as_bytes()).unwrap();
    f
}

fn folio(args: &[&str], config: &tempfile::NamedTempFile) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .output()
        .unwrap()
}

fn json_lines(out: &std::process::Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// --query
// ---------------------------------------------------------------------------

#[test]
fn query_prints_rows_as_json_lines() {
    let cfg = config_file("");
    let out = folio(&["--query", "skills"], &cfg);
    assert!(out.status.success());
    let rows = json_lines(&out);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["kind"], "result");
    assert_eq!(rows[0]["title"], "Technical Skills");
    assert_eq!(rows[0]["url"], "#skills");
}

#[test]
fn no_match_prints_placeholder() {
    let cfg = config_file("");
    let out = folio(&["--query", "kubernetes"], &cfg);
    assert!(out.status.success());
    let rows = json_lines(&out);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["kind"], "no_matches");
    assert_eq!(rows[0]["label"], "No matches found");
}

#[test]
fn short_query_prints_nothing() {
    let cfg = config_file("");
    let out = folio(&["--query", "a"], &cfg);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn rows_are_capped_at_six() {
    let cfg = config_file("");
    // "e" alone is too short; "es" matches most of the table
    let out = folio(&["--query", "es"], &cfg);
    let rows = json_lines(&out);
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r["kind"] == "result"));
}

// ---------------------------------------------------------------------------
// --config
// ---------------------------------------------------------------------------

#[test]
fn config_file_settings_apply() {
    let cfg = config_file("[search]\nmax_suggestions = 2\n");
    let out = folio(&["--query", "es"], &cfg);
    let rows = json_lines(&out);
    assert_eq!(rows.len(), 2);
}

#[test]
fn out_of_range_config_keeps_the_limits() {
    let cfg = config_file("[search]\nmax_suggestions = 50\nmin_query_chars = 0\n");
    assert_eq!(json_lines(&folio(&["--query", "es"], &cfg)).len(), 6);
    assert!(folio(&["--query", "e"], &cfg).stdout.is_empty());
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[test]
fn unknown_flag_exits_nonzero() {
    let cfg = config_file("");
    let out = folio(&["--frobnicate"], &cfg);
    assert!(!out.status.success());
}
