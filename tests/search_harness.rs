#![allow(unused)]
//! Search and dropdown integration harness.
//!
//! # What this covers
//!
//! - **Filter laws**: results are a subsequence of the table; an entry is
//!   returned exactly when its title, description or one of its tags contains
//!   the query; matching ignores case; the display slice never exceeds six rows.
//! - **Dropdown gate**: queries under two characters never open the list.
//! - **Focus invariant** (proptest over random event sequences): the focused
//!   row is always `None` or a valid index into the rendered rows, and the
//!   placeholder row is never focused.
//! - **Close tokens**: only the most recent blur token can close the list.
//! - **Commit**: first match wins, otherwise the encoded full-text target.
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;

use common::*;
use folio_core::{
    dropdown::{DropdownState, Focus},
    search::DISPLAY_LIMIT,
    NavTarget, SearchEntry, SearchIndex,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use rstest::rstest;

fn titles(hits: &[&SearchEntry]) -> Vec<String> {
    hits.iter().map(|e| e.title.clone()).collect()
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

#[test]
fn tech_snapshot() {
    let index = SearchIndex::portfolio();
    insta::assert_debug_snapshot!(titles(&index.filter("tech")), @r#"
    [
        "Technical Skills",
    ]
    "#);
}

#[test]
fn ai_matches_in_table_order() {
    let index = SearchIndex::portfolio();
    let hits = titles(&index.filter("AI"));
    assert_eq!(hits.first().map(String::as_str), Some("Blog Articles"));
    assert!(hits.contains(&"LearnLangs — Language Learning App".to_string()));
}

#[test]
fn matching_queries_find_something() {
    let index = SearchIndex::portfolio();
    for q in MATCHING_QUERIES {
        assert!(!index.filter(q).is_empty(), "{q} found nothing");
    }
}

#[test]
fn missing_queries_find_nothing() {
    let index = SearchIndex::portfolio();
    for q in MISSING_QUERIES {
        assert!(index.filter(q).is_empty(), "{q} unexpectedly matched");
    }
}

proptest! {
    #[test]
    fn results_are_an_ordered_subset(q in "[a-zA-Z ]{0,6}") {
        let index = SearchIndex::portfolio();
        let hits = index.filter(&q);
        let mut positions = hits.iter().map(|h| {
            index.entries().iter().position(|e| std::ptr::eq(e, *h)).unwrap()
        });
        let mut last = None;
        for p in positions {
            prop_assert!(last.map_or(true, |l| p > l));
            last = Some(p);
        }
    }

    #[test]
    fn filter_returns_exactly_the_matching_entries(q in "[a-z ]{1,4}") {
        let index = SearchIndex::portfolio();
        let hits = index.filter(&q);
        for e in index.entries() {
            let expected = e.title.to_lowercase().contains(&q)
                || e.description.to_lowercase().contains(&q)
                || e.tags.iter().any(|t| t.contains(&q));
            let returned = hits.iter().any(|h| std::ptr::eq(*h, e));
            prop_assert_eq!(returned, expected, "{:?} for query {:?}", e.title, q);
        }
    }

    #[test]
    fn matching_ignores_case(q in "[a-zA-Z]{1,5}") {
        let index = SearchIndex::portfolio();
        prop_assert_eq!(
            titles(&index.filter(&q.to_uppercase())),
            titles(&index.filter(&q.to_lowercase()))
        );
    }

    #[test]
    fn display_slice_is_capped(q in "[a-z]{0,3}") {
        let index = SearchIndex::portfolio();
        let shown = index.suggestions(&q, DISPLAY_LIMIT);
        prop_assert!(shown.len() <= DISPLAY_LIMIT);
        let all = index.filter(&q);
        prop_assert_eq!(titles(&shown), titles(&all[..shown.len()]));
    }
}

// ---------------------------------------------------------------------------
// Dropdown gate
// ---------------------------------------------------------------------------

#[test]
fn short_queries_never_open() {
    let mut c = portfolio_controller();
    for q in SHORT_QUERIES {
        c.on_input(q);
        assert_eq!(c.state(), &DropdownState::Closed, "{q:?} opened the list");
        assert_eq!(c.renderer().shown, Shown::Hidden);
    }
}

#[test]
fn missing_query_shows_placeholder_that_cannot_be_focused() {
    let mut c = portfolio_controller();
    c.on_input("zzz");
    assert_eq!(c.renderer().shown, Shown::Placeholder);
    c.on_arrow_down_in_input();
    assert_eq!(c.focused(), None);
    assert_eq!(c.renderer().focus, Focus::Input);
}

#[test]
fn more_than_six_matches_render_six() {
    let mut c = uniform_controller(10);
    c.on_input("item");
    assert_eq!(c.results().len(), DISPLAY_LIMIT);
    match &c.renderer().calls[..] {
        [RenderCall::Render { urls, .. }] => assert_eq!(urls.len(), DISPLAY_LIMIT),
        other => panic!("unexpected calls: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Focus invariant
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Type(#[proptest(strategy = "\"[a-z]{0,4}\"")] String),
    Down,
    Up,
    Enter,
    Escape,
    Blur,
    FireLatest,
    FocusInput,
    InsideClick,
    OutsideClick,
    Click(#[proptest(strategy = "0usize..8")] usize),
}

proptest! {
    #[test]
    fn focus_always_points_at_a_real_row(ops in prop::collection::vec(any::<Op>(), 0..40)) {
        let mut c = portfolio_controller();
        let mut latest = None;
        for op in ops {
            match op {
                Op::Type(t) => c.on_input(&t),
                Op::Down => c.handle_arrow_down(),
                Op::Up => c.handle_arrow_up(),
                Op::Enter => c.handle_enter(),
                Op::Escape => c.handle_escape(),
                Op::Blur => latest = Some(c.on_blur_input()),
                Op::FireLatest => {
                    if let Some(t) = latest.take() {
                        c.fire_pending_close(t);
                    }
                }
                Op::FocusInput => c.on_focus_gained(),
                Op::InsideClick => c.on_inside_click(),
                Op::OutsideClick => c.on_outside_click(),
                Op::Click(i) => c.on_activate_result_row(i),
            }

            match c.state() {
                DropdownState::Closed => {
                    prop_assert_eq!(c.focused(), None);
                    prop_assert_eq!(&c.renderer().shown, &Shown::Hidden);
                }
                DropdownState::Open { results, focused } => {
                    if let Some(i) = focused {
                        prop_assert!(*i < results.len());
                        prop_assert!(*i < DISPLAY_LIMIT);
                        prop_assert_eq!(c.renderer().focus, Focus::Row(*i));
                    }
                    prop_assert!(c.query().chars().count() >= 2);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Close tokens
// ---------------------------------------------------------------------------

#[test]
fn only_latest_blur_token_closes() {
    let mut c = portfolio_controller();
    c.on_input("blog");
    let first = c.on_blur_input();
    c.on_focus_gained();
    let second = c.on_blur_input();
    assert!(!c.fire_pending_close(first));
    assert!(c.is_open());
    assert!(c.fire_pending_close(second));
    assert!(!c.is_open());
}

#[test]
fn row_click_after_blur_wins() {
    let mut c = portfolio_controller();
    c.on_input("blog");
    let token = c.on_blur_input();
    c.on_activate_result_row(0);
    assert_eq!(c.navigator().visited, vec![NavTarget::Fragment("#blog".into())]);
    assert!(!c.fire_pending_close(token));
}

// ---------------------------------------------------------------------------
// Commit
// ---------------------------------------------------------------------------

#[rstest]
#[case("skills", NavTarget::Fragment("#skills".into()))]
#[case("  Blog  ", NavTarget::Fragment("#blog".into()))]
#[case("rust tui", NavTarget::FullTextSearch("/search?q=rust%20tui".into()))]
#[case("a&b", NavTarget::FullTextSearch("/search?q=a%26b".into()))]
fn commit_targets(#[case] query: &str, #[case] expected: NavTarget) {
    let mut c = portfolio_controller();
    c.commit(query);
    assert_eq!(c.navigator().visited, vec![expected]);
    assert!(!c.is_open());
}

#[test]
fn blank_commit_does_nothing() {
    let mut c = portfolio_controller();
    c.commit("   ");
    assert!(c.navigator().visited.is_empty());
}
