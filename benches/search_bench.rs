//! Search and dropdown benchmarks.
//!
//! The built-in table is small, so the interesting numbers are the per
//! keystroke cost on it and how the linear filter scales when a host loads a
//! much larger table from config.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `filter/portfolio` | `SearchIndex::filter` on the built-in table for typical queries |
//! | `filter/scaling` | Filter throughput as the table grows from 100 to 100k entries |
//! | `dropdown/keystrokes` | Typing a word one character at a time through the controller |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio_core::{
    dropdown::{DropdownView, Focus, Navigator, Renderer},
    DropdownController, NavTarget, SearchEntry, SearchIndex,
};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `n` entries where roughly one in ten carries the tag `rust`.
fn synthetic_index(n: usize) -> SearchIndex {
    let entries = (0..n)
        .map(|i| {
            let tag = if i % 10 == 0 { "rust" } else { "misc" };
            SearchEntry::new(
                format!("Section {i}"),
                format!("Generated description number {i}"),
                format!("#section-{i}"),
                &[tag, "generated"],
            )
        })
        .collect();
    SearchIndex::new(entries)
}

struct Discard;

impl Renderer for Discard {
    fn render(&mut self, view: DropdownView<'_>, _query: &str) {
        black_box(view);
    }
    fn focus(&mut self, _focus: Focus) {}
    fn clear(&mut self) {}
}

impl Navigator for Discard {
    fn navigate(&mut self, target: NavTarget) {
        black_box(target);
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

fn portfolio_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/portfolio");
    let index = SearchIndex::portfolio();

    for query in ["ai", "blog", "tech", "zzz", "Professional"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, q| {
            b.iter(|| black_box(index.filter(black_box(q)).len()))
        });
    }

    group.finish();
}

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/scaling");

    for n in [100usize, 1_000, 10_000, 100_000] {
        let index = synthetic_index(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("rust", n), &index, |b, idx| {
            b.iter(|| black_box(idx.filter("rust").len()))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Dropdown
// ---------------------------------------------------------------------------

fn keystroke_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dropdown/keystrokes");
    let word = "certifications";

    group.bench_function("type_word_portfolio", |b| {
        let mut dropdown = DropdownController::new(SearchIndex::portfolio(), Discard, Discard);
        b.iter(|| {
            for end in 1..=word.len() {
                dropdown.on_input(&word[..end]);
            }
            dropdown.on_input("");
        })
    });

    group.finish();
}

criterion_group!(benches, portfolio_bench, scaling_bench, keystroke_bench);
criterion_main!(benches);
