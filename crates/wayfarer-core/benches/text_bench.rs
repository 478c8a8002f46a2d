//! Benchmarks for text matching.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wayfarer_core::text::{edit_distance, fuzzy_match, relevance};

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("edit_distance/short", |b| {
        b.iter(|| edit_distance(black_box("kitten"), black_box("sitting")));
    });
    c.bench_function("edit_distance/sentence", |b| {
        b.iter(|| {
            edit_distance(
                black_box("the quick brown fox jumps over the lazy dog"),
                black_box("the quack brown fax jumped over a lazy dog"),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let titles: Vec<String> = (0..1000)
        .map(|i| format!("Station {i} - North_Gate, Platform {}", i % 12))
        .collect();

    c.bench_function("fuzzy_match/1000_titles", |b| {
        b.iter(|| {
            titles
                .iter()
                .filter(|t| fuzzy_match(t, black_box("platfrom"), 2, false))
                .count()
        });
    });
    c.bench_function("relevance/1000_titles", |b| {
        b.iter(|| {
            titles
                .iter()
                .map(|t| relevance(t, black_box("north gate"), false))
                .sum::<f64>()
        });
    });
}

criterion_group!(benches, bench_edit_distance, bench_ranking);
criterion_main!(benches);
