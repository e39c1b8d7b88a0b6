//! Benchmarks for search crate scoring and matching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use foundly_core::Post;
use foundly_search::{edit_distance, SearchEngine};

const TITLES: &[&str] = &[
    "Lost black umbrella",
    "Found silver MacBook charger",
    "Blue water bottle left in gym",
    "Found set of keys with red keychain",
    "Lost brown leather wallet",
    "Found wireless earbuds near cafeteria",
    "Lost prescription glasses",
    "Found student id card",
];

fn create_test_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| {
            Post::new(format!("p{i}"), TITLES[i % TITLES.len()])
                .with_tags(["campus", "building-a"])
                .with_description("Please contact me if this is yours")
                .with_location("Main Library")
        })
        .collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("edit_distance_near", |b| {
        b.iter(|| edit_distance(black_box("computor"), black_box("computer"), black_box(2)))
    });

    c.bench_function("edit_distance_abandoned", |b| {
        b.iter(|| edit_distance(black_box("umbrella"), black_box("spectacles"), black_box(2)))
    });
}

fn bench_search(c: &mut Criterion) {
    let engine = SearchEngine::new();
    let mut group = c.benchmark_group("search");

    for size in [10, 100, 1000, 10000].iter() {
        let posts = create_test_posts(*size);

        group.bench_with_input(BenchmarkId::new("single_keyword", size), size, |b, _| {
            b.iter(|| engine.search(black_box(&posts), black_box("wallet")))
        });

        group.bench_with_input(BenchmarkId::new("typo_and_phrase", size), size, |b, _| {
            b.iter(|| engine.search(black_box(&posts), black_box(r#"computor "main library""#)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edit_distance, bench_search);
criterion_main!(benches);
