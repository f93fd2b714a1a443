//! Criterion benchmarks for reviewsense.
//!
//! Covers the pure classifiers, lexicon scoring of single reviews and
//! sequential versus parallel enrichment of a generated table.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use reviewsense::config::EnrichConfig;
use reviewsense::enrich::Enricher;
use reviewsense::review::Review;
use reviewsense::scoring::{LexiconScorer, PolarityScorer};
use reviewsense::sentiment::{bucketize, classify};

/// Generate review texts for benchmarking.
fn generate_reviews(count: usize) -> Vec<Review> {
    let phrases = [
        "great product, works as described",
        "NOT what I expected at all",
        "the battery life is terrible but the screen is lovely",
        "decent value for the price",
        "absolutely love it!!!",
        "broke after a week, very disappointed",
        "it is okay I guess",
        "would not recommend to anyone",
        "fast shipping and friendly support :)",
        "meh",
    ];

    (0..count)
        .map(|i| {
            let length = 1 + i % 4;
            let text = (0..length)
                .map(|j| phrases[(i * 7 + j * 3) % phrases.len()])
                .collect::<Vec<_>>()
                .join(". ");
            Review::new((i % 5) as i64 + 1, text).with_id(format!("R{i}"))
        })
        .collect()
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let scores: Vec<f64> = (0..1000).map(|i| (i as f64 / 500.0) - 1.0).collect();

    group.throughput(Throughput::Elements(scores.len() as u64));
    group.bench_function("classify_and_bucketize", |b| {
        b.iter(|| {
            for (i, score) in scores.iter().enumerate() {
                black_box(classify(*score, (i % 5) as i64 + 1));
                black_box(bucketize(*score));
            }
        })
    });

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");
    let scorer = LexiconScorer::new().unwrap();
    let text = "The battery life is NOT great, but the screen is really lovely!!";

    group.bench_function("lexicon_score_single_review", |b| {
        b.iter(|| black_box(scorer.score(black_box(text)).unwrap()))
    });

    group.finish();
}

fn bench_enrichment(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrichment");
    group.sample_size(20);

    let reviews = generate_reviews(10_000);
    let scorer = Arc::new(LexiconScorer::new().unwrap());

    let sequential = Enricher::new(
        scorer.clone(),
        EnrichConfig {
            parallel: false,
            ..EnrichConfig::default()
        },
    )
    .unwrap();
    let parallel = Enricher::new(scorer, EnrichConfig::default()).unwrap();

    group.throughput(Throughput::Elements(reviews.len() as u64));
    group.bench_function("enrich_all_sequential", |b| {
        b.iter(|| black_box(sequential.enrich_all(reviews.clone()).unwrap()))
    });
    group.bench_function("enrich_all_parallel", |b| {
        b.iter(|| black_box(parallel.enrich_all(reviews.clone()).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classification,
    bench_scoring,
    bench_enrichment
);
criterion_main!(benches);
