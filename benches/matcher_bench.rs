use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docsearch::{search, MatchConfig, Matcher};

mod common;
use common::{synthetic_catalog, synthetic_documents, QUERIES};

/// One query of each outcome kind over a fixed catalog.
fn bench_match_outcomes(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_outcomes");
    let docs = synthetic_documents(1000);
    let matcher = Matcher::default();

    for (name, query) in QUERIES {
        group.bench_function(name, |b| {
            b.iter(|| matcher.match_catalog(black_box(query), black_box(&docs)))
        });
    }

    group.finish();
}

/// Sequential against parallel classification as the catalog grows.
fn bench_match_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_scale");
    let sequential = Matcher::default();
    let parallel = Matcher::new(MatchConfig::default().with_parallel(true))
        .expect("default thresholds are valid");

    for size in [100, 1000, 10000] {
        let docs = synthetic_documents(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &docs, |b, docs| {
            b.iter(|| sequential.match_catalog(black_box("markting plan 7"), docs))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &docs, |b, docs| {
            b.iter(|| parallel.match_catalog(black_box("markting plan 7"), docs))
        });
    }

    group.finish();
}

/// The view-level entry point, including the blank-query recommendations.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let catalog = synthetic_catalog(1000);
    let matcher = Matcher::default();

    group.bench_function("recommendations", |b| {
        b.iter(|| search(black_box(""), &catalog, &matcher))
    });
    group.bench_function("typo", |b| {
        b.iter(|| search(black_box("activty 3"), &catalog, &matcher))
    });

    group.finish();
}

criterion_group!(benches, bench_match_outcomes, bench_match_scale, bench_search);
criterion_main!(benches);
