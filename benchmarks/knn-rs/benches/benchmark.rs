//! KNN classification benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 20K training samples)
//! - Number of neighbors (k)
//! - Dimensions (2D to 30D)
//! - Distance metrics (euclidean, manhattan, chebyshev, minkowski)
//! - Preprocessing (standardization, class balancing)
//! - Batch prediction (sequential vs parallel hint)
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use knn_rs::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Two Gaussian clusters, the second shifted by 1.5 in every dimension.
///
/// `minority` is the fraction of samples drawn from the second cluster.
fn generate_clusters(
    size: usize,
    dims: usize,
    minority: f64,
    seed: u64,
) -> TrainingSet<f64, &'static str> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();

    let mut rows = Vec::with_capacity(size);
    let mut labels = Vec::with_capacity(size);
    for _ in 0..size {
        let malignant = rng.random::<f64>() < minority;
        let shift = if malignant { 1.5 } else { 0.0 };
        rows.push(
            (0..dims)
                .map(|_| shift + noise.sample(&mut rng))
                .collect::<Vec<f64>>(),
        );
        labels.push(if malignant { "M" } else { "B" });
    }
    TrainingSet::from_rows(rows, labels).unwrap()
}

/// Queries scattered around the midpoint between the two clusters.
fn generate_queries(size: usize, dims: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.5, 1.0).unwrap();
    (0..size)
        .map(|_| (0..dims).map(|_| noise.sample(&mut rng)).collect())
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(30);

    let queries = generate_queries(100, 2, 7);
    for size in [1_000, 5_000, 20_000] {
        group.throughput(Throughput::Elements(queries.len() as u64));
        let set = generate_clusters(size, 2, 0.4, 42);
        let model = Knn::new().k(7).build(set).unwrap();

        group.bench_with_input(BenchmarkId::new("predict_many", size), &size, |b, _| {
            b.iter(|| model.predict_many(black_box(&queries)).unwrap())
        });
    }
    group.finish();
}

fn bench_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("k");
    group.sample_size(50);

    let set = generate_clusters(5_000, 2, 0.4, 42);
    let queries = generate_queries(100, 2, 7);
    for k in [1, 5, 25, 101] {
        let model = Knn::new().k(k).build(set.clone()).unwrap();
        group.bench_with_input(BenchmarkId::new("predict_many", k), &k, |b, _| {
            b.iter(|| model.predict_many(black_box(&queries)).unwrap())
        });
    }
    group.finish();
}

fn bench_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensions");
    group.sample_size(30);

    for dims in [2, 10, 30] {
        let set = generate_clusters(5_000, dims, 0.4, 42);
        let queries = generate_queries(100, dims, 7);
        let model = Knn::new().k(7).build(set).unwrap();
        group.bench_with_input(BenchmarkId::new("predict_many", dims), &dims, |b, _| {
            b.iter(|| model.predict_many(black_box(&queries)).unwrap())
        });
    }
    group.finish();
}

fn bench_distance_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_metrics");
    group.sample_size(50);

    let set = generate_clusters(5_000, 4, 0.4, 42);
    let queries = generate_queries(100, 4, 7);

    let metrics = [
        ("euclidean", Euclidean),
        ("manhattan", Manhattan),
        ("chebyshev", Chebyshev),
        ("minkowski_3", Minkowski(3.0)),
    ];

    for (name, metric) in metrics {
        let model = Knn::new()
            .k(7)
            .distance_metric(metric)
            .build(set.clone())
            .unwrap();
        group.bench_with_input(BenchmarkId::new("metric", name), &metric, |b, _| {
            b.iter(|| model.predict_many(black_box(&queries)).unwrap())
        });
    }
    group.finish();
}

fn bench_preprocessing(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocessing");
    group.sample_size(30);

    let set = generate_clusters(10_000, 2, 0.05, 42);

    group.bench_function("standardize", |b| {
        b.iter(|| {
            Knn::new()
                .k(7)
                .standardize()
                .build(black_box(set.clone()))
                .unwrap()
        })
    });

    group.bench_function("balance_classes", |b| {
        b.iter(|| Resampler::balance(black_box(&set), Some(42)).unwrap())
    });
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    group.sample_size(30);

    let set = generate_clusters(10_000, 4, 0.4, 42);
    let queries = generate_queries(1_000, 4, 7);
    group.throughput(Throughput::Elements(queries.len() as u64));

    for parallel in [false, true] {
        let model = Knn::new()
            .k(7)
            .parallel(parallel)
            .build(set.clone())
            .unwrap();
        group.bench_with_input(
            BenchmarkId::new("predict_many", parallel),
            &parallel,
            |b, _| b.iter(|| model.predict_many(black_box(&queries)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_k,
    bench_dimensions,
    bench_distance_metrics,
    bench_preprocessing,
    bench_parallel,
);

criterion_main!(benches);
