//! Benchmarks for Mosaic board topology
//!
//! Measures performance of:
//! - Ring detection
//! - Index / coordinate conversions
//! - Prior-neighbor lookups

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId, Throughput};
use mosaic_topology::{
    GridCoord, PriorNeighbors, Spiral, SpiralIndex,
    spiral_to_coord, coord_to_spiral, total_slots_through,
};

const INDICES: [u64; 7] = [0, 10, 100, 1000, 10_000, 100_000, 1_000_000];

/// Benchmark spiral index to coordinate conversion
fn bench_spiral_to_coord(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_to_coord");

    for &index in &INDICES {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(index),
            &index,
            |b, &idx| {
                b.iter(|| spiral_to_coord(black_box(SpiralIndex(idx))))
            },
        );
    }
    group.finish();
}

/// Benchmark coordinate to spiral index conversion
fn bench_coord_to_spiral(c: &mut Criterion) {
    let mut group = c.benchmark_group("coord_to_spiral");

    let coords = [
        GridCoord::ORIGIN,
        GridCoord::new(1, 0),
        GridCoord::new(5, -3),
        GridCoord::new(-40, 25),
        GridCoord::new(700, -300),
    ];

    for coord in coords {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("ring", coord.ring()),
            &coord,
            |b, &c| {
                b.iter(|| coord_to_spiral(black_box(c)))
            },
        );
    }
    group.finish();
}

/// Benchmark ring detection
fn bench_ring_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_detection");

    for &index in &INDICES {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(index),
            &index,
            |b, &idx| {
                let spiral_idx = SpiralIndex(idx);
                b.iter(|| black_box(spiral_idx).ring())
            },
        );
    }
    group.finish();
}

/// Benchmark prior-neighbor computation
fn bench_prior_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("prior_neighbors");

    for &ring in &[1u64, 10, 100, 1000] {
        let index = SpiralIndex(total_slots_through(ring) - 2);
        group.throughput(Throughput::Elements(4));
        group.bench_with_input(
            BenchmarkId::new("ring", ring),
            &index,
            |b, &idx| {
                b.iter(|| PriorNeighbors::of(black_box(idx)))
            },
        );
    }
    group.finish();
}

/// Benchmark batch iteration over spiral
fn bench_spiral_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_iteration");

    for &count in &[100u64, 1000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &count,
            |b, &n| {
                b.iter(|| Spiral::take_slots(black_box(n)).count())
            },
        );
    }
    group.finish();
}

/// Benchmark round-trip conversion
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    for &index in &[0u64, 100, 1000, 10_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(index),
            &index,
            |b, &idx| {
                b.iter(|| {
                    let coord = spiral_to_coord(SpiralIndex(black_box(idx)));
                    coord_to_spiral(coord)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_spiral_to_coord,
    bench_coord_to_spiral,
    bench_ring_detection,
    bench_prior_neighbors,
    bench_spiral_iteration,
    bench_roundtrip,
);

criterion_main!(benches);
