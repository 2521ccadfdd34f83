#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use lattice_core::{PerlinNoise, TileableGrid, sample_noise_batch_3d};

// ── Grids ───────────────────────────────────────────────────────────────────

fn bench_tileable_grid_2d(c: &mut Criterion) {
    let noise = PerlinNoise::<f32>::from_seed(0);

    let mut group = c.benchmark_group("tileable_grid_2d");
    for side in [64usize, 256] {
        let grid = TileableGrid::new(side, side, 1).expect("valid grid");
        group.throughput(criterion::Throughput::Elements((side * side) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &grid,
            |b, grid| {
                b.iter(|| black_box(grid.sample_2d(&noise)));
            },
        );
    }
    group.finish();
}

fn bench_tileable_grid_3d(c: &mut Criterion) {
    let noise = PerlinNoise::<f32>::from_seed(0);
    let grid = TileableGrid::new(32, 32, 32).expect("valid grid");

    c.bench_function("tileable_grid_3d_32", |b| {
        b.iter(|| black_box(grid.sample_3d(&noise)));
    });
}

// ── Batches ─────────────────────────────────────────────────────────────────

fn bench_batch_3d(c: &mut Criterion) {
    let noise = PerlinNoise::<f64>::from_seed(0);
    let points: Vec<[f64; 3]> = (0..65_536)
        .map(|i| {
            let t = f64::from(i) * 0.013;
            [t, t * 0.7, t * 1.3]
        })
        .collect();

    c.bench_function("noise_batch_3d_64k", |b| {
        b.iter(|| black_box(sample_noise_batch_3d(&noise, black_box(&points))));
    });
}

criterion_group!(
    benches,
    bench_tileable_grid_2d,
    bench_tileable_grid_3d,
    bench_batch_3d,
);
criterion_main!(benches);
