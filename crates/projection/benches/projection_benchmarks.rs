//! Benchmarks for the Baidu projection transforms.
//!
//! Run with: cargo bench --package baidu-projection --bench projection_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use baidu_projection::{GeoPoint, PixelPoint, RectLatLng, TileProjection, BAIDU};

/// Random points spread over the projection bounds.
fn generate_points(count: usize) -> Vec<GeoPoint> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| GeoPoint::new(rng.gen_range(-85.0..85.0), rng.gen_range(-180.0..180.0)))
        .collect()
}

fn bench_forward_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_transform");

    for count in [1_000usize, 65_536] {
        let points = generate_points(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("z18", count), &points, |b, points| {
            b.iter(|| BAIDU.forward_batch(black_box(points), 18))
        });
    }

    group.finish();
}

fn bench_inverse_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_transform");

    for count in [1_000usize, 65_536] {
        let pixels: Vec<PixelPoint> = BAIDU.forward_batch(&generate_points(count), 18);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("z18", count), &pixels, |b, pixels| {
            b.iter(|| BAIDU.inverse_batch(black_box(pixels), 18))
        });
    }

    group.finish();
}

fn bench_tile_matrix(c: &mut Criterion) {
    c.bench_function("tile_matrix_min_max", |b| {
        b.iter(|| {
            for zoom in 0..=18 {
                black_box(BAIDU.tile_matrix_min_xy(black_box(zoom)));
                black_box(BAIDU.tile_matrix_max_xy(black_box(zoom)));
            }
        })
    });
}

fn bench_area_tile_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("area_tile_list");
    let beijing = RectLatLng::from_ltrb(116.35, 39.95, 116.45, 39.88);

    for zoom in [12, 15, 18] {
        group.bench_with_input(BenchmarkId::new("beijing", zoom), &zoom, |b, &zoom| {
            b.iter(|| BAIDU.area_tile_list(black_box(&beijing), zoom, 1))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_forward_transform,
    bench_inverse_transform,
    bench_tile_matrix,
    bench_area_tile_list,
);
criterion_main!(benches);
