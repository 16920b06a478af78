use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use so2watch_rust::models::{GeoPoint, GridGeometry, ImageSeries, Observation, Region};
use so2watch_rust::services::{aggregate_series, evaluate_threshold};

fn series_of(grid: GridGeometry, count: usize) -> ImageSeries {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
    let observations = (0..count)
        .map(|i| {
            let ts = start + Duration::days(i as i64);
            Observation::uniform(grid, ts, 0.0001 + i as f64 * 1e-6)
        })
        .collect();
    ImageSeries::from_observations(observations)
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    group.sample_size(20);

    let region = Region::new(GeoPoint::new(40.7, -74.0).unwrap(), 100_000.0);

    for scale in [10_000.0, 5_000.0] {
        let grid = GridGeometry::covering(&region, scale);
        for count in [3usize, 15] {
            let series = series_of(grid, count);
            group.bench_with_input(
                BenchmarkId::new(format!("median_{}m", scale as u64), count),
                &series,
                |b, series| {
                    b.iter(|| aggregate_series(black_box(series), black_box(grid)));
                },
            );
        }
    }

    group.finish();
}

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold");

    let region = Region::new(GeoPoint::new(40.7, -74.0).unwrap(), 100_000.0);
    let grid = GridGeometry::covering(&region, 5_000.0);
    let image = aggregate_series(&series_of(grid, 15), grid);

    group.bench_function("max_reduction", |b| {
        b.iter(|| evaluate_threshold(black_box(&image), black_box(&region), black_box(0.0003)));
    });

    group.finish();
}

criterion_group!(benches, bench_aggregation, bench_threshold);
criterion_main!(benches);
