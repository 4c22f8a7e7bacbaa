use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use ainventory_infra::Dataset;
use ainventory_infra::projections::DashboardSummary;
use ainventory_infra::query::DataQuery;

/// Sample dataset repeated `factor` times.
fn scaled_dataset(factor: usize) -> Dataset {
    let base = Dataset::sample();
    let mut ds = Dataset::default();
    for _ in 0..factor {
        ds.sales.extend(base.sales.iter().cloned());
        ds.inventory.extend(base.inventory.iter().cloned());
        ds.forecasts.extend(base.forecasts.iter().cloned());
    }
    ds
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_query");
    for factor in [1usize, 100, 10_000] {
        let ds = scaled_dataset(factor);
        let unfiltered = DataQuery::default();
        let filtered = DataQuery::from_params(None, Some("Москва"), Some("Электроника"));

        group.bench_with_input(BenchmarkId::new("all_unfiltered", factor), &ds, |b, ds| {
            b.iter(|| black_box(unfiltered.execute(ds)))
        });
        group.bench_with_input(BenchmarkId::new("all_filtered", factor), &ds, |b, ds| {
            b.iter(|| black_box(filtered.execute(ds)))
        });
    }
    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    for factor in [1usize, 100, 10_000] {
        let ds = scaled_dataset(factor);
        group.bench_with_input(BenchmarkId::new("build", factor), &ds, |b, ds| {
            b.iter(|| black_box(DashboardSummary::build(ds)))
        });
    }
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    c.bench_function("dataset_sample", |b| b.iter(|| black_box(Dataset::sample())));
}

criterion_group!(benches, bench_query, bench_dashboard, bench_sample);
criterion_main!(benches);
