//! Benchmarks for filtering and figure building
//!
//! Run with: cargo bench

use std::collections::BTreeSet;

use co2_dashboard::analysis::build_figure;
use co2_dashboard::{filter, select_charts, Dataset, EmissionRecord, FilterParams, YearRange};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Roughly the shape of the real dataset: ~200 countries, 1750 onwards
fn synthetic_dataset(countries: usize, years: i32) -> Dataset {
    let mut records = Vec::with_capacity(countries * years as usize);
    for c in 0..countries {
        let name = format!("Country {c:03}");
        for y in 0..years {
            let value = (c as f64 * 0.37 + y as f64 * 0.05).sin().abs() * 20.0;
            records.push(EmissionRecord::new(name.clone(), 1750 + y, value));
        }
    }
    Dataset::from_records(records)
}

fn all_modes(ds: &Dataset) -> Vec<(&'static str, FilterParams)> {
    let range = YearRange::new(1950, 2020);
    let comparison: BTreeSet<String> = ds.countries().iter().take(5).cloned().collect();
    vec![
        ("worldview", FilterParams::Worldview { year_range: range }),
        (
            "single_country",
            FilterParams::SingleCountry {
                country: ds.countries()[0].clone(),
                year_range: range,
            },
        ),
        (
            "multiple_country",
            FilterParams::MultipleCountry {
                countries: comparison,
                year_range: range,
            },
        ),
        ("year_view", FilterParams::YearView { year: 2000 }),
    ]
}

fn bench_filter(c: &mut Criterion) {
    let ds = synthetic_dataset(200, 270);
    let mut group = c.benchmark_group("filter");
    group.throughput(Throughput::Elements(ds.len() as u64));

    for (name, params) in all_modes(&ds) {
        group.bench_with_input(BenchmarkId::from_parameter(name), &params, |b, params| {
            b.iter(|| filter(black_box(&ds), black_box(params)).len())
        });
    }
    group.finish();
}

fn bench_view(c: &mut Criterion) {
    let ds = synthetic_dataset(200, 270);
    let mut group = c.benchmark_group("filter_and_build_figures");

    for (name, params) in all_modes(&ds) {
        group.bench_with_input(BenchmarkId::from_parameter(name), &params, |b, params| {
            b.iter(|| {
                let subset = filter(&ds, params);
                select_charts(params, &subset)
                    .iter()
                    .map(|spec| build_figure(spec, &subset))
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filter, bench_view);
criterion_main!(benches);
