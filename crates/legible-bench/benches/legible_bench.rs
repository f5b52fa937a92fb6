//! Benchmarks for legible operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use legible_color::{contrast_ratio, delta_e_2000, oklch_to_rgb_safe, rgb_to_oklch_safe};
use legible_core::Rgb;
use legible_parse::ColorInput;
use legible_tune::{
    BinarySearch, CandidateSearch, GradientDescent, Mode, SearchProblem, TuneConfig, tune_batch,
    tune_with_config,
};

fn colors(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let v = (i as u32).wrapping_mul(2_654_435_761);
            Rgb::new(v as u8, (v >> 8) as u8, (v >> 16) as u8)
        })
        .collect()
}

/// Benchmark color conversions.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [1000, 10000].iter() {
        let values = colors(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("rgb_to_oklch", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| rgb_to_oklch_safe(black_box(x)).value())
                    .collect::<Vec<_>>()
            })
        });

        let lch: Vec<_> = values.iter().map(|&x| rgb_to_oklch_safe(x).value()).collect();
        group.bench_with_input(BenchmarkId::new("oklch_to_rgb", size), &lch, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| oklch_to_rgb_safe(black_box(x)).value())
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark CIEDE2000 and WCAG contrast.
fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    let values = colors(10000);
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("delta_e_2000", |b| {
        b.iter(|| {
            values
                .windows(2)
                .map(|w| delta_e_2000(black_box(w[0]), black_box(w[1])))
                .sum::<f64>()
        })
    });

    group.bench_function("contrast_ratio", |b| {
        b.iter(|| {
            values
                .iter()
                .map(|&x| contrast_ratio(black_box(x), Rgb::WHITE))
                .sum::<f64>()
        })
    });

    group.finish();
}

/// Benchmark the two searches on one problem.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let problem = SearchProblem {
        text: Rgb::new(119, 119, 119),
        background: Rgb::WHITE,
        target: 7.0,
        budget: 2.5,
    };
    let binary = BinarySearch::default();
    let gradient = GradientDescent::default();

    group.bench_function("binary", |b| b.iter(|| binary.search(black_box(&problem))));
    group.bench_function("gradient", |b| b.iter(|| gradient.search(black_box(&problem))));

    group.finish();
}

/// Benchmark full tuning per mode.
fn bench_tune(c: &mut Criterion) {
    let mut group = c.benchmark_group("tune");
    group.sample_size(20);

    let config = TuneConfig::default();
    let text = Rgb::new(200, 200, 200);

    for mode in Mode::ALL {
        group.bench_with_input(BenchmarkId::new("single", mode), &mode, |b, &m| {
            b.iter(|| tune_with_config(black_box(text), Rgb::WHITE, false, m, false, &config))
        });
    }

    let pairs: Vec<_> = colors(64).into_iter().map(|t| (t, Rgb::WHITE, false)).collect();
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("batch_64", |b| {
        b.iter(|| tune_batch(black_box(&pairs), Mode::Recursive, false, &config))
    });

    group.finish();
}

/// Benchmark the parsing boundary.
fn bench_parse(c: &mut Criterion) {
    let inputs = [
        "#777",
        "#a1b2c3",
        "rgb(119, 119, 119)",
        "rgba(10%, 20%, 30%, 0.5)",
        "hsl(210, 40%, 50%)",
        "rebeccapurple",
    ];

    c.bench_function("parse_mixed", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|s| ColorInput::parse(black_box(s)).is_ok())
                .filter(|ok| *ok)
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_convert,
    bench_metrics,
    bench_search,
    bench_tune,
    bench_parse,
);
criterion_main!(benches);
