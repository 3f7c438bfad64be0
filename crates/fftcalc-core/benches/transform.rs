//! Criterion benchmarks for the transform engine and polynomial multiply.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fftcalc_core::{
    forward_transform, forward_transform_with, inverse_transform, multiply_polynomials,
    Complex, TransformOptions,
};

fn signal(n: usize) -> Vec<Complex> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Complex::from_real((6.0 * t).sin() + 0.25 * (40.0 * t).cos())
        })
        .collect()
}

fn bench_transforms(c: &mut Criterion) {
    let sizes: Vec<usize> = vec![256, 4_096, 65_536];

    let mut group = c.benchmark_group("ForwardSequential");
    for &n in &sizes {
        let x = signal(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &x, |b, x| {
            b.iter(|| forward_transform(x).unwrap());
        });
    }
    group.finish();

    let parallel = TransformOptions::parallel();
    let mut group = c.benchmark_group("ForwardParallel");
    for &n in &sizes {
        let x = signal(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &x, |b, x| {
            b.iter(|| forward_transform_with(x, &parallel).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Inverse");
    for &n in &sizes {
        let spectrum = forward_transform(&signal(n)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &spectrum, |b, s| {
            b.iter(|| inverse_transform(s).unwrap());
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("PolynomialMultiply");
    for &n in &[64usize, 1_024, 16_384] {
        let a: Vec<f64> = (0..n).map(|i| (i % 17) as f64 - 8.0).collect();
        let b: Vec<f64> = (0..n).map(|i| (i % 11) as f64 - 5.0).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(a, b), |bench, (a, b)| {
            bench.iter(|| multiply_polynomials(a, b).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transforms, bench_multiply);
criterion_main!(benches);
