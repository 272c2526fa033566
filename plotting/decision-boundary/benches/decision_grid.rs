use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use decision_boundary::{DEFAULT_RESOLUTION, decision_grid, padded_bounds};
use k_nn::KnnClassifier;
use ndarray::Array2;
use sensorplot_helpers::{DataPoint, L2Dist};

fn bench_decision_grid(c: &mut Criterion) {
    let x = Array2::from_shape_fn((60, 2), |(i, j)| ((i * 7 + j * 13) % 17) as f64);
    let labels: Vec<u8> = (0..60).map(|i| (i % 3) as u8).collect();
    let model = KnnClassifier::new(5, DataPoint::from_rows(x.view(), &labels), L2Dist).unwrap();
    let bounds = padded_bounds(x.view(), 0.1).unwrap();

    c.bench_function("knn decision grid 200x200", |b| {
        b.iter(|| decision_grid(black_box(&model), black_box(&bounds), DEFAULT_RESOLUTION).unwrap())
    });
}

criterion_group!(benches, bench_decision_grid);
criterion_main!(benches);
