//! Bench tests for the cyto-kernels library.

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use cyto_kernels::{estimate_density, filter_redundant};

use gen_data::{Config, Inputs, generate_inputs};

fn dense_point_set() -> Inputs {
    let config = Config {
        npoints: 10_000,
        nmarkers: 30,
        neighbours_per_point: 20,
        radius: 0.5,
        random_seed: 12345,
    };
    generate_inputs(&config)
}

fn benchmark_density(c: &mut Criterion) {
    let inputs = dense_point_set();

    c.bench_function("estimate_density", |b| {
        b.iter(|| estimate_density(&inputs.distance_lists, 0.5));
    });
}

fn benchmark_filter(c: &mut Criterion) {
    let inputs = dense_point_set();

    c.bench_function("filter_redundant", |b| {
        b.iter(|| {
            filter_redundant(
                &inputs.intensities,
                &inputs.ordering,
                &inputs.neighbour_lists,
                0.1,
            )
            .expect("inputs are generated with matching shapes")
        });
    });
}

criterion_group!(benches, benchmark_density, benchmark_filter);
criterion_main!(benches);
