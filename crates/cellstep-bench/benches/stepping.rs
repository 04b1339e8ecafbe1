//! Criterion benchmarks for whole-generation stepping across worker counts.

use std::hint::black_box;

use cellstep_bench::{glider_field, reference_profile, stress_profile};
use cellstep_engine::{run, RunConfig, Stepper};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark: one generation of the 256x256 reference soup per worker count.
fn bench_step_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_256");
    group.throughput(Throughput::Elements(256 * 256));

    for workers in [1usize, 2, 4, 8] {
        let (grid, config) = reference_profile(42, workers);
        let mut stepper = Stepper::new(&grid, config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, _| {
            b.iter(|| {
                let m = stepper.step().unwrap();
                black_box(m.population);
            });
        });
    }
    group.finish();
}

/// Benchmark: a full 4-generation run of the 1024x1024 stress soup.
fn bench_run_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_1024");
    group.sample_size(10);

    for workers in [1usize, 4, 8] {
        let (grid, config) = stress_profile(7, workers);
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, _| {
            b.iter(|| black_box(run(&grid, &config).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: 8 generations over a 512x512 field of gliders on 4 workers.
fn bench_glider_field(c: &mut Criterion) {
    let grid = glider_field(512);
    let config = RunConfig::new(8, 512, 4).with_verify_invariants(false);

    c.bench_function("glider_field_512_x8", |b| {
        b.iter(|| black_box(run(&grid, &config).unwrap()));
    });
}

criterion_group!(benches, bench_step_reference, bench_run_stress, bench_glider_field);
criterion_main!(benches);
