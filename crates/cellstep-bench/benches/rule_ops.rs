//! Criterion micro-benchmarks for the per-cell rule and buffer swapping.

use std::hint::black_box;

use cellstep_arena::PingPongBuffers;
use cellstep_bench::reference_profile;
use cellstep_core::{alive_neighbours, step_row};
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: count alive neighbours of all 64K cells of the reference soup.
fn bench_alive_neighbours_64k(c: &mut Criterion) {
    let (grid, _) = reference_profile(1, 1);
    let side = grid.side();
    let cells = grid.as_bytes();

    c.bench_function("alive_neighbours_64k", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for r in 0..side {
                for col in 0..side {
                    total += u32::from(alive_neighbours(cells, side, r, col));
                }
            }
            black_box(total);
        });
    });
}

/// Benchmark: single-threaded `step_row` over every row of the reference soup.
fn bench_step_rows_sequential(c: &mut Criterion) {
    let (grid, _) = reference_profile(1, 1);
    let side = grid.side();
    let source = grid.as_bytes();
    let mut out = vec![0u8; side * side];

    c.bench_function("step_rows_sequential_256", |b| {
        b.iter(|| {
            for (row, dest) in out.chunks_exact_mut(side).enumerate() {
                step_row(source, side, row, dest);
            }
            black_box(&out);
        });
    });
}

/// Benchmark: begin/publish cycle of the double buffer without computing.
fn bench_pingpong_cycle(c: &mut Criterion) {
    let (grid, _) = reference_profile(1, 1);
    let mut arena = PingPongBuffers::new(&grid);

    c.bench_function("pingpong_cycle", |b| {
        b.iter(|| {
            let pass = arena.begin_generation().unwrap();
            pass.dest.copy_from_slice(pass.source);
            arena.publish().unwrap();
            black_box(arena.generation());
        });
    });
}

criterion_group!(
    benches,
    bench_alive_neighbours_64k,
    bench_step_rows_sequential,
    bench_pingpong_cycle
);
criterion_main!(benches);
