//! # Geometry Benchmark
//!
//! The bar regenerates its pill path and slot layout whenever its bounds
//! change, which during a transition means every frame. Both must stay
//! comfortably inside a 60 Hz frame budget.
//!
//! Run with: `cargo bench`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pillbar::{pill_path, shape::flatten_path, BarMetrics, Color, Vertex};

fn bench_pill_path(c: &mut Criterion) {
    c.bench_function("pill_path", |b| {
        b.iter(|| black_box(pill_path(black_box(280.0), black_box(56.0))));
    });
}

fn bench_flatten_and_fan(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten_and_fan");
    let path = pill_path(280.0, 56.0);

    for segments in [8, 16, 32] {
        group.bench_with_input(
            BenchmarkId::from_parameter(segments),
            &segments,
            |b, &segments| {
                b.iter(|| {
                    let outline = flatten_path(black_box(&path), segments);
                    black_box(Vertex::fan(&outline, Color::WHITE))
                });
            },
        );
    }

    group.finish();
}

fn bench_slot_layout(c: &mut Criterion) {
    c.bench_function("slot_layout_5_icons", |b| {
        let metrics = BarMetrics::new(5, 40.0, 8.0, 16.0, 400.0, 800.0);
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..metrics.icon_count {
                acc += black_box(metrics.slot(i)).x;
            }
            acc
        });
    });
}

criterion_group!(
    benches,
    bench_pill_path,
    bench_flatten_and_fan,
    bench_slot_layout
);
criterion_main!(benches);
