//! Insertion throughput over growing site sets.

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use proximity::core::Triangulation;
use proximity::geometry::Point;
use std::hint::black_box;

fn bounding() -> [Point; 3] {
    [
        Point::new(-10_000.0, -10_000.0),
        Point::new(10_000.0, -10_000.0),
        Point::new(0.0, 10_000.0),
    ]
}

/// Deterministic scattered points inside a 2000-unit square.
fn sites(count: usize) -> Vec<Point> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..count)
        .map(|_| {
            let mut next = || {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state >> 11) as f64 / (1u64 << 53) as f64
            };
            Point::new(next() * 2000.0 - 1000.0, next() * 2000.0 - 1000.0)
        })
        .collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    for &count in &[50usize, 200, 500] {
        let points = sites(count);
        group.bench_function(format!("{count}_sites"), |b| {
            b.iter_batched(
                || Triangulation::new(bounding()).unwrap(),
                |mut engine| {
                    for &p in &points {
                        engine.insert(p).unwrap();
                    }
                    black_box(engine)
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insertion);
criterion_main!(benches);
