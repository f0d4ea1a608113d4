use std::collections::VecDeque;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ringfifo::UnboundedFifo;

// Basic operations benchmarks
fn bench_fifo_ops(c: &mut Criterion) {
    // Creation benchmarks
    let mut group = c.benchmark_group("Fifo Creation");
    group.bench_function("new::<i32>", |b| b.iter(UnboundedFifo::<i32>::new));
    group.bench_function("new::<String>", |b| b.iter(UnboundedFifo::<String>::new));
    group.bench_function("with_capacity(4)", |b| {
        b.iter(|| UnboundedFifo::<i32>::with_capacity(black_box(4)))
    });
    group.finish();

    // Insert without and with growth
    {
        let mut group = c.benchmark_group("Fifo Insert");

        // Within the initial ring (no growth)
        group.bench_function("insert_no_growth", |b| {
            b.iter(|| {
                let mut fifo = UnboundedFifo::with_capacity(64).unwrap();
                for i in 0..32 {
                    fifo.insert(black_box(i)).unwrap();
                }
                black_box(fifo)
            })
        });

        // Repeated doubling from a tiny ring
        group.bench_function("insert_growth", |b| {
            b.iter(|| {
                let mut fifo = UnboundedFifo::with_capacity(2).unwrap();
                for i in 0..32 {
                    fifo.insert(black_box(i)).unwrap();
                }
                black_box(fifo)
            })
        });

        group.finish();
    }

    // Poll and peek
    {
        let mut group = c.benchmark_group("Fifo Poll");

        group.bench_function("poll_32", |b| {
            b.iter(|| {
                let mut fifo: UnboundedFifo<i32> = (0..32).collect();
                while let Ok(value) = fifo.poll() {
                    black_box(value);
                }
            })
        });

        group.bench_function("peek", |b| {
            let mut fifo = UnboundedFifo::new();
            fifo.insert(1).unwrap();
            b.iter(|| black_box(fifo.peek().unwrap()))
        });

        group.finish();
    }

    // Steady-state churn: the ring wraps but never grows
    {
        let mut group = c.benchmark_group("Fifo Churn");

        group.bench_function("push_poll_wraparound", |b| {
            let mut fifo = UnboundedFifo::with_capacity(8).unwrap();
            b.iter(|| {
                for i in 0..64 {
                    fifo.insert(black_box(i)).unwrap();
                    black_box(fifo.poll().unwrap());
                }
            })
        });

        group.finish();
    }
}

// Iteration benchmarks
fn bench_fifo_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fifo Iteration");

    group.bench_function("iter_sum_256", |b| {
        let fifo: UnboundedFifo<i64> = (0..256).collect();
        b.iter(|| black_box(fifo.iter().sum::<i64>()))
    });

    group.bench_function("cursor_filter_256", |b| {
        b.iter(|| {
            let mut fifo: UnboundedFifo<i64> = (0..256).collect();
            let mut cursor = fifo.cursor();
            while let Some(&value) = cursor.next() {
                if value % 2 == 0 {
                    black_box(cursor.remove().unwrap());
                }
            }
            drop(cursor);
            black_box(fifo)
        })
    });

    group.finish();
}

// Comparison against VecDeque for the same FIFO workload
fn bench_vs_vecdeque(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fifo vs VecDeque");

    group.bench_function("ringfifo_push_poll", |b| {
        b.iter(|| {
            let mut fifo = UnboundedFifo::with_capacity(2).unwrap();
            for i in 0..128 {
                fifo.insert(black_box(i)).unwrap();
            }
            while let Ok(value) = fifo.poll() {
                black_box(value);
            }
        })
    });

    group.bench_function("vecdeque_push_pop", |b| {
        b.iter(|| {
            let mut deque = VecDeque::with_capacity(2);
            for i in 0..128 {
                deque.push_back(black_box(i));
            }
            while let Some(value) = deque.pop_front() {
                black_box(value);
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fifo_ops,
    bench_fifo_iteration,
    bench_vs_vecdeque
);
criterion_main!(benches);
