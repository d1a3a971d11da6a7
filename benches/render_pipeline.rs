use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::{
    ChannelObserver, NeverCancel, RenderEvent, Viewport, WorkerPool, compute_divergence,
    compute_divergence_cancelable, default_worker_count, partition_viewport,
};

fn bench_viewport() -> Viewport {
    Viewport::new(-0.5, 0.0, 3.0, 400, 300, 200).expect("bench viewport is valid")
}

fn wait_for_completion(events: &Receiver<RenderEvent>, generation: u64) {
    while let Ok(event) = events.recv() {
        if event.is_completion() && event.generation() == generation {
            return;
        }
    }
}

fn bench_kernel(c: &mut Criterion) {
    let viewport = bench_viewport();

    c.bench_function("kernel_single_thread", |b| {
        b.iter(|| compute_divergence(black_box(&viewport)))
    });

    c.bench_function("kernel_single_thread_cancelable", |b| {
        b.iter(|| compute_divergence_cancelable(black_box(&viewport), &NeverCancel))
    });
}

fn bench_partition(c: &mut Criterion) {
    let viewport = Viewport::new(0.0, 0.0, 3.5, 1920, 1080, 200).expect("bench viewport is valid");

    c.bench_function("partition_1080p_200px", |b| {
        b.iter(|| partition_viewport(black_box(&viewport), 200))
    });
}

fn bench_pooled_job(c: &mut Criterion) {
    let viewport = bench_viewport();
    let mut group = c.benchmark_group("pooled_job");

    for chunk_size in [25u32, 50, 100, 200] {
        let (observer, events) = ChannelObserver::channel();
        let pool = WorkerPool::new(Arc::new(observer), default_worker_count(), chunk_size)
            .expect("bench pool starts");

        group.bench_with_input(BenchmarkId::from_parameter(chunk_size), &viewport, |b, viewport| {
            b.iter(|| {
                let handle = pool.submit(*viewport).expect("bench viewport partitions");
                wait_for_completion(&events, handle.generation());
            })
        });
    }

    group.finish();
}

fn bench_worker_scaling(c: &mut Criterion) {
    let viewport = bench_viewport();
    let mut group = c.benchmark_group("worker_scaling");

    for workers in [1usize, 2, 4, 8] {
        let Some(workers) = NonZeroUsize::new(workers) else {
            continue;
        };
        let (observer, events) = ChannelObserver::channel();
        let pool = WorkerPool::new(Arc::new(observer), workers, 100).expect("bench pool starts");

        group.bench_with_input(BenchmarkId::from_parameter(workers), &viewport, |b, viewport| {
            b.iter(|| {
                let handle = pool.submit(*viewport).expect("bench viewport partitions");
                wait_for_completion(&events, handle.generation());
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_kernel,
    bench_partition,
    bench_pooled_job,
    bench_worker_scaling
);
criterion_main!(benches);
