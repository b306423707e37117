use criterion::{black_box, criterion_group, criterion_main, Criterion};
use refptr::{AtomicCounted, Counted, RefPtr};
use std::time::Duration;

fn bench_clone_drop(c: &mut Criterion) {
    c.bench_function("refptr_clone_drop", |b| {
        let p = Counted::new(1u64);
        b.iter(|| {
            let x = p.clone();
            black_box(&x);
            drop(x);
        })
    });
}

fn bench_clone_drop_atomic(c: &mut Criterion) {
    c.bench_function("refptr_clone_drop_atomic", |b| {
        let p = AtomicCounted::new(1u64);
        b.iter(|| {
            let x = p.clone();
            black_box(&x);
            drop(x);
        })
    });
}

fn bench_swap(c: &mut Criterion) {
    c.bench_function("refptr_swap", |b| {
        let mut x = Counted::new(1u64);
        let mut y = Counted::new(2u64);
        b.iter(|| {
            x.swap(&mut y);
            black_box((&x, &y));
        })
    });
}

fn bench_detach_adopt(c: &mut Criterion) {
    c.bench_function("refptr_detach_adopt", |b| {
        let mut p = Counted::new(1u64);
        b.iter(|| {
            let raw = p.detach();
            p = unsafe { RefPtr::adopt(black_box(raw)) };
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_clone_drop, bench_clone_drop_atomic, bench_swap, bench_detach_adopt
}
criterion_main!(benches);
