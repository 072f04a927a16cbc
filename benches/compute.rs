#[macro_use]
extern crate criterion;
extern crate mandelbrot;

use criterion::Criterion;
use mandelbrot::{compute, ComputationRequest, Region, Resolution};

fn request(workers: usize) -> ComputationRequest {
    ComputationRequest::new(Region::default(), Resolution::new(320, 180).unwrap(), 160, workers)
        .unwrap()
}

fn classic_view(c: &mut Criterion) {
    c.bench_function("classic 320x180, 1 worker", |b| {
        let req = request(1);
        b.iter(|| compute(&req).unwrap())
    });
    c.bench_function("classic 320x180, 4 workers", |b| {
        let req = request(4);
        b.iter(|| compute(&req).unwrap())
    });
    c.bench_function("classic 320x180, 64 workers", |b| {
        let req = request(64);
        b.iter(|| compute(&req).unwrap())
    });
}

criterion_group!(benches, classic_view);
criterion_main!(benches);
