use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use nova_particles::ParticleSampler;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Full-size canvas with a red block and a green strip, roughly banner coverage
fn banner_like_canvas() -> RgbaImage {
    RgbaImage::from_fn(2048, 1024, |x, y| {
        if (600..1450).contains(&x) && (350..650).contains(&y) {
            Rgba([255, 0, 0, 255])
        } else if (700..1350).contains(&x) && (720..800).contains(&y) {
            Rgba([0, 255, 0, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

fn bench_sampler(c: &mut Criterion) {
    let canvas = banner_like_canvas();
    let sampler = ParticleSampler::default();

    c.bench_function("sample_2048x1024_stride3", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| sampler.sample(black_box(&canvas), &mut rng))
    });

    c.bench_function("count_2048x1024_stride3", |b| {
        b.iter(|| sampler.count(black_box(&canvas)))
    });
}

criterion_group!(benches, bench_sampler);
criterion_main!(benches);
