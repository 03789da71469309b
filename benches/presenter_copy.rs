//! RGB to RGBA surface copy at common window sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::adapters::pixel_format::copy_rgb_to_rgba;

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_rgba");

    for (width, height) in [(800usize, 600usize), (1280, 800), (1920, 1080)] {
        let pixels = width * height;
        let src: Vec<u8> = (0..pixels * 3).map(|i| (i % 251) as u8).collect();
        let mut dst = vec![0u8; pixels * 4];

        group.throughput(Throughput::Bytes((pixels * 3) as u64));
        group.bench_function(BenchmarkId::from_parameter(format!("{}x{}", width, height)), |b| {
            b.iter(|| copy_rgb_to_rgba(black_box(&src), black_box(&mut dst)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_copy);
criterion_main!(benches);
