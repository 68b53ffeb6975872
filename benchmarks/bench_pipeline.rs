use std::hint::black_box;
use std::io;

use criterion::{criterion_group, criterion_main, Criterion};

use logtally::level::extract_level;
use logtally::{ParallelConfig, ParallelProcessor};

fn sample_lines(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|n| match n % 4 {
            0 => format!("[INFO] request {} served", n),
            1 => format!("[WARN] slow response {}", n),
            2 => String::new(),
            _ => format!("[ERROR] upstream {} failed", n),
        })
        .map(String::into_bytes)
        .collect()
}

fn bench_extract_level(c: &mut Criterion) {
    let line: &[u8] = b"   [ERROR] upstream connection reset by peer";
    c.bench_function("extract_level", |b| {
        b.iter(|| {
            black_box(extract_level(black_box(line)));
        });
    });
}

fn bench_pipeline_default_pool(c: &mut Criterion) {
    let lines = sample_lines(10_000);
    let processor = ParallelProcessor::new(ParallelConfig::default());
    c.bench_function("pipeline_10k_lines_default_pool", |b| {
        b.iter(|| {
            let input = lines.iter().cloned().map(Ok::<_, io::Error>);
            black_box(processor.process(input).expect("pipeline run"));
        });
    });
}

fn bench_pipeline_large_batches(c: &mut Criterion) {
    let lines = sample_lines(10_000);
    let processor = ParallelProcessor::new(ParallelConfig {
        num_workers: 5,
        batch_size: 1000,
    });
    c.bench_function("pipeline_10k_lines_batch_1000", |b| {
        b.iter(|| {
            let input = lines.iter().cloned().map(Ok::<_, io::Error>);
            black_box(processor.process(input).expect("pipeline run"));
        });
    });
}

criterion_group!(
    benches,
    bench_extract_level,
    bench_pipeline_default_pool,
    bench_pipeline_large_batches
);
criterion_main!(benches);
