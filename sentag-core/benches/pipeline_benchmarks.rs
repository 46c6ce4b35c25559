//! Performance benchmarks for NormalizationPipeline
//!
//! Run with: cargo bench --bench pipeline_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sentag_core::{NormalizationPipeline, PipelineConfig, ResourceCatalog, ResourceStore, Step};
use std::hint::black_box;
use std::sync::Arc;

const SAMPLES: [&str; 6] = [
    "Hindi ko na kaya, bye! #sad 😢 @user https://x.co",
    "I don't like it's color 😂😂",
    "Ang ganda ng view!!! 😍 #blessed",
    "’Wag kang mag-alala, ok lang 'to 👍",
    "Sobrang init today, 38 degrees na naman 🥵",
    "idk pero parang di sya sincere... www.example.com/post",
];

fn generate_batch(size: usize) -> Vec<String> {
    SAMPLES
        .iter()
        .cycle()
        .take(size)
        .map(|s| s.to_string())
        .collect()
}

fn pipeline() -> NormalizationPipeline {
    let store = ResourceStore::load(ResourceCatalog::bundled()).unwrap();
    NormalizationPipeline::new(Arc::new(store), PipelineConfig::default()).unwrap()
}

/// Single-text path, one call per text
fn bench_single(c: &mut Criterion) {
    let pipeline = pipeline();
    let mut group = c.benchmark_group("single");

    for (i, text) in SAMPLES.iter().enumerate() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("preprocess", i), text, |b, text| {
            b.iter(|| pipeline.preprocess(black_box(text)));
        });
    }

    group.finish();
}

/// Step-major batch path against per-text calls
fn bench_batch_sizes(c: &mut Criterion) {
    let pipeline = pipeline();
    let mut group = c.benchmark_group("batch_sizes");

    for size in [10, 100, 1_000] {
        let batch = generate_batch(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("bulk", size), &batch, |b, batch| {
            b.iter(|| pipeline.bulk_preprocess(black_box(batch.as_slice())));
        });

        group.bench_with_input(BenchmarkId::new("per_text", size), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .map(|text| pipeline.preprocess(black_box(text)))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

/// Cost of each step on its own
fn bench_steps(c: &mut Criterion) {
    let pipeline = pipeline();
    let mut group = c.benchmark_group("steps");
    let text = SAMPLES.join(" ").to_lowercase();

    for step in Step::ALL {
        group.bench_with_input(BenchmarkId::new("step", step.name()), &text, |b, text| {
            b.iter(|| pipeline.apply_step(step, black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch_sizes, bench_steps);
criterion_main!(benches);
