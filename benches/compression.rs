//! Benchmarks for the squeeze pipeline across input sizes and aggressiveness.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use squeezer::{squeeze, Options};

fn sample_text(size: usize) -> String {
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "Visit https://example.com for the full report. ",
        "Sphinx of black quartz, judge my vow. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_squeeze_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("squeeze_by_size");
    let options = Options {
        aggressiveness: 5,
        max_tokens: 0,
        profile: String::new(),
    };

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("aggr5", size), &text, |b, text| {
            b.iter(|| squeeze(black_box(text.as_bytes()), &options))
        });
    }

    group.finish();
}

fn bench_squeeze_by_aggressiveness(c: &mut Criterion) {
    let mut group = c.benchmark_group("squeeze_by_aggressiveness");
    let text = sample_text(50_000);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for aggr in [0, 3, 6, 9] {
        let options = Options {
            aggressiveness: aggr,
            max_tokens: 0,
            profile: String::new(),
        };
        group.bench_with_input(BenchmarkId::new("aggr", aggr), &text, |b, text| {
            b.iter(|| squeeze(black_box(text.as_bytes()), &options))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_squeeze_by_size, bench_squeeze_by_aggressiveness);
criterion_main!(benches);
