//! Performance benchmarks for lzss-codec
//!
//! This benchmark suite evaluates:
//! - Compression/decompression speed for various data patterns
//! - Tree vs linear-scan match finding
//! - Throughput across input sizes

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lzss_codec::{LzssConfig, MatchStrategy, compress, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// One repeated byte: a literal, then distance-1 matches overlapping
    /// their own output
    pub fn single_run(size: usize) -> Vec<u8> {
        vec![b'='; size]
    }

    /// Xorshift noise: matches are rare, almost every token is a literal
    pub fn noise(size: usize) -> Vec<u8> {
        let mut state: u32 = 0x9E37_79B9;
        (0..size).map(|_| xorshift(&mut state) as u8).collect()
    }

    fn xorshift(state: &mut u32) -> u32 {
        *state ^= *state << 13;
        *state ^= *state >> 17;
        *state ^= *state << 5;
        *state
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! \
                     Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        text.iter().copied().cycle().take(size).collect()
    }

    /// Text with scattered noise - matches of all lengths
    pub fn noisy_text(size: usize) -> Vec<u8> {
        let mut data = text_like(size);
        let mut state: u32 = 0x2545_F491;
        for i in (0..size).step_by(11) {
            data[i] = (xorshift(&mut state) >> 8) as u8;
        }
        data
    }
}

mod data_sizes {
    pub const SMALL: usize = 4 * 1024; // one window
    pub const MEDIUM: usize = 64 * 1024;
    pub const LARGE: usize = 1024 * 1024;
}

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("single_run", test_data::single_run as PatternGenerator),
    ("noise", test_data::noise as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("noisy_text", test_data::noisy_text as PatternGenerator),
];

/// Benchmark compression speed for different data types
fn bench_compression_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_data_types");
    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in PATTERNS {
        let data = generator(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let compressed = compress(black_box(data), LzssConfig::CLASSIC).unwrap();
                    black_box(compressed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the two match finders on the same input
fn bench_match_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_strategies");
    group.sample_size(10);

    let size = data_sizes::SMALL * 4;
    let data = test_data::noisy_text(size);

    for (name, strategy) in [("tree", MatchStrategy::Tree), ("linear", MatchStrategy::Linear)] {
        let config = LzssConfig::CLASSIC.with_strategy(strategy);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let compressed = compress(black_box(data), config).unwrap();
                black_box(compressed);
            });
        });
    }

    group.finish();
}

/// Benchmark compression speed for different input sizes
fn bench_compression_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_sizes");

    let sizes = [
        ("4KB", data_sizes::SMALL),
        ("64KB", data_sizes::MEDIUM),
        ("1MB", data_sizes::LARGE),
    ];

    for (size_name, size) in sizes {
        let data = test_data::noisy_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| {
                let compressed = compress(black_box(data), LzssConfig::CLASSIC).unwrap();
                black_box(compressed);
            });
        });
    }

    group.finish();
}

/// Benchmark decompression speed for different data types
fn bench_decompression_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_data_types");
    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in PATTERNS {
        let original = generator(size);
        let compressed = compress(&original, LzssConfig::CLASSIC).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    let decompressed =
                        decompress(black_box(compressed), LzssConfig::CLASSIC).unwrap();
                    black_box(decompressed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark roundtrip (compress + decompress)
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    let size = data_sizes::MEDIUM;
    let data = test_data::text_like(size);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("classic", |b| {
        b.iter(|| {
            let compressed = compress(black_box(&data), LzssConfig::CLASSIC).unwrap();
            let decompressed = decompress(&compressed, LzssConfig::CLASSIC).unwrap();
            black_box(decompressed);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_data_types,
    bench_match_strategies,
    bench_compression_sizes,
    bench_decompression_data_types,
    bench_roundtrip,
);
criterion_main!(benches);
