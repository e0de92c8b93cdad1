//! Benchmarks for codec and store round trips.

use cascade_bench::{BenchmarkRunner, StoreCase, default_registry, synth_buffer};
use cascade_brotli::BrotliCodec;
use cascade_codec::{Codec, NoopCodec};
use cascade_snappy::SnappyCodec;
use cascade_zlib::ZlibCodec;
use cascade_zstd::ZstdCodec;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_codecs(c: &mut Criterion) {
    // Fast presets where the codec has one; brotli at high levels would
    // dominate the wall time without changing the comparison.
    let codecs: Vec<Box<dyn Codec>> = vec![
        Box::new(NoopCodec::new()),
        Box::new(SnappyCodec::new()),
        Box::new(ZlibCodec::fast()),
        Box::new(ZstdCodec::fast()),
        Box::new(BrotliCodec::fast()),
    ];

    for codec in &codecs {
        let mut group = c.benchmark_group(format!("{}_codec", codec.name()));

        for data_size in [1024, 10 * 1024, 100 * 1024] {
            let data = synth_buffer(data_size);

            group.throughput(Throughput::Bytes(data_size as u64));
            group.bench_function(format!("compress_{}_bytes", data_size), |b| {
                b.iter(|| {
                    let result = codec.compress(black_box(&data)).unwrap();
                    black_box(result)
                });
            });

            let compressed = codec.compress(&data).unwrap();
            group.bench_function(format!("decompress_{}_bytes", data_size), |b| {
                b.iter(|| {
                    let result = codec.decompress(black_box(&compressed)).unwrap();
                    black_box(result)
                });
            });
        }

        group.finish();
    }
}

fn bench_store_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_round_trip");

    for lines in [100u64, 1000] {
        let dir = tempfile::tempdir().unwrap();
        let runner = BenchmarkRunner::new(default_registry(), dir.path());
        let case = StoreCase::new("snappy", lines).with_block_size(10_000);

        group.throughput(Throughput::Elements(lines));
        group.bench_function(format!("snappy_{}_lines", lines), |b| {
            b.iter(|| {
                let report = runner.store_round_trip(black_box(&case)).unwrap();
                black_box(report)
            });
        });
    }

    group.finish();
}

fn bench_raw_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_round_trip");

    let dir = tempfile::tempdir().unwrap();
    let runner = BenchmarkRunner::new(default_registry(), dir.path());

    for size in [4 * 1024, 64 * 1024] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("snappy_{}_bytes", size), |b| {
            b.iter(|| {
                let reports = runner.raw_round_trip("snappy", black_box(&[size])).unwrap();
                black_box(reports)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codecs, bench_store_round_trip, bench_raw_round_trip);
criterion_main!(benches);
