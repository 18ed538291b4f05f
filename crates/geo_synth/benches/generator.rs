mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_synth::feature::{FeatureCollection, Mode};

const COUNTS: [usize; 4] = [100, 1_000, 10_000, 50_000];

fn generator_benches(c: &mut Criterion) {
    for mode in Mode::ALL {
        let mut group = c.benchmark_group(format!("generator/{mode}"));
        group.sampling_mode(common::BATCH_SAMPLING);

        for &count in &COUNTS {
            group.throughput(common::features_throughput(count));
            let mut generator = common::seeded_generator(0x5EED ^ count as u64);

            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
                b.iter(|| {
                    let fc = generator.generate(mode, count);
                    black_box(fc.len());
                });
            });
        }

        group.finish();
    }
}

fn sequential_id_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/sequential_ids");
    let count = 10_000;
    group.throughput(common::features_throughput(count));

    let mut generator = common::sequential_generator(0xC0FFEE, "bench");
    group.bench_function("points", |b| {
        b.iter(|| {
            let fc = generator.points(count);
            black_box(fc.len());
        });
    });
    group.finish();
}

fn merge_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection/concat");
    let mut generator = common::seeded_generator(0xBEEF);
    let base: FeatureCollection = generator.polygons(20_000);
    let batch = generator.polygons(1_000);
    group.throughput(common::features_throughput(base.len() + batch.len()));

    group.bench_function("20k+1k", |b| {
        b.iter(|| black_box(base.concat(&batch).len()));
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::generation_criterion();
    targets = generator_benches, sequential_id_benches, merge_benches
}
criterion_main!(benches);
