use std::time::Duration;

use criterion::{Criterion, SamplingMode, Throughput};
use geo_synth::generator::{FeatureGenerator, GeneratorConfig, Sequential};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Large batches allocate tens of megabytes per iteration; keep runs short.
pub const SAMPLE_SIZE: usize = 10;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub fn generation_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Flat sampling suits iterations that take milliseconds each.
pub const BATCH_SAMPLING: SamplingMode = SamplingMode::Flat;

pub fn features_throughput(features: usize) -> Throughput {
    Throughput::Elements(features.max(1) as u64)
}

pub fn seeded_generator(seed: u64) -> FeatureGenerator<StdRng> {
    FeatureGenerator::with_rng(StdRng::seed_from_u64(seed))
}

pub fn sequential_generator(seed: u64, prefix: &str) -> FeatureGenerator<StdRng, Sequential> {
    FeatureGenerator::try_new(
        GeneratorConfig::default(),
        StdRng::seed_from_u64(seed),
        Sequential::new(prefix),
    )
    .expect("default generator config is valid")
}
