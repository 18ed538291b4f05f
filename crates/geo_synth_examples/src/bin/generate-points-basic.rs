use geo_synth::prelude::*;
use geo_synth_examples::{init_tracing, summarize, write_geojson};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Seeded so the output file is identical between runs.
    let mut generator = FeatureGenerator::with_rng(StdRng::seed_from_u64(2025));
    let points = generator.points(10_000);

    println!("{}", summarize(&points));
    write_geojson(&points, "generate-points-basic.geojson")?;

    Ok(())
}
