use geo_synth::prelude::*;
use geo_synth_examples::{init_tracing, summarize, write_geojson};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Wide, flat rectangles at 2 decimal places. Rectangles near the poles or
    // the antimeridian are shrunk to stay in range; run with RUST_LOG=debug to
    // see each clamp.
    let config = GeneratorConfig::new()
        .with_precision(2)
        .with_polygon_extent(RectExtent::try_new(40.0, 2.0)?);
    let mut generator =
        FeatureGenerator::try_new(config, StdRng::seed_from_u64(42), Sequential::new("rect"))?;
    let polygons = generator.polygons(2_000);

    println!("{}", summarize(&polygons));
    write_geojson(&polygons, "polygons-custom-extent.geojson")?;

    Ok(())
}
