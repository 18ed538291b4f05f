use geo_synth::prelude::*;
use geo_synth_examples::{init_tracing, summarize, write_geojson};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Thread RNG and random UUIDs, as a UI would use them.
    let points = generate_points(1_000)?;
    let lines = generate_lines(500)?;
    let polygons = generate_polygons(250, 5.0, 5.0)?;

    // Collections are combined into new ones; the inputs stay untouched.
    let mixed = points.concat(&lines).merged(polygons);

    println!("{}", summarize(&mixed));
    write_geojson(&mixed, "generate-mixed-collection.geojson")?;

    Ok(())
}
