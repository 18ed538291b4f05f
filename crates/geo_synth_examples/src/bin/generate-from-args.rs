//! Usage: generate-from-args <point|linestring|polygon> <count> [width height] [out.geojson]
use geo_synth::prelude::*;
use geo_synth_examples::{init_tracing, summarize, write_geojson};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mode, count) = match args.as_slice() {
        [mode, count, ..] => (mode.parse::<Mode>()?, count.parse::<FeatureCount>()?),
        _ => anyhow::bail!(
            "usage: generate-from-args <point|linestring|polygon> <count> [width height] [out.geojson]"
        ),
    };

    let mut extent = RectExtent::default();
    let mut out = String::from("generate-from-args.geojson");
    match &args[2..] {
        [] => {}
        [path] => out = path.clone(),
        [width, height, rest @ ..] => {
            extent = RectExtent::try_new(width.parse()?, height.parse()?)?;
            if let Some(path) = rest.first() {
                out = path.clone();
            }
        }
    }

    let config = GeneratorConfig::new().with_polygon_extent(extent);
    let mut generator = FeatureGenerator::try_new(config, rand::rng(), RandomUuid)?;
    let collection = generator.generate(mode, count.get());

    println!("{}", summarize(&collection));
    write_geojson(&collection, out)?;

    Ok(())
}
