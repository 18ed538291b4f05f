use geo_synth::prelude::*;
use geo_synth_examples::{init_tracing, summarize, write_geojson};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut generator = FeatureGenerator::with_rng(StdRng::seed_from_u64(7));
    let mut adapter = InMemoryAdapter::new();
    let mut session = Session::new();

    // A freshly mounted map gets a new drawing instance.
    session.attach(&mut adapter);
    println!("library: {}", session.library().display_name());

    // Accumulate a batch of each kind.
    for (mode, count) in [(Mode::Point, 500), (Mode::LineString, 200), (Mode::Polygon, 100)] {
        session.select_mode(mode, &mut adapter);
        session.set_feature_count(FeatureCount::new(count));
        let merged = session.generate(&mut generator, &mut adapter)?;
        println!("after {mode}: {}", summarize(merged));
    }

    // The user switches to select mode and deletes a shape; the session
    // mirrors the edit.
    session.select_editing(&mut adapter);
    println!("adapter mode: {}", adapter.mode());
    if let Some(first) = session.collection().features().first() {
        let id = first.id().to_owned();
        adapter.remove(&id);
        session.sync_from(&adapter);
    }
    println!("after edit: {}", summarize(session.collection()));
    write_geojson(session.collection(), "session-walkthrough.geojson")?;

    // Switching libraries starts from an empty map.
    session.select_library(MapLibrary::Leaflet);
    session.attach(&mut adapter);
    println!(
        "library: {} ({} features)",
        session.library().display_name(),
        session.total_features()
    );

    session.reset(&mut adapter);
    println!("after reset: {}", summarize(session.collection()));

    Ok(())
}
