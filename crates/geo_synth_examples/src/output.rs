//! Shared helpers for the example binaries.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use geo_synth::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Writes `collection` as a GeoJSON document to `path`.
pub fn write_geojson(collection: &FeatureCollection, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, collection)?;
    writer.flush()?;
    info!(path = %path.display(), features = collection.len(), "wrote geojson");
    Ok(())
}

/// One-line per-mode breakdown of a collection.
pub fn summarize(collection: &FeatureCollection) -> String {
    let parts: Vec<String> = Mode::ALL
        .iter()
        .map(|mode| format!("{}={}", mode, collection.count_mode(*mode)))
        .collect();
    format!("{} features ({})", collection.len(), parts.join(", "))
}
