//! Benchmark session state.
//!
//! A [`Session`] tracks the selected mapping library, geometry mode and batch
//! size, accumulates generated features, and keeps a [`DrawingAdapter`] in sync
//! with them. Edits made through the adapter are mirrored back with
//! [`Session::sync_from`].
use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::feature::{FeatureCollection, Mode};
use crate::generator::{FeatureCount, FeatureGenerator, IdSource};

pub mod adapter;

pub use adapter::{DrawMode, DrawingAdapter, InMemoryAdapter};

/// Features generated per request when nothing else is chosen.
pub const DEFAULT_FEATURE_COUNT: usize = 100;

/// Web-mapping library a benchmark runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapLibrary {
    #[default]
    MapLibre,
    OpenLayers,
    Leaflet,
}

impl MapLibrary {
    pub const ALL: [MapLibrary; 3] = [
        MapLibrary::MapLibre,
        MapLibrary::OpenLayers,
        MapLibrary::Leaflet,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MapLibrary::MapLibre => "maplibre",
            MapLibrary::OpenLayers => "ol",
            MapLibrary::Leaflet => "leaflet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MapLibrary::MapLibre => "Maplibre GL JS (v 4.6.0)",
            MapLibrary::OpenLayers => "OpenLayers (v 10.0.0)",
            MapLibrary::Leaflet => "Leaflet JS (v 1.9.4)",
        }
    }
}

impl fmt::Display for MapLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MapLibrary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        MapLibrary::ALL
            .into_iter()
            .find(|lib| lib.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLibrary { id: s.to_owned() })
    }
}

/// Accumulated benchmark state for one map view.
#[derive(Debug, Clone)]
pub struct Session {
    library: MapLibrary,
    mode: Mode,
    feature_count: FeatureCount,
    collection: FeatureCollection,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session with the default library, point mode and a batch of
    /// [`DEFAULT_FEATURE_COUNT`] features.
    pub fn new() -> Self {
        Self {
            library: MapLibrary::default(),
            mode: Mode::default(),
            feature_count: FeatureCount::new(DEFAULT_FEATURE_COUNT),
            collection: FeatureCollection::new(),
        }
    }

    pub fn library(&self) -> MapLibrary {
        self.library
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn feature_count(&self) -> FeatureCount {
        self.feature_count
    }

    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    pub fn total_features(&self) -> usize {
        self.collection.len()
    }

    /// Sets how many features the next [`Session::generate`] call adds.
    pub fn set_feature_count(&mut self, count: FeatureCount) {
        self.feature_count = count;
    }

    /// Switches the mapping library. A new map starts with no features.
    pub fn select_library(&mut self, library: MapLibrary) {
        if library == self.library {
            return;
        }
        info!(from = %self.library, to = %library, "switching mapping library");
        self.library = library;
        self.collection = FeatureCollection::new();
    }

    /// Changes the geometry mode for generation and drawing.
    pub fn select_mode(&mut self, mode: Mode, adapter: &mut dyn DrawingAdapter) {
        self.mode = mode;
        adapter.set_mode(mode.into());
    }

    /// Puts `adapter` into select mode so existing features can be edited.
    ///
    /// The session keeps its geometry mode for the next generation.
    pub fn select_editing(&self, adapter: &mut dyn DrawingAdapter) {
        adapter.set_mode(DrawMode::Select);
    }

    /// Binds a freshly started drawing adapter: both the collection and the
    /// adapter are emptied and the adapter is put into the current mode.
    pub fn attach(&mut self, adapter: &mut dyn DrawingAdapter) {
        self.collection = FeatureCollection::new();
        adapter.clear();
        adapter.set_mode(self.mode.into());
    }

    /// Generates a batch in the current mode and appends it to the
    /// accumulated features, then redraws the merged set on `adapter`.
    ///
    /// On adapter failure the session keeps its previous collection and the
    /// adapter is redrawn with it.
    pub fn generate<R, I>(
        &mut self,
        generator: &mut FeatureGenerator<R, I>,
        adapter: &mut dyn DrawingAdapter,
    ) -> Result<&FeatureCollection>
    where
        R: RngCore,
        I: IdSource,
    {
        let batch = generator.generate(self.mode, self.feature_count.get());
        let merged = self.collection.concat(&batch);

        adapter.clear();
        if let Err(err) = adapter.add_features(merged.features()) {
            warn!(error = %err, "drawing adapter rejected features");
            adapter.clear();
            if let Err(restore) = adapter.add_features(self.collection.features()) {
                warn!(error = %restore, "drawing adapter could not restore previous features");
            }
            return Err(err);
        }

        info!(
            library = %self.library,
            mode = %self.mode,
            added = batch.len(),
            total = merged.len(),
            "merged generated features"
        );
        self.collection = merged;
        Ok(&self.collection)
    }

    /// Mirrors the adapter's current snapshot, including user edits.
    pub fn sync_from(&mut self, adapter: &dyn DrawingAdapter) {
        self.collection = FeatureCollection::from(adapter.snapshot());
    }

    /// Restores the defaults and clears the drawing layer.
    pub fn reset(&mut self, adapter: &mut dyn DrawingAdapter) {
        info!(discarded = self.collection.len(), "resetting session");
        *self = Session::new();
        adapter.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::feature::Feature;
    use crate::generator::{GeneratorConfig, Sequential};

    fn generator(seed: u64) -> FeatureGenerator<StdRng> {
        FeatureGenerator::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn defaults() {
        let session = Session::new();
        assert_eq!(session.library(), MapLibrary::MapLibre);
        assert_eq!(session.mode(), Mode::Point);
        assert_eq!(session.feature_count().get(), 100);
        assert_eq!(session.total_features(), 0);
    }

    #[test]
    fn library_ids_round_trip() {
        for lib in MapLibrary::ALL {
            assert_eq!(lib.id().parse::<MapLibrary>().unwrap(), lib);
        }
        assert!(matches!(
            "google".parse::<MapLibrary>(),
            Err(Error::UnknownLibrary { .. })
        ));
    }

    #[test]
    fn generate_accumulates_batches_across_modes() {
        let mut session = Session::new();
        let mut adapter = InMemoryAdapter::new();
        let mut generator = generator(1);
        session.attach(&mut adapter);

        session.set_feature_count(FeatureCount::new(10));
        session.generate(&mut generator, &mut adapter).unwrap();
        session.select_mode(Mode::Polygon, &mut adapter);
        session.set_feature_count(FeatureCount::new(5));
        let merged = session.generate(&mut generator, &mut adapter).unwrap();

        assert_eq!(merged.len(), 15);
        assert_eq!(merged.count_mode(Mode::Point), 10);
        assert_eq!(merged.count_mode(Mode::Polygon), 5);
        // Older features come first.
        assert_eq!(merged.features()[0].mode(), Mode::Point);
        assert_eq!(adapter.snapshot(), merged.features().to_vec());
        assert_eq!(adapter.mode(), DrawMode::Geometry(Mode::Polygon));

        let ids: HashSet<&str> = merged.iter().map(Feature::id).collect();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn sync_mirrors_adapter_edits() {
        let mut session = Session::new();
        let mut adapter = InMemoryAdapter::new();
        session.set_feature_count(FeatureCount::new(3));
        session.generate(&mut generator(2), &mut adapter).unwrap();

        let removed = session.collection().features()[1].id().to_owned();
        adapter.remove(&removed);
        session.sync_from(&adapter);

        assert_eq!(session.total_features(), 2);
        assert!(session.collection().iter().all(|f| f.id() != removed));
    }

    #[test]
    fn switching_library_discards_features() {
        let mut session = Session::new();
        session.generate(&mut generator(3), &mut ()).unwrap();
        assert_eq!(session.total_features(), 100);

        session.select_library(MapLibrary::MapLibre);
        assert_eq!(session.total_features(), 100);

        session.select_library(MapLibrary::Leaflet);
        assert_eq!(session.library(), MapLibrary::Leaflet);
        assert_eq!(session.total_features(), 0);
    }

    #[test]
    fn reset_restores_defaults_and_clears_adapter() {
        let mut session = Session::new();
        let mut adapter = InMemoryAdapter::new();
        session.select_library(MapLibrary::OpenLayers);
        session.select_mode(Mode::LineString, &mut adapter);
        session.set_feature_count(FeatureCount::new(7));
        session.generate(&mut generator(4), &mut adapter).unwrap();

        session.reset(&mut adapter);
        assert_eq!(session.library(), MapLibrary::MapLibre);
        assert_eq!(session.mode(), Mode::Point);
        assert_eq!(session.feature_count().get(), DEFAULT_FEATURE_COUNT);
        assert_eq!(session.total_features(), 0);
        assert!(adapter.is_empty());
    }

    #[test]
    fn adapter_failure_keeps_previous_collection() {
        struct Rejecting;

        impl DrawingAdapter for Rejecting {
            fn clear(&mut self) {}

            fn add_features(&mut self, _features: &[Feature]) -> Result<()> {
                Err(Error::Other("full".into()))
            }

            fn set_mode(&mut self, _mode: DrawMode) {}

            fn snapshot(&self) -> Vec<Feature> {
                Vec::new()
            }
        }

        let mut session = Session::new();
        let err = session.generate(&mut generator(5), &mut Rejecting).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
        assert_eq!(session.total_features(), 0);
    }

    #[test]
    fn duplicate_ids_leave_adapter_in_sync() {
        fn sequential(seed: u64) -> FeatureGenerator<StdRng, Sequential> {
            FeatureGenerator::try_new(
                GeneratorConfig::default(),
                StdRng::seed_from_u64(seed),
                Sequential::default(),
            )
            .unwrap()
        }

        let mut session = Session::new();
        let mut adapter = InMemoryAdapter::new();
        session.set_feature_count(FeatureCount::new(3));
        session.generate(&mut sequential(1), &mut adapter).unwrap();

        // A second sequential source restarts at "feature-0".
        let err = session
            .generate(&mut sequential(2), &mut adapter)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateFeature { ref id } if id == "feature-0"));

        assert_eq!(session.total_features(), 3);
        assert_eq!(adapter.len(), session.total_features());
        assert_eq!(adapter.snapshot(), session.collection().features().to_vec());
    }

    #[test]
    fn select_editing_keeps_generation_mode() {
        let mut session = Session::new();
        let mut adapter = InMemoryAdapter::new();
        session.select_mode(Mode::LineString, &mut adapter);
        session.select_editing(&mut adapter);
        assert_eq!(adapter.mode(), DrawMode::Select);
        assert_eq!(session.mode(), Mode::LineString);

        session.set_feature_count(FeatureCount::new(4));
        let merged = session.generate(&mut generator(6), &mut adapter).unwrap();
        assert_eq!(merged.count_mode(Mode::LineString), 4);

        session.select_mode(Mode::Point, &mut adapter);
        assert_eq!(adapter.mode(), DrawMode::Geometry(Mode::Point));
    }
}
