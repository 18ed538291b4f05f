//! Synthetic geometry generation.
//!
//! [`FeatureGenerator`] produces [`FeatureCollection`]s of uniformly distributed
//! points, two-vertex line strings, and axis-aligned rectangles. Randomness and
//! identifiers are injected so runs can be made reproducible; the free functions
//! [`generate_points`], [`generate_lines`] and [`generate_polygons`] use the
//! thread RNG and random UUIDs.
use rand::rngs::ThreadRng;
use rand::RngCore;
use tracing::debug;

use crate::error::Result;
use crate::feature::{Feature, FeatureCollection, Geometry, Mode};

pub mod config;
pub mod count;
pub mod ids;
pub(crate) mod shapes;

pub use config::{GeneratorConfig, RectExtent};
pub use count::FeatureCount;
pub use ids::{IdSource, RandomUuid, Sequential};

/// Generates feature collections from an injected random source and id source.
#[derive(Debug, Clone)]
pub struct FeatureGenerator<R: RngCore, I: IdSource = RandomUuid> {
    config: GeneratorConfig,
    rng: R,
    ids: I,
}

impl FeatureGenerator<ThreadRng, RandomUuid> {
    /// Generator backed by the thread RNG, random UUIDs, and the default config.
    pub fn from_thread_rng() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl<R: RngCore> FeatureGenerator<R, RandomUuid> {
    /// Generator with the default config and random UUIDs drawn from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng,
            ids: RandomUuid,
        }
    }
}

impl<R: RngCore, I: IdSource> FeatureGenerator<R, I> {
    /// Creates a generator after validating `config`.
    pub fn try_new(config: GeneratorConfig, rng: R, ids: I) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng, ids })
    }

    /// Configuration applied to every generated feature.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// `count` random points.
    pub fn points(&mut self, count: usize) -> FeatureCollection {
        let precision = self.config.precision;
        self.collect(Mode::Point, count, |rng| shapes::random_point(rng, precision))
    }

    /// `count` random two-vertex line strings.
    pub fn lines(&mut self, count: usize) -> FeatureCollection {
        let precision = self.config.precision;
        self.collect(Mode::LineString, count, |rng| {
            shapes::random_line(rng, precision)
        })
    }

    /// `count` random rectangles using the configured extent.
    pub fn polygons(&mut self, count: usize) -> FeatureCollection {
        let extent = self.config.polygon_extent;
        self.polygons_with_extent(count, extent)
    }

    /// `count` random rectangles of the given nominal extent.
    pub fn polygons_with_extent(&mut self, count: usize, extent: RectExtent) -> FeatureCollection {
        let precision = self.config.precision;
        self.collect(Mode::Polygon, count, |rng| {
            shapes::random_rectangle(rng, extent, precision)
        })
    }

    /// Dispatches to the generator matching `mode`.
    pub fn generate(&mut self, mode: Mode, count: usize) -> FeatureCollection {
        match mode {
            Mode::Point => self.points(count),
            Mode::LineString => self.lines(count),
            Mode::Polygon => self.polygons(count),
        }
    }

    fn collect<F>(&mut self, mode: Mode, count: usize, mut geometry: F) -> FeatureCollection
    where
        F: FnMut(&mut dyn RngCore) -> Geometry,
    {
        debug!(%mode, count, "generating features");
        let rng: &mut dyn RngCore = &mut self.rng;
        let mut features = Vec::with_capacity(count);
        for _ in 0..count {
            let geometry = geometry(&mut *rng);
            let id = self.ids.next_id(&mut *rng);
            features.push(Feature::new(id, geometry));
        }
        FeatureCollection::from(features)
    }
}

/// `count` random points using the thread RNG.
///
/// Fails with [`crate::error::Error::InvalidCount`] for a negative count.
pub fn generate_points(count: i64) -> Result<FeatureCollection> {
    let count = FeatureCount::try_from(count)?;
    Ok(FeatureGenerator::from_thread_rng().points(count.get()))
}

/// `count` random line strings using the thread RNG.
pub fn generate_lines(count: i64) -> Result<FeatureCollection> {
    let count = FeatureCount::try_from(count)?;
    Ok(FeatureGenerator::from_thread_rng().lines(count.get()))
}

/// `count` random `width` x `height` rectangles using the thread RNG.
pub fn generate_polygons(count: i64, width: f64, height: f64) -> Result<FeatureCollection> {
    let count = FeatureCount::try_from(count)?;
    let extent = RectExtent::try_new(width, height)?;
    Ok(FeatureGenerator::from_thread_rng().polygons_with_extent(count.get(), extent))
}
