#![forbid(unsafe_code)]
//! geo_synth: synthetic GeoJSON feature generation for web-map rendering benchmarks.
//!
//! Modules:
//! - feature: GeoJSON-shaped positions, geometries, features and collections
//! - generator: random points, line strings and rectangles with injectable randomness and ids
//! - session: accumulated benchmark state and the drawing adapter seam
//!
//! For examples, see the `geo_synth_examples` crate.
pub mod error;
pub mod feature;
pub mod generator;
pub mod session;

/// Convenient re-exports for common types. Import with `use geo_synth::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::feature::{Feature, FeatureCollection, Geometry, Mode, Position, Properties};
    pub use crate::generator::{
        generate_lines, generate_points, generate_polygons, FeatureCount, FeatureGenerator,
        GeneratorConfig, IdSource, RandomUuid, RectExtent, Sequential,
    };
    pub use crate::session::{
        DrawMode, DrawingAdapter, InMemoryAdapter, MapLibrary, Session, DEFAULT_FEATURE_COUNT,
    };
}
