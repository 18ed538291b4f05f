//! GeoJSON-shaped data model produced by the generator.
//!
//! With the `serde` feature enabled the types serialize to standard GeoJSON:
//! positions are `[lon, lat]` arrays, geometries and features carry a `"type"` tag.
use std::fmt;
use std::str::FromStr;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest absolute longitude in degrees.
pub const LON_LIMIT: f64 = 180.0;
/// Largest absolute latitude in degrees.
pub const LAT_LIMIT: f64 = 90.0;

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns true if both components lie within the valid WGS84 ranges.
    pub fn is_in_range(&self) -> bool {
        (-LON_LIMIT..=LON_LIMIT).contains(&self.lon) && (-LAT_LIMIT..=LAT_LIMIT).contains(&self.lat)
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Position> for [f64; 2] {
    fn from(value: Position) -> Self {
        [value.lon, value.lat]
    }
}

impl From<DVec2> for Position {
    fn from(value: DVec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Position> for DVec2 {
    fn from(value: Position) -> Self {
        DVec2::new(value.lon, value.lat)
    }
}

/// Geometry kind a feature represents, or that a drawing tool creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    #[default]
    Point,
    LineString,
    Polygon,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Point, Mode::LineString, Mode::Polygon];

    /// Wire identifier of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Point => "point",
            Mode::LineString => "linestring",
            Mode::Polygon => "polygon",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Point => "Point",
            Mode::LineString => "Line",
            Mode::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMode { id: s.to_owned() })
    }
}

/// GeoJSON geometry subset emitted by the generator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "type"))]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
}

impl Geometry {
    /// The mode matching this geometry kind.
    pub fn mode(&self) -> Mode {
        match self {
            Geometry::Point { .. } => Mode::Point,
            Geometry::LineString { .. } => Mode::LineString,
            Geometry::Polygon { .. } => Mode::Polygon,
        }
    }

    /// Iterates over every position of the geometry, rings flattened in order.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Geometry::Point { coordinates } => Box::new(std::iter::once(coordinates)),
            Geometry::LineString { coordinates } => Box::new(coordinates.iter()),
            Geometry::Polygon { coordinates } => Box::new(coordinates.iter().flatten()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Properties {
    pub mode: Mode,
}

/// A single geometric entity with an identifier and a mode tag.
///
/// Deserializing fails when `properties.mode` disagrees with the geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename = "Feature", try_from = "RawFeature")
)]
pub struct Feature {
    id: String,
    geometry: Geometry,
    properties: Properties,
}

impl Feature {
    /// Creates a feature whose mode tag follows the geometry kind.
    pub fn new(id: impl Into<String>, geometry: Geometry) -> Self {
        let mode = geometry.mode();
        Self {
            id: id.into(),
            geometry,
            properties: Properties { mode },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn mode(&self) -> Mode {
        self.properties.mode
    }
}

/// Wire form of a [`Feature`] before the mode tag is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(tag = "type", rename = "Feature")]
struct RawFeature {
    id: String,
    geometry: Geometry,
    properties: Properties,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFeature> for Feature {
    type Error = Error;

    fn try_from(raw: RawFeature) -> Result<Self> {
        let geometry = raw.geometry.mode();
        if raw.properties.mode != geometry {
            return Err(Error::ModeMismatch {
                id: raw.id,
                mode: raw.properties.mode,
                geometry,
            });
        }
        Ok(Feature::new(raw.id, raw.geometry))
    }
}

/// Ordered, immutable group of features.
///
/// Collections are only ever combined into new collections; features are never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename = "FeatureCollection")
)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }

    /// Returns a new collection holding `self`'s features followed by `other`'s.
    pub fn concat(&self, other: &FeatureCollection) -> FeatureCollection {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Consuming variant of [`FeatureCollection::concat`].
    pub fn merged(mut self, other: FeatureCollection) -> FeatureCollection {
        self.features.extend(other.features);
        self
    }

    /// Number of features tagged with `mode`.
    pub fn count_mode(&self, mode: Mode) -> usize {
        self.iter().filter(|f| f.mode() == mode).count()
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
