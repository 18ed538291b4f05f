//! Drawing-tool adapter seam.
//!
//! A drawing adapter renders features on whichever map library is active and
//! reports the user's edits back as a feature snapshot. Map rendering and
//! drawing interaction live outside this crate; [`InMemoryAdapter`] is a
//! reference implementation that keeps the feature set in memory.
use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::feature::{Feature, Mode};

/// Interaction mode of a drawing layer.
///
/// `Geometry` draws new shapes of the given kind; `Select` picks and edits
/// existing ones without creating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    Geometry(Mode),
    Select,
}

impl Default for DrawMode {
    fn default() -> Self {
        DrawMode::Geometry(Mode::default())
    }
}

impl From<Mode> for DrawMode {
    fn from(mode: Mode) -> Self {
        DrawMode::Geometry(mode)
    }
}

impl DrawMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawMode::Geometry(mode) => mode.as_str(),
            DrawMode::Select => "select",
        }
    }

    /// Geometry kind new drawings create, if any.
    pub fn geometry(&self) -> Option<Mode> {
        match self {
            DrawMode::Geometry(mode) => Some(*mode),
            DrawMode::Select => None,
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders features and reports edited feature sets.
pub trait DrawingAdapter {
    /// Removes every feature from the drawing layer.
    fn clear(&mut self);

    /// Adds features to the drawing layer.
    ///
    /// Adding a feature whose id is already present fails, so callers clear
    /// before re-adding a merged set.
    fn add_features(&mut self, features: &[Feature]) -> Result<()>;

    /// Switches between drawing a geometry kind and selecting existing features.
    fn set_mode(&mut self, mode: DrawMode);

    /// Current feature set, including user edits.
    fn snapshot(&self) -> Vec<Feature>;
}

/// A no-op adapter.
impl DrawingAdapter for () {
    #[inline]
    fn clear(&mut self) {}

    #[inline]
    fn add_features(&mut self, _features: &[Feature]) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn set_mode(&mut self, _mode: DrawMode) {}

    fn snapshot(&self) -> Vec<Feature> {
        Vec::new()
    }
}

/// Adapter that stores features in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAdapter {
    features: Vec<Feature>,
    ids: HashSet<String>,
    mode: DrawMode,
}

impl InMemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn as_slice(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Drops the feature with `id`, as a user deleting a shape would.
    pub fn remove(&mut self, id: &str) -> Option<Feature> {
        let index = self.features.iter().position(|f| f.id() == id)?;
        self.ids.remove(id);
        Some(self.features.remove(index))
    }
}

impl DrawingAdapter for InMemoryAdapter {
    fn clear(&mut self) {
        self.features.clear();
        self.ids.clear();
    }

    fn add_features(&mut self, features: &[Feature]) -> Result<()> {
        let mut incoming = HashSet::with_capacity(features.len());
        for feature in features {
            if self.ids.contains(feature.id()) || !incoming.insert(feature.id()) {
                return Err(Error::DuplicateFeature {
                    id: feature.id().to_owned(),
                });
            }
        }
        self.ids.extend(incoming.into_iter().map(str::to_owned));
        self.features.extend_from_slice(features);
        Ok(())
    }

    fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    fn snapshot(&self) -> Vec<Feature> {
        self.features.clone()
    }
}
