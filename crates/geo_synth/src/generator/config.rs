//! Generator configuration.
use crate::error::{Error, Result};

/// Decimal places coordinates are rounded to by default.
pub const DEFAULT_PRECISION: u32 = 4;
/// Largest supported rounding precision.
pub const MAX_PRECISION: u32 = 9;
/// Default polygon side length in degrees.
pub const DEFAULT_RECT_SIDE: f64 = 5.0;

/// Width and height, in degrees, of generated rectangles before clamping.
///
/// Both sides are finite and `>= 0`; the only constructors are
/// [`RectExtent::try_new`] and [`Default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectExtent {
    width: f64,
    height: f64,
}

impl Default for RectExtent {
    fn default() -> Self {
        Self {
            width: DEFAULT_RECT_SIDE,
            height: DEFAULT_RECT_SIDE,
        }
    }
}

impl RectExtent {
    /// Creates an extent, rejecting non-finite or negative sides.
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(width) && ok(height) {
            Ok(Self { width, height })
        } else {
            Err(Error::InvalidExtent { width, height })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Configuration for a [`crate::generator::FeatureGenerator`].
///
/// Checked by [`crate::generator::FeatureGenerator::try_new`]; a generator never
/// holds an invalid config.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Decimal places every coordinate is rounded to.
    pub precision: u32,
    /// Rectangle size used by [`crate::generator::FeatureGenerator::polygons`].
    pub polygon_extent: RectExtent,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            polygon_extent: RectExtent::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rounding precision.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the default polygon extent.
    pub fn with_polygon_extent(mut self, polygon_extent: RectExtent) -> Self {
        self.polygon_extent = polygon_extent;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(Error::InvalidConfig(format!(
                "precision must be <= {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_settings() {
        let config = GeneratorConfig::default();
        assert_eq!(config.precision, 4);
        assert_eq!(config.polygon_extent, RectExtent::try_new(5.0, 5.0).unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_excessive_precision() {
        let config = GeneratorConfig::new().with_precision(12);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(GeneratorConfig::new()
            .with_precision(MAX_PRECISION)
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_bad_extents() {
        assert!(matches!(
            RectExtent::try_new(-1.0, 5.0),
            Err(Error::InvalidExtent { width, .. }) if width == -1.0
        ));
        assert!(RectExtent::try_new(5.0, f64::NAN).is_err());
        assert!(RectExtent::try_new(f64::INFINITY, 1.0).is_err());
        assert!(RectExtent::try_new(-20.0, -20.0).is_err());

        let zero = RectExtent::try_new(0.0, 0.0).unwrap();
        assert_eq!((zero.width(), zero.height()), (0.0, 0.0));
    }
}
