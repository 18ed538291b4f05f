//! Random coordinate draws and geometry construction.
use glam::DVec2;
use rand::RngCore;
use tracing::debug;

use crate::feature::{Geometry, Position, LAT_LIMIT, LON_LIMIT};
use crate::generator::config::RectExtent;

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 high bits fill the f64 mantissa exactly.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Round `value` to `precision` decimal places, halves away from zero.
#[inline]
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// Draw a uniformly distributed, rounded position. Latitude is drawn first.
pub(crate) fn random_position(rng: &mut dyn RngCore, precision: u32) -> Position {
    let lat = round_to(rand01(rng) * 2.0 * LAT_LIMIT - LAT_LIMIT, precision);
    let lon = round_to(rand01(rng) * 2.0 * LON_LIMIT - LON_LIMIT, precision);
    Position::new(lon, lat)
}

pub(crate) fn random_point(rng: &mut dyn RngCore, precision: u32) -> Geometry {
    Geometry::Point {
        coordinates: random_position(rng, precision),
    }
}

/// Two independent endpoints; identical endpoints are kept.
pub(crate) fn random_line(rng: &mut dyn RngCore, precision: u32) -> Geometry {
    let origin = random_position(rng, precision);
    let destination = random_position(rng, precision);
    Geometry::LineString {
        coordinates: vec![origin, destination],
    }
}

pub(crate) fn random_rectangle(
    rng: &mut dyn RngCore,
    extent: RectExtent,
    precision: u32,
) -> Geometry {
    let center = random_position(rng, precision);
    Geometry::Polygon {
        coordinates: vec![rectangle_ring(center, extent, precision)],
    }
}

/// Closed, axis-aligned ring around `center`.
///
/// Half extents are clamped so the ring never crosses the antimeridian or a pole.
/// Corners run bottom-left, bottom-right, top-right, top-left and back to
/// bottom-left; each coordinate is rounded on its own.
pub(crate) fn rectangle_ring(center: Position, extent: RectExtent, precision: u32) -> Vec<Position> {
    let c = DVec2::from(center);
    let requested = DVec2::new(extent.width(), extent.height()) * 0.5;
    let room = DVec2::new(LON_LIMIT, LAT_LIMIT) - c.abs();
    let half = requested.min(room);
    if half != requested {
        debug!(
            lon = center.lon,
            lat = center.lat,
            half_width = half.x,
            half_height = half.y,
            "clamped rectangle near the antimeridian or a pole"
        );
    }

    let corner = |sx: f64, sy: f64| {
        let p = c + half * DVec2::new(sx, sy);
        Position::new(round_to(p.x, precision), round_to(p.y, precision))
    };

    let bottom_left = corner(-1.0, -1.0);
    vec![
        bottom_left,
        corner(1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, 1.0),
        bottom_left,
    ]
}
