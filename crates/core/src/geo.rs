//! Geographic primitives: bounding boxes, grid enumeration, and
//! coordinate precision reduction for public output.

use crate::error::CoreError;

/// Grid cell size in degrees for condition grids.
pub const GRID_RESOLUTION_DEG: f64 = 0.02;

/// Coordinate precision (decimal places) exposed in public catch listings.
pub const PUBLIC_COORD_DECIMALS: i32 = 2;

/// An axis-aligned bounding box in degrees, normalized so that
/// `lat_min <= lat_max` and `lng_min <= lng_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lng_min: f64,
    pub lat_max: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    /// Build a normalized box from two arbitrary corners.
    pub fn from_corners(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Self {
        Self {
            lat_min: lat1.min(lat2),
            lng_min: lng1.min(lng2),
            lat_max: lat1.max(lat2),
            lng_max: lng1.max(lng2),
        }
    }

    /// Parse a `lat1,lng1,lat2,lng2` query string into a normalized box.
    pub fn parse(bounds: &str) -> Result<Self, CoreError> {
        let parts: Vec<&str> = bounds.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(CoreError::Validation(
                "bounds must be 'lat1,lng1,lat2,lng2'".into(),
            ));
        }

        let mut values = [0.0f64; 4];
        for (i, part) in parts.iter().enumerate() {
            values[i] = part.parse().map_err(|_| {
                CoreError::Validation(format!("bounds component '{part}' is not a number"))
            })?;
        }

        Ok(Self::from_corners(values[0], values[1], values[2], values[3]))
    }
}

/// Enumerate grid points over a bounding box at the given step, row-major:
/// latitude is the outer loop, longitude the inner one. Both upper bounds
/// are inclusive within a floating-point tolerance of the step, so a box
/// spanning exactly N steps yields N+1 points per axis.
pub fn grid_points(bbox: &BoundingBox, step: f64) -> Vec<(f64, f64)> {
    // Tolerance absorbs accumulated addition error at the upper bound.
    let tolerance = step * 1e-6;
    let mut points = Vec::new();

    let mut lat = bbox.lat_min;
    while lat <= bbox.lat_max + tolerance {
        let mut lng = bbox.lng_min;
        while lng <= bbox.lng_max + tolerance {
            points.push((lat, lng));
            lng += step;
        }
        lat += step;
    }

    points
}

/// Round a coordinate to the public precision (0.01 degrees).
pub fn round_coord(value: f64) -> f64 {
    let factor = 10f64.powi(PUBLIC_COORD_DECIMALS);
    (value * factor).round() / factor
}
