//! Geographic primitives: points, bounding rectangles and circular regions.
//!
//! All coordinates are WGS84 degrees stored as f64; all distances are metres.
//! Distance computations use the haversine great-circle formula, which is
//! accurate to well under a cell width at the 1 km sampling scale used by the
//! spatial reduction.

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationResult};

/// Mean Earth radius in metres (IUGG).
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Metres per degree of latitude (WGS84 mean).
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Default buffer radius around a selected point: 100 km, the assumed
/// dispersion radius of an SO2 plume.
pub const DEFAULT_REGION_RADIUS_METERS: f64 = 100_000.0;

/// A geographic point in degrees, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude/longitude degrees.
    ///
    /// # Returns
    /// * `Err(ValidationError)` if either coordinate is out of range
    pub fn new(latitude: f64, longitude: f64) -> ValidationResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !latitude.is_finite() {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) || !longitude.is_finite() {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point in metres.
    pub fn haversine_distance_meters(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_METERS * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Human-readable placeholder name for a location, mirroring what the shell
/// shows in the marker popup and the alert message.
pub fn location_name(latitude: f64, longitude: f64) -> String {
    format!("Location ({:.2}, {:.2})", latitude, longitude)
}

/// Axis-aligned geographic bounding rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRect {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoRect {
    pub fn from_wsen(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lon = self.wrap_lon(point.longitude());
        lon >= self.west
            && lon <= self.east
            && point.latitude() >= self.south
            && point.latitude() <= self.north
    }

    /// Shift a longitude by a whole turn so it falls inside the rect's span
    /// when the rect extends past the ±180 antimeridian. Rects produced by
    /// [`Region::bounding_rect`] are unwrapped (west may go below -180, east
    /// above 180), so membership and indexing must compare longitudes
    /// modulo 360.
    pub(crate) fn wrap_lon(&self, lon: f64) -> f64 {
        if lon < self.west && lon + 360.0 <= self.east {
            lon + 360.0
        } else if lon > self.east && lon - 360.0 >= self.west {
            lon - 360.0
        } else {
            lon
        }
    }

    pub fn width_degrees(&self) -> f64 {
        self.east - self.west
    }

    pub fn height_degrees(&self) -> f64 {
        self.north - self.south
    }

    /// Point inside the rectangle closest to `point` (clamp in both axes).
    fn clamp(&self, point: &GeoPoint) -> GeoPoint {
        // The clamped longitude may land outside ±180 for an unwrapped rect;
        // that is fine for distance math, which is periodic in longitude.
        GeoPoint {
            latitude: point.latitude().clamp(self.south, self.north),
            longitude: self.wrap_lon(point.longitude()).clamp(self.west, self.east),
        }
    }
}

/// Circular geographic region: the fixed-radius buffer around a selected
/// point that bounds all spatial queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    center: GeoPoint,
    radius_meters: f64,
}

impl Region {
    pub fn new(center: GeoPoint, radius_meters: f64) -> Self {
        Self {
            center,
            radius_meters,
        }
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Whether a point lies inside the circle.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.center.haversine_distance_meters(point) <= self.radius_meters
    }

    /// Whether a raster footprint can overlap the circle. Uses the nearest
    /// point of the rectangle, an approximation that errs on the inclusive
    /// side; the per-cell containment check during reduction is what bounds
    /// the result.
    pub fn intersects_rect(&self, rect: &GeoRect) -> bool {
        let nearest = rect.clamp(&self.center);
        self.center.haversine_distance_meters(&nearest) <= self.radius_meters
    }

    /// Bounding rectangle of the circle. Latitude is clamped to the poles,
    /// but longitude is left unwrapped: near the ±180 antimeridian `west`
    /// may go below -180 or `east` above 180 so the rectangle stays
    /// contiguous. [`GeoRect::contains`] and grid indexing interpret
    /// longitudes modulo 360, so points on the far side of the seam still
    /// fall inside. Longitudinal extent grows with latitude; at the poles
    /// the rectangle degenerates to the full longitude range.
    pub fn bounding_rect(&self) -> GeoRect {
        let dlat = self.radius_meters / METERS_PER_DEGREE_LAT;
        let cos_lat = self.center.latitude().to_radians().cos().max(1e-6);
        let dlon = (self.radius_meters / (METERS_PER_DEGREE_LAT * cos_lat)).min(180.0);

        GeoRect {
            west: self.center.longitude() - dlon,
            south: (self.center.latitude() - dlat).max(-90.0),
            east: self.center.longitude() + dlon,
            north: (self.center.latitude() + dlat).min(90.0),
        }
    }
}
