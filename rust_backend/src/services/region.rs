//! Construction of the circular study region around a selected point.

use crate::models::geo::{GeoPoint, Region, DEFAULT_REGION_RADIUS_METERS};

/// Build the study region around a point using the default 100 km buffer.
///
/// # Arguments
/// * `center` - The point the user selected on the map
///
/// # Returns
/// * A [`Region`] bounding every subsequent imagery query and reduction
pub fn build_region(center: GeoPoint) -> Region {
    build_region_with_radius(center, DEFAULT_REGION_RADIUS_METERS)
}

/// Build a study region with an explicit buffer radius in metres.
pub fn build_region_with_radius(center: GeoPoint, radius_meters: f64) -> Region {
    Region::new(center, radius_meters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region_radius() {
        let center = GeoPoint::new(40.7, -74.0).unwrap();
        let region = build_region(center);
        assert_eq!(region.center(), center);
        assert_eq!(region.radius_meters(), 100_000.0);
    }

    #[test]
    fn test_region_keeps_explicit_radius() {
        let center = GeoPoint::new(0.0, 0.0).unwrap();
        let region = build_region_with_radius(center, 25_000.0);
        assert_eq!(region.radius_meters(), 25_000.0);
    }

    #[test]
    fn test_region_contains_its_center() {
        let center = GeoPoint::new(-33.45, -70.66).unwrap();
        assert!(build_region(center).contains(&center));
    }
}
