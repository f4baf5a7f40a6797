//! Geographic coordinate module
//!
//! Provides the WGS-84 coordinate value used by geofence records, explicit
//! range validation for unconstrained input, and the great-circle distance
//! needed for region containment queries.

mod types;

pub use types::{CoordError, Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Mean Earth radius in meters (IUGG mean radius).
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Computes the great-circle distance between two coordinates in meters.
///
/// Uses the haversine formula, which is more than accurate enough for the
/// region-scale distances geofencing works with (well under 0.5% error).
///
/// # Arguments
///
/// * `a` - First coordinate in WGS-84 degrees
/// * `b` - Second coordinate in WGS-84 degrees
#[inline]
pub fn distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_between_identical_points_is_zero() {
        let apple_park = Coordinate::new(37.3349, -122.0090);
        assert_eq!(distance_meters(&apple_park, &apple_park), 0.0);
    }

    #[test]
    fn test_distance_one_degree_longitude_at_equator() {
        // One degree of longitude at the equator is ~111.2 km
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);

        let d = distance_meters(&a, &b);
        assert!(
            (d - 111_195.0).abs() < 500.0,
            "Expected ~111.2 km, got {} m",
            d
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let london = Coordinate::new(51.5074, -0.1278);

        let forward = distance_meters(&nyc, &london);
        let backward = distance_meters(&london, &nyc);

        assert!((forward - backward).abs() < 1e-6);
        // NYC to London is roughly 5,570 km
        assert!(
            (forward - 5_570_000.0).abs() < 20_000.0,
            "Expected ~5570 km, got {} m",
            forward
        );
    }

    #[test]
    fn test_validate_accepts_valid_coordinates() {
        assert!(Coordinate::new(37.33, -122.03).validate().is_ok());
        assert!(Coordinate::new(MIN_LAT, MIN_LON).validate().is_ok());
        assert!(Coordinate::new(MAX_LAT, MAX_LON).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_latitude() {
        let result = Coordinate::new(90.5, 0.0).validate();
        assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_longitude() {
        let result = Coordinate::new(0.0, -180.5).validate();
        assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
    }

    #[test]
    fn test_coordinate_display() {
        let c = Coordinate::new(37.33, -122.03);
        assert_eq!(c.to_string(), "37.3300, -122.0300");
    }
}
