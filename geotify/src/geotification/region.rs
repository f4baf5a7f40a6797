//! Derived monitoring-region descriptor.

use crate::coord::{distance_meters, Coordinate};

/// The monitoring region derived from a geofence record.
///
/// Not stored: recompute it from the record whenever it is needed. The two
/// notify flags are complementary - exactly one of them is set, determined
/// entirely by the record's event type.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoringRegion {
    /// Center of the trigger circle
    pub center: Coordinate,
    /// Trigger circle radius in meters
    pub radius: f64,
    /// Matching key, copied from the source record
    pub identifier: String,
    /// Fire when the tracked location enters the circle
    pub notify_on_entry: bool,
    /// Fire when the tracked location leaves the circle
    pub notify_on_exit: bool,
}

impl MonitoringRegion {
    /// One-shot containment test: is `point` within the trigger circle?
    pub fn contains(&self, point: &Coordinate) -> bool {
        distance_meters(&self.center, point) <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_around(center: Coordinate, radius: f64) -> MonitoringRegion {
        MonitoringRegion {
            center,
            radius,
            identifier: "test".to_string(),
            notify_on_entry: true,
            notify_on_exit: false,
        }
    }

    #[test]
    fn test_contains_center() {
        let center = Coordinate::new(37.33, -122.03);
        let region = region_around(center, 50.0);
        assert!(region.contains(&center));
    }

    #[test]
    fn test_contains_nearby_point() {
        // ~0.0001 degrees of latitude is ~11 m
        let region = region_around(Coordinate::new(37.33, -122.03), 50.0);
        let nearby = Coordinate::new(37.3301, -122.03);
        assert!(region.contains(&nearby));
    }

    #[test]
    fn test_excludes_distant_point() {
        // One degree of latitude is ~111 km, far outside a 50 m circle
        let region = region_around(Coordinate::new(37.33, -122.03), 50.0);
        let distant = Coordinate::new(38.33, -122.03);
        assert!(!region.contains(&distant));
    }
}
