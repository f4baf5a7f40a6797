//! The geofence record and its derived display strings.

use crate::coord::Coordinate;
use crate::distance::format_distance;

use super::event::EventType;
use super::region::MonitoringRegion;

/// Title shown for records whose note is empty.
pub const NO_NOTE_TITLE: &str = "No Note";

/// A named circular geofence with its trigger direction and note.
///
/// Plain value type: the fields hold exactly what was given, and nothing is
/// validated on construction. The radius ceiling is applied on demand via
/// [`Geotification::clamp_radius`] - callers apply it after any radius that
/// came from unconstrained input (a drag gesture, a command-line flag).
#[derive(Debug, Clone, PartialEq)]
pub struct Geotification {
    /// Center of the trigger circle
    pub center: Coordinate,
    /// Trigger circle radius in meters
    pub radius: f64,
    /// Matching key for the derived monitoring region. Uniqueness within a
    /// collection is the collection owner's responsibility.
    pub identifier: String,
    /// Free-text note, possibly empty
    pub note: String,
    /// Crossing direction that fires the notification
    pub event_type: EventType,
}

impl Geotification {
    /// Creates a record holding exactly the given values.
    pub fn new(
        center: Coordinate,
        radius: f64,
        identifier: impl Into<String>,
        note: impl Into<String>,
        event_type: EventType,
    ) -> Self {
        Self {
            center,
            radius,
            identifier: identifier.into(),
            note: note.into(),
            event_type,
        }
    }

    /// Caps the radius at `max_radius`, leaving smaller values unchanged.
    ///
    /// Idempotent; no effect beyond the field mutation.
    pub fn clamp_radius(&mut self, max_radius: f64) {
        self.radius = self.radius.min(max_radius);
    }

    /// The note, or the fixed placeholder when the note is empty.
    pub fn display_title(&self) -> &str {
        if self.note.is_empty() {
            NO_NOTE_TITLE
        } else {
            &self.note
        }
    }

    /// Human-readable summary combining the formatted radius and the event
    /// label, e.g. `Radius: 50 m - On Exit`.
    pub fn display_subtitle(&self) -> String {
        format!(
            "Radius: {} - {}",
            format_distance(self.radius),
            self.event_type
        )
    }

    /// Derives the monitoring region descriptor for this record.
    pub fn region(&self) -> MonitoringRegion {
        let notify_on_entry = self.event_type == EventType::OnEntry;
        MonitoringRegion {
            center: self.center,
            radius: self.radius,
            identifier: self.identifier.clone(),
            notify_on_entry,
            notify_on_exit: !notify_on_entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(note: &str, event_type: EventType) -> Geotification {
        Geotification::new(
            Coordinate::new(37.33, -122.03),
            50.0,
            "home",
            note,
            event_type,
        )
    }

    #[test]
    fn test_new_stores_values_verbatim() {
        let fence = sample("pick up milk", EventType::OnExit);

        assert_eq!(fence.center, Coordinate::new(37.33, -122.03));
        assert_eq!(fence.radius, 50.0);
        assert_eq!(fence.identifier, "home");
        assert_eq!(fence.note, "pick up milk");
        assert_eq!(fence.event_type, EventType::OnExit);
    }

    #[test]
    fn test_clamp_radius_caps_larger_values() {
        let mut fence = sample("", EventType::OnEntry);
        fence.radius = 5000.0;

        fence.clamp_radius(100.0);
        assert_eq!(fence.radius, 100.0);
    }

    #[test]
    fn test_clamp_radius_leaves_smaller_values() {
        let mut fence = sample("", EventType::OnEntry);

        fence.clamp_radius(100.0);
        assert_eq!(fence.radius, 50.0);
    }

    #[test]
    fn test_clamp_radius_is_idempotent() {
        let mut fence = sample("", EventType::OnEntry);
        fence.radius = 5000.0;

        fence.clamp_radius(100.0);
        let once = fence.radius;
        fence.clamp_radius(100.0);

        assert_eq!(fence.radius, once);
    }

    #[test]
    fn test_display_title_uses_placeholder_for_empty_note() {
        assert_eq!(sample("", EventType::OnEntry).display_title(), NO_NOTE_TITLE);
        assert_eq!(
            sample("pick up milk", EventType::OnEntry).display_title(),
            "pick up milk"
        );
    }

    #[test]
    fn test_display_subtitle_combines_radius_and_event() {
        let fence = sample("", EventType::OnExit);
        assert_eq!(fence.display_subtitle(), "Radius: 50 m - On Exit");

        let mut wide = sample("", EventType::OnEntry);
        wide.radius = 1500.0;
        assert_eq!(wide.display_subtitle(), "Radius: 1.5 km - On Entry");
    }

    #[test]
    fn test_region_flags_for_entry() {
        let region = sample("", EventType::OnEntry).region();
        assert!(region.notify_on_entry);
        assert!(!region.notify_on_exit);
    }

    #[test]
    fn test_region_flags_for_exit() {
        let region = sample("", EventType::OnExit).region();
        assert!(!region.notify_on_entry);
        assert!(region.notify_on_exit);
    }

    #[test]
    fn test_region_flags_are_complementary() {
        for event_type in [EventType::OnEntry, EventType::OnExit] {
            let region = sample("", event_type).region();
            assert_ne!(region.notify_on_entry, region.notify_on_exit);
        }
    }

    #[test]
    fn test_region_copies_circle_and_identifier() {
        let region = sample("", EventType::OnEntry).region();
        assert_eq!(region.center, Coordinate::new(37.33, -122.03));
        assert_eq!(region.radius, 50.0);
        assert_eq!(region.identifier, "home");
    }
}
