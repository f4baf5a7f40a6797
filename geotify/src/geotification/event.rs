//! Geofence trigger direction.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The boundary crossing that fires a geofence notification.
///
/// Persisted as its human-readable label (`"On Entry"` / `"On Exit"`); the
/// labels are part of the wire format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventType {
    /// Notify when the tracked location enters the circle.
    #[default]
    OnEntry,
    /// Notify when the tracked location leaves the circle.
    OnExit,
}

impl EventType {
    /// Wire and display label for this event type.
    pub const fn label(self) -> &'static str {
        match self {
            EventType::OnEntry => "On Entry",
            EventType::OnExit => "On Exit",
        }
    }

    /// Resolves a label, degrading unknown input to [`EventType::OnEntry`].
    ///
    /// This is the compatibility behavior for persisted data. Callers that
    /// want unknown labels surfaced as errors should use [`FromStr`] instead.
    pub fn from_label_lossy(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for labels that name no known event type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown event type '{0}' - expected 'On Entry' or 'On Exit'")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "On Entry" => Ok(EventType::OnEntry),
            "On Exit" => Ok(EventType::OnExit),
            other => Err(UnknownEventType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for event in [EventType::OnEntry, EventType::OnExit] {
            let parsed: EventType = event.label().parse().unwrap();
            assert_eq!(parsed, event);
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown_labels() {
        assert!("Bogus".parse::<EventType>().is_err());
        assert!("on entry".parse::<EventType>().is_err()); // case-sensitive
        assert!("".parse::<EventType>().is_err());
    }

    #[test]
    fn test_lossy_resolution_falls_back_to_entry() {
        assert_eq!(EventType::from_label_lossy("On Exit"), EventType::OnExit);
        assert_eq!(EventType::from_label_lossy("Bogus"), EventType::OnEntry);
        assert_eq!(EventType::from_label_lossy(""), EventType::OnEntry);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(EventType::OnEntry.to_string(), "On Entry");
        assert_eq!(EventType::OnExit.to_string(), "On Exit");
    }
}
