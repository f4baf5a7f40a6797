//! Human-readable distance parsing and formatting (e.g., "250m", "1.5 km").
//!
//! Base unit is meters. Formatting uses natural unit scaling: values under a
//! kilometer render in meters, everything else in kilometers.

use std::fmt;
use thiserror::Error;

/// Error parsing a distance string.
#[derive(Debug, Error, PartialEq)]
#[error("Invalid distance '{input}' - expected format like '250m', '1.5km', or a bare number of meters")]
pub struct DistanceParseError {
    input: String,
}

impl DistanceParseError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Meters per kilometer.
const METERS_PER_KM: f64 = 1000.0;

/// Parse a human-readable distance string into meters.
///
/// Supports:
/// - Bare numbers (treated as meters)
/// - `m` suffix (meters)
/// - `km` suffix (kilometers)
/// - Case-insensitive
/// - Whitespace tolerant
///
/// Negative and non-finite values are rejected.
///
/// # Examples
///
/// ```
/// use geotify::distance::parse_distance;
///
/// assert_eq!(parse_distance("50").unwrap(), 50.0);
/// assert_eq!(parse_distance("50m").unwrap(), 50.0);
/// assert_eq!(parse_distance("50 m").unwrap(), 50.0);
/// assert_eq!(parse_distance("1.5km").unwrap(), 1500.0);
/// assert_eq!(parse_distance("100 KM").unwrap(), 100_000.0);
/// ```
pub fn parse_distance(s: &str) -> Result<f64, DistanceParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DistanceParseError::new(s));
    }

    let s_upper = s.to_uppercase();

    // Try to find suffix
    let (num_str, multiplier) = if s_upper.ends_with("KM") {
        (s[..s.len() - 2].trim(), METERS_PER_KM)
    } else if s_upper.ends_with('M') {
        (s[..s.len() - 1].trim(), 1.0)
    } else {
        // No suffix, treat as meters
        (s, 1.0)
    };

    let num: f64 = num_str.parse().map_err(|_| DistanceParseError::new(s))?;
    if !num.is_finite() || num < 0.0 {
        return Err(DistanceParseError::new(s));
    }

    Ok(num * multiplier)
}

/// Format a distance in meters as a human-readable string.
///
/// Values of a kilometer and above scale to kilometers; one decimal place is
/// kept, trimmed when the value is whole.
///
/// # Examples
///
/// ```
/// use geotify::distance::format_distance;
///
/// assert_eq!(format_distance(50.0), "50 m");
/// assert_eq!(format_distance(999.5), "999.5 m");
/// assert_eq!(format_distance(1000.0), "1 km");
/// assert_eq!(format_distance(1500.0), "1.5 km");
/// ```
pub fn format_distance(meters: f64) -> String {
    if meters >= METERS_PER_KM {
        let km = meters / METERS_PER_KM;
        if (km - km.round()).abs() < 0.05 {
            format!("{:.0} km", km)
        } else {
            format!("{:.1} km", km)
        }
    } else if (meters - meters.round()).abs() < 0.05 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.1} m", meters)
    }
}

/// A distance in meters that can be parsed from and formatted to
/// human-readable strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance(pub f64);

impl Distance {
    pub fn meters(self) -> f64 {
        self.0
    }

    pub fn from_km(km: f64) -> Self {
        Self(km * METERS_PER_KM)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_distance(self.0))
    }
}

impl std::str::FromStr for Distance {
    type Err = DistanceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_distance(s).map(Distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(parse_distance("50").unwrap(), 50.0);
        assert_eq!(parse_distance("0").unwrap(), 0.0);
        assert_eq!(parse_distance("0.5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_meters() {
        assert_eq!(parse_distance("50m").unwrap(), 50.0);
        assert_eq!(parse_distance("50M").unwrap(), 50.0);
        assert_eq!(parse_distance("250.5m").unwrap(), 250.5);
    }

    #[test]
    fn test_parse_kilometers() {
        assert_eq!(parse_distance("1km").unwrap(), 1000.0);
        assert_eq!(parse_distance("1KM").unwrap(), 1000.0);
        assert_eq!(parse_distance("1.5km").unwrap(), 1500.0);
        assert_eq!(parse_distance("100km").unwrap(), 100_000.0);
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_distance("  2km  ").unwrap(), 2000.0);
        assert_eq!(parse_distance("2 km").unwrap(), 2000.0);
        assert_eq!(parse_distance("500 m").unwrap(), 500.0);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_distance("").is_err());
        assert!(parse_distance("abc").is_err());
        assert!(parse_distance("5mi").is_err()); // Miles not supported
        assert!(parse_distance("-50m").is_err());
        assert!(parse_distance("inf").is_err());
        assert!(parse_distance("NaN").is_err());
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(50.0), "50 m");
        assert_eq!(format_distance(250.5), "250.5 m");
        assert_eq!(format_distance(1000.0), "1 km");
        assert_eq!(format_distance(1500.0), "1.5 km");
        assert_eq!(format_distance(100_000.0), "100 km");
        assert_eq!(format_distance(0.0), "0 m");
    }

    #[test]
    fn test_distance_roundtrip() {
        let distances = vec!["50 m", "250.5 m", "1 km", "1.5 km", "100 km"];
        for s in distances {
            let parsed: Distance = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn test_distance_from_helpers() {
        assert_eq!(Distance::from_km(1.5).meters(), 1500.0);
        assert_eq!(Distance(50.0).meters(), 50.0);
    }
}
