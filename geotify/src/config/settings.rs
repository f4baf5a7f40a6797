//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::geotification::DecodePolicy;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Store settings
    pub store: StoreSettings,
    /// Geofence settings
    pub geofence: GeofenceSettings,
    /// Decode settings
    pub decode: DecodeSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Path of the persisted geofence list
    pub path: PathBuf,
}

/// Geofence defaults applied at input boundaries.
#[derive(Debug, Clone)]
pub struct GeofenceSettings {
    /// Ceiling in meters applied to radii from unconstrained input
    pub max_radius: f64,
}

/// Decode behavior for persisted records.
#[derive(Debug, Clone)]
pub struct DecodeSettings {
    /// How to treat an unrecognized event type label: `lenient` keeps the
    /// historical fall-back-to-entry behavior, `strict` fails the record
    pub policy: DecodePolicy,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
