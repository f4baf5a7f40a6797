//! Default values and constants for all configuration settings.

use crate::geotification::DecodePolicy;

use super::settings::*;

/// Default ceiling for a monitored region radius: 100 km.
///
/// Platform geofencing services refuse regions beyond a ceiling of this
/// order; radii from unconstrained input are clamped to it.
pub const DEFAULT_MAX_RADIUS_METERS: f64 = 100_000.0;

/// Default store file name inside the config directory.
pub const DEFAULT_STORE_FILE: &str = "locations.json";

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE: &str = "geotify.log";

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = super::file::config_directory();

        Self {
            store: StoreSettings {
                path: config_dir.join(DEFAULT_STORE_FILE),
            },
            geofence: GeofenceSettings {
                max_radius: DEFAULT_MAX_RADIUS_METERS,
            },
            decode: DecodeSettings {
                policy: DecodePolicy::Lenient,
            },
            logging: LoggingSettings {
                file: config_dir.join(DEFAULT_LOG_FILE),
            },
        }
    }
}
