//! Typed configuration keys for the CLI's get/set commands.
//!
//! Each key maps a `section.key` name to one settings field, with the same
//! validation the INI parser applies.

use std::str::FromStr;

use thiserror::Error;

use crate::distance::format_distance;

use super::file::ConfigFileError;
use super::parser::{expand_tilde, parse_max_radius};
use super::settings::ConfigFile;

/// A configuration key in `section.key` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// store.path
    StorePath,
    /// geofence.max_radius
    GeofenceMaxRadius,
    /// decode.policy
    DecodePolicy,
    /// logging.file
    LoggingFile,
}

/// Error for names that match no known configuration key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown configuration key '{0}'")]
pub struct UnknownConfigKey(pub String);

impl ConfigKey {
    /// All keys, in the order `config list` prints them.
    pub const fn all() -> [ConfigKey; 4] {
        [
            ConfigKey::StorePath,
            ConfigKey::GeofenceMaxRadius,
            ConfigKey::DecodePolicy,
            ConfigKey::LoggingFile,
        ]
    }

    /// The `section.key` name of this key.
    pub const fn name(self) -> &'static str {
        match self {
            ConfigKey::StorePath => "store.path",
            ConfigKey::GeofenceMaxRadius => "geofence.max_radius",
            ConfigKey::DecodePolicy => "decode.policy",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the current value of this key as a display string.
    pub fn get(self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::StorePath => config.store.path.display().to_string(),
            ConfigKey::GeofenceMaxRadius => format_distance(config.geofence.max_radius),
            ConfigKey::DecodePolicy => config.decode.policy.as_str().to_string(),
            ConfigKey::LoggingFile => config.logging.file.display().to_string(),
        }
    }

    /// Set this key from a string value, validating like the INI parser.
    pub fn set(self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigFileError> {
        let invalid = |reason: &str| {
            let (section, key) = self.name().split_once('.').unwrap_or(("", self.name()));
            ConfigFileError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                value: value.to_string(),
                reason: reason.to_string(),
            }
        };

        match self {
            ConfigKey::StorePath => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(invalid("must not be empty"));
                }
                config.store.path = expand_tilde(value);
            }
            ConfigKey::GeofenceMaxRadius => {
                config.geofence.max_radius =
                    parse_max_radius(value).map_err(|reason| invalid(&reason))?;
            }
            ConfigKey::DecodePolicy => {
                config.decode.policy = value
                    .trim()
                    .to_lowercase()
                    .parse()
                    .map_err(|_| invalid("must be 'lenient' or 'strict'"))?;
            }
            ConfigKey::LoggingFile => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(invalid("must not be empty"));
                }
                config.logging.file = expand_tilde(value);
            }
        }

        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = UnknownConfigKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::all()
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| UnknownConfigKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geotification::DecodePolicy;
    use std::path::PathBuf;

    #[test]
    fn test_parse_key_names() {
        for key in ConfigKey::all() {
            let parsed: ConfigKey = key.name().parse().unwrap();
            assert_eq!(parsed, key);
        }
        assert!("nope.nope".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_set_and_get_max_radius() {
        let mut config = ConfigFile::default();

        ConfigKey::GeofenceMaxRadius.set(&mut config, "2 km").unwrap();
        assert_eq!(config.geofence.max_radius, 2000.0);
        assert_eq!(ConfigKey::GeofenceMaxRadius.get(&config), "2 km");
    }

    #[test]
    fn test_set_max_radius_rejects_garbage() {
        let mut config = ConfigFile::default();

        let result = ConfigKey::GeofenceMaxRadius.set(&mut config, "very wide");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_set_decode_policy() {
        let mut config = ConfigFile::default();

        ConfigKey::DecodePolicy.set(&mut config, "strict").unwrap();
        assert_eq!(config.decode.policy, DecodePolicy::Strict);
    }

    #[test]
    fn test_set_store_path() {
        let mut config = ConfigFile::default();

        ConfigKey::StorePath
            .set(&mut config, "/data/fences.json")
            .unwrap();
        assert_eq!(config.store.path, PathBuf::from("/data/fences.json"));

        let result = ConfigKey::StorePath.set(&mut config, "   ");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }
}
