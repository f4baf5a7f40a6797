//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use crate::distance::parse_distance;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [store] section
    if let Some(section) = ini.section(Some("store")) {
        if let Some(v) = section.get("path") {
            let v = v.trim();
            if !v.is_empty() {
                config.store.path = expand_tilde(v);
            }
        }
    }

    // [geofence] section
    if let Some(section) = ini.section(Some("geofence")) {
        if let Some(v) = section.get("max_radius") {
            config.geofence.max_radius = parse_max_radius(v).map_err(|reason| {
                ConfigFileError::InvalidValue {
                    section: "geofence".to_string(),
                    key: "max_radius".to_string(),
                    value: v.to_string(),
                    reason,
                }
            })?;
        }
    }

    // [decode] section
    if let Some(section) = ini.section(Some("decode")) {
        if let Some(v) = section.get("policy") {
            config.decode.policy = v.trim().to_lowercase().parse().map_err(|_| {
                ConfigFileError::InvalidValue {
                    section: "decode".to_string(),
                    key: "policy".to_string(),
                    value: v.to_string(),
                    reason: "must be 'lenient' or 'strict'".to_string(),
                }
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Parse and validate a max_radius value, returning the reason on failure.
pub(super) fn parse_max_radius(value: &str) -> Result<f64, String> {
    let meters = parse_distance(value)
        .map_err(|_| "expected a distance like '500m' or '100 km'".to_string())?;
    if meters <= 0.0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(meters)
}

/// Expand a leading `~` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geotification::DecodePolicy;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_gives_defaults() {
        let config = parse("").unwrap();
        let default = ConfigFile::default();

        assert_eq!(config.geofence.max_radius, default.geofence.max_radius);
        assert_eq!(config.decode.policy, default.decode.policy);
        assert_eq!(config.store.path, default.store.path);
    }

    #[test]
    fn test_parse_store_path() {
        let config = parse("[store]\npath = /data/fences.json\n").unwrap();
        assert_eq!(config.store.path, PathBuf::from("/data/fences.json"));
    }

    #[test]
    fn test_parse_max_radius_with_unit() {
        let config = parse("[geofence]\nmax_radius = 5 km\n").unwrap();
        assert_eq!(config.geofence.max_radius, 5000.0);
    }

    #[test]
    fn test_parse_max_radius_rejects_garbage() {
        let result = parse("[geofence]\nmax_radius = wide\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_max_radius_rejects_zero() {
        let result = parse("[geofence]\nmax_radius = 0\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_decode_policy() {
        let config = parse("[decode]\npolicy = strict\n").unwrap();
        assert_eq!(config.decode.policy, DecodePolicy::Strict);

        // Case-insensitive
        let config = parse("[decode]\npolicy = LENIENT\n").unwrap();
        assert_eq!(config.decode.policy, DecodePolicy::Lenient);
    }

    #[test]
    fn test_parse_decode_policy_rejects_unknown() {
        let result = parse("[decode]\npolicy = permissive\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));

        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        assert_eq!(expand_tilde("~/x.json"), home.join("x.json"));
    }
}
