//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use crate::distance::format_distance;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[store]
; Path of the persisted geofence list (JSON).
; Default: ~/.geotify/locations.json
path = {store_path}

[geofence]
; Ceiling applied to radii coming from unconstrained input.
; Supports m and km suffixes (e.g. 500m, 100 km).
max_radius = {max_radius}

[decode]
; How to treat an unrecognized event type label in a persisted record:
;   lenient - fall back to 'On Entry' (keeps historical data loading)
;   strict  - fail the record decode
policy = {policy}

[logging]
; Log file path.
; Default: ~/.geotify/geotify.log
file = {log_file}
"#,
        store_path = path_to_string(&config.store.path),
        max_radius = format_distance(config.geofence.max_radius),
        policy = config.decode.policy.as_str(),
        log_file = path_to_string(&config.logging.file),
    )
}

fn path_to_string(path: &Path) -> String {
    path.display().to_string()
}
