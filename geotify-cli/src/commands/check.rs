//! `check` command: one-shot containment query against a point.

use std::path::Path;

use geotify::config::ConfigFile;
use geotify::coord::Coordinate;
use geotify::store;

use crate::error::CliError;

/// Run the `check` command.
pub fn run(config: &ConfigFile, store_path: &Path, lat: f64, lon: f64) -> Result<(), CliError> {
    let point = Coordinate::new(lat, lon);
    point
        .validate()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let records = store::load_all(store_path, config.decode.policy)?;

    if records.is_empty() {
        println!("No geofences stored.");
        return Ok(());
    }

    println!("Point {}", point);
    for record in &records {
        let region = record.region();
        let position = if region.contains(&point) {
            "inside"
        } else {
            "outside"
        };
        let trigger = if region.notify_on_entry {
            "notifies on entry"
        } else {
            "notifies on exit"
        };
        println!("  {:<20} {:<8} ({})", region.identifier, position, trigger);
    }

    Ok(())
}
