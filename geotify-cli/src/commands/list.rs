//! `list` command: print all stored geofences.

use std::path::Path;

use geotify::config::ConfigFile;
use geotify::geotification::encode_record;
use geotify::store;
use serde_json::Value;

use crate::error::CliError;

/// Run the `list` command.
pub fn run(config: &ConfigFile, store_path: &Path, json: bool) -> Result<(), CliError> {
    let records = store::load_all(store_path, config.decode.policy)?;

    if json {
        let list = Value::Array(
            records
                .iter()
                .map(|record| Value::Object(encode_record(record)))
                .collect(),
        );
        println!("{}", serde_json::to_string_pretty(&list).unwrap_or_default());
        return Ok(());
    }

    if records.is_empty() {
        println!("No geofences stored.");
        return Ok(());
    }

    for record in &records {
        println!(
            "{:<20} {:<24} {}",
            record.identifier,
            record.display_title(),
            record.display_subtitle()
        );
    }
    println!();
    println!("{} geofence(s)", records.len());

    Ok(())
}
