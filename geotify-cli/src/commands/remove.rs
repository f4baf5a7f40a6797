//! `remove` command: delete a geofence by identifier.

use std::path::Path;

use geotify::config::ConfigFile;
use geotify::store;

use crate::error::CliError;

/// Run the `remove` command.
pub fn run(config: &ConfigFile, store_path: &Path, identifier: &str) -> Result<(), CliError> {
    let mut records = store::load_all(store_path, config.decode.policy)?;

    let before = records.len();
    records.retain(|r| r.identifier != identifier);
    if records.len() == before {
        return Err(CliError::NotFound(identifier.to_string()));
    }

    store::save_all(store_path, &records)?;

    println!("Removed '{}'", identifier);
    Ok(())
}
