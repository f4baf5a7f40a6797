//! `show` command: print one geofence in detail.

use std::path::Path;

use geotify::config::ConfigFile;
use geotify::distance::format_distance;
use geotify::store;

use crate::error::CliError;

/// Run the `show` command.
pub fn run(config: &ConfigFile, store_path: &Path, identifier: &str) -> Result<(), CliError> {
    let records = store::load_all(store_path, config.decode.policy)?;

    let record = records
        .iter()
        .find(|r| r.identifier == identifier)
        .ok_or_else(|| CliError::NotFound(identifier.to_string()))?;

    let region = record.region();

    println!("{}", record.display_title());
    println!("  {}", record.display_subtitle());
    println!();
    println!("  identifier:      {}", record.identifier);
    println!("  center:          {}", record.center);
    println!("  radius:          {}", format_distance(record.radius));
    println!("  event type:      {}", record.event_type);
    println!("  notify on entry: {}", region.notify_on_entry);
    println!("  notify on exit:  {}", region.notify_on_exit);

    Ok(())
}
