//! `init` command: bootstrap the config file and an empty store.

use geotify::config::ConfigFile;
use geotify::store;

use crate::error::CliError;

/// Run the `init` command.
pub fn run(config: &ConfigFile) -> Result<(), CliError> {
    let config_path = ConfigFile::ensure_exists().map_err(|e| CliError::Config(e.to_string()))?;
    println!("Config: {}", config_path.display());

    store::ensure_exists(&config.store.path)?;
    println!("Store:  {}", config.store.path.display());

    Ok(())
}
