//! Configuration for Geotify.
//!
//! User configuration lives at `~/.geotify/config.ini`. Settings structs are
//! in `settings`, constants in `defaults`, INI parsing in `parser`,
//! serialization in `writer`, and the typed keys backing the CLI's
//! `config get`/`config set` commands in `keys`.

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_LOG_FILE, DEFAULT_MAX_RADIUS_METERS, DEFAULT_STORE_FILE};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, UnknownConfigKey};
pub use settings::{ConfigFile, DecodeSettings, GeofenceSettings, LoggingSettings, StoreSettings};
