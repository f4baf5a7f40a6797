//! Geotify CLI - command-line interface
//!
//! Manage a persisted list of geofences: add and remove named circular
//! regions, inspect their derived monitoring descriptors, and run one-shot
//! containment checks against a point.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geotify::config::ConfigFile;
use geotify::logging::init_logging;

use error::CliError;

#[derive(Parser)]
#[command(name = "geotify")]
#[command(version = geotify::VERSION)]
#[command(about = "Manage a persisted list of geofences", long_about = None)]
struct Cli {
    /// Override the store file path from config
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default config file and an empty store
    Init,

    /// Add a geofence to the store
    Add(commands::add::AddArgs),

    /// List stored geofences
    List {
        /// Emit the encoded record maps as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one geofence in detail
    Show {
        /// Identifier of the geofence
        identifier: String,
    },

    /// Remove a geofence by identifier
    Remove {
        /// Identifier of the geofence
        identifier: String,
    },

    /// Report which stored regions contain a point
    Check {
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = ConfigFile::load().map_err(|e| CliError::Config(e.to_string()))?;

    // Keep the guard alive for the rest of the process
    let _logging_guard =
        init_logging(&config.logging.file).map_err(|e| CliError::LoggingInit(e.to_string()))?;

    let store_path = cli
        .store
        .clone()
        .unwrap_or_else(|| config.store.path.clone());

    match cli.command {
        Commands::Init => commands::init::run(&config),
        Commands::Add(args) => commands::add::run(args, &config, &store_path),
        Commands::List { json } => commands::list::run(&config, &store_path, json),
        Commands::Show { identifier } => commands::show::run(&config, &store_path, &identifier),
        Commands::Remove { identifier } => {
            commands::remove::run(&config, &store_path, &identifier)
        }
        Commands::Check { lat, lon } => commands::check::run(&config, &store_path, lat, lon),
        Commands::Config { command } => commands::config::run(command),
    }
}
