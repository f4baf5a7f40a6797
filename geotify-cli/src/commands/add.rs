//! `add` command: append a geofence to the store.

use std::path::Path;

use clap::{Args, ValueEnum};
use geotify::config::ConfigFile;
use geotify::coord::Coordinate;
use geotify::distance::{format_distance, parse_distance};
use geotify::geotification::{EventType, Geotification};
use geotify::store;

use crate::error::CliError;

/// Arguments for the `add` command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Latitude in decimal degrees
    #[arg(long)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long)]
    pub lon: f64,

    /// Trigger circle radius (e.g. 100m, 1.5km)
    #[arg(long)]
    pub radius: String,

    /// Unique identifier for the geofence
    #[arg(long)]
    pub id: String,

    /// Free-text note shown as the title
    #[arg(long, default_value = "")]
    pub note: String,

    /// Crossing direction that fires the notification
    #[arg(long, value_enum, default_value = "on-entry")]
    pub event: EventArg,
}

/// Event type as a command-line value.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EventArg {
    /// Notify when entering the circle
    OnEntry,
    /// Notify when leaving the circle
    OnExit,
}

impl From<EventArg> for EventType {
    fn from(arg: EventArg) -> Self {
        match arg {
            EventArg::OnEntry => EventType::OnEntry,
            EventArg::OnExit => EventType::OnExit,
        }
    }
}

/// Run the `add` command.
pub fn run(args: AddArgs, config: &ConfigFile, store_path: &Path) -> Result<(), CliError> {
    let center = Coordinate::new(args.lat, args.lon);
    center
        .validate()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let radius = parse_distance(&args.radius).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if radius <= 0.0 {
        return Err(CliError::InvalidInput(
            "radius must be greater than zero".to_string(),
        ));
    }

    let mut records = store::load_or_empty(store_path, config.decode.policy)?;
    if records.iter().any(|r| r.identifier == args.id) {
        return Err(CliError::DuplicateIdentifier(args.id));
    }

    let mut record = Geotification::new(center, radius, args.id, args.note, args.event.into());

    // Command-line radii are unconstrained input
    record.clamp_radius(config.geofence.max_radius);
    if record.radius < radius {
        tracing::warn!(
            requested = radius,
            clamped = record.radius,
            "radius exceeds the configured maximum, clamping"
        );
        println!(
            "Note: radius capped at the configured maximum of {}",
            format_distance(config.geofence.max_radius)
        );
    }

    let summary = format!("{}: {}", record.identifier, record.display_subtitle());
    records.push(record);
    store::save_all(store_path, &records)?;

    println!("Added {}", summary);
    Ok(())
}
