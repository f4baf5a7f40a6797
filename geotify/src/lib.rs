//! Geotify - geofence data model and persistence
//!
//! This library provides the core data model for a geofencing application:
//! named circular regions with an entry/exit trigger condition, the codec for
//! the persisted geofence list, and the derived monitoring-region descriptors
//! handed to whatever performs the actual boundary monitoring.
//!
//! # High-Level API
//!
//! ```
//! use geotify::coord::Coordinate;
//! use geotify::geotification::{EventType, Geotification};
//!
//! let mut fence = Geotification::new(
//!     Coordinate::new(37.33, -122.03),
//!     50.0,
//!     "home",
//!     "",
//!     EventType::OnExit,
//! );
//!
//! // Radii from unconstrained input are capped on demand.
//! fence.clamp_radius(100_000.0);
//!
//! let region = fence.region();
//! assert!(region.notify_on_exit);
//! ```

pub mod config;
pub mod coord;
pub mod distance;
pub mod geotification;
pub mod logging;
pub mod store;

/// Version of the Geotify library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
