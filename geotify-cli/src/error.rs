//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use geotify::store::StoreError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Invalid user input (coordinates, radius, ...)
    InvalidInput(String),
    /// A geofence with this identifier already exists
    DuplicateIdentifier(String),
    /// No geofence with this identifier exists
    NotFound(String),
    /// Store read/write error
    Store(StoreError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Store(StoreError::Read(_)) => {
                eprintln!();
                eprintln!("Run 'geotify init' to create an empty store, or pass");
                eprintln!("--store to point at an existing one.");
            }
            CliError::NotFound(_) => {
                eprintln!();
                eprintln!("Use 'geotify list' to see stored identifiers.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::DuplicateIdentifier(id) => {
                write!(f, "A geofence with identifier '{}' already exists", id)
            }
            CliError::NotFound(id) => write!(f, "No geofence with identifier '{}'", id),
            CliError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::Store(e)
    }
}
