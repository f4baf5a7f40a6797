//! Logging infrastructure for Geotify.
//!
//! Provides structured logging with file output and console output:
//! - Writes to the configured log file (appended across sessions)
//! - Also prints to stderr so CLI output on stdout stays clean
//! - Configurable via RUST_LOG environment variable (default: info)

use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the logging system.
///
/// Creates the log file's parent directory if needed and sets up dual
/// output to both file and stderr.
///
/// # Arguments
///
/// * `log_file` - Full path of the log file (e.g., `~/.geotify/geotify.log`)
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns error if the log directory cannot be created
pub fn init_logging(log_file: &Path) -> Result<LoggingGuard, io::Error> {
    let log_dir = log_file.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(log_dir)?;

    let file_name = log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "geotify.log".into());

    // Create file appender with non-blocking writer
    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    // File layer without ANSI colors
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // Stderr layer with ANSI colors for the terminal
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true);

    // Env filter (defaults to INFO if RUST_LOG not set)
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
