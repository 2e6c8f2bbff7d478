//! Logging initialization and configuration.
//!
//! Logs go to a daily-rotated file under the user's cache directory
//! (`~/.cache/rusty-hstr/` on Linux) so they never mix with the picker
//! screen or with the command handed back to the shell.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=trace` - Every picker event and filter pass
//! - `RUST_LOG=debug` - Frames, terminal setup and injection
//! - `RUST_LOG=info` - Startup and result summary (default)
//! - `RUST_LOG=warn` - Warnings and errors only

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "rusty-hstr.log";

/// Directory holding the log files.
pub fn log_dir() -> PathBuf {
    ProjectDirs::from("", "", "rusty-hstr")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("rusty-hstr"))
}

/// Initialize the logging system.
///
/// Returns the guard of the non-blocking writer; keep it alive until exit so
/// buffered lines are flushed. Returns `None` when the log directory cannot
/// be created, in which case the picker runs without logging.
pub fn init_logging() -> Option<WorkerGuard> {
    let log_dir = log_dir();

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory {}: {}", log_dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Failed to initialize logging: {}", e);
        return None;
    }

    tracing::info!("Logging initialized - writing to {}", log_dir.display());
    Some(guard)
}
