//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so the game logs to ~/.flappy/flappy.log.
//! The headless simulator logs to stderr. `RUST_LOG` wins over the level
//! passed in.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE_NAME;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Append logs to ~/.flappy/flappy.log. Returns the log path.
pub fn init_file_logging(level: &str) -> io::Result<PathBuf> {
    let path = data_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    Ok(path)
}

/// Log to stderr.
pub fn init_stderr_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .try_init();
}
