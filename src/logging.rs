//! Opt-in file logging
//!
//! The terminal belongs to the UI, so logs only go to a file.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a subscriber writing to `path`. Does nothing without a path.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(format!("logging init failed: {e}")))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
