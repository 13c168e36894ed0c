//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so log output goes to
//! a file. Without a configured `log_file` no subscriber is installed and the
//! `tracing` macros throughout the crate compile down to cheap no-ops.

use crate::config::Settings;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a global file-backed subscriber if `settings.log_file` is set.
///
/// Returns whether a subscriber was installed.
pub fn init(settings: &Settings) -> io::Result<bool> {
    let Some(path) = settings.log_file.as_deref() else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(&settings.log_filter)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let file = open_log(path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    Ok(installed)
}

fn open_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
