//! File-based logging.
//!
//! The terminal belongs to the display, so everything goes to a file:
//! the path given on the command line, or a timestamped file in the cache
//! directory (`~/.cache/dori-debug/` on Linux). `RUST_LOG` overrides the
//! default level.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Timestamped log file in the cache directory, or the working directory
/// when there is no cache directory.
pub fn default_log_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{timestamp}.log");

    dirs::cache_dir()
        .map(|dir| dir.join("dori-debug"))
        .and_then(|dir| fs::create_dir_all(&dir).ok().map(|_| dir.join(&filename)))
        .unwrap_or_else(|| PathBuf::from(filename))
}

/// Install the global subscriber writing to `file` (or [`default_log_path`]).
///
/// `level` is the filter used when `RUST_LOG` is unset or invalid. Returns
/// the path actually written to. If a subscriber is already installed the
/// file is still created but receives nothing.
pub fn init(level: &str, file: Option<&Path>) -> io::Result<PathBuf> {
    let path = file.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(log_file))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "logging initialized");
    }
    Ok(path)
}
