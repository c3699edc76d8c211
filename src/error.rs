//! Error types for the display and its configuration.

use std::path::PathBuf;

/// Failures inside the display. None of these escape the refresh loop.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("render surface already closed")]
    SurfaceClosed,

    #[error("render failed: {0}")]
    Render(String),
}

/// Failures loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
