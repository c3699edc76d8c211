//! Display configuration loaded from `dori-debug.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::labels::Locale;

const APP_NAME: &str = "dori-debug";
const LOCAL_CONFIG_FILE: &str = "dori-debug.toml";

/// Tunables for the status display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub locale: Locale,

    /// Skip the terminal UI even when a terminal is available.
    #[serde(default)]
    pub force_console: bool,

    #[serde(default = "default_gui_refresh_ms")]
    pub gui_refresh_ms: u64,

    #[serde(default = "default_console_refresh_ms")]
    pub console_refresh_ms: u64,

    /// Upper bound on waiting for either shared lock, per acquisition.
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,

    /// How many trailing commands the console frame lists.
    #[serde(default = "default_recent_commands")]
    pub recent_commands: usize,

    /// Lines kept in the terminal UI log panel before the oldest are dropped.
    #[serde(default = "default_max_log_lines")]
    pub max_log_lines: usize,

    #[serde(default = "default_title")]
    pub title: String,
}

fn default_gui_refresh_ms() -> u64 {
    1000
}

fn default_console_refresh_ms() -> u64 {
    2000
}

fn default_lock_timeout_ms() -> u64 {
    500
}

fn default_recent_commands() -> usize {
    5
}

fn default_max_log_lines() -> usize {
    1000
}

fn default_title() -> String {
    "AutoDori Debug".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            force_console: false,
            gui_refresh_ms: default_gui_refresh_ms(),
            console_refresh_ms: default_console_refresh_ms(),
            lock_timeout_ms: default_lock_timeout_ms(),
            recent_commands: default_recent_commands(),
            max_log_lines: default_max_log_lines(),
            title: default_title(),
        }
    }
}

impl DisplayConfig {
    pub fn gui_refresh(&self) -> Duration {
        Duration::from_millis(self.gui_refresh_ms)
    }

    pub fn console_refresh(&self) -> Duration {
        Duration::from_millis(self.console_refresh_ms)
    }

    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }

    /// Load config from `path`, else `./dori-debug.toml`, else the user config
    /// dir. Falls back to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let candidate = match path {
            Some(p) => Some(p.to_path_buf()),
            None => discover_config_file(),
        };

        let Some(config_path) = candidate else {
            tracing::debug!("no config file found, using defaults");
            return Ok(Self::default());
        };

        Self::from_file(&config_path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded display config");
        Ok(config)
    }
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_NAME).join("config.toml"))
        .filter(|p| p.is_file())
}
