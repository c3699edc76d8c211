pub mod config;
pub mod demo;
pub mod display;
pub mod dump;
pub mod error;
pub mod labels;
pub mod logging;
pub mod shared;
pub mod utils;

pub use config::DisplayConfig;
pub use display::{start_debug_window, start_debug_window_with, DisplayMode, StatusDisplay};
pub use error::{ConfigError, DisplayError};
pub use labels::Locale;
pub use shared::{
    new_shared_command_log, new_shared_status, CommandLogEntry, Guarded, SharedCommandLog,
    SharedStatus, StatusMap,
};
