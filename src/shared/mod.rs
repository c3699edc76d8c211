//! State owned by the automation host and observed by the display.

mod guarded;
mod types;

pub use guarded::Guarded;
pub use types::{
    keys, new_shared_command_log, new_shared_status, CommandLogEntry, SharedCommandLog,
    SharedStatus, StatusMap,
};
