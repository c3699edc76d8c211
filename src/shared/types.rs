//! Data shared between the automation host and the display.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::guarded::Guarded;

/// Status fields published by the host, keyed by field name.
///
/// No schema is enforced: values are whatever the host stored, and any
/// recognized key may be absent.
pub type StatusMap = BTreeMap<String, Value>;

/// Status mapping shared with the host.
pub type SharedStatus = Arc<Guarded<StatusMap>>;

/// Append-only command log shared with the host.
pub type SharedCommandLog = Arc<Guarded<Vec<CommandLogEntry>>>;

/// Keys the display knows how to render.
pub mod keys {
    pub const SONG_NAME: &str = "song_name";
    pub const CURRENT_TASK: &str = "current_task";
    pub const STATUS: &str = "status";
    pub const REMAINING_LIVEBOOST: &str = "remaining_liveboost";
    pub const PLAY_FAILED_TIMES: &str = "play_failed_times";
    pub const LAST_UPDATE: &str = "last_update";
    pub const OFFSET: &str = "offset";
}

/// One command issued by the host, with how long it took in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandLogEntry {
    pub cmd: String,
    pub cost: f64,
}

impl CommandLogEntry {
    pub fn new(cmd: impl Into<String>, cost: f64) -> Self {
        Self {
            cmd: cmd.into(),
            cost,
        }
    }
}

/// Create an empty status mapping ready to share.
pub fn new_shared_status() -> SharedStatus {
    Arc::new(Guarded::new(StatusMap::new()))
}

/// Create an empty command log ready to share.
pub fn new_shared_command_log() -> SharedCommandLog {
    Arc::new(Guarded::new(Vec::new()))
}
