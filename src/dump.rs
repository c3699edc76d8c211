//! JSON dumps of the host's shared state, used by `dori-debug frame`.
//!
//! ```json
//! {"status": {"song_name": "Tomorrow"}, "commands": [{"cmd": "TAP 1,2", "cost": 12}]}
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::shared::{CommandLogEntry, Guarded, SharedCommandLog, SharedStatus, StatusMap};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameDump {
    #[serde(default)]
    pub status: StatusMap,
    #[serde(default)]
    pub commands: Vec<CommandLogEntry>,
}

impl FrameDump {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Wrap the dump in the same guarded handles a live host would share.
    pub fn into_shared(self) -> (SharedStatus, SharedCommandLog) {
        (
            Arc::new(Guarded::new(self.status)),
            Arc::new(Guarded::new(self.commands)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dump = FrameDump::from_json("{}").unwrap();
        assert!(dump.status.is_empty());
        assert!(dump.commands.is_empty());
    }

    #[test]
    fn test_into_shared_keeps_contents() {
        let dump = FrameDump::from_json(
            r#"{"status": {"song_name": "Tomorrow"}, "commands": [{"cmd": "TAP 1,2", "cost": 12}]}"#,
        )
        .unwrap();
        let (status, log) = dump.into_shared();

        let snapshot = status.snapshot(Duration::from_millis(10)).unwrap();
        assert_eq!(snapshot.get("song_name"), Some(&json!("Tomorrow")));
        assert_eq!(log.lock()[0], CommandLogEntry::new("TAP 1,2", 12.0));
    }

    #[test]
    fn test_malformed_dump_is_an_error() {
        assert!(FrameDump::from_json(r#"{"commands": "nope"}"#).is_err());
    }
}
