//! Presentation of a status snapshot: the six field rows and the offset block.
//!
//! Everything here works on an already-copied [`StatusMap`], so none of it
//! touches a lock.

use serde_json::Value;

use crate::labels::Labels;
use crate::shared::{keys, StatusMap};

/// A caption/value pair for one status row.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub caption: &'static str,
    pub value: String,
}

/// Timing offsets reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OffsetView {
    pub up: i64,
    pub down: i64,
    pub move_: i64,
    pub wait: f64,
    pub interval: f64,
}

impl OffsetView {
    /// Read `snapshot.offset`, treating a missing or non-numeric sub-field as zero.
    pub fn from_snapshot(snapshot: &StatusMap) -> Self {
        let Some(offset) = snapshot.get(keys::OFFSET) else {
            return Self::default();
        };

        Self {
            up: int_field(offset, "up"),
            down: int_field(offset, "down"),
            move_: int_field(offset, "move"),
            wait: float_field(offset, "wait"),
            interval: float_field(offset, "interval"),
        }
    }

    /// The two offset lines, with `sep` between each name and its value.
    pub fn lines(&self, sep: &str) -> [String; 2] {
        [
            format!(
                "up{sep}{}, down{sep}{}, move{sep}{}",
                self.up, self.down, self.move_
            ),
            format!("wait{sep}{:.3}, interval{sep}{:.3}", self.wait, self.interval),
        ]
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn int_field(offset: &Value, name: &str) -> i64 {
    let Some(value) = offset.get(name) else {
        return 0;
    };
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        other => as_f64(other).map(|f| f.trunc() as i64).unwrap_or(0),
    }
}

fn float_field(offset: &Value, name: &str) -> f64 {
    offset.get(name).and_then(as_f64).unwrap_or(0.0)
}

/// Render a scalar status value, or `None` if it should show as unknown.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Everything a frame shows from the status mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub fields: Vec<FieldRow>,
    pub offset: OffsetView,
}

impl StatusView {
    pub fn from_snapshot(snapshot: &StatusMap, labels: &Labels) -> Self {
        let field = |caption: &'static str, key: &str| FieldRow {
            caption,
            value: snapshot
                .get(key)
                .and_then(value_text)
                .unwrap_or_else(|| labels.unknown.to_string()),
        };

        let fields = vec![
            field(labels.song_name, keys::SONG_NAME),
            field(labels.current_task, keys::CURRENT_TASK),
            field(labels.status, keys::STATUS),
            field(labels.liveboost, keys::REMAINING_LIVEBOOST),
            field(labels.failed_times, keys::PLAY_FAILED_TIMES),
            field(labels.last_update, keys::LAST_UPDATE),
        ];

        Self {
            fields,
            offset: OffsetView::from_snapshot(snapshot),
        }
    }
}
