//! Tracks how much of the command log the terminal UI has already shown.

use std::time::Duration;

use crate::shared::{CommandLogEntry, SharedCommandLog};

/// Position in the append-only command log up to which lines were rendered.
///
/// The first successful read only records the current length; entries that
/// existed before the display started are never replayed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogCursor {
    seen: Option<usize>,
}

impl LogCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries already accounted for, if the log was ever read.
    pub fn position(&self) -> Option<usize> {
        self.seen
    }

    /// Take the entries appended since the last call and move to the end.
    ///
    /// A log shorter than the cursor yields nothing and rewinds the cursor
    /// to the new length.
    pub fn advance(&mut self, entries: &[CommandLogEntry]) -> Vec<CommandLogEntry> {
        let len = entries.len();
        let fresh = match self.seen {
            Some(seen) if seen < len => entries[seen..].to_vec(),
            _ => Vec::new(),
        };
        self.seen = Some(len);
        fresh
    }

    /// Lock the shared log for at most `timeout`, copying only the new suffix.
    ///
    /// Returns `None` when the lock could not be taken; the cursor is then
    /// left untouched.
    pub fn advance_shared(
        &mut self,
        log: &SharedCommandLog,
        timeout: Duration,
    ) -> Option<Vec<CommandLogEntry>> {
        log.read_with(timeout, |entries| self.advance(entries))
    }
}

/// Format a new log line the way the terminal UI shows it.
pub fn format_log_line(stamp: &str, entry: &CommandLogEntry) -> String {
    format!("[{stamp}] {}", entry.cmd)
}

/// Take the last `n` entries of the log.
pub fn recent_window(entries: &[CommandLogEntry], n: usize) -> Vec<CommandLogEntry> {
    let start = entries.len().saturating_sub(n);
    entries[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::new_shared_command_log;

    fn entries(n: usize) -> Vec<CommandLogEntry> {
        (0..n)
            .map(|i| CommandLogEntry::new(format!("TAP {i},{i}"), i as f64))
            .collect()
    }

    #[test]
    fn test_first_read_only_records_length() {
        let mut cursor = LogCursor::new();
        assert_eq!(cursor.position(), None);

        let fresh = cursor.advance(&entries(3));
        assert!(fresh.is_empty());
        assert_eq!(cursor.position(), Some(3));
    }

    #[test]
    fn test_advance_returns_exact_suffix() {
        let log = entries(7);
        let mut cursor = LogCursor { seen: Some(4) };

        let fresh = cursor.advance(&log);
        assert_eq!(fresh, log[4..7].to_vec());
        assert_eq!(cursor.position(), Some(7));

        let again = cursor.advance(&log);
        assert!(again.is_empty());
        assert_eq!(cursor.position(), Some(7));
    }

    #[test]
    fn test_shrunk_log_rewinds_cursor() {
        let mut cursor = LogCursor { seen: Some(10) };
        let fresh = cursor.advance(&entries(2));
        assert!(fresh.is_empty());
        assert_eq!(cursor.position(), Some(2));
    }

    #[test]
    fn test_advance_shared_times_out_without_moving() {
        let log = new_shared_command_log();
        log.update(|v| v.extend(entries(2)));
        let mut cursor = LogCursor::new();

        let guard = log.lock();
        let result = cursor.advance_shared(&log, Duration::from_millis(20));
        drop(guard);

        assert!(result.is_none());
        assert_eq!(cursor.position(), None);

        assert_eq!(
            cursor.advance_shared(&log, Duration::from_millis(20)),
            Some(vec![])
        );
        assert_eq!(cursor.position(), Some(2));
    }

    #[test]
    fn test_recent_window() {
        let log = entries(8);
        assert_eq!(recent_window(&log, 5), log[3..].to_vec());
        assert_eq!(recent_window(&log[..2], 5), log[..2].to_vec());
        assert!(recent_window(&[], 5).is_empty());
    }

    #[test]
    fn test_format_log_line() {
        let entry = CommandLogEntry::new("TAP 100,200", 12.0);
        assert_eq!(format_log_line("09:15:02", &entry), "[09:15:02] TAP 100,200");
    }
}
