//! Simulated automation host used by the `demo` command.
//!
//! Cycles through a fixed song list, updates the status mapping and
//! appends tap/swipe commands to the log, the way the real host does while
//! playing.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde_json::json;

use crate::display::scheduler::{RunFlag, Ticker};
use crate::shared::{keys, CommandLogEntry, SharedCommandLog, SharedStatus};

const SONGS: [&str; 5] = [
    "Tomorrow",
    "Yes! BanG_Dream!",
    "Hashiri Hajimeta Bakari no Kimi ni",
    "Kizuna Music",
    "Fire Bird",
];

/// Steps spent on one song before moving to the next.
const STEPS_PER_SONG: u64 = 12;

/// Every this many steps the status lock is held past the display's timeout.
const SLOW_UPDATE_EVERY: u64 = 9;

/// How long a slow update keeps the status lock.
pub const SLOW_UPDATE_HOLD: Duration = Duration::from_millis(700);

/// One simulated host step: what the producer writes for step `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoStep {
    pub song: &'static str,
    pub task: &'static str,
    pub state: &'static str,
    pub command: CommandLogEntry,
    pub slow: bool,
}

impl DemoStep {
    pub fn at(n: u64) -> Self {
        let song = SONGS[((n / STEPS_PER_SONG) as usize) % SONGS.len()];
        let phase = n % STEPS_PER_SONG;
        let (task, state) = match phase {
            0 => ("select_song", "selecting"),
            1 => ("start_live", "loading"),
            p if p + 1 == STEPS_PER_SONG => ("collect_result", "finished"),
            _ => ("play", "playing"),
        };

        // Cheap deterministic jitter so the log doesn't look uniform.
        let mix = n.wrapping_mul(2_654_435_761) % 1000;
        let command = if phase % 4 == 3 {
            let x = 200 + mix % 800;
            CommandLogEntry::new(format!("SWIPE {x},600 {},300", x + 120), 80.0 + (mix % 40) as f64)
        } else {
            let x = 100 + mix % 1100;
            let y = 200 + (mix * 7) % 500;
            CommandLogEntry::new(format!("TAP {x},{y}"), 8.0 + (mix % 15) as f64)
        };

        Self {
            song,
            task,
            state,
            command,
            slow: n > 0 && n % SLOW_UPDATE_EVERY == 0,
        }
    }
}

/// Start a thread that plays the host's role until `stop` is cleared.
pub fn spawn_producer(
    status: SharedStatus,
    log: SharedCommandLog,
    stop: RunFlag,
    period: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut ticker = Ticker::new(period);
        let mut n: u64 = 0;
        let mut failures: u64 = 0;

        while stop.is_running() {
            let step = DemoStep::at(n);
            if step.state == "finished" && n % (STEPS_PER_SONG * 3) == STEPS_PER_SONG - 1 {
                failures += 1;
            }

            {
                let mut map = status.lock();
                map.insert(keys::SONG_NAME.to_string(), json!(step.song));
                map.insert(keys::CURRENT_TASK.to_string(), json!(step.task));
                map.insert(keys::STATUS.to_string(), json!(step.state));
                map.insert(
                    keys::REMAINING_LIVEBOOST.to_string(),
                    json!(10 - ((n / STEPS_PER_SONG) % 10) as i64),
                );
                map.insert(keys::PLAY_FAILED_TIMES.to_string(), json!(failures));
                map.insert(
                    keys::LAST_UPDATE.to_string(),
                    json!(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
                );
                map.insert(
                    keys::OFFSET.to_string(),
                    json!({
                        "up": n % 4,
                        "down": n % 3,
                        "move": (n % 5) as i64 - 2,
                        "wait": 0.25 + (n % 4) as f64 * 0.05,
                        "interval": 1.5,
                    }),
                );

                if step.slow {
                    tracing::debug!(step = n, "demo host holding status lock");
                    thread::sleep(SLOW_UPDATE_HOLD);
                }
            }

            log.update(|entries| entries.push(step.command));

            n += 1;
            ticker.reset();
            ticker.wait(&stop);
        }

        tracing::info!(steps = n, "demo producer stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{new_shared_command_log, new_shared_status};

    #[test]
    fn test_steps_cycle_songs() {
        assert_eq!(DemoStep::at(0).song, "Tomorrow");
        assert_eq!(DemoStep::at(0).task, "select_song");
        assert_eq!(DemoStep::at(STEPS_PER_SONG).song, SONGS[1]);
        assert_eq!(DemoStep::at(STEPS_PER_SONG - 1).state, "finished");
        assert_eq!(DemoStep::at(STEPS_PER_SONG * SONGS.len() as u64).song, "Tomorrow");
    }

    #[test]
    fn test_commands_are_taps_or_swipes() {
        for n in 0..50 {
            let cmd = DemoStep::at(n).command.cmd;
            assert!(cmd.starts_with("TAP ") || cmd.starts_with("SWIPE "), "{cmd}");
        }
        assert!(!DemoStep::at(0).slow);
        assert!(DemoStep::at(SLOW_UPDATE_EVERY).slow);
    }

    #[test]
    fn test_producer_fills_shared_state_and_stops() {
        let status = new_shared_status();
        let log = new_shared_command_log();
        let stop = RunFlag::new();

        let handle = spawn_producer(
            status.clone(),
            log.clone(),
            stop.clone(),
            Duration::from_millis(10),
        );
        thread::sleep(Duration::from_millis(60));
        stop.stop();
        handle.join().unwrap();

        let len = log.lock().len();
        assert!(len >= 2);
        assert_eq!(status.lock().get(keys::SONG_NAME), Some(&json!("Tomorrow")));

        thread::sleep(Duration::from_millis(30));
        assert_eq!(log.lock().len(), len);
    }
}
