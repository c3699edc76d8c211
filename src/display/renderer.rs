//! The presentation surface a [`StatusDisplay`](super::StatusDisplay) draws on.

use crate::error::DisplayError;
use crate::shared::CommandLogEntry;

use super::scheduler::{RunFlag, Ticker};
use super::view::StatusView;

/// Which surface a display ended up with. Fixed for the life of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Graphical,
    Console,
}

/// How a surface wants the command log delivered each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogPolicy {
    /// Only entries appended since the previous tick.
    Incremental,
    /// The last `n` entries, every tick.
    RecentWindow(usize),
}

/// Command-log content for one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum LogUpdate {
    /// The log lock was busy; keep whatever is already on screen.
    Skipped,
    /// Newly appended entries, already formatted as `[HH:MM:SS] <cmd>`.
    Appended(Vec<String>),
    /// The trailing window of the log.
    Recent(Vec<CommandLogEntry>),
}

/// Everything drawn by one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusFrame {
    pub view: StatusView,
    pub log: LogUpdate,
}

/// A surface that can show status frames.
pub trait Renderer {
    fn mode(&self) -> DisplayMode;

    fn log_policy(&self) -> LogPolicy;

    fn render(&mut self, frame: &StatusFrame) -> Result<(), DisplayError>;

    /// Block until `ticker` is due or `running` is cleared.
    ///
    /// Interactive surfaces process input here and may clear `running`
    /// themselves when the user closes them.
    fn wait(&mut self, ticker: &Ticker, running: &RunFlag) -> Result<(), DisplayError> {
        ticker.wait(running);
        Ok(())
    }

    /// Release the surface. Called once when the display stops.
    fn close(&mut self) {}
}
