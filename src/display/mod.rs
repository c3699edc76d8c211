//! Live status display over the host's shared state.
//!
//! A [`StatusDisplay`] picks a surface once (terminal UI when possible,
//! plain console otherwise), then ticks on a fixed interval: copy the status
//! mapping and the relevant part of the command log under their locks,
//! release, and render. Nothing that goes wrong inside a tick escapes the
//! loop.

pub mod capability;
pub mod console;
pub mod cursor;
pub mod renderer;
pub mod scheduler;
pub mod tui;
pub mod view;

use std::time::Duration;

use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::shared::{SharedCommandLog, SharedStatus, StatusMap};

use capability::Capability;
use console::ConsoleRenderer;
use cursor::{format_log_line, recent_window, LogCursor};
use renderer::{LogPolicy, LogUpdate, StatusFrame};
use scheduler::Ticker;
use tui::TuiRenderer;
use view::StatusView;

pub use renderer::{DisplayMode, Renderer};
pub use scheduler::RunFlag;

/// Read-only observer of the host's status mapping and command log.
pub struct StatusDisplay {
    status: SharedStatus,
    log: SharedCommandLog,
    config: DisplayConfig,
    renderer: Box<dyn Renderer + Send>,
    cursor: LogCursor,
    running: RunFlag,
    handle_interrupts: bool,
}

impl StatusDisplay {
    /// Build a display, preferring the terminal UI.
    ///
    /// Falls back to console mode for good if the terminal UI is unavailable
    /// or fails to start. Never fails.
    pub fn new(status: SharedStatus, log: SharedCommandLog, config: DisplayConfig) -> Self {
        let renderer: Box<dyn Renderer + Send> = match capability::detect(&config) {
            Capability::Available => match TuiRenderer::open(&config) {
                Ok(tui) => {
                    tracing::info!("debug panel created");
                    Box::new(tui)
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to create debug panel, using console mode");
                    Box::new(ConsoleRenderer::stdout(&config))
                }
            },
            Capability::Unavailable(reason) => {
                tracing::info!(reason, "terminal UI unavailable, using console mode");
                Box::new(ConsoleRenderer::stdout(&config))
            }
        };

        Self::with_renderer(status, log, config, renderer)
    }

    /// Build a display around a specific surface.
    pub fn with_renderer(
        status: SharedStatus,
        log: SharedCommandLog,
        config: DisplayConfig,
        renderer: Box<dyn Renderer + Send>,
    ) -> Self {
        Self {
            status,
            log,
            config,
            renderer,
            cursor: LogCursor::new(),
            running: RunFlag::new(),
            handle_interrupts: false,
        }
    }

    /// Stop on Ctrl+C / SIGTERM while running in console mode.
    ///
    /// The handler is process-wide and stays installed after the display
    /// stops, so only a process that owns its signals (the binary) should
    /// ask for it. Library hosts keep their own signal handling.
    pub fn with_interrupt_handler(mut self) -> Self {
        self.handle_interrupts = true;
        self
    }

    pub fn handles_interrupts(&self) -> bool {
        self.handle_interrupts
    }

    pub fn mode(&self) -> DisplayMode {
        self.renderer.mode()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_running()
    }

    /// A handle that stops the display from another thread.
    pub fn stop_handle(&self) -> RunFlag {
        self.running.clone()
    }

    pub fn log_cursor(&self) -> &LogCursor {
        &self.cursor
    }

    /// Delay between ticks for the chosen surface.
    pub fn refresh_interval(&self) -> Duration {
        match self.mode() {
            DisplayMode::Graphical => self.config.gui_refresh(),
            DisplayMode::Console => self.config.console_refresh(),
        }
    }

    /// Run one refresh cycle.
    ///
    /// A lock that can't be taken within the configured timeout is not an
    /// error: the status falls back to defaults and the log update is
    /// skipped for this tick.
    pub fn tick(&mut self) -> Result<(), DisplayError> {
        let timeout = self.config.lock_timeout();

        let snapshot = self.status.snapshot(timeout).unwrap_or_else(|| {
            tracing::debug!("status lock busy, rendering defaults");
            StatusMap::new()
        });
        let view = StatusView::from_snapshot(&snapshot, self.config.locale.labels());

        let log = match self.renderer.log_policy() {
            LogPolicy::Incremental => match self.cursor.advance_shared(&self.log, timeout) {
                Some(fresh) => {
                    let stamp = chrono::Local::now().format("%H:%M:%S").to_string();
                    LogUpdate::Appended(
                        fresh
                            .iter()
                            .map(|entry| format_log_line(&stamp, entry))
                            .collect(),
                    )
                }
                None => LogUpdate::Skipped,
            },
            LogPolicy::RecentWindow(n) => {
                match self.log.read_with(timeout, |entries| recent_window(entries, n)) {
                    Some(recent) => LogUpdate::Recent(recent),
                    None => LogUpdate::Skipped,
                }
            }
        };
        if log == LogUpdate::Skipped {
            tracing::debug!("command log lock busy, skipping log update");
        }

        self.renderer.render(&StatusFrame { view, log })
    }

    /// Tick until stopped by the user, an interrupt, or the stop handle.
    ///
    /// Blocks the calling thread. A stopped display cannot be restarted.
    pub fn run(&mut self) {
        match self.mode() {
            DisplayMode::Graphical => crate::utils::install_terminal_panic_hook(),
            DisplayMode::Console if self.handle_interrupts => {
                install_interrupt_handler(self.running.clone())
            }
            DisplayMode::Console => {}
        }

        let mut ticker = Ticker::new(self.refresh_interval());
        tracing::info!(mode = ?self.mode(), interval_ms = ticker.interval().as_millis() as u64, "debug display started");

        while self.running.is_running() {
            if let Err(e) = self.tick() {
                tracing::error!(error = %e, "failed to refresh debug display");
            }
            ticker.reset();

            if let Err(e) = self.renderer.wait(&ticker, &self.running) {
                tracing::error!(error = %e, "debug display input failed");
                ticker.wait(&self.running);
            }
        }

        self.renderer.close();
        tracing::info!("debug display stopped");
    }
}

/// Clear `flag` on Ctrl+C / SIGTERM.
///
/// Only one handler may exist per process; if one is already installed the
/// display is stopped through [`StatusDisplay::stop_handle`] instead.
fn install_interrupt_handler(flag: RunFlag) {
    let result = ctrlc::set_handler(move || {
        flag.stop();
        tracing::info!("interrupt received, stopping debug display");
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }
}

/// Start the display with config discovered from disk and run it until stopped.
pub fn start_debug_window(status: SharedStatus, log: SharedCommandLog) {
    let config = DisplayConfig::load(None).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid display config, using defaults");
        DisplayConfig::default()
    });
    start_debug_window_with(status, log, config);
}

/// Start the display with an explicit config and run it until stopped.
///
/// Runs in whichever mode construction settled on, console included. The
/// host's signal handling is left alone; stop the display from another
/// thread via a [`StatusDisplay::stop_handle`] taken before running, or let
/// the user close the terminal UI.
pub fn start_debug_window_with(status: SharedStatus, log: SharedCommandLog, config: DisplayConfig) {
    tracing::info!("creating debug display");
    let mut display = StatusDisplay::new(status, log, config);
    display.run();
}
