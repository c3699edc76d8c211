//! Terminal UI surface for the status display.
//!
//! Layout:
//! - Title line with spinner and wall clock
//! - Field panel: six status rows plus a two-line offset row
//! - Scrollable command log, newest line at the bottom
//! - Footer with keybinds

mod event_handler;
mod state;
mod theme;
mod widgets;

use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::labels::Labels;
use crate::utils::{restore_terminal, set_terminal_active};

use super::renderer::{DisplayMode, LogPolicy, LogUpdate, Renderer, StatusFrame};
use super::scheduler::{RunFlag, Ticker, WAIT_SLICE};
use super::view::StatusView;
use event_handler::{handle_key_event, handle_mouse_event, KeyEventResult};
use state::LogPanel;
use widgets::{render_fields, render_footer, render_header, render_log_panel, spinner_char};

/// Full-screen ratatui surface.
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
    labels: &'static Labels,
    title: String,
    log: LogPanel,
    view: Option<StatusView>,
    spinner_frame: usize,
    /// Owns the real terminal: raw mode, alternate screen, input events.
    interactive: bool,
    mouse_enabled: bool,
    closed: bool,
}

impl TuiRenderer<CrosstermBackend<Stdout>> {
    /// Take over the terminal. Any partial setup is undone on failure.
    pub fn open(config: &DisplayConfig) -> Result<Self, DisplayError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            restore_terminal();
            return Err(e.into());
        }

        let mouse_enabled = execute!(stdout, EnableMouseCapture).is_ok();

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                if mouse_enabled {
                    let _ = execute!(io::stdout(), DisableMouseCapture);
                }
                restore_terminal();
                return Err(e.into());
            }
        };

        let mut renderer = Self::from_terminal(terminal, config);
        renderer.interactive = true;
        renderer.mouse_enabled = mouse_enabled;
        set_terminal_active(true);
        Ok(renderer)
    }
}

impl<B: Backend> TuiRenderer<B>
where
    B::Error: std::fmt::Display,
{
    /// Draw on an arbitrary backend without touching the real terminal.
    pub fn with_backend(backend: B, config: &DisplayConfig) -> Result<Self, DisplayError> {
        let terminal =
            Terminal::new(backend).map_err(|e| DisplayError::Render(e.to_string()))?;
        Ok(Self::from_terminal(terminal, config))
    }

    fn from_terminal(terminal: Terminal<B>, config: &DisplayConfig) -> Self {
        Self {
            terminal,
            labels: config.locale.labels(),
            title: config.title.clone(),
            log: LogPanel::new(config.max_log_lines),
            view: None,
            spinner_frame: 0,
            interactive: false,
            mouse_enabled: false,
            closed: false,
        }
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn log_panel(&self) -> &LogPanel {
        &self.log
    }

    fn draw(&mut self) -> Result<(), DisplayError> {
        if self.closed {
            return Err(DisplayError::SurfaceClosed);
        }

        let spinner = spinner_char(self.spinner_frame);
        let clock = chrono::Local::now().format("%H:%M:%S").to_string();
        let labels = self.labels;
        let title = self.title.as_str();
        let view = self.view.as_ref();
        let log = &mut self.log;

        self.terminal
            .draw(|frame| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Length(widgets::FIELDS_AREA_HEIGHT),
                        Constraint::Min(3),
                        Constraint::Length(1),
                    ])
                    .split(frame.area());

                render_header(frame, chunks[0], title, spinner, &clock);
                if let Some(view) = view {
                    render_fields(frame, chunks[1], view, labels);
                }
                render_log_panel(frame, chunks[2], log, labels);
                render_footer(frame, chunks[3]);
            })
            .map_err(|e| DisplayError::Render(e.to_string()))?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, running: &RunFlag) -> Result<(), DisplayError> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handle_key_event(key.code, key.modifiers, &mut self.log) {
                    KeyEventResult::Close => {
                        tracing::info!("debug panel closed by user");
                        running.stop();
                        self.close();
                    }
                    KeyEventResult::Continue => self.draw()?,
                }
            }
            Event::Mouse(mouse) => {
                handle_mouse_event(mouse.kind, &mut self.log);
                self.draw()?;
            }
            Event::Resize(_, _) => self.draw()?,
            _ => {}
        }
        Ok(())
    }
}

impl<B: Backend> Renderer for TuiRenderer<B>
where
    B::Error: std::fmt::Display,
{
    fn mode(&self) -> DisplayMode {
        DisplayMode::Graphical
    }

    fn log_policy(&self) -> LogPolicy {
        LogPolicy::Incremental
    }

    fn render(&mut self, frame: &StatusFrame) -> Result<(), DisplayError> {
        if let LogUpdate::Appended(lines) = &frame.log {
            self.log.push_lines(lines.iter().cloned());
        }
        self.view = Some(frame.view.clone());
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.draw()
    }

    fn wait(&mut self, ticker: &Ticker, running: &RunFlag) -> Result<(), DisplayError> {
        if !self.interactive {
            ticker.wait(running);
            return Ok(());
        }

        while running.is_running() {
            let remaining = ticker.remaining();
            if remaining.is_zero() {
                break;
            }
            if event::poll(remaining.min(WAIT_SLICE))? {
                self.handle_event(event::read()?, running)?;
            }
        }
        Ok(())
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        if self.interactive {
            if self.mouse_enabled {
                let _ = execute!(io::stdout(), DisableMouseCapture);
            }
            set_terminal_active(false);
            restore_terminal();
            let _ = self.terminal.show_cursor();
        }
    }
}

impl<B: Backend> Drop for TuiRenderer<B> {
    fn drop(&mut self) {
        if self.interactive && !self.closed {
            self.closed = true;
            set_terminal_active(false);
            restore_terminal();
        }
    }
}
