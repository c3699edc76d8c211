//! Full-repaint console frames for terminals without the TUI.

use std::io::{self, Stdout, Write};

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::labels::Labels;

use super::renderer::{DisplayMode, LogPolicy, LogUpdate, Renderer, StatusFrame};

const RULE_WIDTH: usize = 50;
const OFFSET_INDENT: &str = "         ";

/// Prints a complete status frame to a writer on every tick.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    labels: &'static Labels,
    title: String,
    recent_commands: usize,
    clear_screen: bool,
}

impl ConsoleRenderer<Stdout> {
    pub fn stdout(config: &DisplayConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, config: &DisplayConfig) -> Self {
        Self {
            out,
            labels: config.locale.labels(),
            title: config.title.clone(),
            recent_commands: config.recent_commands,
            clear_screen: true,
        }
    }

    /// Don't clear the screen before each frame (for one-shot dumps).
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &StatusFrame) -> io::Result<()> {
        let labels = self.labels;
        let out = &mut self.out;

        if self.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        writeln!(out, "{}", format!("🎵 {}", self.title).bold().blue())?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

        for field in &frame.view.fields {
            writeln!(out, "{}: {}", field.caption, field.value)?;
        }

        let [movement, timing] = frame.view.offset.lines("=");
        writeln!(out, "{}: {movement}", labels.offset)?;
        writeln!(out, "{OFFSET_INDENT}{timing}")?;

        writeln!(out)?;
        writeln!(out, "{}:", labels.recent_commands.bold())?;
        match &frame.log {
            LogUpdate::Recent(entries) => {
                for entry in entries {
                    writeln!(
                        out,
                        "  {} ({}: {}ms)",
                        entry.cmd, labels.cost, entry.cost
                    )?;
                }
            }
            // Console frames always ask for the recent window.
            LogUpdate::Appended(_) | LogUpdate::Skipped => {}
        }

        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(out, "{}", labels.exit_hint.dimmed())?;
        out.flush()
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn mode(&self) -> DisplayMode {
        DisplayMode::Console
    }

    fn log_policy(&self) -> LogPolicy {
        LogPolicy::RecentWindow(self.recent_commands)
    }

    fn render(&mut self, frame: &StatusFrame) -> Result<(), DisplayError> {
        self.write_frame(frame)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::view::StatusView;
    use crate::labels::Locale;
    use crate::shared::{CommandLogEntry, StatusMap};

    fn render_to_string(config: &DisplayConfig, frame: &StatusFrame) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new(), config);
        renderer.render(frame).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn empty_frame(locale: Locale, log: LogUpdate) -> StatusFrame {
        StatusFrame {
            view: StatusView::from_snapshot(&StatusMap::new(), locale.labels()),
            log,
        }
    }

    #[test]
    fn test_frame_starts_with_clear_screen() {
        let config = DisplayConfig::default();
        let output = render_to_string(&config, &empty_frame(Locale::Chinese, LogUpdate::Skipped));
        assert!(output.starts_with("\x1b[2J"));
    }

    #[test]
    fn test_without_clear_skips_escape() {
        let config = DisplayConfig::default();
        let mut renderer = ConsoleRenderer::new(Vec::new(), &config).without_clear();
        renderer
            .render(&empty_frame(Locale::Chinese, LogUpdate::Skipped))
            .unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(!output.contains("\x1b[2J"));
    }

    #[test]
    fn test_empty_frame_shows_placeholders_and_footer() {
        let config = DisplayConfig::default();
        let output = render_to_string(&config, &empty_frame(Locale::Chinese, LogUpdate::Skipped));

        assert!(output.contains("歌曲名称: 未知"));
        assert!(output.contains("失败次数: 未知"));
        assert!(output.contains("偏移量: up=0, down=0, move=0"));
        assert!(output.contains("wait=0.000, interval=0.000"));
        assert!(output.contains("按 Ctrl+C 退出"));
    }

    #[test]
    fn test_recent_commands_listed_with_cost() {
        let config = DisplayConfig {
            locale: Locale::English,
            ..DisplayConfig::default()
        };
        let frame = empty_frame(
            Locale::English,
            LogUpdate::Recent(vec![
                CommandLogEntry::new("TAP 1,2", 3.0),
                CommandLogEntry::new("SWIPE 1,2 3,4", 40.5),
            ]),
        );
        let output = render_to_string(&config, &frame);

        assert!(output.contains("  TAP 1,2 (cost: 3ms)"));
        assert!(output.contains("  SWIPE 1,2 3,4 (cost: 40.5ms)"));
    }

    #[test]
    fn test_only_recent_window_is_listed() {
        let config = DisplayConfig::default();
        let output = render_to_string(
            &config,
            &empty_frame(
                Locale::Chinese,
                LogUpdate::Appended(vec!["[10:00:00] TAP 9,9".to_string()]),
            ),
        );
        assert!(!output.contains("TAP 9,9"));
        assert!(output.contains("最近命令"));
    }

    #[test]
    fn test_log_policy_uses_configured_window() {
        let config = DisplayConfig {
            recent_commands: 3,
            ..DisplayConfig::default()
        };
        let renderer = ConsoleRenderer::new(Vec::new(), &config);
        assert_eq!(renderer.log_policy(), LogPolicy::RecentWindow(3));
        assert_eq!(renderer.mode(), DisplayMode::Console);
    }
}
