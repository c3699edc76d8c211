//! Rendering functions for the terminal UI panels.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::state::LogPanel;
use super::theme::Theme;
use crate::display::view::StatusView;
use crate::labels::Labels;
use crate::utils::truncate;

/// Rows taken by the field table: six fields, a two-line offset row, borders.
pub const FIELDS_AREA_HEIGHT: u16 = 6 + 2 + 2;

/// Longest value shown in a field cell before it is cut.
const MAX_VALUE_CHARS: usize = 80;

const SPINNER: [char; 10] = [
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}',
    '\u{2827}', '\u{2807}', '\u{280F}',
];

/// Spinner glyph for an animation frame.
pub fn spinner_char(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

/// Render the title line with spinner and wall clock.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, spinner: char, clock: &str) {
    let line = Line::from(vec![
        Span::styled(format!(" {spinner} "), Theme::title()),
        Span::styled(format!("🎵 {title}"), Theme::title()),
        Span::raw("  "),
        Span::styled(clock.to_string(), Theme::dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the six status rows and the offset row.
pub fn render_fields(frame: &mut Frame, area: Rect, view: &StatusView, labels: &Labels) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut rows: Vec<Row> = view
        .fields
        .iter()
        .map(|field| {
            let is_unknown = field.value == labels.unknown;
            Row::new(vec![
                Cell::from(Span::styled(format!("{}:", field.caption), Theme::caption())),
                Cell::from(Span::styled(
                    truncate(&field.value, MAX_VALUE_CHARS),
                    Theme::value(is_unknown),
                )),
            ])
        })
        .collect();

    let [movement, timing] = view.offset.lines(": ");
    rows.push(
        Row::new(vec![
            Cell::from(Span::styled(format!("{}:", labels.offset), Theme::caption())),
            Cell::from(Text::from(vec![
                Line::styled(movement, Theme::offset()),
                Line::styled(timing, Theme::offset()),
            ])),
        ])
        .height(2),
    );

    let widths = [Constraint::Length(12), Constraint::Min(20)];
    let table = Table::new(rows, widths).block(block);
    frame.render_widget(table, area);
}

/// Render the command log, keeping the newest line at the bottom unless the
/// user scrolled back.
pub fn render_log_panel(frame: &mut Frame, area: Rect, panel: &mut LogPanel, labels: &Labels) {
    let title = if panel.scroll_back > 0 {
        format!(" {} (\u{2193}{}) ", labels.command_log, panel.scroll_back)
    } else {
        format!(" {} ", labels.command_log)
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::caption())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner_height = block.inner(area).height;
    panel.viewport_height = inner_height;

    let lines: Vec<Line> = panel.lines().map(|l| log_line(l)).collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((panel.top_offset(inner_height), 0));
    frame.render_widget(paragraph, area);
}

/// Split `[HH:MM:SS] cmd` into a dimmed stamp and the command text.
fn log_line(line: &str) -> Line<'_> {
    match line.split_once("] ") {
        Some((stamp, cmd)) if stamp.starts_with('[') => Line::from(vec![
            Span::styled(format!("{stamp}]"), Theme::log_stamp()),
            Span::raw(" "),
            Span::styled(cmd, Theme::log_text()),
        ]),
        _ => Line::from(Span::styled(line, Theme::log_text())),
    }
}

/// Render footer with keybinds.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled("q", bold),
        Span::raw(" close \u{2502} "),
        Span::styled("\u{2191}\u{2193}", bold),
        Span::raw(" scroll \u{2502} "),
        Span::styled("PgUp/PgDn", bold),
        Span::raw(" page \u{2502} "),
        Span::styled("Home/End", bold),
        Span::raw(" jump"),
    ]);
    frame.render_widget(Paragraph::new(line).style(Theme::dimmed()), area);
}
