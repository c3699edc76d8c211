use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the debug panel
pub struct PanelColors;

impl PanelColors {
    pub const TITLE: Color = Color::Cyan;
    pub const CAPTION: Color = Color::White;
    pub const VALUE: Color = Color::Gray;
    pub const UNKNOWN: Color = Color::DarkGray;
    pub const OFFSET: Color = Color::Yellow;
    pub const LOG_STAMP: Color = Color::DarkGray;
    pub const LOG_TEXT: Color = Color::Green;
    pub const BORDER: Color = Color::Gray;
    pub const DIMMED: Color = Color::DarkGray;
}

/// Theme provides pre-built styles
pub struct Theme;

impl Theme {
    pub fn title() -> Style {
        Style::default()
            .fg(PanelColors::TITLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn caption() -> Style {
        Style::default()
            .fg(PanelColors::CAPTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn value(is_unknown: bool) -> Style {
        if is_unknown {
            Style::default().fg(PanelColors::UNKNOWN)
        } else {
            Style::default().fg(PanelColors::VALUE)
        }
    }

    pub fn offset() -> Style {
        Style::default().fg(PanelColors::OFFSET)
    }

    pub fn log_stamp() -> Style {
        Style::default().fg(PanelColors::LOG_STAMP)
    }

    pub fn log_text() -> Style {
        Style::default().fg(PanelColors::LOG_TEXT)
    }

    pub fn border() -> Style {
        Style::default().fg(PanelColors::BORDER)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(PanelColors::DIMMED)
    }
}
