//! Keyboard and mouse handling for the terminal UI.

use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

use super::state::LogPanel;

/// Lines moved per arrow key press.
pub const SCROLL_STEP: i16 = 1;

/// Page scroll multiplier (viewport size * this factor).
pub const PAGE_SCROLL_FACTOR: f64 = 0.8;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyEventResult {
    /// User closed the panel.
    Close,
    /// Redraw and keep going.
    Continue,
}

/// Handle keyboard events for scrolling and closing.
pub fn handle_key_event(
    code: KeyCode,
    modifiers: KeyModifiers,
    panel: &mut LogPanel,
) -> KeyEventResult {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => KeyEventResult::Close,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyEventResult::Close,

        KeyCode::Up => {
            panel.scroll_by(-SCROLL_STEP);
            KeyEventResult::Continue
        }
        KeyCode::Down => {
            panel.scroll_by(SCROLL_STEP);
            KeyEventResult::Continue
        }
        KeyCode::PageUp => {
            panel.scroll_by(-page_step(panel));
            KeyEventResult::Continue
        }
        KeyCode::PageDown => {
            panel.scroll_by(page_step(panel));
            KeyEventResult::Continue
        }
        KeyCode::Home => {
            panel.scroll_to_start();
            KeyEventResult::Continue
        }
        KeyCode::End => {
            panel.scroll_to_end();
            KeyEventResult::Continue
        }

        _ => KeyEventResult::Continue,
    }
}

fn page_step(panel: &LogPanel) -> i16 {
    ((panel.viewport_height as f64 * PAGE_SCROLL_FACTOR) as i16).max(1)
}

/// Handle mouse wheel scrolling.
pub fn handle_mouse_event(kind: MouseEventKind, panel: &mut LogPanel) {
    match kind {
        MouseEventKind::ScrollUp => panel.scroll_by(-SCROLL_STEP * 3),
        MouseEventKind::ScrollDown => panel.scroll_by(SCROLL_STEP * 3),
        _ => {}
    }
}
