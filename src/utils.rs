use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

/// ANSI escape codes for terminal control
const CURSOR_SHOW: &str = "\x1B[?25h";
const ATTR_RESET: &str = "\x1B[0m";

static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Set while the terminal UI holds raw mode and the alternate screen.
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark whether the terminal UI currently owns the terminal.
pub fn set_terminal_active(active: bool) {
    TERMINAL_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn terminal_active() -> bool {
    TERMINAL_ACTIVE.load(Ordering::SeqCst)
}

/// Undo raw mode and the alternate screen, best effort.
///
/// Safe to call when neither is active.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = stdout.write_all(format!("{CURSOR_SHOW}{ATTR_RESET}").as_bytes());
    let _ = stdout.flush();
}

/// Install a panic hook that restores the terminal before the previous
/// handler prints the panic message.
///
/// Only installs once per process. The hook touches the terminal only while
/// the terminal UI is active, so panics after the display closed go
/// straight to the previous handler.
pub fn install_terminal_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            if TERMINAL_ACTIVE.swap(false, Ordering::SeqCst) {
                restore_terminal();
            }
            default_hook(panic_info);
        }));
    });
}

/// Truncate a string by character count, appending "..." when cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
