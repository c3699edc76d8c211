//! Decides whether the terminal UI can be used at all.

use std::io::IsTerminal;

use crate::config::DisplayConfig;

/// Outcome of probing the runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable(&'static str),
}

/// Probe stdout and `TERM` for a usable interactive terminal.
pub fn detect(config: &DisplayConfig) -> Capability {
    let term = std::env::var("TERM").ok();
    detect_with(
        config.force_console,
        std::io::stdout().is_terminal(),
        term.as_deref(),
    )
}

pub fn detect_with(force_console: bool, stdout_is_tty: bool, term: Option<&str>) -> Capability {
    if force_console {
        return Capability::Unavailable("console mode forced by config");
    }
    if !stdout_is_tty {
        return Capability::Unavailable("stdout is not a terminal");
    }
    if term == Some("dumb") {
        return Capability::Unavailable("TERM=dumb");
    }
    Capability::Available
}
