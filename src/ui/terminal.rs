//! Terminal lifecycle.
//!
//! The picker draws on the controlling terminal (`/dev/tty`), never on
//! stdout, so `cmd=$(rusty-hstr --print)` captures the command and nothing
//! else.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error};

pub const TTY_PATH: &str = "/dev/tty";

pub type TtyTerminal = Terminal<CrosstermBackend<File>>;

/// Owns the full-screen terminal and restores it when dropped.
///
/// Restoration also runs when the picker unwinds from a panic, so the shell
/// is never left in raw mode.
pub struct TerminalGuard {
    pub terminal: TtyTerminal,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        let mut tty = OpenOptions::new()
            .read(true)
            .write(true)
            .open(TTY_PATH)
            .with_context(|| format!("Failed to open {}", TTY_PATH))?;

        enable_raw_mode().context("Failed to enable raw mode")?;
        let terminal = enter_screen(&mut tty)
            .and_then(|()| Terminal::new(CrosstermBackend::new(tty)))
            .context("Failed to initialize terminal");
        match terminal {
            Ok(terminal) => {
                debug!("Terminal initialized on {}", TTY_PATH);
                Ok(Self { terminal })
            }
            Err(e) => {
                // No guard exists yet to undo raw mode.
                if let Err(raw) = disable_raw_mode() {
                    error!("Failed to disable raw mode: {}", raw);
                }
                Err(e)
            }
        }
    }

    /// Current terminal height in rows.
    pub fn rows(&self) -> Result<u16> {
        let size = self.terminal.size().context("Failed to query terminal size")?;
        Ok(size.height)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = leave_screen(self.terminal.backend_mut()) {
            error!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            error!("Failed to disable raw mode: {}", e);
        }
        debug!("Terminal restored");
    }
}

/// Switch `out` to the alternate screen.
pub fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen)
}

/// Return `out` to the main screen with a visible cursor.
pub fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}
