//! Raw mode for an interactive stdin.
//!
//! Typed characters must reach the event loop one at a time and unechoed,
//! and Ctrl-C must arrive as a character rather than a signal.

use std::io::{self, IsTerminal};

use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};
use tracing::{debug, warn};

/// Puts stdin into raw mode and restores the saved settings when dropped.
pub struct RawModeGuard {
    saved: Termios,
}

impl RawModeGuard {
    /// Switch stdin to raw mode. Returns `None` when stdin is not a terminal.
    pub fn enable() -> io::Result<Option<Self>> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Ok(None);
        }

        let saved = termios::tcgetattr(&stdin)?;
        let mut raw = saved.clone();
        raw.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO | LocalFlags::ISIG);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        termios::tcsetattr(&stdin, SetArg::TCSANOW, &raw)?;

        debug!("stdin in raw mode");
        Ok(Some(Self { saved }))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = termios::tcsetattr(&io::stdin(), SetArg::TCSANOW, &self.saved) {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}
