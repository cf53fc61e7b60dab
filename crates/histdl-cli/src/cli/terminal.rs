//! Terminal renditions of the busy indicator and the failure alert.

use histdl_core::error::TriggerError;
use histdl_core::trigger::{BusyIndicator, Notifier};
use std::io::{self, IsTerminal, Write};

/// One status line on stderr while the request is pending.
pub struct TerminalBusy {
    message: String,
    interactive: bool,
}

impl TerminalBusy {
    pub fn new(message: String) -> Self {
        Self {
            message,
            interactive: io::stderr().is_terminal(),
        }
    }
}

impl BusyIndicator for TerminalBusy {
    fn show(&self) {
        let mut err = io::stderr().lock();
        if self.interactive {
            let _ = write!(err, "{} ...", self.message);
        } else {
            let _ = writeln!(err, "{} ...", self.message);
        }
        let _ = err.flush();
    }

    fn hide(&self) {
        if self.interactive {
            let mut err = io::stderr().lock();
            // Return to column 0 and clear the line.
            let _ = write!(err, "\r\x1b[2K");
            let _ = err.flush();
        }
    }
}

/// Prints failures to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn failed(&self, error: &TriggerError) {
        eprintln!("download failed: {error}");
    }
}
