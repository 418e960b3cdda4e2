// ui.rs - Alert surface seams and the terminal implementation
use std::io::{self, Write};
use std::time::Duration;

/// Rendering surface for the detector: one status text region plus one
/// full-surface alert/neutral background state.
pub trait AlertSink: Send {
    fn set_status(&mut self, text: &str);
    fn set_alert(&mut self, alert: bool);
}

/// Optional platform vibration capability. Wired as `Option<Box<dyn
/// Haptics>>`; absence means the platform has no vibration support and
/// pulses are skipped silently.
pub trait Haptics: Send {
    fn pulse(&mut self, duration: Duration);
}

/// Status line on the controlling terminal. The alert state renders as a
/// red background on the line, neutral as the default colors.
pub struct TerminalUi {
    alert: bool,
}

impl TerminalUi {
    pub fn new() -> Self {
        TerminalUi { alert: false }
    }
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSink for TerminalUi {
    fn set_status(&mut self, text: &str) {
        let mut out = io::stdout();
        // \r + erase-line keeps the status on a single updating line.
        let result = if self.alert {
            write!(out, "\r\x1b[2K\x1b[41;97m {text} \x1b[0m")
        } else {
            write!(out, "\r\x1b[2K {text} ")
        };
        if result.is_ok() {
            let _ = out.flush();
        }
    }

    fn set_alert(&mut self, alert: bool) {
        self.alert = alert;
    }
}
