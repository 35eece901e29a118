//! Diagnostic console feed
//!
//! Every pipeline stage reports progress to a [`ConsoleSink`]. The sink is
//! append-only and ordered; callers own the history (there is no global
//! console state).

use serde::Serialize;
use std::fmt;

/// Severity of a console entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// One entry in the console feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
}

impl LogEntry {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// An append-only diagnostic sink. Never fails, never blocks.
pub trait ConsoleSink {
    fn log(&mut self, message: &str, severity: Severity);
}

/// A Vec-backed console feed
#[derive(Debug, Default)]
pub struct ConsoleLog {
    entries: Vec<LogEntry>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries recorded so far, in order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}

impl ConsoleSink for ConsoleLog {
    fn log(&mut self, message: &str, severity: Severity) {
        self.entries.push(LogEntry::new(severity, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_log_preserves_order() {
        let mut console = ConsoleLog::new();
        console.log("first", Severity::Info);
        console.log("second", Severity::Warning);

        let entries = console.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], LogEntry::new(Severity::Info, "first"));
        assert_eq!(entries[1], LogEntry::new(Severity::Warning, "second"));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
