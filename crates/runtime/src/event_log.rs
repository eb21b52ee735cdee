//! Reducer diagnostics forwarded to `tracing`.
//!
//! Event-log lines go to [`EVENT_LOG_TARGET`] at info level, where the
//! logging setup picks them up for the event log file. Reducer warnings are
//! regular `tracing` warnings.

use race_core::{DiagnosticLevel, DiagnosticLine, DiagnosticSink};

use crate::logging::EVENT_LOG_TARGET;

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEventLog {
    lines: usize,
    warnings: usize,
}

impl TracingEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of event-log lines emitted so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }
}

impl DiagnosticSink for TracingEventLog {
    fn record(&mut self, line: DiagnosticLine) {
        match line.level {
            DiagnosticLevel::Info => {
                self.lines += 1;
                tracing::info!(target: EVENT_LOG_TARGET, "{}", line);
            }
            DiagnosticLevel::Warn => {
                self.warnings += 1;
                tracing::warn!(competitor = %line.competitor, "{}", line);
            }
        }
    }
}
