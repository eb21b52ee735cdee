//! Diagnostic output of the reducer.
//!
//! The reducer never writes to a global logger. Callers pass a
//! [`DiagnosticSink`] and decide where the lines end up.

use std::fmt;

use crate::clock::Clock;
use crate::event::CompetitorId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    /// A line of the race event log.
    Info,
    /// An event the reducer ignored or could only partially apply.
    Warn,
}

/// One diagnostic line, rendered as `[HH:MM:SS.mmm] message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticLine {
    pub at: Clock,
    pub competitor: CompetitorId,
    pub level: DiagnosticLevel,
    pub message: String,
}

impl fmt::Display for DiagnosticLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at, self.message)
    }
}

pub trait DiagnosticSink {
    fn record(&mut self, line: DiagnosticLine);
}

/// Discards every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _line: DiagnosticLine) {}
}

/// Keeps every line in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Vec<DiagnosticLine>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[DiagnosticLine] {
        &self.lines
    }

    /// Rendered event-log lines, warnings excluded.
    pub fn event_log(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| line.level == DiagnosticLevel::Info)
            .map(ToString::to_string)
            .collect()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DiagnosticLine> {
        self.lines
            .iter()
            .filter(|line| line.level == DiagnosticLevel::Warn)
    }

    /// True if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.message.contains(needle))
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&mut self, line: DiagnosticLine) {
        self.lines.push(line);
    }
}
