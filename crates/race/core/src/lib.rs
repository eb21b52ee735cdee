//! Deterministic race rules shared by the loaders, the runtime and the client.
//!
//! `race-core` turns a biathlon event log into per-competitor outcomes and a
//! ranked results table. It performs no I/O: events and configuration come in
//! as values, diagnostics leave through a [`DiagnosticSink`], and the report
//! is handed to a [`ReportSink`] chosen by the caller.
//!
//! All competitor state is produced by [`engine::reduce`] (or a
//! [`RaceEngine`] driven event by event) and consumed by [`ReportBuilder`].
pub mod clock;
pub mod config;
pub mod engine;
pub mod event;
pub mod report;
pub mod state;

pub use clock::{Clock, ClockFormatError};
pub use config::RaceConfig;
pub use engine::{
    DiagnosticLevel, DiagnosticLine, DiagnosticSink, MemorySink, NullSink, RaceEngine,
    ReduceError, reduce,
};
pub use event::{CompetitorId, EventKind, OutgoingEvent, OutgoingKind, RaceEvent};
pub use report::{Report, ReportBuilder, ReportRow, ReportSink, RowStatus};
pub use state::{Competitor, CompetitorStatus, RaceOutcome};
