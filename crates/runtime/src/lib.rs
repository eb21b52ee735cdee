//! Runtime orchestration for a race results run.
//!
//! This crate wires the content loaders, the event reducer and the report
//! builder into a single batch pipeline, and supplies the I/O-facing
//! collaborators the core leaves open:
//!
//! - [`runtime`] hosts the pipeline ([`RaceRuntime`])
//! - [`event_log`] forwards reducer diagnostics to `tracing`
//! - [`logging`] routes those diagnostics to the event log file
//! - [`notification`] dispatches disqualification/finish notifications
//! - [`repository`] persists the results table
pub mod config;
pub mod error;
pub mod event_log;
pub mod logging;
pub mod notification;
pub mod repository;
pub mod runtime;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use event_log::TracingEventLog;
pub use logging::{EVENT_LOG_TARGET, LoggingGuard, NOTIFICATION_TARGET, setup_logging};
pub use notification::{
    NotificationSink, RecordingNotifier, TracingNotifier, dispatch_notifications,
};
pub use repository::{RepositoryError, ResultTableWriter};
pub use runtime::{RaceRuntime, RunSummary};
