//! Logging setup.
//!
//! Two layers share one subscriber:
//! - the event log file, receiving only [`EVENT_LOG_TARGET`] lines, bare
//!   (no timestamp, level or target prefix)
//! - stderr, filtered by `RUST_LOG` (default: `warn`), never showing event
//!   log lines

use std::fs::{self, File};

use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{Directive, EnvFilter, Targets};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};

/// Target of reducer event-log lines.
pub const EVENT_LOG_TARGET: &str = "race::events";

/// Target of dispatched disqualification/finish notifications.
pub const NOTIFICATION_TARGET: &str = "race::notifications";

/// Keeps the event log writer alive; drop it last to flush pending lines.
#[must_use = "dropping the guard stops the event log writer"]
pub struct LoggingGuard {
    _event_log: WorkerGuard,
}

/// Layer writing bare event-log lines to `writer`.
pub fn event_log_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_filter(Targets::new().with_target(EVENT_LOG_TARGET, Level::INFO))
}

/// Installs the global subscriber.
///
/// The event log file is truncated first, so every run starts from an empty
/// log.
pub fn setup_logging(config: &RuntimeConfig) -> Result<LoggingGuard> {
    fs::create_dir_all(&config.output_dir).map_err(|e| {
        RuntimeError::Logging(format!(
            "cannot create {}: {}",
            config.output_dir.display(),
            e
        ))
    })?;

    let path = config.event_log_path();
    File::create(&path).map_err(|e| {
        RuntimeError::Logging(format!("cannot truncate {}: {}", path.display(), e))
    })?;

    let file_appender = tracing_appender::rolling::never(&config.output_dir, &config.event_log);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"))
        .add_directive(
            format!("{EVENT_LOG_TARGET}=off")
                .parse::<Directive>()
                .map_err(|e| RuntimeError::Logging(format!("invalid filter directive: {e}")))?,
        );

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    tracing_subscriber::registry()
        .with(event_log_layer(non_blocking_file))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| RuntimeError::Logging(e.to_string()))?;

    tracing::debug!("Event log: {}", path.display());

    Ok(LoggingGuard { _event_log: guard })
}
