//! Batch pipeline: load → reduce → notify → report → persist.
//!
//! The whole event history is loaded before reduction starts. The reducer
//! owns the competitor map while folding and moves it into the
//! [`RunSummary`]; the report builder only borrows it.

use std::path::Path;

use race_content::{ContentFactory, RaceContent};
use race_core::{DiagnosticSink, RaceOutcome, Report, ReportBuilder};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::event_log::TracingEventLog;
use crate::notification::{NotificationSink, TracingNotifier, dispatch_notifications};
use crate::repository::ResultTableWriter;

/// Everything a run produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub outcome: RaceOutcome,
    pub report: Report,
    /// Number of notifications dispatched.
    pub notifications: usize,
}

impl RunSummary {
    pub fn lines(&self) -> Vec<String> {
        self.report.lines()
    }
}

pub struct RaceRuntime {
    config: RuntimeConfig,
}

impl RaceRuntime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Loads both input files and runs the pipeline.
    pub fn run_files(&self, config_path: &Path, events_path: &Path) -> Result<RunSummary> {
        tracing::info!(
            "Loading race from {} and {}",
            config_path.display(),
            events_path.display()
        );
        let content = ContentFactory::new(config_path, events_path)
            .load()
            .map_err(RuntimeError::Content)?;
        self.run(content)
    }

    /// Runs the pipeline with `tracing`-backed diagnostics and notifications.
    pub fn run(&self, content: RaceContent) -> Result<RunSummary> {
        let mut event_log = TracingEventLog::new();
        let summary = self.run_with(content, &mut event_log, &mut TracingNotifier)?;
        tracing::info!(
            "Event log: {} lines, {} warnings",
            event_log.lines(),
            event_log.warnings()
        );
        Ok(summary)
    }

    /// Runs the pipeline with caller-supplied collaborators.
    ///
    /// A fatal reduction error aborts before anything is written to the
    /// results table.
    pub fn run_with<D, N>(
        &self,
        content: RaceContent,
        diagnostics: &mut D,
        notifier: &mut N,
    ) -> Result<RunSummary>
    where
        D: DiagnosticSink + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let RaceContent { config, events } = content;
        tracing::debug!(
            "Reducing {} events (laps={}, start_delta={})",
            events.len(),
            config.laps,
            config.start_delta
        );

        let outcome = race_core::reduce(&config, events, diagnostics)?;
        let notifications = dispatch_notifications(&outcome, notifier);

        let report = ReportBuilder::new(&config).build(&outcome);
        let mut table = ResultTableWriter::new(self.config.result_table_path());
        report.write_to(&mut table)?;

        tracing::info!(
            "Ranked {} competitors into {}",
            report.len(),
            table.path().display()
        );

        Ok(RunSummary {
            outcome,
            report,
            notifications,
        })
    }
}
