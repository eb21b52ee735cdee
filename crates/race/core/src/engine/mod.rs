//! Event reducer.
//!
//! The [`RaceEngine`] folds a chronologically ordered event stream into a
//! [`RaceOutcome`]. Each event touches exactly one competitor; competitors
//! are created lazily on first reference. After the stream is exhausted,
//! [`RaceEngine::finish`] disqualifies everyone who never crossed the start
//! line.

mod errors;
mod reducer;
mod sink;

pub use errors::ReduceError;
pub use sink::{DiagnosticLevel, DiagnosticLine, DiagnosticSink, MemorySink, NullSink};

use crate::config::RaceConfig;
use crate::event::RaceEvent;
use crate::state::RaceOutcome;

/// Stateful reducer over a race event stream.
///
/// Events must be fed in timestamp order; [`reduce`] sorts them first.
pub struct RaceEngine<'a, S: DiagnosticSink + ?Sized> {
    config: &'a RaceConfig,
    sink: &'a mut S,
    outcome: RaceOutcome,
}

impl<'a, S: DiagnosticSink + ?Sized> RaceEngine<'a, S> {
    pub fn new(config: &'a RaceConfig, sink: &'a mut S) -> Self {
        Self {
            config,
            sink,
            outcome: RaceOutcome::new(),
        }
    }

    /// Applies one event to the competitor it references.
    pub fn apply(&mut self, event: &RaceEvent) -> Result<(), ReduceError> {
        let competitor = self.outcome.entry(event.competitor);
        reducer::apply_event(competitor, self.config, &mut *self.sink, event)
    }

    /// Current state, before the no-show pass.
    pub fn outcome(&self) -> &RaceOutcome {
        &self.outcome
    }

    /// Runs the no-show pass and hands over the final state.
    pub fn finish(mut self) -> RaceOutcome {
        for competitor in self.outcome.competitors.values_mut() {
            reducer::disqualify_no_show(competitor, self.config, &mut *self.sink);
        }
        self.outcome
    }
}

/// Sorts `events` by timestamp and folds them into a [`RaceOutcome`].
///
/// The sort is stable: events sharing a timestamp keep their arrival order.
pub fn reduce<S>(
    config: &RaceConfig,
    events: impl IntoIterator<Item = RaceEvent>,
    sink: &mut S,
) -> Result<RaceOutcome, ReduceError>
where
    S: DiagnosticSink + ?Sized,
{
    let mut events: Vec<RaceEvent> = events.into_iter().collect();
    events.sort_by_key(|event| event.fixtime);

    let mut engine = RaceEngine::new(config, sink);
    for event in &events {
        engine.apply(event)?;
    }
    Ok(engine.finish())
}
