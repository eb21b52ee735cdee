use crate::clock::Clock;
use crate::config::RaceConfig;
use crate::engine::ReduceError;
use crate::engine::sink::{DiagnosticLevel, DiagnosticLine, DiagnosticSink};
use crate::event::{OutgoingEvent, OutgoingKind, RaceEvent};
use crate::state::Competitor;

/// Applies a single event to the competitor it references.
pub(crate) struct CompetitorReducer<'a, S: DiagnosticSink + ?Sized> {
    competitor: &'a mut Competitor,
    config: &'a RaceConfig,
    sink: &'a mut S,
    at: Clock,
}

impl<'a, S: DiagnosticSink + ?Sized> CompetitorReducer<'a, S> {
    pub(crate) fn new(
        competitor: &'a mut Competitor,
        config: &'a RaceConfig,
        sink: &'a mut S,
        at: Clock,
    ) -> Self {
        Self {
            competitor,
            config,
            sink,
            at,
        }
    }

    pub(crate) fn registered(&mut self) {
        self.competitor.registered_at = Some(self.at);
        self.log(format!("The competitor({}) registered", self.competitor.id));
    }

    pub(crate) fn start_time_drawn(&mut self, payload: &str) -> Result<(), ReduceError> {
        let drawn = Clock::parse(payload.trim()).map_err(|source| ReduceError::ScheduledStart {
            competitor: self.competitor.id,
            at: self.at,
            source,
        })?;

        self.competitor.scheduled_at = drawn;
        self.log(format!(
            "The start time for the competitor({}) was set by a draw to {}",
            self.competitor.id, drawn
        ));
        Ok(())
    }

    pub(crate) fn on_start_line(&mut self) {
        self.log(format!(
            "The competitor({}) is on the start line",
            self.competitor.id
        ));
    }

    pub(crate) fn started(&mut self) {
        if self.competitor.started {
            self.warn(format!(
                "The competitor({}) started again; duplicate start ignored",
                self.competitor.id
            ));
            return;
        }

        self.competitor.actual_start = self.at;
        self.competitor.started = true;

        let deadline = self.competitor.scheduled_at + self.config.start_delta;
        if self.at > deadline {
            self.competitor.not_started = true;
            self.notify(self.at, OutgoingKind::Disqualified);
            self.log(format!(
                "The competitor({}) was disqualified",
                self.competitor.id
            ));
        } else {
            self.competitor.current_lap_at = self.at;
            self.log(format!("The competitor({}) has started", self.competitor.id));
        }
    }

    pub(crate) fn on_firing_range(&mut self) {
        self.log(format!(
            "The competitor({}) is on the firing range",
            self.competitor.id
        ));
    }

    pub(crate) fn target_hit(&mut self, target: &str) {
        self.competitor.hits += 1;
        self.competitor.shots += 1;
        self.log(format!(
            "The target({}) has been hit by competitor({})",
            target, self.competitor.id
        ));
    }

    pub(crate) fn left_firing_range(&mut self) {
        self.log(format!(
            "The competitor({}) left the firing range",
            self.competitor.id
        ));
    }

    pub(crate) fn entered_penalty_laps(&mut self) {
        if self.competitor.penalty_pending {
            self.warn(format!(
                "The competitor({}) re-entered the penalty laps before leaving them; entry at {} dropped",
                self.competitor.id, self.competitor.penalty_started_at
            ));
        }

        self.competitor.penalty_count += 1;
        self.competitor.penalty_started_at = self.at;
        self.competitor.penalty_pending = true;
        self.log(format!(
            "The competitor({}) entered the penalty laps",
            self.competitor.id
        ));
    }

    pub(crate) fn left_penalty_laps(&mut self) {
        if self.competitor.penalty_pending {
            let served = self.at.saturating_sub(self.competitor.penalty_started_at);
            self.competitor.penalty_time += served;
            self.competitor.penalty_pending = false;
        } else {
            self.warn(format!(
                "The competitor({}) left the penalty laps without entering them; ignored",
                self.competitor.id
            ));
        }
        self.log(format!(
            "The competitor({}) left the penalty laps",
            self.competitor.id
        ));
    }

    /// Laps are recorded for disqualified and abandoning competitors too;
    /// the report substitutes the start delay for them.
    pub(crate) fn lap_completed(&mut self) {
        if self.competitor.laps_done >= self.config.laps {
            self.warn(format!(
                "The competitor({}) ended a main lap beyond the configured {}; ignored",
                self.competitor.id, self.config.laps
            ));
            return;
        }

        let lap = self.at.saturating_sub(self.competitor.current_lap_at);
        self.competitor.lap_times.push(lap);
        self.competitor.current_lap_at = self.at;
        self.competitor.laps_done += 1;
        self.log(format!(
            "The competitor({}) ended the main lap",
            self.competitor.id
        ));

        if self.competitor.laps_done == self.config.laps {
            self.notify(self.at, OutgoingKind::Finished);
            self.log(format!("The competitor({}) has finished", self.competitor.id));
        }
    }

    pub(crate) fn cannot_continue(&mut self, reason: &str) {
        self.log(format!(
            "The competitor({}) can`t continue:{}",
            self.competitor.id, reason
        ));

        if self.competitor.is_on_course() && self.competitor.laps_done < self.config.laps {
            self.competitor.not_finished = true;
        } else {
            self.warn(format!(
                "The competitor({}) is not on course; abandonment does not change status",
                self.competitor.id
            ));
        }
    }

    pub(crate) fn unknown(&mut self, code: u32) {
        self.warn(format!(
            "Unknown event kind {} for competitor({}); ignored",
            code, self.competitor.id
        ));
    }

    fn notify(&mut self, time: Clock, kind: OutgoingKind) {
        self.competitor.outgoing.push(OutgoingEvent::new(time, kind));
    }

    fn log(&mut self, message: String) {
        self.emit(DiagnosticLevel::Info, message);
    }

    fn warn(&mut self, message: String) {
        self.emit(DiagnosticLevel::Warn, message);
    }

    fn emit(&mut self, level: DiagnosticLevel, message: String) {
        self.sink.record(DiagnosticLine {
            at: self.at,
            competitor: self.competitor.id,
            level,
            message,
        });
    }
}

/// Disqualifies a competitor that never crossed the start line.
///
/// Returns `true` if the competitor was disqualified.
pub(crate) fn disqualify_no_show<S: DiagnosticSink + ?Sized>(
    competitor: &mut Competitor,
    config: &RaceConfig,
    sink: &mut S,
) -> bool {
    if competitor.started || competitor.not_started {
        return false;
    }

    let at = competitor.scheduled_at + config.start_delta;
    competitor.not_started = true;
    competitor
        .outgoing
        .push(OutgoingEvent::new(at, OutgoingKind::Disqualified));
    sink.record(DiagnosticLine {
        at,
        competitor: competitor.id,
        level: DiagnosticLevel::Info,
        message: format!("The competitor({}) is disqualified", competitor.id),
    });
    true
}

/// Dispatches `event` to the matching transition.
pub(crate) fn apply_event<S: DiagnosticSink + ?Sized>(
    competitor: &mut Competitor,
    config: &RaceConfig,
    sink: &mut S,
    event: &RaceEvent,
) -> Result<(), ReduceError> {
    use crate::event::EventKind;

    let mut reducer = CompetitorReducer::new(competitor, config, sink, event.fixtime);
    match event.kind {
        EventKind::Registered => reducer.registered(),
        EventKind::StartTimeDrawn => reducer.start_time_drawn(&event.extra)?,
        EventKind::OnStartLine => reducer.on_start_line(),
        EventKind::Started => reducer.started(),
        EventKind::OnFiringRange => reducer.on_firing_range(),
        EventKind::TargetHit => reducer.target_hit(&event.extra),
        EventKind::LeftFiringRange => reducer.left_firing_range(),
        EventKind::EnteredPenaltyLaps => reducer.entered_penalty_laps(),
        EventKind::LeftPenaltyLaps => reducer.left_penalty_laps(),
        EventKind::LapCompleted => reducer.lap_completed(),
        EventKind::CannotContinue => reducer.cannot_continue(&event.extra),
        EventKind::Unknown(code) => reducer.unknown(code),
    }
    Ok(())
}
