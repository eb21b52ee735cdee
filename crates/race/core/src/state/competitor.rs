use crate::clock::Clock;
use crate::event::{CompetitorId, OutgoingEvent};

/// Status of a competitor once the event stream has been consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompetitorStatus {
    /// Started and neither finished nor abandoned.
    Racing,
    /// Completed the configured number of laps.
    Finished,
    /// Disqualified at the start: late or never crossed the start line.
    NotStarted,
    /// Abandoned the race.
    NotFinished,
}

/// Accumulated state of a single competitor.
///
/// Mutated only by the reducer, in timestamp order. `not_started` and
/// `not_finished` are mutually exclusive and never revert once set.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Competitor {
    pub id: CompetitorId,
    pub registered_at: Option<Clock>,
    /// Start time drawn for this competitor.
    pub scheduled_at: Clock,
    pub actual_start: Clock,
    pub started: bool,
    pub not_started: bool,
    pub not_finished: bool,
    pub laps_done: u32,
    /// Start of the lap currently being run.
    pub current_lap_at: Clock,
    pub lap_times: Vec<Clock>,
    pub penalty_count: u32,
    /// Entry time of the most recent penalty loop.
    pub penalty_started_at: Clock,
    /// Whether `penalty_started_at` still awaits a matching exit.
    pub penalty_pending: bool,
    pub penalty_time: Clock,
    pub hits: u32,
    pub shots: u32,
    pub outgoing: Vec<OutgoingEvent>,
}

impl Competitor {
    pub fn new(id: CompetitorId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Classifies the competitor against the configured lap count.
    ///
    /// `NotStarted` wins over `NotFinished` when both flags are somehow set.
    pub fn status(&self, laps: u32) -> CompetitorStatus {
        if self.not_started {
            CompetitorStatus::NotStarted
        } else if self.not_finished {
            CompetitorStatus::NotFinished
        } else if self.laps_done >= laps && self.started {
            CompetitorStatus::Finished
        } else {
            CompetitorStatus::Racing
        }
    }

    /// Started on time and has neither abandoned nor been disqualified.
    pub fn is_on_course(&self) -> bool {
        self.started && !self.not_started && !self.not_finished
    }

    /// Signed offset of the actual start relative to the drawn start, in ms.
    pub fn start_offset_millis(&self) -> i64 {
        self.actual_start.signed_delta(self.scheduled_at)
    }

    /// Sum of all recorded lap durations.
    pub fn laps_total(&self) -> Clock {
        self.lap_times.iter().copied().sum()
    }

    /// Shots as scored in the results table: hits plus penalty loops served.
    ///
    /// Each penalty loop stands for one missed target, so this is a scoring
    /// convention rather than a count of shots fired.
    pub fn scored_shots(&self) -> u32 {
        self.hits + self.penalty_count
    }
}
