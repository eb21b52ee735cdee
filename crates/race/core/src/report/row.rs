use std::fmt;

use crate::clock::Clock;
use crate::event::CompetitorId;

/// Status column of the results table.
///
/// Variant order is the ranking order of the groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowStatus {
    /// Finished normally (or still on course); ranked by total time.
    Finished,
    NotFinished,
    NotStarted,
}

impl RowStatus {
    /// Tag shown in brackets; empty for finished rows.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Finished => "",
            Self::NotFinished => "NotFinished",
            Self::NotStarted => "NotStarted",
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// One line of the results table, with its cells already rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub status: RowStatus,
    pub id: CompetitorId,
    /// Actual start minus drawn start, clamped at zero.
    pub delta_start: Clock,
    /// Total time; zero unless the row is finished.
    pub total: Clock,
    pub total_str: String,
    pub lap_str: String,
    pub pen_str: String,
    pub hits_shots: String,
}

impl ReportRow {
    /// Ranking key: status group, then total time, then id.
    pub fn sort_key(&self) -> (RowStatus, Clock, CompetitorId) {
        match self.status {
            RowStatus::Finished => (self.status, self.total, self.id),
            _ => (self.status, Clock::ZERO, self.id),
        }
    }

    /// Leading column: total time if finished, `[Status]` otherwise.
    pub fn leading_field(&self) -> String {
        if self.status.is_finished() {
            self.total_str.clone()
        } else {
            format!("[{}]", self.status.tag())
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.leading_field(),
            self.id,
            self.lap_str,
            self.pen_str,
            self.hits_shots
        )
    }
}

/// Renders a `{time, speed}` cell.
pub(crate) fn timed_cell(time: Clock, speed: f64) -> String {
    format!("{{{}, {:.3}}}", time, speed)
}

pub(crate) const EMPTY_CELL: &str = "{,}";
