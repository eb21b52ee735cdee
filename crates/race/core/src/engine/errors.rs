//! Error types for the event reducer.

use crate::clock::{Clock, ClockFormatError};
use crate::event::CompetitorId;

/// Errors that abort a reduction.
///
/// Only the drawn start time is fatal: it drives the disqualification check,
/// so a run with an unreadable draw cannot produce a trustworthy table.
/// Every other malformed payload is tolerated by the reducer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    #[error("competitor {competitor}: invalid drawn start time in event at {at}: {source}")]
    ScheduledStart {
        competitor: CompetitorId,
        at: Clock,
        source: ClockFormatError,
    },
}

impl ReduceError {
    pub fn competitor(&self) -> CompetitorId {
        match self {
            Self::ScheduledStart { competitor, .. } => *competitor,
        }
    }
}
