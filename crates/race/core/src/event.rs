//! Incoming race events and the notifications derived from them.

use std::fmt;

use crate::clock::Clock;

/// Identifier of a competitor as it appears in the event log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CompetitorId(pub u32);

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of an incoming event, keyed by its numeric code in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    /// 1: the competitor registered.
    Registered,
    /// 2: the start time was set by a draw; payload is the drawn clock time.
    StartTimeDrawn,
    /// 3: the competitor is on the start line.
    OnStartLine,
    /// 4: the competitor has started.
    Started,
    /// 5: the competitor is on the firing range; payload is the firing line.
    OnFiringRange,
    /// 6: a target has been hit; payload is the target.
    TargetHit,
    /// 7: the competitor left the firing range.
    LeftFiringRange,
    /// 8: the competitor entered the penalty laps.
    EnteredPenaltyLaps,
    /// 9: the competitor left the penalty laps.
    LeftPenaltyLaps,
    /// 10: the competitor ended a main lap.
    LapCompleted,
    /// 11: the competitor can't continue; payload is a free-text reason.
    CannotContinue,
    /// Any code outside 1..=11. Ignored by the reducer.
    Unknown(u32),
}

impl EventKind {
    pub const fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Registered,
            2 => Self::StartTimeDrawn,
            3 => Self::OnStartLine,
            4 => Self::Started,
            5 => Self::OnFiringRange,
            6 => Self::TargetHit,
            7 => Self::LeftFiringRange,
            8 => Self::EnteredPenaltyLaps,
            9 => Self::LeftPenaltyLaps,
            10 => Self::LapCompleted,
            11 => Self::CannotContinue,
            other => Self::Unknown(other),
        }
    }

    pub const fn code(self) -> u32 {
        match self {
            Self::Registered => 1,
            Self::StartTimeDrawn => 2,
            Self::OnStartLine => 3,
            Self::Started => 4,
            Self::OnFiringRange => 5,
            Self::TargetHit => 6,
            Self::LeftFiringRange => 7,
            Self::EnteredPenaltyLaps => 8,
            Self::LeftPenaltyLaps => 9,
            Self::LapCompleted => 10,
            Self::CannotContinue => 11,
            Self::Unknown(code) => code,
        }
    }
}

impl From<u32> for EventKind {
    fn from(code: u32) -> Self {
        Self::from_code(code)
    }
}

/// A single line of the race log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceEvent {
    /// When the event was recorded.
    pub fixtime: Clock,
    pub kind: EventKind,
    pub competitor: CompetitorId,
    /// Kind-specific payload, kept verbatim. Empty when the line carries none.
    pub extra: String,
}

impl RaceEvent {
    pub fn new(fixtime: Clock, kind: EventKind, competitor: CompetitorId) -> Self {
        Self {
            fixtime,
            kind,
            competitor,
            extra: String::new(),
        }
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }
}

/// Kind of a notification produced by the reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum OutgoingKind {
    /// 32: the competitor is disqualified.
    Disqualified,
    /// 33: the competitor has finished.
    Finished,
}

impl OutgoingKind {
    pub const fn code(self) -> u32 {
        match self {
            Self::Disqualified => 32,
            Self::Finished => 33,
        }
    }
}

/// Notification appended to a competitor for downstream broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutgoingEvent {
    pub time: Clock,
    pub kind: OutgoingKind,
}

impl OutgoingEvent {
    pub const fn new(time: Clock, kind: OutgoingKind) -> Self {
        Self { time, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_for_known_kinds() {
        for code in 1..=11 {
            let kind = EventKind::from_code(code);
            assert!(!matches!(kind, EventKind::Unknown(_)));
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn unknown_codes_are_preserved() {
        assert_eq!(EventKind::from_code(0), EventKind::Unknown(0));
        assert_eq!(EventKind::from_code(42).code(), 42);
    }

    #[test]
    fn outgoing_codes() {
        assert_eq!(OutgoingKind::Disqualified.code(), 32);
        assert_eq!(OutgoingKind::Finished.code(), 33);
        assert_eq!(OutgoingKind::Finished.to_string(), "finished");
    }
}
