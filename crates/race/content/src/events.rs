//! Text format of the race event log.
//!
//! One event per line:
//!
//! ```text
//! [09:05:59.867] 2 1 09:30:00.000
//! [09:49:33.123] 6 1 4
//! [10:01:02.003] 11 3 Lost in the forest
//! ```
//!
//! The bracketed timestamp, the event kind and the competitor id are
//! required. Everything after the id is the payload, kept verbatim apart from
//! surrounding whitespace. Blank lines are skipped.

use race_core::{Clock, ClockFormatError, CompetitorId, EventKind, RaceEvent};

/// Error raised for a line that cannot be read as an event.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EventParseError {
    #[error("line {line}: expected a bracketed timestamp, got {text:?}")]
    MissingTimestamp { line: usize, text: String },

    #[error("line {line}: {source}")]
    InvalidTimestamp {
        line: usize,
        source: ClockFormatError,
    },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: event kind {value:?} is not a number")]
    InvalidKind { line: usize, value: String },
}

impl EventParseError {
    pub fn line(&self) -> usize {
        match self {
            Self::MissingTimestamp { line, .. }
            | Self::InvalidTimestamp { line, .. }
            | Self::MissingField { line, .. }
            | Self::InvalidKind { line, .. } => *line,
        }
    }
}

/// Parses a single log line. `line` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for blank lines. A competitor id that is not a number
/// is read as `0`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<RaceEvent>, EventParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let missing_timestamp = || EventParseError::MissingTimestamp {
        line,
        text: trimmed.to_owned(),
    };
    let rest = trimmed.strip_prefix('[').ok_or_else(missing_timestamp)?;
    let (stamp, rest) = rest.split_once(']').ok_or_else(missing_timestamp)?;

    let fixtime =
        Clock::parse(stamp.trim()).map_err(|source| EventParseError::InvalidTimestamp {
            line,
            source,
        })?;

    let (kind, rest) = next_token(rest).ok_or(EventParseError::MissingField {
        line,
        field: "event kind",
    })?;
    let kind: u32 = kind.parse().map_err(|_| EventParseError::InvalidKind {
        line,
        value: kind.to_owned(),
    })?;

    let (competitor, rest) = next_token(rest).ok_or(EventParseError::MissingField {
        line,
        field: "competitor id",
    })?;
    let competitor = CompetitorId(competitor.parse().unwrap_or_default());

    Ok(Some(
        RaceEvent::new(fixtime, EventKind::from_code(kind), competitor).with_extra(rest.trim()),
    ))
}

/// Parses a whole log, skipping blank lines.
pub fn parse_events(content: &str) -> Result<Vec<RaceEvent>, EventParseError> {
    let mut events = Vec::new();
    for (index, text) in content.lines().enumerate() {
        if let Some(event) = parse_line(index + 1, text)? {
            events.push(event);
        }
    }
    Ok(events)
}

fn next_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    match text.find(char::is_whitespace) {
        Some(end) => Some((&text[..end], &text[end..])),
        None => Some((text, "")),
    }
}
