//! Wall-clock timestamps measured from midnight.
//!
//! Every timestamp and duration in the race log is a [`Clock`] value with
//! millisecond resolution. The textual form is `HH:MM:SS.mmm`; the short
//! `HH:MM:SS` form is accepted on input but always rendered with three
//! fractional digits.

use std::fmt;
use std::str::FromStr;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Error returned when a clock string does not match `HH:MM:SS[.mmm]`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock format: {input:?} (expected HH:MM:SS or HH:MM:SS.mmm)")]
pub struct ClockFormatError {
    pub input: String,
}

impl ClockFormatError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

/// Duration since midnight with millisecond resolution.
///
/// Used both for absolute timestamps (event fix times, scheduled starts) and
/// for elapsed durations (lap times, penalty time).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Clock(u64);

impl Clock {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn from_hms_milli(hours: u64, minutes: u64, seconds: u64, millis: u64) -> Self {
        Self(
            hours * MILLIS_PER_HOUR
                + minutes * MILLIS_PER_MINUTE
                + seconds * MILLIS_PER_SECOND
                + millis,
        )
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / MILLIS_PER_SECOND as f64
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Difference `self - earlier`, clamped at zero.
    pub const fn saturating_sub(self, earlier: Clock) -> Clock {
        Clock(self.0.saturating_sub(earlier.0))
    }

    /// Difference `self - other` in milliseconds, negative when `other` is later.
    pub const fn signed_delta(self, other: Clock) -> i64 {
        self.0 as i64 - other.0 as i64
    }

    /// Builds a clock from a signed millisecond count, clamping negatives to zero.
    pub const fn from_signed_millis(millis: i64) -> Clock {
        if millis < 0 { Clock(0) } else { Clock(millis as u64) }
    }

    /// Parses `HH:MM:SS.mmm` or `HH:MM:SS`.
    ///
    /// Every field must carry exactly two digits (three for milliseconds),
    /// hours must be below 24 and minutes/seconds below 60. Two-field input
    /// such as `01:30` is rejected rather than guessed at.
    pub fn parse(text: &str) -> Result<Clock, ClockFormatError> {
        let (hms, millis) = match text.split_once('.') {
            Some((hms, frac)) => (hms, Some(frac)),
            None => (text, None),
        };

        let mut fields = hms.split(':');
        let (Some(h), Some(m), Some(s), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(ClockFormatError::new(text));
        };

        let hours = parse_digits(h, 2).filter(|v| *v < 24);
        let minutes = parse_digits(m, 2).filter(|v| *v < 60);
        let seconds = parse_digits(s, 2).filter(|v| *v < 60);
        let millis = match millis {
            Some(frac) => parse_digits(frac, 3),
            None => Some(0),
        };

        match (hours, minutes, seconds, millis) {
            (Some(h), Some(m), Some(s), Some(ms)) => Ok(Clock::from_hms_milli(h, m, s, ms)),
            _ => Err(ClockFormatError::new(text)),
        }
    }

    /// Renders as `HH:MM:SS.mmm`.
    pub fn format(self) -> String {
        self.to_string()
    }
}

fn parse_digits(field: &str, width: usize) -> Option<u64> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        let hours = rest / MILLIS_PER_HOUR;
        rest %= MILLIS_PER_HOUR;
        let minutes = rest / MILLIS_PER_MINUTE;
        rest %= MILLIS_PER_MINUTE;
        let seconds = rest / MILLIS_PER_SECOND;
        let millis = rest % MILLIS_PER_SECOND;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
    }
}

impl FromStr for Clock {
    type Err = ClockFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Clock::parse(s)
    }
}

impl std::ops::Add for Clock {
    type Output = Clock;
    fn add(self, rhs: Clock) -> Clock {
        Clock(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Clock {
    fn add_assign(&mut self, rhs: Clock) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Clock {
    fn sum<I: Iterator<Item = Clock>>(iter: I) -> Clock {
        iter.fold(Clock::ZERO, |acc, c| acc + c)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Clock {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Clock {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Clock::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_form() {
        assert_eq!(
            Clock::parse("10:05:04.123").unwrap(),
            Clock::from_hms_milli(10, 5, 4, 123)
        );
    }

    #[test]
    fn parses_without_millis() {
        assert_eq!(
            Clock::parse("10:05:04").unwrap(),
            Clock::from_hms_milli(10, 5, 4, 0)
        );
        assert_eq!(
            Clock::parse("00:01:30").unwrap(),
            Clock::from_hms_milli(0, 1, 30, 0)
        );
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "01:30",
            "",
            "badtime",
            "1:02:03",
            "10:05:04.12",
            "10:05:04.1234",
            "24:00:00",
            "10:60:00",
            "10:05:4a",
            "10:05:04:00",
            "10:05:04.",
        ] {
            let err = Clock::parse(bad).unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(Clock::ZERO.format(), "00:00:00.000");
        assert_eq!(Clock::from_hms_milli(0, 0, 1, 123).format(), "00:00:01.123");
        assert_eq!(Clock::from_hms_milli(10, 5, 4, 123).format(), "10:05:04.123");
    }

    #[test]
    fn format_reproduces_three_digit_input_only() {
        assert_eq!(Clock::parse("10:05:04.123").unwrap().format(), "10:05:04.123");
        assert_eq!(Clock::parse("10:05:04").unwrap().format(), "10:05:04.000");
    }

    #[test]
    fn signed_delta_can_be_negative() {
        let early = Clock::from_hms_milli(9, 0, 0, 0);
        let late = Clock::from_hms_milli(9, 0, 10, 0);
        assert_eq!(late.signed_delta(early), 10_000);
        assert_eq!(early.signed_delta(late), -10_000);
        assert_eq!(early.saturating_sub(late), Clock::ZERO);
        assert_eq!(Clock::from_signed_millis(-5), Clock::ZERO);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_clock_strings() {
        let clock: Clock = serde_json::from_str("\"00:01:30\"").unwrap();
        assert_eq!(clock, Clock::from_hms_milli(0, 1, 30, 0));
        assert_eq!(serde_json::to_string(&clock).unwrap(), "\"00:01:30.000\"");
        assert!(serde_json::from_str::<Clock>("\"01:30\"").is_err());
    }
}
