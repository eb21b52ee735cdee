use crate::clock::Clock;

/// Race parameters shared by the reducer and the report builder.
///
/// The on-disk keys follow the camelCase names of the race config file
/// (`laps`, `lapLen`, `penaltyLen`, `firingLines`, `start`, `startDelta`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RaceConfig {
    /// Number of main laps a competitor must complete to finish.
    pub laps: u32,
    /// Length of one main lap, in meters.
    pub lap_len: u32,
    /// Length of one penalty loop, in meters.
    pub penalty_len: u32,
    /// Number of firing lines per lap. Carried for completeness; no rule uses it.
    pub firing_lines: u32,
    /// Planned start of the race.
    pub start: Clock,
    /// Maximum lateness relative to the drawn start before disqualification.
    pub start_delta: Clock,
}

impl RaceConfig {
    pub const DEFAULT_LAPS: u32 = 2;
    pub const DEFAULT_LAP_LEN: u32 = 3_500;
    pub const DEFAULT_PENALTY_LEN: u32 = 150;
    pub const DEFAULT_FIRING_LINES: u32 = 2;

    pub fn new(laps: u32, lap_len: u32, penalty_len: u32) -> Self {
        Self {
            laps,
            lap_len,
            penalty_len,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: Clock, start_delta: Clock) -> Self {
        self.start = start;
        self.start_delta = start_delta;
        self
    }

    pub fn with_firing_lines(mut self, firing_lines: u32) -> Self {
        self.firing_lines = firing_lines;
        self
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            laps: Self::DEFAULT_LAPS,
            lap_len: Self::DEFAULT_LAP_LEN,
            penalty_len: Self::DEFAULT_PENALTY_LEN,
            firing_lines: Self::DEFAULT_FIRING_LINES,
            start: Clock::ZERO,
            start_delta: Clock::ZERO,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_keys() {
        let json = r#"{
            "laps": 3,
            "lapLen": 3651,
            "penaltyLen": 50,
            "firingLines": 2,
            "start": "10:00:00.123",
            "startDelta": "00:01:30"
        }"#;

        let config: RaceConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config,
            RaceConfig::new(3, 3651, 50)
                .with_firing_lines(2)
                .with_start(
                    Clock::from_hms_milli(10, 0, 0, 123),
                    Clock::from_hms_milli(0, 1, 30, 0)
                )
        );
    }

    #[test]
    fn rejects_malformed_start() {
        let json = r#"{
            "laps": 1, "lapLen": 1, "penaltyLen": 1, "firingLines": 1,
            "start": "10:00", "startDelta": "00:01:30"
        }"#;
        assert!(serde_json::from_str::<RaceConfig>(json).is_err());
    }
}
