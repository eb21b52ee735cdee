//! Runtime settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Where a run writes its files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory receiving the event log and the results table.
    pub output_dir: PathBuf,
    /// File name of the diagnostic event log.
    pub event_log: String,
    /// File name of the persisted results table.
    pub result_table: String,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_LOG: &'static str = "events.log";
    pub const DEFAULT_RESULT_TABLE: &'static str = "resulting_table";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RACE_OUTPUT_DIR` - Directory for output files (default: current directory)
    /// - `RACE_EVENT_LOG` - Event log file name (default: events.log)
    /// - `RACE_RESULT_TABLE` - Results table file name (default: resulting_table)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("RACE_OUTPUT_DIR").filter(|v| !v.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(name) = lookup("RACE_EVENT_LOG").filter(|v| !v.is_empty()) {
            config.event_log = name;
        }
        if let Some(name) = lookup("RACE_RESULT_TABLE").filter(|v| !v.is_empty()) {
            config.result_table = name;
        }

        config
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn event_log_path(&self) -> PathBuf {
        self.output_dir.join(&self.event_log)
    }

    pub fn result_table_path(&self) -> PathBuf {
        self.output_dir.join(&self.result_table)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            event_log: Self::DEFAULT_EVENT_LOG.to_owned(),
            result_table: Self::DEFAULT_RESULT_TABLE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_write_to_current_directory() {
        let config = RuntimeConfig::from_lookup(|_| None);
        assert_eq!(config.event_log_path(), PathBuf::from("./events.log"));
        assert_eq!(config.result_table_path(), PathBuf::from("./resulting_table"));
    }

    #[test]
    fn reads_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("RACE_OUTPUT_DIR", "/tmp/race"),
            ("RACE_EVENT_LOG", "race.log"),
            ("RACE_RESULT_TABLE", ""),
        ]);

        let config = RuntimeConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.event_log_path(), PathBuf::from("/tmp/race/race.log"));
        assert_eq!(
            config.result_table_path(),
            PathBuf::from("/tmp/race/resulting_table")
        );
    }
}
