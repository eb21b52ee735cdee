//! Event log loader.

use std::path::Path;

use race_core::RaceEvent;

use crate::events::parse_events;
use crate::loaders::{LoadResult, read_file};

/// Loader for race event logs.
pub struct EventLoader;

impl EventLoader {
    /// Load every event from a text log, in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<RaceEvent>> {
        let content = read_file(path)?;
        parse_events(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse events in {}: {}", path.display(), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use race_core::{Clock, CompetitorId, EventKind};

    #[test]
    fn loads_events_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.txt");
        std::fs::write(
            &path,
            "[09:15:00.841] 2 1 09:30:00.000\n[09:05:59.867] 1 1\n",
        )
        .unwrap();

        let events = EventLoader::load(&path).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::StartTimeDrawn);
        assert_eq!(events[1].fixtime, Clock::from_hms_milli(9, 5, 59, 867));
        assert_eq!(events[1].competitor, CompetitorId(1));
    }

    #[test]
    fn empty_file_has_no_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert!(EventLoader::load(&path).unwrap().is_empty());
    }

    #[test]
    fn invalid_line_fails_with_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "invalid line\n").unwrap();

        let err = EventLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn invalid_time_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badtime.txt");
        std::fs::write(&path, "[badtime] 2 1 extra").unwrap();

        assert!(EventLoader::load(&path).is_err());
    }
}
