//! Loads a complete race from its two input files.

use std::path::{Path, PathBuf};

use race_core::{RaceConfig, RaceEvent};

use crate::loaders::{ConfigLoader, EventLoader, LoadResult};

/// Everything a race run needs: the configuration and the raw event log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceContent {
    pub config: RaceConfig,
    /// Events in file order; the reducer sorts them.
    pub events: Vec<RaceEvent>,
}

/// Content factory pointing at a config file and an event log.
pub struct ContentFactory {
    config_path: PathBuf,
    events_path: PathBuf,
}

impl ContentFactory {
    pub fn new(config_path: impl Into<PathBuf>, events_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            events_path: events_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn events_path(&self) -> &Path {
        &self.events_path
    }

    pub fn load_config(&self) -> LoadResult<RaceConfig> {
        ConfigLoader::load(&self.config_path)
    }

    pub fn load_events(&self) -> LoadResult<Vec<RaceEvent>> {
        EventLoader::load(&self.events_path)
    }

    /// Loads the configuration first, then the events.
    pub fn load(&self) -> LoadResult<RaceContent> {
        Ok(RaceContent {
            config: self.load_config()?,
            events: self.load_events()?,
        })
    }
}
