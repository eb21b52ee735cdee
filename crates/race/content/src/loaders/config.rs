//! Race configuration loader.

use std::path::Path;

use race_core::RaceConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for race configuration from JSON or TOML files.
///
/// The format is picked by extension: `.toml` is read as TOML, anything else
/// as JSON.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON or TOML file containing a RaceConfig
    pub fn load(path: &Path) -> LoadResult<RaceConfig> {
        let content = read_file(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn from_json(content: &str) -> LoadResult<RaceConfig> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config JSON: {}", e))
    }

    pub fn from_toml(content: &str) -> LoadResult<RaceConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
