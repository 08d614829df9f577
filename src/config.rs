use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::dataset::DatasetKind;
use crate::data::filter::ColumnMatch;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ENERGY_EXPLORER_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "energy-explorer.json";

/// Dashboard settings. Every field has a default, so a config file only needs
/// the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub state_data: PathBuf,
    pub metro_data: PathBuf,
    /// Number of entities pre-selected (and recommended) for the line chart.
    pub chart_entity_limit: usize,
    /// Matching used when only years or only features are filtered.
    pub column_match: ColumnMatch,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_data: PathBuf::from("Combined_State.csv"),
            metro_data: PathBuf::from("Combined_Metro.csv"),
            chart_entity_limit: 5,
            column_match: ColumnMatch::Substring,
        }
    }
}

impl AppConfig {
    /// Resolve the config from `$ENERGY_EXPLORER_CONFIG`, then
    /// `./energy-explorer.json`, then defaults.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// An explicit path must exist and parse. The fallback path is optional,
    /// and a broken fallback file only costs a warning.
    pub fn load_from(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if !fallback.exists() {
            log::info!("no {} found, using default settings", fallback.display());
            return Ok(Self::default());
        }
        match Self::from_file(fallback) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("ignoring {}: {e:#}", fallback.display());
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("loaded settings from {}", path.display());
        Ok(config)
    }

    /// File backing the given dataset kind.
    pub fn data_path(&self, kind: DatasetKind) -> &Path {
        match kind {
            DatasetKind::State => &self.state_data,
            DatasetKind::Metro => &self.metro_data,
        }
    }
}
