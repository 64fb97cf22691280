//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline settings that reproduce the reference pipeline exactly.
//! 2. **Structures:** Sections for general run control and statistics.
//!
//! Configuration never changes pipeline semantics; it only controls tracing, the
//! runner's cycle budget and statistics reporting. It is supplied as JSON (see the
//! CLI `--config` flag) or built with `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// State dumps are off unless requested.
    pub const TRACE_STATE: bool = false;

    /// No cycle budget: run until HALT.
    pub const MAX_CYCLES: Option<u64> = None;

    /// Statistics are collected but not reported unless requested.
    pub const STATS_ENABLED: bool = false;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use pipesim_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_state": true,
///         "max_cycles": 10000
///     },
///     "stats": {
///         "enabled": true
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_state);
/// assert_eq!(config.general.max_cycles, Some(10000));
/// assert!(config.stats.enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Statistics reporting
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Config {
    /// Reads a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file.
    ///
    /// # Errors
    ///
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse` if it is
    /// not a valid configuration document.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print the full machine state before every cycle.
    #[serde(default = "GeneralConfig::default_trace_state")]
    pub trace_state: bool,

    /// Cycle budget for `Simulator::run`; `None` runs until HALT.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    const fn default_trace_state() -> bool {
        defaults::TRACE_STATE
    }

    const fn default_max_cycles() -> Option<u64> {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_state: defaults::TRACE_STATE,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Statistics reporting settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsConfig {
    /// Print the statistics block after the run.
    #[serde(default = "StatsConfig::default_enabled")]
    pub enabled: bool,

    /// Sections to print (see `stats::STATS_SECTIONS`); empty prints all.
    #[serde(default)]
    pub sections: Vec<String>,
}

impl StatsConfig {
    const fn default_enabled() -> bool {
        defaults::STATS_ENABLED
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::STATS_ENABLED,
            sections: Vec::new(),
        }
    }
}
