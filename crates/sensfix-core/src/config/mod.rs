//! Configuration.
//!
//! This module contains the `sensfix.toml` layout:
//! - `Config` - folders, DPI and per-file sensitivities
//! - `MatchingConfig` - hit window and match mode
//! - `RecommendationConfig` - eligibility for the recommendation
//! - Default osu! install paths

mod paths;

pub use paths::*;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisOptions, DEFAULT_WINDOW_MS, MatchMode};
use crate::error::{Error, Result};
use crate::sensitivity::SensitivityTable;

pub const DEFAULT_CONFIG_FILE: &str = "sensfix.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub songs_dir: PathBuf,
    pub replays_dir: PathBuf,
    pub dpi: Option<f64>,
    pub matching: MatchingConfig,
    pub recommendation: RecommendationConfig,
    pub sensitivities: SensitivityTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            songs_dir: default_songs_dir(),
            replays_dir: PathBuf::from(DEFAULT_REPLAYS_DIR),
            dpi: None,
            matching: MatchingConfig::default(),
            recommendation: RecommendationConfig::default(),
            sensitivities: SensitivityTable::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub window_ms: f64,
    pub mode: MatchMode,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_WINDOW_MS,
            mode: MatchMode::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Minimum measured hits for a sensitivity to be recommended.
    pub min_hits: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { min_hits: 1 }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.matching.window_ms.is_finite() && self.matching.window_ms > 0.0) {
            return Err(Error::Config(format!(
                "matching.window_ms must be positive, got {}",
                self.matching.window_ms
            )));
        }
        if let Some(dpi) = self.dpi {
            if !(dpi.is_finite() && dpi > 0.0) {
                return Err(Error::Config(format!("dpi must be positive, got {}", dpi)));
            }
        }
        Ok(())
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            window_ms: self.matching.window_ms,
            mode: self.matching.mode,
        }
    }
}
