//! User settings file
//!
//! Optional TOML file read once at startup. Every key has a default, so a
//! missing file, or a file that sets only some keys, is fine.
//!
//! ```toml
//! dataset_path = "/path/to/co2_per_capita.csv"
//!
//! [plot]
//! show_grid = true
//! show_legend = true
//! line_width = 1.5
//! chart_height = 320.0
//!
//! [defaults]
//! country = "USA"
//! comparison = ["USA", "China"]
//! year_tick_step = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dashboard::{DefaultSelection, DEFAULT_COMPARISON, DEFAULT_COUNTRY, YEAR_TICK_STEP};
use crate::error::{DashboardError, Result};

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Dataset to load when none is given on the command line
    pub dataset_path: Option<PathBuf>,
    pub plot: PlotSettings,
    pub defaults: DefaultsSettings,
}

/// Chart appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub show_grid: bool,
    pub show_legend: bool,
    /// Line width in pixels
    pub line_width: f32,
    /// Height of each chart in pixels
    pub chart_height: f32,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_legend: true,
            line_width: 1.5,
            chart_height: 320.0,
        }
    }
}

/// Initial widget selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSettings {
    pub country: String,
    pub comparison: Vec<String>,
    pub year_tick_step: i32,
}

impl Default for DefaultsSettings {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            comparison: DEFAULT_COMPARISON.iter().map(|c| c.to_string()).collect(),
            year_tick_step: YEAR_TICK_STEP,
        }
    }
}

impl DashboardSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Load settings from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!("Failed to read settings {:?}: {}", path, e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from the default location, returning defaults if absent or invalid
    pub fn load_or_default() -> Self {
        let Some(path) = super::settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring settings file: {}", e);
            Self::default()
        })
    }

    /// Default widget selections for the dashboard
    pub fn default_selection(&self) -> DefaultSelection {
        DefaultSelection {
            country: self.defaults.country.clone(),
            comparison: self.defaults.comparison.clone(),
        }
    }
}
