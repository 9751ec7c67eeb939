//! Configuration module for the CO2 dashboard
//!
//! This module handles:
//! - Application state persistence (last mode, recent datasets, UI preferences)
//! - The optional TOML settings file (see [`settings`])
//! - Resolving which dataset to load at startup
//!
//! # App Data Location
//!
//! Application state is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.co2-dashboard/`
//! - **macOS**: `~/Library/Application Support/dev.co2-dashboard/`
//! - **Windows**: `%APPDATA%\dev.co2-dashboard\`
//!
//! # Files
//!
//! - `app_state.json` - Last mode, recent datasets and UI preferences
//! - `settings.toml` - Optional user settings, in the platform config dir

pub mod settings;

pub use settings::*;

use crate::error::{DashboardError, Result};
use crate::modes::Mode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Application identifier for data directories
pub const APP_ID: &str = "dev.co2-dashboard";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Settings filename
pub const SETTINGS_FILE: &str = "settings.toml";

/// Dataset used when nothing else is configured
pub const DEFAULT_DATASET_PATH: &str = "data/co2_per_capita.csv";

/// Maximum number of recent datasets to remember
pub const MAX_RECENT_DATASETS: usize = 10;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        DashboardError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            DashboardError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

/// Get the path to the settings file
pub fn settings_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID).join(SETTINGS_FILE))
}

// ==================== Recent Dataset Entry ====================

/// Information about a recently opened dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentDataset {
    /// Path to the CSV file
    pub path: PathBuf,

    /// Number of records at last load
    #[serde(default)]
    pub record_count: usize,

    /// Last opened timestamp (Unix seconds)
    pub last_opened: u64,
}

impl RecentDataset {
    /// Create a new recent dataset entry
    pub fn new(path: impl Into<PathBuf>, record_count: usize) -> Self {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            path: path.into(),
            record_count,
            last_opened: now,
        }
    }

    /// Check if the dataset file still exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

// ==================== App State ====================

/// Persistent application state
///
/// User preferences and history that persist across sessions. This holds no
/// emissions data; the dataset itself is always re-read from its CSV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// Mode identifier selected when the app last closed
    ///
    /// Stored as a raw id so a stale value from another version still loads;
    /// it resolves through the mode registry and falls back to the default.
    #[serde(default)]
    pub last_mode: Option<String>,

    /// Recently opened datasets, most recent first
    #[serde(default)]
    pub recent_datasets: Vec<RecentDataset>,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            last_mode: None,
            recent_datasets: Vec::new(),
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            DashboardError::Config("Could not determine app state path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load app state from an explicit path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DashboardError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(APP_STATE_FILE))
    }

    /// Save app state to an explicit path
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Serialization(format!("Failed to serialize app state: {}", e))
        })?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| DashboardError::Config(format!("Failed to write app state: {}", e)))
    }

    /// The last selected mode, if it is still a known one
    pub fn last_mode(&self) -> Option<Mode> {
        self.last_mode.as_deref().and_then(Mode::from_id)
    }

    pub fn set_last_mode(&mut self, mode: Mode) {
        self.last_mode = Some(mode.id().to_string());
    }

    /// Add or update a recent dataset
    pub fn add_recent_dataset(&mut self, path: impl AsRef<Path>, record_count: usize) {
        let path = path.as_ref().to_path_buf();

        self.recent_datasets.retain(|d| d.path != path);
        self.recent_datasets
            .insert(0, RecentDataset::new(path, record_count));
        self.recent_datasets.truncate(MAX_RECENT_DATASETS);
    }

    /// Clean up recent datasets that no longer exist
    pub fn cleanup_missing_datasets(&mut self) {
        self.recent_datasets.retain(|d| d.exists());
    }

    /// Most recently opened dataset, if it still exists
    pub fn last_dataset(&self) -> Option<&Path> {
        self.recent_datasets
            .iter()
            .find(|d| d.exists())
            .map(|d| d.path.as_path())
    }
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default)]
    pub dark_mode: bool,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,

    /// Show the welcome card above the mode selector
    #[serde(default = "default_true")]
    pub show_welcome: bool,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_scale: 1.0,
            show_welcome: true,
        }
    }
}

// ==================== Dataset Resolution ====================

/// Pick the dataset to load at startup
///
/// Order: command-line argument, settings file, last opened dataset, then
/// [`DEFAULT_DATASET_PATH`].
pub fn resolve_dataset_path(
    cli_path: Option<PathBuf>,
    settings: &DashboardSettings,
    state: &AppState,
) -> PathBuf {
    cli_path
        .or_else(|| settings.dataset_path.clone())
        .or_else(|| state.last_dataset().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH))
}

// ==================== Tests ====================
