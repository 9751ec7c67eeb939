//! # co2-dashboard: CO2 Emissions Per Capita Dashboard
//!
//! An interactive desktop dashboard for exploring CO2 emissions per capita
//! across countries and years. A fixed set of modes each filter the dataset
//! and render a fixed set of charts.
//!
//! ## Architecture
//!
//! - **Data**: CSV loading into an immutable [`Dataset`] shared as `Arc`
//! - **Filter**: Pure per-mode filtering into a [`FilteredSubset`]
//! - **Charts**: Per-mode chart selection ([`charts`]) and figure building ([`analysis`])
//! - **Frontend**: Renders the UI using eframe/egui with egui_plot for charts
//!
//! ## Configuration
//!
//! Application state (last mode, recent datasets, preferences) is stored in the
//! platform-appropriate data directory under `dev.co2-dashboard`:
//!
//! - **Linux**: `~/.local/share/dev.co2-dashboard/`
//! - **macOS**: `~/Library/Application Support/dev.co2-dashboard/`
//! - **Windows**: `%APPDATA%\dev.co2-dashboard\`
//!
//! ## Example
//!
//! ```no_run
//! use co2_dashboard::{data::load_csv, Dashboard, Mode};
//! use std::sync::Arc;
//!
//! fn main() -> co2_dashboard::Result<()> {
//!     let (dataset, _report) = load_csv("data/co2_per_capita.csv")?;
//!     let dashboard = Dashboard::new(Arc::new(dataset));
//!
//!     let params = dashboard.default_params(Mode::Worldview);
//!     let view = dashboard.view(&params);
//!     println!("{}: {} rows, {} charts", view.banner, view.row_count, view.charts.len());
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod app;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod filter;
pub mod frontend;
pub mod modes;
pub mod types;

// Re-export commonly used types
pub use app::DashboardApp;
pub use charts::{select_charts, ChartKind, ChartSpec};
pub use config::{AppState, DashboardSettings};
pub use dashboard::{Dashboard, DashboardView};
pub use data::Dataset;
pub use error::{DashboardError, Result};
pub use filter::{filter, FilterParams, FilteredSubset};
pub use modes::{accepted_params, current_mode_banner, describe, Mode};
pub use types::{EmissionRecord, Field, YearRange};
