//! CO2 Dashboard - Main Entry Point
//!
//! Usage: `co2-dashboard [DATASET.csv]`

use std::path::{Path, PathBuf};

use anyhow::Context;
use co2_dashboard::{
    config::{self, resolve_dataset_path, AppState, DashboardSettings},
    DashboardApp,
};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Daily rolling log writer under `<dir>/logs`
fn file_writer(dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("co2-dashboard")
        .filename_suffix("log")
        .build(dir.join("logs"))
        .context("Failed to create log file appender")?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the stderr layer and, when the log directory is usable, a daily file
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,co2_dashboard=debug"));

    let writer = config::ensure_app_data_dir()
        .map_err(anyhow::Error::from)
        .and_then(|dir| file_writer(&dir));

    let (file_layer, guard, file_error) = match writer {
        Ok((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!("File logging disabled: {:#}", e);
    }

    guard
}

fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging();

    tracing::info!("Starting CO2 Dashboard");

    let cli_path = std::env::args_os().nth(1).map(PathBuf::from);

    // Load application state (last mode, recent datasets, preferences)
    let mut app_state = AppState::load_or_default();
    app_state.cleanup_missing_datasets();
    let settings = DashboardSettings::load_or_default();

    let dataset_path = resolve_dataset_path(cli_path, &settings, &app_state);
    tracing::info!("Using dataset {:?}", dataset_path);

    let dark_mode = app_state.ui_preferences.dark_mode;
    let font_scale = app_state.ui_preferences.font_scale;

    let mut app = DashboardApp::new(app_state, settings);
    app.open_dataset(&dataset_path);

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("CO2 Emissions Per Capita Dashboard"),
        ..Default::default()
    };

    // Run the eframe application
    eframe::run_native(
        "CO2 Emissions Per Capita Dashboard",
        native_options,
        Box::new(move |cc| {
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals = if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
            cc.egui_ctx.set_style(style);
            cc.egui_ctx.set_zoom_factor(font_scale.clamp(0.5, 3.0));

            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("Failed to run the dashboard window")?;

    tracing::info!("Shutting down...");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_writer_creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let (_writer, _guard) = file_writer(dir.path()).unwrap();
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_file_writer_reports_unusable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let err = file_writer(&blocker).unwrap_err();
        assert!(format!("{err:#}").contains("log file appender"));
    }
}
