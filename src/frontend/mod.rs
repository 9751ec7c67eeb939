//! Frontend module for egui UI
//!
//! This module provides the dashboard window using eframe/egui. It owns the
//! widget state, asks [`Dashboard::view`] for a fresh view whenever the
//! filter parameters change, and draws the cached view every frame.
//!
//! # Main Types
//!
//! - [`DashboardApp`] - Main application state implementing [`eframe::App`]
//! - [`ChartView`] - Chart rendering with egui_plot
//! - [`FilterControls`] - Per-mode widget values
//!
//! # Submodules
//!
//! - `panels` - Welcome card, mode selector, filter widgets, dataset summary
//! - `plot` - Figure rendering with egui_plot
//! - `state` - Widget state and [`AppAction`]
//! - `status_bar` - Bottom status bar
//! - `widgets` - Custom UI widgets

mod panels;
mod plot;
pub mod state;
pub mod status_bar;
pub mod widgets;

pub use panels::*;
pub use plot::{category_label, violin_polygon, ChartView, ColorPalette};
pub use state::{matching_countries, AppAction, FilterControls};
pub use widgets::*;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{Color32, RichText};

use crate::config::{AppState, DashboardSettings};
use crate::dashboard::{Dashboard, DashboardView};
use crate::data::{load_csv, Dataset, LoadReport};
use crate::filter::FilterParams;
use status_bar::{render_status_bar, StatusBarContext};

const BANNER_COLOR: Color32 = Color32::from_rgb(46, 139, 87);

/// Main application state for the dashboard
pub struct DashboardApp {
    dashboard: Dashboard,
    controls: FilterControls,
    /// Last computed view and the parameters it was computed for
    cached: Option<(FilterParams, DashboardView)>,

    app_state: AppState,
    settings: DashboardSettings,
    chart_view: ChartView,

    dataset_path: Option<PathBuf>,
    report: Option<LoadReport>,
    last_error: Option<String>,
}

impl DashboardApp {
    /// Create the app over an empty dataset
    ///
    /// Call [`DashboardApp::open_dataset`] to load data.
    pub fn new(app_state: AppState, settings: DashboardSettings) -> Self {
        let dashboard = Dashboard::new(Arc::new(Dataset::empty()))
            .with_defaults(settings.default_selection());
        let mode = app_state.last_mode().unwrap_or_default();
        let controls = FilterControls::from_dashboard(&dashboard, mode);
        let chart_view = ChartView::from_settings(&settings.plot);

        Self {
            dashboard,
            controls,
            cached: None,
            app_state,
            settings,
            chart_view,
            dataset_path: None,
            report: None,
            last_error: None,
        }
    }

    /// Load a dataset, replacing the current one on success
    ///
    /// On failure the current dataset stays and the error is shown in the
    /// status bar.
    pub fn open_dataset(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match load_csv(path) {
            Ok((dataset, report)) => {
                self.app_state.add_recent_dataset(path, dataset.len());
                self.set_dataset(Arc::new(dataset));
                self.dataset_path = Some(path.to_path_buf());
                self.report = Some(report);
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!("Failed to load dataset: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        let had_data = !self.dashboard.dataset().is_empty();
        self.dashboard =
            Dashboard::new(dataset).with_defaults(self.settings.default_selection());
        self.controls = if had_data {
            FilterControls::carried_over(&self.controls, &self.dashboard)
        } else {
            FilterControls::from_dashboard(&self.dashboard, self.controls.mode)
        };
        self.cached = None;
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The view for the current controls, recomputed only when they changed
    pub fn current_view(&mut self) -> &DashboardView {
        let params = self.controls.params();
        if !matches!(&self.cached, Some((cached, _)) if *cached == params) {
            self.cached = None;
        }
        let dashboard = &self.dashboard;
        &self
            .cached
            .get_or_insert_with(|| {
                let view = dashboard.view(&params);
                (params, view)
            })
            .1
    }

    /// Apply an action emitted by a panel
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::SelectMode(mode) => {
                tracing::debug!("Switching to mode {}", mode.id());
                self.controls.mode = mode;
                self.app_state.set_last_mode(mode);
            }
            AppAction::OpenDataset(path) => self.open_dataset(path),
            AppAction::ResetFilters => {
                self.controls =
                    FilterControls::from_dashboard(&self.dashboard, self.controls.mode);
            }
            AppAction::ToggleDarkMode => {
                let prefs = &mut self.app_state.ui_preferences;
                prefs.dark_mode = !prefs.dark_mode;
            }
            AppAction::ToggleWelcome => {
                let prefs = &mut self.app_state.ui_preferences;
                prefs.show_welcome = !prefs.show_welcome;
            }
            AppAction::ClearError => self.last_error = None,
        }
    }

    fn pick_dataset() -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Open Dataset")
            .add_filter("CSV", &["csv"])
            .pick_file()
    }

    fn render_menu_bar(&self, ctx: &egui::Context, actions: &mut Vec<AppAction>) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Dataset...").clicked() {
                        if let Some(path) = Self::pick_dataset() {
                            actions.push(AppAction::OpenDataset(path));
                        }
                        ui.close();
                    }

                    let recent: Vec<PathBuf> = self
                        .app_state
                        .recent_datasets
                        .iter()
                        .map(|d| d.path.clone())
                        .collect();
                    if !recent.is_empty() {
                        ui.menu_button("Recent Datasets", |ui| {
                            for path in recent {
                                if ui.button(path.display().to_string()).clicked() {
                                    actions.push(AppAction::OpenDataset(path));
                                    ui.close();
                                }
                            }
                        });
                    }

                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let prefs = &self.app_state.ui_preferences;
                    let theme = if prefs.dark_mode { "Light Mode" } else { "Dark Mode" };
                    if ui.button(theme).clicked() {
                        actions.push(AppAction::ToggleDarkMode);
                        ui.close();
                    }
                    let welcome = if prefs.show_welcome {
                        "Hide Welcome"
                    } else {
                        "Show Welcome"
                    };
                    if ui.button(welcome).clicked() {
                        actions.push(AppAction::ToggleWelcome);
                        ui.close();
                    }
                    if ui.button("Reset Filters").clicked() {
                        actions.push(AppAction::ResetFilters);
                        ui.close();
                    }
                });

                if self.last_error.is_some() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss error").clicked() {
                            actions.push(AppAction::ClearError);
                        }
                    });
                }
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        ctx.set_visuals(if self.app_state.ui_preferences.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.render_menu_bar(ctx, &mut actions);

        // Status bar, drawn from the view of the previous frame's controls
        let subset_rows = self.current_view().row_count;
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            render_status_bar(
                ui,
                &StatusBarContext {
                    dataset_path: self.dataset_path.as_deref(),
                    report: self.report.as_ref(),
                    total_rows: self.dashboard.dataset().len(),
                    subset_rows,
                    last_error: self.last_error.as_deref(),
                },
            );
        });

        // Controls
        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(action) = ModeSelectorPanel::render(ui, self.controls.mode) {
                        actions.push(action);
                    }
                    ui.separator();
                    actions.extend(FilterPanel::render(
                        ui,
                        &mut self.controls,
                        &self.dashboard,
                        self.settings.defaults.year_tick_step,
                    ));
                    ui.separator();
                    DatasetPanel::render(ui, &self.dashboard);
                });
            });

        for action in actions.drain(..) {
            self.handle_action(action);
        }

        // Charts
        let show_welcome = self.app_state.ui_preferences.show_welcome;
        let chart_view = self.chart_view.clone();
        let view = self.current_view().clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if show_welcome {
                    WelcomePanel::render(ui);
                    ui.add_space(8.0);
                }

                ui.label(RichText::new(&view.banner).heading().color(BANNER_COLOR));
                ui.add(egui::Label::new(view.description).wrap());
                ui.add_space(8.0);

                for (index, panel) in view.charts.iter().enumerate() {
                    let id = format!("{}_chart_{}", view.mode.id(), index);
                    chart_view.render(ui, &id, panel);
                    ui.add(DescriptionCard::new(
                        panel.spec.kind.card_title(),
                        panel.spec.description,
                    ));
                    ui.add_space(12.0);
                }
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.app_state.set_last_mode(self.controls.mode);

        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
