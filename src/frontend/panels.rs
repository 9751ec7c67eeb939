//! Panel components for the frontend UI
//!
//! # Panels
//!
//! - [`WelcomePanel`] - Landing card with the dashboard introduction
//! - [`ModeSelectorPanel`] - One radio button per mode
//! - [`FilterPanel`] - The active mode's filter widgets
//! - [`DatasetPanel`] - Summary of the loaded dataset

use egui::{Color32, RichText, Ui};

use super::state::{matching_countries, move_nearest_endpoint, AppAction, FilterControls};
use super::widgets::{DescriptionCard, ValueDisplay};
use crate::dashboard::{welcome_text, Dashboard};
use crate::modes::Mode;

const ACCENT: Color32 = Color32::from_rgb(46, 139, 87);

/// Renders the landing card
pub struct WelcomePanel;

impl WelcomePanel {
    pub fn render(ui: &mut Ui) {
        let (title, body) = welcome_text();
        ui.add(DescriptionCard::new(title, body).with_accent(ACCENT));
    }
}

/// Renders the mode radio buttons
pub struct ModeSelectorPanel;

impl ModeSelectorPanel {
    /// Returns [`AppAction::SelectMode`] when the user picks a different mode
    pub fn render(ui: &mut Ui, current: Mode) -> Option<AppAction> {
        ui.label(RichText::new("Select a mode").strong());
        let mut selected = current;
        for mode in Mode::ALL {
            ui.radio_value(&mut selected, mode, mode.label())
                .on_hover_text(mode.description());
        }
        (selected != current).then_some(AppAction::SelectMode(selected))
    }
}

/// Renders the widgets of the active mode
pub struct FilterPanel;

impl FilterPanel {
    pub fn render(
        ui: &mut Ui,
        controls: &mut FilterControls,
        dashboard: &Dashboard,
        tick_step: i32,
    ) -> Vec<AppAction> {
        let mut actions = Vec::new();
        let bounds = dashboard.year_bounds();
        let years = bounds.start()..=bounds.end();
        let countries = dashboard.dataset().countries();
        let ticks = dashboard.year_ticks(tick_step);

        match controls.mode {
            Mode::Worldview => {
                year_range_sliders(
                    ui,
                    &mut controls.world_start,
                    &mut controls.world_end,
                    years,
                    &ticks,
                );
            }
            Mode::SingleCountry => {
                ui.label("Country");
                egui::ComboBox::from_id_salt("single_country")
                    .selected_text(controls.country.as_str())
                    .width(ui.available_width())
                    .height(300.0)
                    .show_ui(ui, |ui| {
                        for country in countries {
                            ui.selectable_value(&mut controls.country, country.clone(), country);
                        }
                    });
                ui.add_space(6.0);
                year_range_sliders(
                    ui,
                    &mut controls.country_start,
                    &mut controls.country_end,
                    years,
                    &ticks,
                );
            }
            Mode::MultipleCountry => {
                ui.label(format!("Countries ({} selected)", controls.comparison.len()));
                ui.add(
                    egui::TextEdit::singleline(&mut controls.country_query)
                        .hint_text("Search countries")
                        .desired_width(f32::INFINITY),
                );
                let mut toggled = None;
                egui::ScrollArea::vertical()
                    .id_salt("comparison_countries")
                    .max_height(220.0)
                    .show(ui, |ui| {
                        for country in matching_countries(countries, &controls.country_query) {
                            let mut checked = controls.comparison.contains(country);
                            if ui.checkbox(&mut checked, country).changed() {
                                toggled = Some(country.clone());
                            }
                        }
                    });
                if let Some(country) = toggled {
                    controls.toggle_comparison(&country);
                }
                ui.add_space(6.0);
                year_range_sliders(
                    ui,
                    &mut controls.comparison_start,
                    &mut controls.comparison_end,
                    years,
                    &ticks,
                );
            }
            Mode::YearView => {
                ui.label("Year");
                ui.add(egui::Slider::new(&mut controls.year, years).step_by(1.0));
                if let Some(tick) = year_tick_row(ui, &ticks) {
                    controls.year = tick;
                }
            }
        }

        ui.add_space(8.0);
        if ui.button("Reset filters").clicked() {
            actions.push(AppAction::ResetFilters);
        }

        actions
    }
}

fn year_range_sliders(
    ui: &mut Ui,
    start: &mut i32,
    end: &mut i32,
    years: std::ops::RangeInclusive<i32>,
    ticks: &[i32],
) {
    ui.label("Year range");
    ui.add(
        egui::Slider::new(start, years.clone())
            .step_by(1.0)
            .text("From"),
    );
    ui.add(egui::Slider::new(end, years).step_by(1.0).text("To"));
    if let Some(tick) = year_tick_row(ui, ticks) {
        move_nearest_endpoint(start, end, tick);
    }
}

/// Row of year marks; returns the mark clicked this frame
fn year_tick_row(ui: &mut Ui, ticks: &[i32]) -> Option<i32> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for &tick in ticks {
            if ui.small_button(tick.to_string()).clicked() {
                clicked = Some(tick);
            }
        }
    });
    clicked
}

/// Renders the dataset summary
pub struct DatasetPanel;

impl DatasetPanel {
    pub fn render(ui: &mut Ui, dashboard: &Dashboard) {
        let dataset = dashboard.dataset();
        ui.add(ValueDisplay::new("Rows", dataset.len().to_string()));
        ui.add(ValueDisplay::new("Countries", dataset.countries().len().to_string()));
        match dataset.year_bounds() {
            Some(bounds) => {
                ui.add(ValueDisplay::new("Years", bounds.to_string()));
                ui.add(ValueDisplay::new("Span", bounds.span().to_string()).with_unit("years"));
            }
            None => {
                ui.colored_label(Color32::GRAY, "No dataset loaded");
            }
        }
    }
}
