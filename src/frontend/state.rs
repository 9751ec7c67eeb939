//! Shared state types for the frontend
//!
//! The control panels edit a [`FilterControls`] in place and return
//! [`AppAction`]s for anything that reaches beyond the current filter, such
//! as switching modes or opening a dataset.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::dashboard::Dashboard;
use crate::filter::FilterParams;
use crate::modes::Mode;
use crate::types::YearRange;

/// Widget values for every mode
///
/// Each mode keeps its own selections, so switching away and back restores
/// what the user had picked.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControls {
    pub mode: Mode,

    // Worldview
    pub world_start: i32,
    pub world_end: i32,

    // Single country
    pub country: String,
    pub country_start: i32,
    pub country_end: i32,

    // Multiple country
    pub comparison: BTreeSet<String>,
    pub comparison_start: i32,
    pub comparison_end: i32,
    /// Search text narrowing the comparison checklist
    pub country_query: String,

    // Year view
    pub year: i32,
}

impl FilterControls {
    /// Seed every mode's widgets from the dashboard defaults
    pub fn from_dashboard(dashboard: &Dashboard, mode: Mode) -> Self {
        let bounds = dashboard.year_bounds();

        let country = match dashboard.default_params(Mode::SingleCountry) {
            FilterParams::SingleCountry { country, .. } => country,
            _ => String::new(),
        };
        let comparison = match dashboard.default_params(Mode::MultipleCountry) {
            FilterParams::MultipleCountry { countries, .. } => countries,
            _ => BTreeSet::new(),
        };
        let year = match dashboard.default_params(Mode::YearView) {
            FilterParams::YearView { year } => year,
            _ => bounds.end(),
        };

        Self {
            mode,
            world_start: bounds.start(),
            world_end: bounds.end(),
            country,
            country_start: bounds.start(),
            country_end: bounds.end(),
            comparison,
            comparison_start: bounds.start(),
            comparison_end: bounds.end(),
            country_query: String::new(),
            year,
        }
    }

    /// Seed from a newly loaded dataset, keeping `previous` selections that fit
    ///
    /// Year selections are clamped to the new bounds. Countries that the new
    /// dataset lacks fall back to the defaults.
    pub fn carried_over(previous: &FilterControls, dashboard: &Dashboard) -> Self {
        let mut controls = Self::from_dashboard(dashboard, previous.mode);
        let dataset = dashboard.dataset();
        let Some(bounds) = dataset.year_bounds() else {
            return controls;
        };

        let clamp = |start: i32, end: i32| YearRange::new(start, end).clamp_to(bounds);

        let world = clamp(previous.world_start, previous.world_end);
        controls.world_start = world.start();
        controls.world_end = world.end();

        let single = clamp(previous.country_start, previous.country_end);
        controls.country_start = single.start();
        controls.country_end = single.end();

        let comparison = clamp(previous.comparison_start, previous.comparison_end);
        controls.comparison_start = comparison.start();
        controls.comparison_end = comparison.end();

        if dataset.contains_country(&previous.country) {
            controls.country = previous.country.clone();
        }
        let kept: BTreeSet<String> = previous
            .comparison
            .iter()
            .filter(|c| dataset.contains_country(c))
            .cloned()
            .collect();
        if !kept.is_empty() {
            controls.comparison = kept;
        }

        controls.year = previous.year.clamp(bounds.start(), bounds.end());
        controls.country_query = previous.country_query.clone();
        controls
    }

    /// Filter parameters for the active mode
    pub fn params(&self) -> FilterParams {
        match self.mode {
            Mode::Worldview => FilterParams::Worldview {
                year_range: YearRange::new(self.world_start, self.world_end),
            },
            Mode::SingleCountry => FilterParams::SingleCountry {
                country: self.country.clone(),
                year_range: YearRange::new(self.country_start, self.country_end),
            },
            Mode::MultipleCountry => FilterParams::MultipleCountry {
                countries: self.comparison.clone(),
                year_range: YearRange::new(self.comparison_start, self.comparison_end),
            },
            Mode::YearView => FilterParams::YearView { year: self.year },
        }
    }

    /// Add or remove a country from the comparison set
    pub fn toggle_comparison(&mut self, country: &str) {
        if !self.comparison.remove(country) {
            self.comparison.insert(country.to_string());
        }
    }
}

/// Move whichever end of a year range is closer to `year` onto it
///
/// Ties move the start.
pub fn move_nearest_endpoint(start: &mut i32, end: &mut i32, year: i32) {
    if start.abs_diff(year) <= end.abs_diff(year) {
        *start = year;
    } else {
        *end = year;
    }
}

/// Countries whose name contains `query`, ignoring case
pub fn matching_countries<'a>(countries: &'a [String], query: &str) -> Vec<&'a String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return countries.iter().collect();
    }
    countries
        .iter()
        .filter(|c| c.to_lowercase().contains(&query))
        .collect()
}

/// Actions that any panel can emit
///
/// Panels return `Vec<AppAction>` instead of mutating application state
/// directly; the app handles them after the frame's widgets are drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Switch the active mode
    SelectMode(Mode),
    /// Load a dataset from disk
    OpenDataset(PathBuf),
    /// Reset every mode's widgets to the defaults
    ResetFilters,
    /// Flip between light and dark visuals
    ToggleDarkMode,
    /// Show or hide the landing card
    ToggleWelcome,
    /// Dismiss the status bar error
    ClearError,
}
