//! Dashboard view computation
//!
//! [`Dashboard::view`] is the single pure step the frontend runs whenever a
//! filter input changes: filter the dataset, select the mode's charts and
//! build their figures. The dataset is injected as an `Arc` and only read.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::{build_figure, Figure};
use crate::charts::{select_charts, ChartSpec};
use crate::data::Dataset;
use crate::filter::{filter, FilterParams};
use crate::modes::{current_mode_banner, Mode};
use crate::types::YearRange;

/// Country preselected in the single-country view
pub const DEFAULT_COUNTRY: &str = "USA";

/// Countries preselected in the multiple-country view
pub const DEFAULT_COMPARISON: [&str; 2] = ["USA", "China"];

/// Spacing of the year slider marks
pub const YEAR_TICK_STEP: i32 = 10;

/// Landing text shown above the mode selector
pub const WELCOME_TITLE: &str = "Welcome to the CO2 Emissions Per Capita Dashboard!";

pub const WELCOME_TEXT: &str = "Welcome to the CO2 Emissions Per Capita Dashboard. This \
    platform helps you explore carbon dioxide emissions from different countries over time, \
    providing insights into trends, distributions, and comparisons on a global scale. Through \
    interactive graphs, you can visualize how CO2 emissions per capita have changed across \
    various regions, offering a unique perspective on our planet's environmental challenges. \
    But this dashboard is more than just a collection of data, it's a call to action. As you \
    explore the information, consider the broader impact of carbon emissions on climate change \
    and what it means for future generations. This is your chance to understand the urgency of \
    reducing emissions and inspire others to take action. Whether through individual choices or \
    political advocacy, every effort counts in the fight against climate change. Use this \
    dashboard as a catalyst for change, both in your life and in your community, to help build \
    a more sustainable world.";

/// Title and body of the landing card
pub fn welcome_text() -> (&'static str, &'static str) {
    (WELCOME_TITLE, WELCOME_TEXT)
}

/// One chart ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub spec: ChartSpec,
    pub figure: Figure,
}

/// Everything the frontend renders for one set of parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub mode: Mode,
    pub banner: String,
    pub description: &'static str,
    /// Size of the filtered subset the charts were built from
    pub row_count: usize,
    pub charts: Vec<ChartPanel>,
}

/// Preferences used to seed each mode's parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultSelection {
    pub country: String,
    pub comparison: Vec<String>,
}

impl Default for DefaultSelection {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            comparison: DEFAULT_COMPARISON.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Read-only dashboard over a loaded dataset
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    defaults: DefaultSelection,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            defaults: DefaultSelection::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: DefaultSelection) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Observed year bounds, or year 0 alone for an empty dataset
    pub fn year_bounds(&self) -> YearRange {
        self.dataset
            .year_bounds()
            .unwrap_or_else(|| YearRange::single(0))
    }

    /// Initial parameters for a mode, mirroring the selector widgets' defaults
    pub fn default_params(&self, mode: Mode) -> FilterParams {
        let year_range = self.year_bounds();
        match mode {
            Mode::Worldview => FilterParams::Worldview { year_range },
            Mode::SingleCountry => FilterParams::SingleCountry {
                country: self.default_country(),
                year_range,
            },
            Mode::MultipleCountry => FilterParams::MultipleCountry {
                countries: self.default_comparison(),
                year_range,
            },
            Mode::YearView => FilterParams::YearView {
                year: year_range.end(),
            },
        }
    }

    fn default_country(&self) -> String {
        if self.dataset.contains_country(&self.defaults.country) {
            self.defaults.country.clone()
        } else {
            self.dataset
                .countries()
                .first()
                .cloned()
                .unwrap_or_else(|| self.defaults.country.clone())
        }
    }

    fn default_comparison(&self) -> BTreeSet<String> {
        let present: BTreeSet<String> = self
            .defaults
            .comparison
            .iter()
            .filter(|c| self.dataset.contains_country(c))
            .cloned()
            .collect();

        if !present.is_empty() {
            return present;
        }
        self.dataset.countries().iter().take(1).cloned().collect()
    }

    /// Compute the full view for `params`
    pub fn view(&self, params: &FilterParams) -> DashboardView {
        let mode = params.mode();
        let subset = filter(&self.dataset, params);
        let charts = select_charts(params, &subset)
            .into_iter()
            .map(|spec| {
                let figure = build_figure(&spec, &subset);
                ChartPanel { spec, figure }
            })
            .collect();

        tracing::debug!(
            "Computed {} view over {} rows",
            mode.id(),
            subset.len()
        );

        DashboardView {
            mode,
            banner: current_mode_banner(mode.id()),
            description: mode.description(),
            row_count: subset.len(),
            charts,
        }
    }

    /// Years at which the year sliders show a mark
    pub fn year_ticks(&self, step: i32) -> Vec<i32> {
        let Some(bounds) = self.dataset.year_bounds() else {
            return Vec::new();
        };
        let step = step.max(1) as usize;
        (bounds.start()..=bounds.end()).step_by(step).collect()
    }
}
