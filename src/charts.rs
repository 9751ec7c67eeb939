//! Chart selection
//!
//! Fixed per-mode mapping from a filter pass to the charts that visualise it.
//! A [`ChartSpec`] names the chart kind, the columns it binds and its titles;
//! it says nothing about how a particular plotting library draws it.
//!
//! | Mode | Charts |
//! |------|--------|
//! | Worldview | line (year, co2, by country), histogram (co2, 50 bins) |
//! | Single country | line (year, co2), box (co2) |
//! | Multiple country | line (year, co2, by country), violin (co2, by country, with box) |
//! | Year view | bar (country, co2) |

use serde::{Deserialize, Serialize};

use crate::filter::{FilterParams, FilteredSubset};
use crate::types::Field;

/// Bin count for the worldview histogram
pub const HISTOGRAM_BINS: usize = 50;

/// Kind of chart to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Histogram,
    Box,
    Violin,
    Bar,
}

impl ChartKind {
    /// Heading used on the chart's description card
    pub fn card_title(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line Graph Description",
            ChartKind::Histogram => "Histogram Description",
            ChartKind::Box => "Box Plot Description",
            ChartKind::Violin => "Violin Graph Description",
            ChartKind::Bar => "Bar Graph Description",
        }
    }
}

/// Library-independent description of one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_field: Option<Field>,
    pub y_field: Option<Field>,
    /// Column whose values split the data into colored series
    pub color_field: Option<Field>,
    pub title: String,
    pub x_axis_title: Option<&'static str>,
    pub y_axis_title: Option<&'static str>,
    /// Histogram bin count
    pub bins: Option<usize>,
    /// Draw a box summary inside each violin
    pub show_box: bool,
    /// Explanatory text shown next to the chart
    pub description: &'static str,
    /// The filtered subset was empty; render an empty chart with a notice
    pub is_placeholder: bool,
}

impl ChartSpec {
    fn new(kind: ChartKind, title: impl Into<String>, description: &'static str) -> Self {
        Self {
            kind,
            x_field: None,
            y_field: None,
            color_field: None,
            title: title.into(),
            x_axis_title: None,
            y_axis_title: None,
            bins: None,
            show_box: false,
            description,
            is_placeholder: false,
        }
    }

    fn x(mut self, field: Field, axis_title: &'static str) -> Self {
        self.x_field = Some(field);
        self.x_axis_title = Some(axis_title);
        self
    }

    fn y(mut self, field: Field, axis_title: &'static str) -> Self {
        self.y_field = Some(field);
        self.y_axis_title = Some(axis_title);
        self
    }

    fn color(mut self, field: Field) -> Self {
        self.color_field = Some(field);
        self
    }
}

/// Build the chart list for one filter pass
pub fn select_charts(params: &FilterParams, subset: &FilteredSubset<'_>) -> Vec<ChartSpec> {
    let mut charts = match params {
        FilterParams::Worldview { .. } => vec![
            ChartSpec::new(
                ChartKind::Line,
                "Global CO2 Emissions Per Capita Over Time",
                "The line graph in the Worldview mode shows the trend of CO2 emissions per \
                 capita across time. You can use the year range slider to adjust the time \
                 frame and observe how emissions have changed globally.",
            )
            .x(Field::Year, "Year")
            .y(Field::Co2PerCapita, "CO2 Per Capita")
            .color(Field::Country),
            {
                let mut hist = ChartSpec::new(
                    ChartKind::Histogram,
                    "Distribution of Global CO2 Emissions Per Capita",
                    "The histogram displays the distribution of CO2 emissions per capita \
                     across all countries. It provides a visual representation of how \
                     emissions are spread over time and identifies high and low-emission \
                     countries.",
                )
                .x(Field::Co2PerCapita, "CO2 Per Capita");
                hist.y_axis_title = Some("Count");
                hist.bins = Some(HISTOGRAM_BINS);
                hist
            },
        ],
        FilterParams::SingleCountry { country, .. } => vec![
            ChartSpec::new(
                ChartKind::Line,
                format!("CO2 Emissions Per Capita in {}", country),
                "The line graph in the Single Country mode demonstrates CO2 emissions per \
                 capita for a specific country over time. You can select a country from the \
                 dropdown and adjust the year range slider to observe changes in emissions",
            )
            .x(Field::Year, "Year")
            .y(Field::Co2PerCapita, "CO2 Emissions Per Capita"),
            ChartSpec::new(
                ChartKind::Box,
                format!("Distribution of CO2 Emissions Per Capita in {}", country),
                "The box plot in the Single Country mode illustrates the distribution of CO2 \
                 emissions per capita within a chosen country. It helps identify trends and \
                 outliers in the emissions data.",
            )
            .y(Field::Co2PerCapita, "CO2 Emissions Per Capita"),
        ],
        FilterParams::MultipleCountry { .. } => vec![
            ChartSpec::new(
                ChartKind::Line,
                "CO2 Emissions Per Capita Over Time for Selected Countries",
                "The line graph in the Multiple Country mode displays CO2 emissions per \
                 capita trends for selected countries over a given time range. You can use \
                 the dropdown to select multiple countries for comparison",
            )
            .x(Field::Year, "Year")
            .y(Field::Co2PerCapita, "CO2 Per Capita")
            .color(Field::Country),
            {
                let mut violin = ChartSpec::new(
                    ChartKind::Violin,
                    "Distribution of CO2 Emissions Per Capita for Selected Countries",
                    "The violin plot shows the distribution of CO2 emissions per capita \
                     across multiple countries. It offers a visual comparison of emissions \
                     data, allowing you to identify variations among countries.",
                )
                .y(Field::Co2PerCapita, "CO2 Per Capita")
                .color(Field::Country);
                violin.show_box = true;
                violin
            },
        ],
        FilterParams::YearView { year } => vec![ChartSpec::new(
            ChartKind::Bar,
            format!("CO2 Emissions Per Capita in {}", year),
            "The bar graph in the Year View mode represents CO2 emissions per capita for a \
             specific year across different countries. This graph helps you see which \
             countries had the highest and lowest emissions in that year.",
        )
        .x(Field::Country, "Country")
        .y(Field::Co2PerCapita, "CO2 Per Capita")],
    };

    if subset.is_empty() {
        for chart in &mut charts {
            chart.is_placeholder = true;
        }
    }

    charts
}
