//! Figure building
//!
//! Turns a [`ChartSpec`] and the filtered subset it describes into drawable
//! series. The result is still independent of the plotting backend: the
//! frontend maps each [`Figure`] variant onto egui_plot items.

use super::stats::{density_outline, histogram, BoxSummary, HistogramBin, VIOLIN_RESOLUTION};
use crate::charts::{ChartKind, ChartSpec, HISTOGRAM_BINS};
use crate::filter::FilteredSubset;
use crate::types::{EmissionRecord, Field};

/// A named sequence of (x, y) points
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Group name for colored series, `None` for a single unnamed series
    pub name: Option<String>,
    pub points: Vec<[f64; 2]>,
}

/// A violin outline with its optional inner box
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinShape {
    pub name: Option<String>,
    /// `(value, density)` pairs, density normalised to a peak of 1
    pub outline: Vec<[f64; 2]>,
    pub summary: Option<BoxSummary>,
}

/// One labelled bar
#[derive(Debug, Clone, PartialEq)]
pub struct BarValue {
    pub label: String,
    pub value: f64,
}

/// Drawable data for one chart
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Lines(Vec<Series>),
    Histogram(Vec<HistogramBin>),
    Boxes(Vec<BoxSummary>),
    Violins(Vec<ViolinShape>),
    Bars(Vec<BarValue>),
    /// Nothing to draw; the renderer shows a placeholder
    Empty,
}

impl Figure {
    pub fn is_empty(&self) -> bool {
        match self {
            Figure::Lines(series) => series.iter().all(|s| s.points.is_empty()),
            Figure::Histogram(bins) => bins.is_empty(),
            Figure::Boxes(boxes) => boxes.is_empty(),
            Figure::Violins(violins) => violins.is_empty(),
            Figure::Bars(bars) => bars.is_empty(),
            Figure::Empty => true,
        }
    }
}

/// Numeric value of `field` for a record, `None` for the text column
fn numeric(record: &EmissionRecord, field: Field) -> Option<f64> {
    match field {
        Field::Year => Some(record.year as f64),
        Field::Co2PerCapita => Some(record.co2_per_capita),
        Field::Country => None,
    }
}

fn label(record: &EmissionRecord, field: Field) -> String {
    match field {
        Field::Country => record.country.clone(),
        Field::Year => record.year.to_string(),
        Field::Co2PerCapita => record.co2_per_capita.to_string(),
    }
}

/// Split the subset into named groups when the chart has a color field
fn groups<'a>(
    spec: &ChartSpec,
    subset: &FilteredSubset<'a>,
) -> Vec<(Option<String>, Vec<&'a EmissionRecord>)> {
    match spec.color_field {
        Some(Field::Country) => subset
            .group_by_country()
            .into_iter()
            .map(|(country, rows)| (Some(country.to_string()), rows))
            .collect(),
        Some(field) => {
            let mut out: Vec<(Option<String>, Vec<&'a EmissionRecord>)> = Vec::new();
            for record in subset.iter() {
                let key = label(record, field);
                match out.iter_mut().find(|(k, _)| k.as_deref() == Some(key.as_str())) {
                    Some((_, rows)) => rows.push(record),
                    None => out.push((Some(key), vec![record])),
                }
            }
            out
        }
        None => vec![(None, subset.iter().collect())],
    }
}

/// Build the drawable figure for `spec` over `subset`
pub fn build_figure(spec: &ChartSpec, subset: &FilteredSubset<'_>) -> Figure {
    if subset.is_empty() {
        return Figure::Empty;
    }

    let x_field = spec.x_field.unwrap_or(Field::Year);
    let y_field = spec.y_field.unwrap_or(Field::Co2PerCapita);

    match spec.kind {
        ChartKind::Line => {
            let series = groups(spec, subset)
                .into_iter()
                .map(|(name, rows)| {
                    let mut points: Vec<[f64; 2]> = rows
                        .iter()
                        .filter_map(|r| Some([numeric(r, x_field)?, numeric(r, y_field)?]))
                        .collect();
                    points.sort_by(|a, b| a[0].total_cmp(&b[0]));
                    Series { name, points }
                })
                .collect();
            Figure::Lines(series)
        }
        ChartKind::Histogram => {
            let field = spec.x_field.unwrap_or(Field::Co2PerCapita);
            let values: Vec<f64> = subset.iter().filter_map(|r| numeric(r, field)).collect();
            Figure::Histogram(histogram(&values, spec.bins.unwrap_or(HISTOGRAM_BINS)))
        }
        ChartKind::Box => {
            let boxes = groups(spec, subset)
                .into_iter()
                .filter_map(|(name, rows)| {
                    let values: Vec<f64> =
                        rows.iter().filter_map(|r| numeric(r, y_field)).collect();
                    BoxSummary::from_values(name, &values)
                })
                .collect();
            Figure::Boxes(boxes)
        }
        ChartKind::Violin => {
            let violins = groups(spec, subset)
                .into_iter()
                .map(|(name, rows)| {
                    let values: Vec<f64> =
                        rows.iter().filter_map(|r| numeric(r, y_field)).collect();
                    let summary = if spec.show_box {
                        BoxSummary::from_values(name.clone(), &values)
                    } else {
                        None
                    };
                    ViolinShape {
                        name,
                        outline: density_outline(&values, VIOLIN_RESOLUTION),
                        summary,
                    }
                })
                .collect();
            Figure::Violins(violins)
        }
        ChartKind::Bar => {
            let label_field = spec.x_field.unwrap_or(Field::Country);
            let bars = subset
                .iter()
                .filter_map(|r| {
                    Some(BarValue {
                        label: label(r, label_field),
                        value: numeric(r, y_field)?,
                    })
                })
                .collect();
            Figure::Bars(bars)
        }
    }
}
