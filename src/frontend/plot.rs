//! Plot rendering module using egui_plot
//!
//! Maps each [`Figure`] variant onto egui_plot items: line series, bar
//! charts for histograms and per-country bars, box plots, and violin
//! outlines drawn as filled polygons.
//!
//! # Main Types
//!
//! - [`ChartView`] - Plot appearance and rendering of one chart panel
//! - [`ColorPalette`] - Distinct colors for country series

use egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Corner, Legend, Line, Plot, PlotPoints, PlotUi,
    Points, Polygon,
};

use crate::analysis::{BarValue, BoxSummary, Figure, HistogramBin, Series, ViolinShape};
use crate::config::PlotSettings;
use crate::dashboard::ChartPanel;

/// Legends with more entries than this are hidden
pub const MAX_LEGEND_ENTRIES: usize = 12;

/// Half the horizontal extent of a violin or box around its category slot
const CATEGORY_HALF_WIDTH: f64 = 0.4;

/// Shown in place of a chart whose subset is empty
pub const NO_DATA_NOTICE: &str = "No data for the current selection";

/// Color generation for multiple series
pub struct ColorPalette;

impl ColorPalette {
    const COLORS: [Color32; 10] = [
        Color32::from_rgb(31, 119, 180),
        Color32::from_rgb(255, 127, 14),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(140, 86, 75),
        Color32::from_rgb(227, 119, 194),
        Color32::from_rgb(127, 127, 127),
        Color32::from_rgb(188, 189, 34),
        Color32::from_rgb(23, 190, 207),
    ];

    /// Color for the series at `index`, cycling through the palette
    pub fn color(index: usize) -> Color32 {
        Self::COLORS[index % Self::COLORS.len()]
    }

    /// Translucent variant for filled areas
    pub fn fill(index: usize) -> Color32 {
        Self::color(index).gamma_multiply(0.35)
    }
}

/// Label for a category axis mark; blank between categories
pub fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Closed outline of a violin centred on `center`
///
/// `outline` holds `(value, density)` pairs with the peak density at 1. The
/// right half goes up the value axis and the mirrored left half comes back.
pub fn violin_polygon(center: f64, outline: &[[f64; 2]], half_width: f64) -> Vec<[f64; 2]> {
    let right = outline
        .iter()
        .map(|[value, density]| [center + density * half_width, *value]);
    let left = outline
        .iter()
        .rev()
        .map(|[value, density]| [center - density * half_width, *value]);
    right.chain(left).collect()
}

/// Plot appearance for chart panels
#[derive(Debug, Clone)]
pub struct ChartView {
    pub show_legend: bool,
    pub show_grid: bool,
    pub line_width: f32,
    pub height: f32,
}

impl Default for ChartView {
    fn default() -> Self {
        Self::from_settings(&PlotSettings::default())
    }
}

impl ChartView {
    /// Create a ChartView from the settings file
    pub fn from_settings(settings: &PlotSettings) -> Self {
        Self {
            show_legend: settings.show_legend,
            show_grid: settings.show_grid,
            line_width: settings.line_width,
            height: settings.chart_height,
        }
    }

    /// Render one chart panel; `id` keeps plot memory apart between panels
    pub fn render(&self, ui: &mut Ui, id: &str, panel: &ChartPanel) {
        ui.label(RichText::new(&panel.spec.title).heading());

        if panel.spec.is_placeholder || panel.figure.is_empty() {
            ui.colored_label(Color32::GRAY, NO_DATA_NOTICE);
        }

        let mut plot = Plot::new(id)
            .height(self.height)
            .show_grid(self.show_grid)
            .allow_scroll(false);

        if let Some(title) = panel.spec.x_axis_title {
            plot = plot.x_axis_label(title);
        }
        if let Some(title) = panel.spec.y_axis_title {
            plot = plot.y_axis_label(title);
        }

        let entries = legend_entries(&panel.figure);
        if self.show_legend && (2..=MAX_LEGEND_ENTRIES).contains(&entries) {
            plot = plot.legend(
                Legend::default()
                    .position(Corner::RightTop)
                    .background_alpha(0.8),
            );
        }

        let categories = category_labels(&panel.figure);
        if !categories.is_empty() {
            plot = plot
                .x_axis_formatter(move |mark, _range| category_label(&categories, mark.value));
        }

        plot.show(ui, |plot_ui| match &panel.figure {
            Figure::Lines(series) => self.render_lines(plot_ui, series),
            Figure::Histogram(bins) => render_histogram(plot_ui, bins),
            Figure::Boxes(boxes) => render_boxes(plot_ui, boxes),
            Figure::Violins(violins) => self.render_violins(plot_ui, violins),
            Figure::Bars(bars) => render_bars(plot_ui, bars),
            Figure::Empty => {}
        });
    }

    fn render_lines(&self, plot_ui: &mut PlotUi, series: &[Series]) {
        for (index, s) in series.iter().enumerate() {
            if s.points.is_empty() {
                continue;
            }
            let name = s.name.clone().unwrap_or_else(|| "CO2 Per Capita".to_string());
            let line = Line::new(name, PlotPoints::from(s.points.clone()))
                .color(ColorPalette::color(index))
                .width(self.line_width);
            plot_ui.line(line);
        }
    }

    fn render_violins(&self, plot_ui: &mut PlotUi, violins: &[ViolinShape]) {
        for (index, violin) in violins.iter().enumerate() {
            let center = index as f64;
            let name = violin.name.clone().unwrap_or_default();
            let outline = violin_polygon(center, &violin.outline, CATEGORY_HALF_WIDTH);

            plot_ui.polygon(
                Polygon::new(name.clone(), PlotPoints::from(outline))
                    .fill_color(ColorPalette::fill(index))
                    .stroke(Stroke::new(self.line_width, ColorPalette::color(index))),
            );

            if let Some(summary) = &violin.summary {
                let inner = box_elem(center, summary, CATEGORY_HALF_WIDTH * 0.25)
                    .fill(ColorPalette::color(index).gamma_multiply(0.6))
                    .stroke(Stroke::new(1.0, ColorPalette::color(index)));
                plot_ui.box_plot(BoxPlot::new(name, vec![inner]));
            }
        }
    }
}

fn legend_entries(figure: &Figure) -> usize {
    match figure {
        Figure::Lines(series) => series.iter().filter(|s| s.name.is_some()).count(),
        Figure::Violins(violins) => violins.len(),
        _ => 0,
    }
}

/// Category names for figures whose x axis is categorical
fn category_labels(figure: &Figure) -> Vec<String> {
    match figure {
        Figure::Boxes(boxes) => boxes
            .iter()
            .map(|b| b.name.clone().unwrap_or_default())
            .collect(),
        Figure::Violins(violins) => violins
            .iter()
            .map(|v| v.name.clone().unwrap_or_default())
            .collect(),
        Figure::Bars(bars) => bars.iter().map(|b| b.label.clone()).collect(),
        _ => Vec::new(),
    }
}

fn box_elem(center: f64, summary: &BoxSummary, half_width: f64) -> BoxElem {
    let mut elem = BoxElem::new(
        center,
        BoxSpread::new(
            summary.lower_whisker,
            summary.q1,
            summary.median,
            summary.q3,
            summary.upper_whisker,
        ),
    )
    .box_width(half_width * 2.0)
    .whisker_width(half_width);
    if let Some(name) = &summary.name {
        elem = elem.name(name);
    }
    elem
}

fn render_histogram(plot_ui: &mut PlotUi, bins: &[HistogramBin]) {
    let bars = bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .name(format!("{:.2} - {:.2}", bin.start, bin.end))
        })
        .collect();
    plot_ui.bar_chart(BarChart::new("Count", bars).color(ColorPalette::color(0)));
}

fn render_boxes(plot_ui: &mut PlotUi, boxes: &[BoxSummary]) {
    for (index, summary) in boxes.iter().enumerate() {
        let center = index as f64;
        let name = summary.name.clone().unwrap_or_else(|| "CO2 Per Capita".to_string());
        let elem = box_elem(center, summary, CATEGORY_HALF_WIDTH * 0.5)
            .fill(ColorPalette::fill(index))
            .stroke(Stroke::new(1.5, ColorPalette::color(index)));
        plot_ui.box_plot(BoxPlot::new(name.clone(), vec![elem]));

        if !summary.outliers.is_empty() {
            let points: Vec<[f64; 2]> = summary.outliers.iter().map(|v| [center, *v]).collect();
            plot_ui.points(
                Points::new(format!("{} outliers", name), PlotPoints::from(points))
                    .radius(2.5)
                    .color(ColorPalette::color(index)),
            );
        }
    }
}

fn render_bars(plot_ui: &mut PlotUi, bars: &[BarValue]) {
    let bars = bars
        .iter()
        .enumerate()
        .map(|(index, bar)| Bar::new(index as f64, bar.value).width(0.8).name(&bar.label))
        .collect();
    plot_ui.bar_chart(BarChart::new("CO2 Per Capita", bars).color(ColorPalette::color(0)));
}
