//! Analysis module for chart data
//!
//! This module derives what the plotting layer draws:
//! - Histogram bins, box summaries and density outlines (`stats`)
//! - Per-chart drawable figures from a chart spec and a filtered subset (`figure`)

pub mod figure;
pub mod stats;

pub use figure::{build_figure, BarValue, Figure, Series, ViolinShape};
pub use stats::{BoxSummary, HistogramBin};
