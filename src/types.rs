//! Core data types for the CO2 dashboard
//!
//! This module contains the fundamental types used throughout the crate:
//!
//! - [`EmissionRecord`] - One (country, year, co2_per_capita) row
//! - [`YearRange`] - Inclusive, always-ordered span of years
//! - [`Field`] - Dataset column a chart axis or color grouping binds to

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single row of the emissions dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    /// Country name as it appears in the source
    pub country: String,
    /// Calendar year of the measurement
    pub year: i32,
    /// Emissions per person for this country-year
    pub co2_per_capita: f64,
}

impl EmissionRecord {
    /// Create a new record
    pub fn new(country: impl Into<String>, year: i32, co2_per_capita: f64) -> Self {
        Self {
            country: country.into(),
            year,
            co2_per_capita,
        }
    }
}

/// An inclusive range of years
///
/// Reversed bounds are swapped on construction so `start <= end` always holds.
/// Serialized as a `[start, end]` pair, normalised again on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Create a range from two bounds in either order
    pub fn new(a: i32, b: i32) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            tracing::debug!("Swapping reversed year range [{}, {}]", a, b);
            Self { start: b, end: a }
        }
    }

    /// Range covering a single year
    pub fn single(year: i32) -> Self {
        Self {
            start: year,
            end: year,
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Check whether a year falls inside the range (inclusive on both ends)
    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Number of years covered
    pub fn span(&self) -> u32 {
        self.start.abs_diff(self.end) + 1
    }

    /// Intersect with `bounds`
    ///
    /// A range lying entirely outside `bounds` collapses to the nearest edge,
    /// so the result is always a valid range within `bounds`.
    pub fn clamp_to(&self, bounds: YearRange) -> YearRange {
        let start = self.start.clamp(bounds.start, bounds.end);
        let end = self.end.clamp(bounds.start, bounds.end);
        YearRange::new(start, end)
    }

    /// Widen this range to also cover `year`
    pub fn extend(&mut self, year: i32) {
        self.start = self.start.min(year);
        self.end = self.end.max(year);
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((a, b): (i32, i32)) -> Self {
        YearRange::new(a, b)
    }
}

impl From<YearRange> for (i32, i32) {
    fn from(range: YearRange) -> Self {
        (range.start, range.end)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A dataset column that charts can bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Country,
    Year,
    Co2PerCapita,
}

impl Field {
    /// Column name in the source dataset
    pub fn column(&self) -> &'static str {
        match self {
            Field::Country => "country",
            Field::Year => "year",
            Field::Co2PerCapita => "co2_per_capita",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
