//! Filter engine
//!
//! Maps a mode's parameters and the dataset to the subset of rows its charts
//! are built from. Filtering is a pure function of its inputs: it has no side
//! effects, preserves dataset order and returns an empty subset, never an
//! error, when nothing matches.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::Dataset;
use crate::modes::Mode;
use crate::types::{EmissionRecord, YearRange};

/// Parameters for one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FilterParams {
    Worldview {
        year_range: YearRange,
    },
    SingleCountry {
        country: String,
        year_range: YearRange,
    },
    MultipleCountry {
        countries: BTreeSet<String>,
        year_range: YearRange,
    },
    YearView {
        year: i32,
    },
}

impl FilterParams {
    /// The mode these parameters belong to
    pub fn mode(&self) -> Mode {
        match self {
            FilterParams::Worldview { .. } => Mode::Worldview,
            FilterParams::SingleCountry { .. } => Mode::SingleCountry,
            FilterParams::MultipleCountry { .. } => Mode::MultipleCountry,
            FilterParams::YearView { .. } => Mode::YearView,
        }
    }

    /// Check whether a record passes these parameters
    pub fn matches(&self, record: &EmissionRecord) -> bool {
        match self {
            FilterParams::Worldview { year_range } => year_range.contains(record.year),
            FilterParams::SingleCountry {
                country,
                year_range,
            } => record.country == *country && year_range.contains(record.year),
            FilterParams::MultipleCountry {
                countries,
                year_range,
            } => countries.contains(&record.country) && year_range.contains(record.year),
            FilterParams::YearView { year } => record.year == *year,
        }
    }
}

/// Rows selected by a filter pass, in dataset order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSubset<'a> {
    records: Vec<&'a EmissionRecord>,
}

impl<'a> FilteredSubset<'a> {
    pub fn records(&self) -> &[&'a EmissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a EmissionRecord> + '_ {
        self.records.iter().copied()
    }

    /// Records grouped by country, groups in order of first appearance
    pub fn group_by_country(&self) -> Vec<(&'a str, Vec<&'a EmissionRecord>)> {
        let mut groups: Vec<(&'a str, Vec<&'a EmissionRecord>)> = Vec::new();
        for record in self.iter() {
            match groups.iter_mut().find(|(c, _)| *c == record.country) {
                Some((_, rows)) => rows.push(record),
                None => groups.push((record.country.as_str(), vec![record])),
            }
        }
        groups
    }
}

/// Select the rows of `dataset` that satisfy `params`
pub fn filter<'a>(dataset: &'a Dataset, params: &FilterParams) -> FilteredSubset<'a> {
    let records: Vec<&EmissionRecord> = dataset
        .records()
        .iter()
        .filter(|record| params.matches(record))
        .collect();

    tracing::trace!(
        "Filter {:?} selected {} of {} records",
        params.mode(),
        records.len(),
        dataset.len()
    );

    FilteredSubset { records }
}
