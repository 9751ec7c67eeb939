//! Emissions dataset
//!
//! The dataset is loaded once at startup and never mutated afterwards. It is
//! shared with the rest of the application as an `Arc<Dataset>`, so filter
//! passes for concurrent views read it without locking.
//!
//! # Main Types
//!
//! - [`Dataset`] - Immutable table of [`EmissionRecord`]s in file order
//! - [`LoadReport`] - Summary of what the loader read, skipped and flagged

mod loader;

pub use loader::{load_csv, read_csv, LoadReport, REQUIRED_COLUMNS};

use crate::types::{EmissionRecord, YearRange};
use std::collections::HashSet;

/// Immutable table of emission records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<EmissionRecord>,
    countries: Vec<String>,
    year_bounds: Option<YearRange>,
}

impl Dataset {
    /// Build a dataset from records, keeping their order
    pub fn from_records(records: Vec<EmissionRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut countries = Vec::new();
        let mut year_bounds: Option<YearRange> = None;

        for record in &records {
            if seen.insert(record.country.as_str()) {
                countries.push(record.country.clone());
            }
            match year_bounds.as_mut() {
                Some(bounds) => bounds.extend(record.year),
                None => year_bounds = Some(YearRange::single(record.year)),
            }
        }

        Self {
            records,
            countries,
            year_bounds,
        }
    }

    /// An empty dataset, used when loading fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records in source order
    pub fn records(&self) -> &[EmissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed minimum and maximum year, `None` for an empty dataset
    pub fn year_bounds(&self) -> Option<YearRange> {
        self.year_bounds
    }

    /// Distinct countries in order of first appearance
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    /// Count of (country, year) keys that occur more than once
    pub fn duplicate_keys(&self) -> usize {
        let mut seen = HashSet::with_capacity(self.records.len());
        self.records
            .iter()
            .filter(|r| !seen.insert((r.country.as_str(), r.year)))
            .count()
    }
}

impl FromIterator<EmissionRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = EmissionRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            EmissionRecord::new("USA", 2000, 20.1),
            EmissionRecord::new("USA", 2010, 17.5),
            EmissionRecord::new("China", 2010, 6.2),
        ])
    }

    #[test]
    fn test_dataset_metadata() {
        let ds = sample();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.countries(), ["USA".to_string(), "China".to_string()]);
        assert_eq!(ds.year_bounds(), Some(YearRange::new(2000, 2010)));
        assert!(ds.contains_country("China"));
        assert!(!ds.contains_country("France"));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::empty();
        assert!(ds.is_empty());
        assert!(ds.year_bounds().is_none());
        assert!(ds.countries().is_empty());
    }

    #[test]
    fn test_duplicate_keys() {
        let ds: Dataset = vec![
            EmissionRecord::new("USA", 2000, 20.1),
            EmissionRecord::new("USA", 2000, 20.3),
            EmissionRecord::new("USA", 2001, 19.9),
        ]
        .into_iter()
        .collect();
        assert_eq!(ds.duplicate_keys(), 1);
        assert_eq!(sample().duplicate_keys(), 0);
    }
}
