//! Test data builders for creating test objects

use co2_dashboard::{Dataset, EmissionRecord};

/// Builder for creating test Datasets
#[derive(Default)]
pub struct DatasetBuilder {
    records: Vec<EmissionRecord>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one (country, year, value) row
    pub fn row(mut self, country: &str, year: i32, co2_per_capita: f64) -> Self {
        self.records
            .push(EmissionRecord::new(country, year, co2_per_capita));
        self
    }

    /// Add one row per year in `years` for `country`, values rising by `step`
    pub fn series(
        mut self,
        country: &str,
        years: std::ops::RangeInclusive<i32>,
        start: f64,
        step: f64,
    ) -> Self {
        for (i, year) in years.enumerate() {
            self.records
                .push(EmissionRecord::new(country, year, start + step * i as f64));
        }
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::from_records(self.records)
    }

    /// The rows as CSV text, header included
    pub fn to_csv(&self) -> String {
        let mut out = String::from(super::CSV_HEADER);
        out.push('\n');
        for r in &self.records {
            out.push_str(&format!("{},{},{}\n", r.country, r.year, r.co2_per_capita));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_builder() {
        let ds = DatasetBuilder::new()
            .row("USA", 2000, 20.1)
            .series("China", 2000..=2002, 2.0, 0.5)
            .build();

        assert_eq!(ds.len(), 4);
        assert_eq!(ds.countries(), &["USA".to_string(), "China".to_string()]);
    }
}
