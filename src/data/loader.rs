//! CSV loader for the emissions dataset
//!
//! Columns are located by header name, so their order does not matter and
//! extra columns are ignored. A row whose `co2_per_capita` cell is empty or a
//! missing-value marker such as `NA` or `NaN` is skipped; any other
//! unparseable cell fails the load with the offending line number.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};

use super::Dataset;
use crate::error::{DashboardError, Result, ResultExt};
use crate::types::{EmissionRecord, Field};

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [Field; 3] = [Field::Country, Field::Year, Field::Co2PerCapita];

/// Cell texts read as a missing measurement
pub const MISSING_MARKERS: [&str; 10] = [
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None",
];

/// Summary of a dataset load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Data rows read from the source (excluding the header)
    pub rows_read: usize,
    /// Rows skipped because the measurement was missing
    pub skipped_missing: usize,
    /// (country, year) keys seen more than once
    pub duplicate_keys: usize,
    /// When the load finished
    pub loaded_at: DateTime<Utc>,
}

/// Load a dataset from a CSV file on disk
pub fn load_csv(path: impl AsRef<Path>) -> Result<(Dataset, LoadReport)> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open dataset {:?}", path))?;
    let (dataset, report) =
        read_csv(file).with_context(|| format!("Failed to read dataset {:?}", path))?;

    tracing::info!(
        "Loaded {} records ({} countries) from {:?}",
        dataset.len(),
        dataset.countries().len(),
        path
    );
    Ok((dataset, report))
}

/// Read a dataset from any CSV source
pub fn read_csv<R: Read>(source: R) -> Result<(Dataset, LoadReport)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    let mut rows_read = 0;
    let mut skipped_missing = 0;

    for row in reader.records() {
        let row = row?;
        rows_read += 1;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        match columns.parse_row(&row, line)? {
            Some(record) => records.push(record),
            None => {
                skipped_missing += 1;
                tracing::trace!("Skipping line {}: missing co2_per_capita", line);
            }
        }
    }

    let dataset = Dataset::from_records(records);
    let duplicate_keys = dataset.duplicate_keys();
    if duplicate_keys > 0 {
        tracing::warn!(
            "Dataset contains {} duplicate (country, year) rows",
            duplicate_keys
        );
    }
    if skipped_missing > 0 {
        tracing::debug!("Skipped {} rows with no measurement", skipped_missing);
    }

    let report = LoadReport {
        rows_read,
        skipped_missing,
        duplicate_keys,
        loaded_at: Utc::now(),
    };
    Ok((dataset, report))
}

/// Positions of the required columns within a header row
struct ColumnIndex {
    country: usize,
    year: usize,
    co2_per_capita: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |field: Field| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(field.column()))
                .ok_or(DashboardError::MissingColumn(field.column()))
        };

        Ok(Self {
            country: find(Field::Country)?,
            year: find(Field::Year)?,
            co2_per_capita: find(Field::Co2PerCapita)?,
        })
    }

    fn parse_row(&self, row: &StringRecord, line: u64) -> Result<Option<EmissionRecord>> {
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let value = cell(self.co2_per_capita);
        if is_missing(value) {
            return Ok(None);
        }

        let country = cell(self.country);
        if country.is_empty() {
            return Err(DashboardError::InvalidRecord {
                line,
                message: "country is empty".to_string(),
            });
        }

        let year = parse_year(cell(self.year)).ok_or_else(|| DashboardError::InvalidRecord {
            line,
            message: format!("year '{}' is not an integer", cell(self.year)),
        })?;

        let co2_per_capita = value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DashboardError::InvalidRecord {
                line,
                message: format!("co2_per_capita '{}' is not a number", value),
            })?;

        Ok(Some(EmissionRecord::new(country, year, co2_per_capita)))
    }
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || MISSING_MARKERS.contains(&cell)
}

/// Parse a year cell, accepting integral floats such as `1990.0`
fn parse_year(cell: &str) -> Option<i32> {
    if let Ok(year) = cell.parse::<i32>() {
        return Some(year);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_basic_csv() {
        let csv = "country,year,co2_per_capita\nUSA,2000,20.1\nUSA,2010,17.5\nChina,2010,6.2\n";
        let (ds, report) = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(report.rows_read, 3);
        assert_eq!(report.skipped_missing, 0);
        assert_eq!(ds.records()[2], EmissionRecord::new("China", 2010, 6.2));
    }

    #[test]
    fn test_columns_in_any_order_with_extras() {
        let csv = "year,iso_code,co2_per_capita,country\n1990,FRA,6.9,France\n";
        let (ds, _) = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records()[0], EmissionRecord::new("France", 1990, 6.9));
    }

    #[test]
    fn test_missing_measurement_is_skipped() {
        let csv = "country,year,co2_per_capita\nUSA,2000,\nUSA,2001,19.8\n";
        let (ds, report) = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(report.rows_read, 2);
        assert_eq!(report.skipped_missing, 1);
    }

    #[test]
    fn test_missing_value_markers_are_skipped() {
        let csv = "country,year,co2_per_capita\n\
                   USA,2000,NaN\n\
                   USA,2001,nan\n\
                   USA,2002,NA\n\
                   USA,2003, N/A \n\
                   USA,2004,19.8\n";
        let (ds, report) = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records()[0].year, 2004);
        assert_eq!(report.rows_read, 5);
        assert_eq!(report.skipped_missing, 4);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "country,year\nUSA,2000\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn("co2_per_capita")));
    }

    #[test]
    fn test_bad_year_reports_line() {
        let csv = "country,year,co2_per_capita\nUSA,2000,20.1\nUSA,twenty,17.5\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        match err {
            DashboardError::InvalidRecord { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("twenty"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let csv = "country,year,co2_per_capita\nUSA,2000,lots\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_year_accepts_integral_floats() {
        assert_eq!(parse_year("1990"), Some(1990));
        assert_eq!(parse_year("1990.0"), Some(1990));
        assert_eq!(parse_year("1990.5"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_duplicates_are_counted_not_dropped() {
        let csv = "country,year,co2_per_capita\nUSA,2000,20.1\nUSA,2000,20.2\n";
        let (ds, report) = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(report.duplicate_keys, 1);
    }
}
