//! Error handling for the CO2 dashboard
//!
//! This module defines the crate error type and a Result alias. Filtering
//! itself never fails: unknown modes resolve to a sentinel and empty
//! selections produce empty subsets. Errors only arise while loading the
//! dataset or reading/writing configuration.

use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors raised by the CSV reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset header lacks a required column
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A data row could not be parsed
    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<DashboardError>,
    },
}

impl DashboardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        DashboardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<DashboardError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::MissingColumn("co2_per_capita");
        assert_eq!(
            err.to_string(),
            "Dataset is missing required column 'co2_per_capita'"
        );
    }

    #[test]
    fn test_invalid_record_display() {
        let err = DashboardError::InvalidRecord {
            line: 7,
            message: "year 'abc' is not an integer".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_error_with_context() {
        let err = DashboardError::Config("bad value".to_string());
        let with_ctx = err.with_context("Failed to load settings");
        assert!(with_ctx.to_string().contains("Failed to load settings"));
        assert!(with_ctx.to_string().contains("bad value"));
    }

    #[test]
    fn test_result_ext_on_io_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = res.context("Opening dataset").unwrap_err();
        assert!(err.to_string().starts_with("Opening dataset"));
    }
}
