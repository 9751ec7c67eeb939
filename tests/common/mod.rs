//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use std::io::Write;
use std::path::PathBuf;

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Header row of the dataset CSV
pub const CSV_HEADER: &str = "country,year,co2_per_capita";

/// Write `body` to `name` inside `dir` and return the path
pub fn write_file(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create test file");
    file.write_all(body.as_bytes()).expect("write test file");
    path
}

/// The three-row dataset used throughout the filter examples
pub fn sample_rows() -> Vec<(&'static str, i32, f64)> {
    vec![("USA", 2000, 20.1), ("USA", 2010, 17.5), ("China", 2010, 6.2)]
}
