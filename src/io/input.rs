//! Boundary parsing of sampling inputs.
//!
//! Inputs arrive either as raw text (command-line fields) or as a JSON record:
//!
//! ```json
//! { "A": 0.0, "B": 3.0, "C": 30 }
//! ```
//!
//! Both paths end in a validated `SampleSpec`. Non-numeric, NaN and infinite
//! values are rejected here so they never reach the solver.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::domain::SampleSpec;
use crate::error::{AppError, FitError, Result};

/// A value in the input record: JSON number or numeric text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

/// The `{A, B, C}` input record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "A")]
    pub a: RawValue,
    #[serde(rename = "B")]
    pub b: RawValue,
    #[serde(rename = "C")]
    pub c: RawValue,
}

impl InputRecord {
    pub fn to_spec(&self) -> Result<SampleSpec> {
        let a = raw_float("A", &self.a)?;
        let b = raw_float("B", &self.b)?;
        let count = raw_count("C", &self.c)?;
        SampleSpec::new(a, b, count)
    }
}

/// Parse a finite float from text.
pub fn parse_float(field: &str, text: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| FitError::input_parse(field, text))?;
    if !value.is_finite() {
        return Err(FitError::input_parse(field, text));
    }
    Ok(value)
}

/// Parse a sample count (non-negative integer) from text.
pub fn parse_count(field: &str, text: &str) -> Result<usize> {
    text.trim()
        .parse()
        .map_err(|_| FitError::input_parse(field, text))
}

/// Build a spec from the three text fields.
pub fn spec_from_text(a: &str, b: &str, count: &str) -> Result<SampleSpec> {
    SampleSpec::new(parse_float("a", a)?, parse_float("b", b)?, parse_count("count", count)?)
}

/// Read and validate an input record file.
pub fn read_input_record(path: &Path) -> std::result::Result<SampleSpec, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open input file '{}': {e}", path.display())))?;
    let record: InputRecord = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid input file '{}': {e}", path.display())))?;
    Ok(record.to_spec()?)
}

fn raw_float(field: &str, value: &RawValue) -> Result<f64> {
    match value {
        RawValue::Number(v) if v.is_finite() => Ok(*v),
        RawValue::Number(v) => Err(FitError::input_parse(field, v.to_string())),
        RawValue::Text(s) => parse_float(field, s),
    }
}

// Numbers go through their decimal text so both forms share one set of limits.
fn raw_count(field: &str, value: &RawValue) -> Result<usize> {
    match value {
        RawValue::Number(v) => parse_count(field, &v.to_string()),
        RawValue::Text(s) => parse_count(field, s),
    }
}
