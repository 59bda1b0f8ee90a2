//! Write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a run:
//! - formula and sampling spec
//! - every fitted model with its diagnostics
//! - the sampled grid plus each model's values over it
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CurveFile, CurveGrid, Formula, SampleSpec};
use crate::error::AppError;
use crate::fit::PolynomialFit;
use crate::sample::SampleGrid;

/// Assemble the curve file for a set of fits over one grid.
pub fn build_curve_file(formula: Formula, spec: &SampleSpec, grid: &SampleGrid, fits: &[PolynomialFit]) -> CurveFile {
    CurveFile {
        tool: "lsq".to_string(),
        generated_at: Utc::now(),
        formula: formula.label().to_string(),
        spec: *spec,
        fits: fits.iter().map(PolynomialFit::to_result).collect(),
        grid: CurveGrid {
            x: grid.xs().to_vec(),
            y: grid.ys().to_vec(),
            fitted: fits.iter().map(PolynomialFit::evaluate_all).collect(),
        },
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}
