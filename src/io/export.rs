//! Export per-sample results to CSV.
//!
//! One row per sample: `x, y`, then the fitted value and residual of every model.
//! The export is meant to be easy to consume in spreadsheets or plotting scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;
use crate::fit::PolynomialFit;
use crate::sample::SampleGrid;

/// Write per-sample results to a CSV file.
pub fn write_results_csv(path: &Path, grid: &SampleGrid, fits: &[PolynomialFit]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    write_results(&mut file, grid, fits)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV: {e}")))
}

fn write_results<W: Write>(out: &mut W, grid: &SampleGrid, fits: &[PolynomialFit]) -> std::io::Result<()> {
    let mut header = String::from("x,y");
    for fit in fits {
        let d = fit.degree();
        header.push_str(&format!(",fit_deg{d},residual_deg{d}"));
    }
    writeln!(out, "{header}")?;

    let fitted: Vec<Vec<f64>> = fits.iter().map(PolynomialFit::evaluate_all).collect();
    for (i, (&x, &y)) in grid.xs().iter().zip(grid.ys()).enumerate() {
        let mut row = format!("{x},{y:.10}");
        for series in &fitted {
            let y_fit = series[i];
            row.push_str(&format!(",{y_fit:.10},{:.10}", y - y_fit));
        }
        writeln!(out, "{row}")?;
    }
    Ok(())
}
