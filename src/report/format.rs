//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::domain::FitConfig;
use crate::error::Result;
use crate::fit::PolynomialFit;
use crate::sample::SampleGrid;

/// Format the run summary: sampling setup, then one block per requested degree.
pub fn format_run_summary(config: &FitConfig, grid: &SampleGrid, fits: &[(usize, Result<PolynomialFit>)]) -> String {
    let mut out = String::new();

    out.push_str("=== lsq - least-squares polynomial fit ===\n");
    out.push_str(&format!("f(x) = {}\n", config.formula.label()));
    out.push_str(&format!(
        "Interval: [{}, {}) | count={} | step={}\n",
        config.spec.a,
        config.spec.b,
        config.spec.count,
        config.spec.step(),
    ));
    match grid.x_range() {
        Some((lo, hi)) => out.push_str(&format!(
            "Samples: n={} | x=[{lo}, {hi}] | distinct={}\n",
            grid.len(),
            grid.distinct_x_count()
        )),
        None => out.push_str("Samples: n=0 (empty grid; need a < b)\n"),
    }

    out.push_str("\nModels:\n");
    for (degree, fit) in fits {
        match fit {
            Ok(fit) => {
                let q = fit.quality();
                out.push_str(&format!("  {} (degree {degree}): y = {}\n", degree_name(*degree), fit.model().display()));
                out.push_str(&format!(
                    "    SSE={:.6e} RMSE={:.6e} R²={}\n",
                    q.sse,
                    q.rmse,
                    q.r_squared.map(|r| format!("{r:.6}")).unwrap_or_else(|| "n/a".to_string())
                ));
            }
            Err(err) => {
                out.push_str(&format!("  {} (degree {degree}): {err}\n", degree_name(*degree)));
            }
        }
    }

    out
}

/// Format the sampled grid as an aligned two-column table.
pub fn format_grid(grid: &SampleGrid) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>14} {:>18}\n", "x", "y"));
    for (x, y) in grid.xs().iter().zip(grid.ys()) {
        out.push_str(&format!("{x:>14} {y:>18.10}\n"));
    }
    out.push_str(&format!("({} samples)\n", grid.len()));
    out
}

/// Format each model's value at `x`.
pub fn format_evaluations(x: f64, fits: &[(usize, Result<PolynomialFit>)]) -> String {
    let mut out = String::new();
    out.push_str(&format!("X: {x}\n"));
    for (degree, fit) in fits {
        let value = match fit {
            Ok(fit) => fit.evaluate(x).to_string(),
            Err(err) => format!("n/a ({err})"),
        };
        out.push_str(&format!("Y {}: {value}\n", degree_name(*degree)));
    }
    out
}

fn degree_name(degree: usize) -> String {
    match degree {
        0 => "Constant".to_string(),
        1 => "Linear".to_string(),
        2 => "Quadratic".to_string(),
        3 => "Cubic".to_string(),
        d => format!("Degree-{d}"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Formula, SamplePrecision, SampleSpec, SolverKind};
    use crate::error::FitError;

    fn config(spec: SampleSpec) -> FitConfig {
        FitConfig {
            spec,
            formula: Formula::Linear,
            precision: SamplePrecision::default(),
            degrees: vec![1, 2],
            solver: SolverKind::Gauss,
            export_results: None,
            export_curve: Some(PathBuf::from("unused.json")),
        }
    }

    #[test]
    fn summary_lists_each_degree_and_failures() {
        let spec = SampleSpec::new(0.0, 1.0, 2).unwrap();
        let grid = Arc::new(SampleGrid::build(&spec, Formula::Linear.func()).unwrap());
        let fits: Vec<(usize, Result<PolynomialFit>)> = vec![
            (1, PolynomialFit::fit(Arc::clone(&grid), 1)),
            (2, PolynomialFit::fit(Arc::clone(&grid), 2)),
        ];

        let text = format_run_summary(&config(spec), &grid, &fits);

        assert!(text.contains("f(x) = 2x + 1"));
        assert!(text.contains("Samples: n=2"));
        assert!(text.contains("Linear (degree 1): y = 1.000000 + 2.000000·x"));
        assert!(text.contains("Quadratic (degree 2): Normal-equations matrix is singular"));
    }

    #[test]
    fn summary_flags_empty_grid() {
        let spec = SampleSpec::new(1.0, 0.0, 3).unwrap();
        let grid = SampleGrid::build(&spec, |x| x).unwrap();
        let fits: Vec<(usize, Result<PolynomialFit>)> = vec![(1, Err(FitError::SingularSystem { n: 0, k: 2 }))];

        let text = format_run_summary(&config(spec), &grid, &fits);
        assert!(text.contains("Samples: n=0"));
    }

    #[test]
    fn evaluations_name_each_model() {
        let spec = SampleSpec::new(0.0, 1.0, 4).unwrap();
        let grid = Arc::new(SampleGrid::build(&spec, |x| 3.0 * x).unwrap());
        let fits: Vec<(usize, Result<PolynomialFit>)> = vec![(1, PolynomialFit::fit(grid, 1))];

        let text = format_evaluations(2.0, &fits);
        assert!(text.starts_with("X: 2\n"));
        assert!(text.contains("Y Linear: "));
    }

    #[test]
    fn grid_table_has_one_row_per_sample() {
        let spec = SampleSpec::new(0.0, 1.0, 4).unwrap();
        let grid = SampleGrid::build(&spec, |x| x).unwrap();
        let text = format_grid(&grid);
        assert_eq!(text.lines().count(), 6);
        assert!(text.ends_with("(4 samples)\n"));
    }
}
