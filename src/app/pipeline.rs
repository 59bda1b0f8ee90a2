//! Shared "fit pipeline" logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! spec + formula -> sample grid -> one fit per requested degree
//!
//! The subcommands can then focus on presentation (summary, point values, exports).

use std::sync::Arc;

use log::info;

use crate::domain::FitConfig;
use crate::error::{AppError, FitError};
use crate::fit::{PolynomialFit, fit_degrees};
use crate::math::solver_for;
use crate::sample::SampleGrid;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub grid: Arc<SampleGrid>,
    /// One entry per requested degree, in request order.
    pub fits: Vec<(usize, Result<PolynomialFit, FitError>)>,
}

impl RunOutput {
    /// The fits that succeeded, in request order.
    pub fn successful(&self) -> Vec<PolynomialFit> {
        self.fits.iter().filter_map(|(_, fit)| fit.as_ref().ok().cloned()).collect()
    }

    /// Fail with the first fit error when no degree could be fitted.
    pub fn require_any(&self) -> Result<(), AppError> {
        if self.fits.iter().any(|(_, fit)| fit.is_ok()) {
            return Ok(());
        }
        match self.fits.iter().find_map(|(_, fit)| fit.as_ref().err()) {
            Some(err) => Err(err.clone().into()),
            None => Err(AppError::new(2, "No polynomial degree requested.")),
        }
    }
}

/// Sample the configured formula over the configured interval.
pub fn sample(config: &FitConfig) -> Result<Arc<SampleGrid>, AppError> {
    let grid = SampleGrid::build_with_precision(&config.spec, config.precision, config.formula.func())?;
    Ok(Arc::new(grid))
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let grid = sample(config)?;
    info!(
        "fitting degrees {:?} to {} samples of {}",
        config.degrees,
        grid.len(),
        config.formula.label()
    );

    let solver = solver_for(config.solver);
    let fits = fit_degrees(&grid, &config.degrees, solver.as_ref());

    Ok(RunOutput { grid, fits })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Formula, SamplePrecision, SampleSpec, SolverKind};

    fn config(a: f64, b: f64, count: usize, formula: Formula, degrees: Vec<usize>) -> FitConfig {
        FitConfig {
            spec: SampleSpec::new(a, b, count).unwrap(),
            formula,
            precision: SamplePrecision::default(),
            degrees,
            solver: SolverKind::Gauss,
            export_results: None,
            export_curve: None,
        }
    }

    #[test]
    fn linear_and_quadratic_share_one_grid() {
        let run = run_fit(&config(0.0, 3.0, 30, Formula::Quadratic, vec![1, 2])).unwrap();

        assert_eq!(run.fits.len(), 2);
        let fits = run.successful();
        assert_eq!(fits.len(), 2);
        assert!(std::ptr::eq(fits[0].grid(), run.grid.as_ref()));
        assert!(std::ptr::eq(fits[1].grid(), run.grid.as_ref()));

        // The quadratic reproduces the samples; the line cannot.
        assert!(fits[1].quality().sse < 1e-12);
        assert!(fits[0].quality().sse > 1.0);
    }

    #[test]
    fn undefined_samples_fail_the_run() {
        let err = run_fit(&config(-1.0, 1.0, 10, Formula::SqrtPlusCube, vec![1])).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn run_with_only_singular_fits_reports_the_error() {
        let run = run_fit(&config(5.0, 5.0, 10, Formula::CosPlus3, vec![1, 2])).unwrap();
        assert!(run.grid.is_empty());
        assert_eq!(run.require_any().unwrap_err().exit_code(), 4);
    }

    #[test]
    fn partial_success_is_enough() {
        let run = run_fit(&config(0.0, 1.0, 2, Formula::Linear, vec![2, 1])).unwrap();
        assert!(run.require_any().is_ok());
        assert_eq!(run.successful().len(), 1);
    }
}
