//! Least-squares polynomial fitting via the normal equations.
//!
//! For degree `d` the coefficients `c_0..c_d` solve:
//!
//! ```text
//! M[i][j] = Σ x^(i+j)      i, j ∈ 0..=d
//! v[i]    = Σ x^i · y
//! M · c   = v
//! ```
//!
//! which minimizes `Σ (y_i - Σ_j c_j x_i^j)^2` over the grid. For degree 1 this
//! is `[[n, Σx], [Σx, Σx²]] · c = [Σy, Σxy]`.
//!
//! The normal-equations form squares the condition number of the design
//! matrix, so it loses precision on high degrees or narrow ranges far from 0.
//! Pass an `SvdSolver` to `fit_with` when that matters.

use std::sync::Arc;

use log::debug;
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

use crate::domain::{FitQuality, FitResult, PolynomialModel};
use crate::error::{FitError, Result};
use crate::fit::power_sums::PowerSums;
use crate::math::{GaussianSolver, LinearSolver};
use crate::sample::SampleGrid;

/// Largest degree accepted by `fit`.
pub const MAX_DEGREE: usize = 32;

/// A polynomial fitted to a (shared, read-only) sample grid.
#[derive(Debug, Clone)]
pub struct PolynomialFit {
    grid: Arc<SampleGrid>,
    model: PolynomialModel,
}

impl PolynomialFit {
    /// Fit with the default Gaussian-elimination solver.
    pub fn fit(grid: Arc<SampleGrid>, degree: usize) -> Result<Self> {
        Self::fit_with(grid, degree, &GaussianSolver::default())
    }

    /// Fit with an explicit linear solver.
    pub fn fit_with(grid: Arc<SampleGrid>, degree: usize, solver: &dyn LinearSolver) -> Result<Self> {
        if degree > MAX_DEGREE {
            return Err(FitError::domain(format!(
                "degree {degree} exceeds the supported maximum of {MAX_DEGREE}"
            )));
        }
        let k = degree + 1;
        let singular = || FitError::SingularSystem { n: grid.len(), k };

        if grid.is_empty() {
            return Err(singular());
        }

        let (m, v) = normal_equations(&PowerSums::new(&grid), degree);
        let coefficients = solver.solve(&m, &v).ok_or_else(singular)?;

        debug!(
            "degree {degree} fit over {} samples ({}): {:?}",
            grid.len(),
            solver.name(),
            coefficients.as_slice()
        );

        Ok(Self {
            model: PolynomialModel {
                degree,
                coefficients: coefficients.iter().copied().collect(),
            },
            grid,
        })
    }

    pub fn degree(&self) -> usize {
        self.model.degree
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.model.coefficients
    }

    pub fn model(&self) -> &PolynomialModel {
        &self.model
    }

    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Model value at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.model.evaluate(x)
    }

    /// Model values at every sampled x, in grid order.
    pub fn evaluate_all(&self) -> Vec<f64> {
        self.grid.xs().iter().map(|&x| self.evaluate(x)).collect()
    }

    /// `y_i - model(x_i)` for every sample.
    pub fn residuals(&self) -> Vec<f64> {
        self.grid
            .xs()
            .iter()
            .zip(self.grid.ys())
            .map(|(&x, &y)| y - self.evaluate(x))
            .collect()
    }

    pub fn quality(&self) -> FitQuality {
        let n = self.grid.len();
        let sse: f64 = self.residuals().iter().map(|r| r * r).sum();
        let rmse = (sse / n as f64).sqrt();

        let mean = self.grid.ys().iter().sum::<f64>() / n as f64;
        let sst: f64 = self.grid.ys().iter().map(|y| (y - mean).powi(2)).sum();
        let r_squared = (sst > 0.0).then(|| 1.0 - sse / sst);

        FitQuality { n, sse, rmse, r_squared }
    }

    pub fn to_result(&self) -> FitResult {
        FitResult {
            model: self.model.clone(),
            quality: self.quality(),
        }
    }
}

/// Assemble `(M, v)` for a degree-`degree` fit.
pub fn normal_equations(sums: &PowerSums<'_>, degree: usize) -> (DMatrix<f64>, DVector<f64>) {
    let k = degree + 1;

    // M only depends on i + j, so each power sum is computed once.
    let x_pows: Vec<f64> = (0..(2 * k - 1)).map(|p| sums.sum_x_pow(p as u32)).collect();
    let m = DMatrix::from_fn(k, k, |i, j| x_pows[i + j]);
    let v = DVector::from_fn(k, |i, _| sums.sum_x_pow_y(i as u32));

    (m, v)
}

/// Fit several degrees over one grid in parallel.
///
/// Results come back in the order of `degrees`.
pub fn fit_degrees(
    grid: &Arc<SampleGrid>,
    degrees: &[usize],
    solver: &dyn LinearSolver,
) -> Vec<(usize, Result<PolynomialFit>)> {
    degrees
        .par_iter()
        .map(|&degree| (degree, PolynomialFit::fit_with(Arc::clone(grid), degree, solver)))
        .collect()
}
