//! Linear solvers for the (small, square) normal-equations system.
//!
//! Every fit reduces to solving:
//!
//! ```text
//! M · c = v      with M = XᵀX, v = Xᵀy
//! ```
//!
//! where `M` is `(degree+1) × (degree+1)`. The solve sits behind the
//! `LinearSolver` trait so a better-conditioned method can be swapped in without
//! touching the fit's public contract.
//!
//! - `GaussianSolver` (default): nalgebra LU with partial pivoting, matching
//!   the plain normal-equations approach.
//! - `SvdSolver`: nalgebra SVD; refuses rank-deficient systems instead of
//!   returning the minimum-norm solution.

use nalgebra::{DMatrix, DVector};

use crate::domain::SolverKind;

/// Strategy for solving a square linear system.
///
/// Implementations return `None` when the system is singular or too
/// ill-conditioned to trust.
pub trait LinearSolver: Send + Sync {
    fn solve(&self, m: &DMatrix<f64>, v: &DVector<f64>) -> Option<DVector<f64>>;

    fn name(&self) -> &'static str;
}

/// Gaussian elimination with partial pivoting (nalgebra LU).
#[derive(Debug, Clone, Copy)]
pub struct GaussianSolver {
    /// A pivot smaller than `pivot_tol × max|M|` marks the system as singular.
    pub pivot_tol: f64,
}

impl Default for GaussianSolver {
    fn default() -> Self {
        Self { pivot_tol: 1e-12 }
    }
}

impl LinearSolver for GaussianSolver {
    fn solve(&self, m: &DMatrix<f64>, v: &DVector<f64>) -> Option<DVector<f64>> {
        let n = m.nrows();
        if n == 0 || m.ncols() != n || v.len() != n {
            return None;
        }

        let scale = m.amax();
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }
        let tol = self.pivot_tol * scale;

        let lu = m.clone().lu();
        if lu.u().diagonal().iter().any(|pivot| pivot.abs() <= tol) {
            return None;
        }

        let x = lu.solve(v)?;
        if x.iter().all(|c| c.is_finite()) {
            Some(x)
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "gauss"
    }
}

/// Solve through a singular value decomposition.
#[derive(Debug, Clone, Copy)]
pub struct SvdSolver {
    /// Singular values below `tol × σ_max` count as zero.
    pub tol: f64,
}

impl Default for SvdSolver {
    fn default() -> Self {
        Self { tol: 1e-12 }
    }
}

impl LinearSolver for SvdSolver {
    fn solve(&self, m: &DMatrix<f64>, v: &DVector<f64>) -> Option<DVector<f64>> {
        let n = m.nrows();
        if n == 0 || m.ncols() != n || v.len() != n {
            return None;
        }
        if m.iter().any(|e| !e.is_finite()) {
            return None;
        }

        let svd = m.clone().svd(true, true);
        let sigma_max = svd.singular_values.max();
        if !(sigma_max > 0.0) {
            return None;
        }

        // A rank-deficient normal matrix means the degree is not identifiable.
        let eps = self.tol * sigma_max;
        if svd.rank(eps) < n {
            return None;
        }

        let c = svd.solve(v, eps).ok()?;
        if c.iter().all(|x| x.is_finite()) {
            Some(c)
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "svd"
    }
}

/// Build the solver selected on the command line.
pub fn solver_for(kind: SolverKind) -> Box<dyn LinearSolver> {
    match kind {
        SolverKind::Gauss => Box::new(GaussianSolver::default()),
        SolverKind::Svd => Box::new(SvdSolver::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solvers() -> Vec<Box<dyn LinearSolver>> {
        vec![solver_for(SolverKind::Gauss), solver_for(SolverKind::Svd)]
    }

    #[test]
    fn solves_small_system() {
        // 2a + b = 5, a + 3b = 10  ->  a = 1, b = 3
        let m = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let v = DVector::from_row_slice(&[5.0, 10.0]);

        for solver in solvers() {
            let c = solver.solve(&m, &v).unwrap();
            assert!((c[0] - 1.0).abs() < 1e-10, "{}: {c}", solver.name());
            assert!((c[1] - 3.0).abs() < 1e-10, "{}: {c}", solver.name());
        }
    }

    #[test]
    fn gauss_pivots_on_zero_leading_entry() {
        let m = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let v = DVector::from_row_slice(&[2.0, 7.0]);

        let c = GaussianSolver::default().solve(&m, &v).unwrap();
        assert_eq!(c[0], 7.0);
        assert_eq!(c[1], 2.0);
    }

    #[test]
    fn gauss_agrees_with_nalgebra_lu() {
        let m = DMatrix::from_row_slice(3, 3, &[4.0, -2.0, 1.0, -2.0, 4.0, -2.0, 1.0, -2.0, 4.0]);
        let v = DVector::from_row_slice(&[11.0, -16.0, 17.0]);

        let expected = m.clone().lu().solve(&v).unwrap();
        let c = GaussianSolver::default().solve(&m, &v).unwrap();
        assert!((c - expected).amax() < 1e-12);
    }

    #[test]
    fn gauss_rejects_tiny_pivot_that_plain_lu_accepts() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0 + 1e-14]);
        let v = DVector::from_row_slice(&[2.0, 2.0]);

        assert!(m.clone().lu().solve(&v).is_some());
        assert!(GaussianSolver::default().solve(&m, &v).is_none());
    }

    #[test]
    fn rejects_singular_matrix() {
        let m = DMatrix::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]);
        let v = DVector::from_row_slice(&[1.0, 2.0, 3.0]);

        for solver in solvers() {
            assert!(solver.solve(&m, &v).is_none(), "{} accepted a singular matrix", solver.name());
        }
    }

    #[test]
    fn rejects_empty_and_mismatched_systems() {
        let empty = DMatrix::<f64>::zeros(0, 0);
        let v0 = DVector::<f64>::zeros(0);
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let v3 = DVector::from_row_slice(&[1.0, 2.0, 3.0]);

        for solver in solvers() {
            assert!(solver.solve(&empty, &v0).is_none());
            assert!(solver.solve(&m, &v3).is_none());
        }
    }
}
