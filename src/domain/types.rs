//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during sampling and fitting
//! - exported to JSON/CSV
//! - compared across runs from their JSON form

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::Formula;
use crate::error::{FitError, Result};

/// Default number of decimal digits sampled x-values are rounded to.
pub const DEFAULT_SAMPLE_PRECISION: u32 = 3;

/// Most decimal digits an `f64` can carry meaningfully.
pub const MAX_SAMPLE_PRECISION: u32 = 15;

/// Sampling request: the interval `[a, b)` and the number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSpec {
    pub a: f64,
    pub b: f64,
    pub count: usize,
}

impl SampleSpec {
    /// Build a validated spec.
    pub fn new(a: f64, b: f64, count: usize) -> Result<Self> {
        let spec = Self { a, b, count };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the invariants the grid builder relies on.
    ///
    /// `a > b` is accepted: it produces an empty grid, not an error.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(FitError::domain("sample count must be > 0"));
        }
        if !(self.a.is_finite() && self.b.is_finite()) {
            return Err(FitError::domain(format!(
                "interval bounds must be finite (a={}, b={})",
                self.a, self.b
            )));
        }
        let step = self.step();
        if !step.is_finite() {
            return Err(FitError::domain(format!("sampling step is not finite ({step})")));
        }
        Ok(())
    }

    /// Step between consecutive samples: `|a - b| / count`.
    pub fn step(&self) -> f64 {
        (self.a - self.b).abs() / self.count as f64
    }
}

/// How sampled x-values are rounded before `f` is evaluated on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplePrecision {
    /// Round to this many decimal digits.
    Decimals(u32),
    /// Keep the accumulated x-values untouched.
    Exact,
}

impl Default for SamplePrecision {
    fn default() -> Self {
        SamplePrecision::Decimals(DEFAULT_SAMPLE_PRECISION)
    }
}

impl SamplePrecision {
    /// Reject digit counts past what an `f64` can represent.
    pub fn validate(self) -> Result<()> {
        match self {
            SamplePrecision::Decimals(digits) if digits > MAX_SAMPLE_PRECISION => {
                Err(FitError::domain(format!(
                    "sample precision {digits} exceeds the maximum of {MAX_SAMPLE_PRECISION} decimals"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Round `x` to the nearest decimal with `digits` places.
    ///
    /// Goes through correctly rounded decimal formatting, so a value stored just
    /// below a `.5` boundary rounds down. Yields NaN if the text cannot be read back.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            SamplePrecision::Exact => x,
            SamplePrecision::Decimals(digits) => format!("{x:.prec$}", prec = digits as usize)
                .parse()
                .unwrap_or(f64::NAN),
        }
    }
}

/// Which linear solver to use for the normal equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// Gaussian elimination with partial pivoting.
    Gauss,
    /// Singular value decomposition (better conditioned, slower).
    Svd,
}

/// A fitted polynomial: coefficient `i` multiplies `x^i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialModel {
    pub degree: usize,
    pub coefficients: Vec<f64>,
}

impl PolynomialModel {
    /// Evaluate `Σ c_i x^i` using Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Short human-readable form, e.g. `1.0000 + 2.0000·x - 0.5000·x^2`.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for (i, &c) in self.coefficients.iter().enumerate() {
            let term = match i {
                0 => format!("{:.6}", c.abs()),
                1 => format!("{:.6}·x", c.abs()),
                _ => format!("{:.6}·x^{i}", c.abs()),
            };
            if i == 0 {
                if c < 0.0 {
                    out.push('-');
                }
            } else {
                out.push_str(if c < 0.0 { " - " } else { " + " });
            }
            out.push_str(&term);
        }
        out
    }
}

/// Goodness-of-fit diagnostics computed on the fit's own grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    pub n: usize,
    pub sse: f64,
    pub rmse: f64,
    /// `1 - SSE/SST`; `None` when the observed values have no spread.
    pub r_squared: Option<f64>,
}

/// A fitted model together with its diagnostics (export record).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    pub model: PolynomialModel,
    pub quality: FitQuality,
}

/// Run configuration for one `lsq` invocation.
///
/// This is derived from CLI flags, `.env` defaults and the optional input record.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub spec: SampleSpec,
    pub formula: Formula,
    pub precision: SamplePrecision,
    pub degrees: Vec<usize>,
    pub solver: SolverKind,
    pub export_results: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

/// Curve JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub formula: String,
    pub spec: SampleSpec,
    pub fits: Vec<FitResult>,
    pub grid: CurveGrid,
}

/// Sampled points plus each fit's values over them (one inner vector per fit).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub fitted: Vec<Vec<f64>>,
}
