//! Sample grid generation.
//!
//! x-values are produced by repeated addition of a fixed step starting at `a`,
//! while the running value is still below the *original* `b`:
//!
//! ```text
//! step = |a - b| / count
//! x_0 = a, x_{k+1} = x_k + step, keep x_k while b > x_k
//! ```
//!
//! Each stored x is rounded to the sample precision (3 decimals by default)
//! before `f` is evaluated on it. The unrounded running value drives the loop.
//!
//! Consequences worth knowing:
//! - `a == b` and `a > b` both give an empty grid.
//! - the endpoint `b` is excluded, but accumulated rounding error can add one
//!   extra sample (e.g. ten steps of `0.1` sum to `0.9999999999999999 < 1`).

use log::{debug, warn};

use crate::domain::{SamplePrecision, SampleSpec};
use crate::error::{FitError, Result};

/// Ordered sample points `(xs, ys)`; immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleGrid {
    /// Sample `f` over `spec` using the default precision.
    pub fn build<F>(spec: &SampleSpec, f: F) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        Self::build_with_precision(spec, SamplePrecision::default(), f)
    }

    /// Sample `f` over `spec`, rounding x-values per `precision`.
    pub fn build_with_precision<F>(spec: &SampleSpec, precision: SamplePrecision, f: F) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        spec.validate()?;
        precision.validate()?;

        let xs = generate_xs(spec, precision)?;
        if xs.is_empty() {
            warn!("empty sample grid for a={}, b={} (need a < b)", spec.a, spec.b);
        }

        let mut ys = Vec::with_capacity(xs.len());
        for &x in &xs {
            let y = f(x);
            if !y.is_finite() {
                return Err(FitError::domain(format!("function is not finite at x={x} (got {y})")));
            }
            ys.push(y);
        }

        debug!("sampled {} points over [{}, {})", xs.len(), spec.a, spec.b);
        Ok(Self { xs, ys })
    }

    /// Wrap already-sampled points.
    pub fn from_points(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(FitError::domain(format!(
                "x and y lengths differ ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        if let Some((x, y)) = xs
            .iter()
            .zip(ys.iter())
            .find(|(x, y)| !(x.is_finite() && y.is_finite()))
        {
            return Err(FitError::domain(format!("non-finite sample ({x}, {y})")));
        }
        Ok(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// `(min, max)` of the sampled x-values, `None` for an empty grid.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = *self.xs.first()?;
        Some(
            self.xs
                .iter()
                .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
        )
    }

    /// Number of distinct x-values; a degree-`d` fit needs at least `d + 1`.
    pub fn distinct_x_count(&self) -> usize {
        let mut sorted = self.xs.clone();
        sorted.sort_by(f64::total_cmp);
        sorted.dedup();
        sorted.len()
    }
}

fn generate_xs(spec: &SampleSpec, precision: SamplePrecision) -> Result<Vec<f64>> {
    let step = spec.step();
    let mut xs = Vec::new();
    if !(spec.b > spec.a) {
        return Ok(xs);
    }

    // `b > a` from here on, so the step is positive unless it underflowed.
    if step <= 0.0 {
        return Err(FitError::domain(format!(
            "sampling step underflows to zero (a={}, b={}, count={})",
            spec.a, spec.b, spec.count
        )));
    }

    xs.reserve(spec.count.saturating_add(1).min(1 << 20));
    let mut temp = spec.a;
    while spec.b > temp {
        let x = precision.apply(temp);
        if !x.is_finite() {
            return Err(FitError::domain(format!("x={temp} does not round to a finite value")));
        }
        xs.push(x);
        let next = temp + step;
        if next <= temp {
            return Err(FitError::domain(format!(
                "sampling step {step} is too small to advance past x={temp}"
            )));
        }
        temp = next;
    }
    Ok(xs)
}
