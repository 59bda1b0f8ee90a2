//! `lsq-curves` library crate.
//!
//! Samples a scalar function over `[a, b)` and fits least-squares polynomials
//! of any degree to the samples via the normal equations.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lsq_curves::domain::SampleSpec;
//! use lsq_curves::fit::PolynomialFit;
//! use lsq_curves::sample::SampleGrid;
//!
//! let spec = SampleSpec::new(0.0, 3.0, 30)?;
//! let grid = Arc::new(SampleGrid::build(&spec, |x| x.cos() + 3.0)?);
//! let quadratic = PolynomialFit::fit(grid, 2)?;
//! let y = quadratic.evaluate(1.5);
//! # let _ = y;
//! # Ok::<(), lsq_curves::error::FitError>(())
//! ```
//!
//! The binary (`lsq`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the sampling/fitting engine is reusable from other front-ends

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;
pub mod sample;
