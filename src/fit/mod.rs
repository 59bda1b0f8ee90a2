//! Polynomial least-squares fitting.
//!
//! Responsibilities:
//!
//! - reduce a sample grid to power sums
//! - assemble and solve the normal equations for a given degree
//! - evaluate fitted models (single points and over the grid)

pub mod polynomial;
pub mod power_sums;

pub use polynomial::*;
pub use power_sums::*;
