//! Mathematical utilities: linear solvers for the normal equations.

pub mod solve;

pub use solve::*;
