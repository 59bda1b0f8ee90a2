//! Sampling a scalar function over an interval.

pub mod grid;

pub use grid::*;
