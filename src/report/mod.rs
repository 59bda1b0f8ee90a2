//! Reporting utilities: run summaries, grid dumps and point evaluations.

pub mod format;

pub use format::*;
