//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - sampling inputs (`SampleSpec`, `SamplePrecision`)
//! - the formula catalogue (`Formula`)
//! - fit outputs (`PolynomialModel`, `FitQuality`, `FitResult`, `CurveFile`)

pub mod formula;
pub mod types;

pub use formula::*;
pub use types::*;
