//! Catalogue of scalar functions that can be sampled.
//!
//! The grid builder accepts any `Fn(f64) -> f64`; this enum only exists so the
//! binary can pick a formula from configuration instead of from source edits.

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// Boxed scalar function handed to the grid builder.
pub type ScalarFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Formula {
    /// `cos(x) + 3`
    #[default]
    #[serde(rename = "cos-plus-3")]
    #[value(name = "cos-plus-3")]
    CosPlus3,
    /// `e^x + 3`
    #[serde(rename = "exp-plus-3")]
    #[value(name = "exp-plus-3")]
    ExpPlus3,
    /// `x^0.5 + x^3`
    #[serde(rename = "sqrt-plus-cube")]
    #[value(name = "sqrt-plus-cube")]
    SqrtPlusCube,
    /// `tan(x) + e^(2x)`
    #[serde(rename = "tan-plus-exp-2x")]
    #[value(name = "tan-plus-exp-2x")]
    TanPlusExp2x,
    /// `2x + 1`
    #[serde(rename = "linear")]
    #[value(name = "linear")]
    Linear,
    /// `x^2 - 3x + 2`
    #[serde(rename = "quadratic")]
    #[value(name = "quadratic")]
    Quadratic,
}

impl Formula {
    pub fn label(self) -> &'static str {
        match self {
            Formula::CosPlus3 => "cos(x) + 3",
            Formula::ExpPlus3 => "e^x + 3",
            Formula::SqrtPlusCube => "x^0.5 + x^3",
            Formula::TanPlusExp2x => "tg(x) + e^(2x)",
            Formula::Linear => "2x + 1",
            Formula::Quadratic => "x^2 - 3x + 2",
        }
    }

    pub fn eval(self, x: f64) -> f64 {
        match self {
            Formula::CosPlus3 => x.cos() + 3.0,
            Formula::ExpPlus3 => x.exp() + 3.0,
            // NaN for x < 0, which the grid builder reports as a domain error.
            Formula::SqrtPlusCube => x.sqrt() + x.powi(3),
            Formula::TanPlusExp2x => x.tan() + (2.0 * x).exp(),
            Formula::Linear => 2.0 * x + 1.0,
            Formula::Quadratic => x * x - 3.0 * x + 2.0,
        }
    }

    pub fn func(self) -> ScalarFn {
        Box::new(move |x| self.eval(x))
    }
}

impl FromStr for Formula {
    type Err = FitError;

    /// Parse a formula name, as used by the `LSQ_FORMULA` environment default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Formula as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| FitError::input_parse("formula", s))
    }
}
