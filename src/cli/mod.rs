//! Command-line parsing for the least-squares fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the sampling/fitting code. Sampling bounds are taken as raw
//! text and parsed at the library boundary (`io::input`), the same way the
//! numbers would arrive from text fields.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_SAMPLE_PRECISION, Formula, SolverKind};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lsq", version, about = "Sample a function and fit least-squares polynomials")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sample the function, fit each requested degree and print diagnostics.
    Fit(FitArgs),
    /// Fit as `fit` does, then print each model's value at a point.
    Eval(EvalArgs),
    /// Print the sampled grid only.
    Sample(SampleArgs),
}

/// Where the samples come from.
#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    /// Interval start.
    #[arg(short = 'a', long = "start", allow_hyphen_values = true)]
    pub a: Option<String>,

    /// Interval end (excluded).
    #[arg(short = 'b', long = "end", allow_hyphen_values = true)]
    pub b: Option<String>,

    /// Number of steps over the interval.
    #[arg(short = 'c', long = "count", allow_hyphen_values = true)]
    pub count: Option<String>,

    /// JSON input record with keys `A`, `B`, `C` (defaults to `LSQ_DATA_FILE`).
    #[arg(long, value_name = "JSON", conflicts_with_all = ["a", "b", "count"])]
    pub data: Option<PathBuf>,

    /// Function to sample (defaults to `LSQ_FORMULA`, then `cos-plus-3`).
    #[arg(short = 'f', long, value_enum)]
    pub formula: Option<Formula>,

    /// Decimal digits sampled x-values are rounded to.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_PRECISION)]
    pub precision: u32,

    /// Do not round sampled x-values.
    #[arg(long, conflicts_with = "precision")]
    pub exact: bool,
}

/// Common options for fitting.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    #[command(flatten)]
    pub sample: SampleArgs,

    /// Polynomial degree(s) to fit; repeat or comma-separate.
    #[arg(short = 'd', long = "degree", value_delimiter = ',', default_values_t = [1, 2])]
    pub degrees: Vec<usize>,

    /// Linear solver for the normal equations.
    #[arg(long, value_enum, default_value_t = SolverKind::Gauss)]
    pub solver: SolverKind,

    /// Export per-sample fitted values to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export models + fitted grid to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for point evaluation.
#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub fit: FitArgs,

    /// Point to evaluate the fitted models at.
    #[arg(short = 'x', long = "point", allow_hyphen_values = true)]
    pub x: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fit_accepts_negative_bounds_and_degree_list() {
        let cli = Cli::try_parse_from(["lsq", "fit", "-a", "-1", "-b", "2", "-c", "30", "-d", "1,2,3"]).unwrap();
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.sample.a.as_deref(), Some("-1"));
        assert_eq!(args.degrees, vec![1, 2, 3]);
        assert_eq!(args.solver, SolverKind::Gauss);
    }

    #[test]
    fn degrees_default_to_linear_and_quadratic() {
        let cli = Cli::try_parse_from(["lsq", "fit", "--data", "in.json"]).unwrap();
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.degrees, vec![1, 2]);
        assert_eq!(args.sample.precision, DEFAULT_SAMPLE_PRECISION);
    }

    #[test]
    fn data_file_conflicts_with_explicit_bounds() {
        assert!(Cli::try_parse_from(["lsq", "sample", "--data", "in.json", "-a", "0"]).is_err());
    }

    #[test]
    fn eval_requires_a_point() {
        assert!(Cli::try_parse_from(["lsq", "eval", "-a", "0", "-b", "1", "-c", "4"]).is_err());
        let cli = Cli::try_parse_from(["lsq", "eval", "-a", "0", "-b", "1", "-c", "4", "-x", "0.5"]).unwrap();
        assert!(matches!(cli.command, Command::Eval(ref args) if args.x == "0.5"));
    }
}
