//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and initializes logging
//! - parses CLI arguments
//! - resolves the sampling spec (text fields or JSON record)
//! - runs sampling + fitting
//! - prints reports and writes optional exports

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use crate::cli::{Command, EvalArgs, FitArgs, SampleArgs};
use crate::domain::{FitConfig, Formula, SamplePrecision, SampleSpec};
use crate::error::AppError;
use crate::io::input::{parse_float, read_input_record, spec_from_text};

pub mod pipeline;

/// Environment variable naming the default input record.
pub const DATA_FILE_ENV: &str = "LSQ_DATA_FILE";
/// Environment variable naming the default formula.
pub const FORMULA_ENV: &str = "LSQ_FORMULA";

/// Entry point for the `lsq` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Eval(args) => handle_eval(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args)?;
    let run = pipeline::run_fit(&config)?;

    println!("{}", crate::report::format_run_summary(&config, &run.grid, &run.fits));
    run.require_any()?;

    // Optional exports cover the fits that succeeded.
    let fits = run.successful();
    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run.grid, &fits)?;
        info!("wrote results CSV to {}", path.display());
    }
    if let Some(path) = &config.export_curve {
        let curve = crate::io::curve::build_curve_file(config.formula, &config.spec, &run.grid, &fits);
        crate::io::curve::write_curve_json(path, &curve)?;
        info!("wrote curve JSON to {}", path.display());
    }

    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let x = parse_float("x", &args.x)?;
    let config = fit_config_from_args(&args.fit)?;
    let run = pipeline::run_fit(&config)?;
    run.require_any()?;

    println!("{}", crate::report::format_evaluations(x, &run.fits));
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let spec = resolve_spec(&args)?;
    let formula = resolve_formula(&args)?;
    let grid = crate::sample::SampleGrid::build_with_precision(&spec, precision_from_args(&args)?, formula.func())?;

    println!("f(x) = {}", formula.label());
    print!("{}", crate::report::format_grid(&grid));
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> Result<FitConfig, AppError> {
    Ok(FitConfig {
        spec: resolve_spec(&args.sample)?,
        formula: resolve_formula(&args.sample)?,
        precision: precision_from_args(&args.sample)?,
        degrees: args.degrees.clone(),
        solver: args.solver,
        export_results: args.export.clone(),
        export_curve: args.export_curve.clone(),
    })
}

/// Resolve the sampling spec.
///
/// Rules:
/// - `-a A -b B -c C`         -> parsed from text
/// - `--data FILE`            -> read from the JSON record
/// - nothing                  -> JSON record named by `LSQ_DATA_FILE`
/// - only some of `-a/-b/-c`  -> error
pub fn resolve_spec(args: &SampleArgs) -> Result<SampleSpec, AppError> {
    match (&args.a, &args.b, &args.count) {
        (Some(a), Some(b), Some(count)) => Ok(spec_from_text(a, b, count)?),
        (None, None, None) => {
            let path = args
                .data
                .clone()
                .or_else(|| std::env::var(DATA_FILE_ENV).ok().map(PathBuf::from))
                .ok_or_else(|| {
                    AppError::new(2, format!("Provide -a/-b/-c, --data, or set {DATA_FILE_ENV} (.env)."))
                })?;
            debug!("reading sampling spec from {}", path.display());
            read_input_record(&path)
        }
        _ => Err(AppError::new(2, "-a, -b and -c must be given together.")),
    }
}

/// Resolve the formula: flag, then `LSQ_FORMULA`, then the default.
pub fn resolve_formula(args: &SampleArgs) -> Result<Formula, AppError> {
    if let Some(formula) = args.formula {
        return Ok(formula);
    }
    match std::env::var(FORMULA_ENV) {
        Ok(name) => Ok(name.parse()?),
        Err(_) => Ok(Formula::default()),
    }
}

fn precision_from_args(args: &SampleArgs) -> Result<SamplePrecision, AppError> {
    let precision = if args.exact {
        SamplePrecision::Exact
    } else {
        SamplePrecision::Decimals(args.precision)
    };
    precision.validate()?;
    Ok(precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    fn fit_args(argv: &[&str]) -> FitArgs {
        let mut full = vec!["lsq", "fit"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Fit(args) => args,
            other => panic!("expected fit, got {other:?}"),
        }
    }

    #[test]
    fn config_from_text_fields() {
        let args = fit_args(&["-a", "0", "-b", "2", "-c", "8", "-f", "linear", "--exact", "-d", "2"]);
        let config = fit_config_from_args(&args).unwrap();

        assert_eq!(config.spec, SampleSpec { a: 0.0, b: 2.0, count: 8 });
        assert_eq!(config.formula, Formula::Linear);
        assert_eq!(config.precision, SamplePrecision::Exact);
        assert_eq!(config.degrees, vec![2]);
    }

    #[test]
    fn partial_bounds_are_rejected() {
        let args = fit_args(&["-a", "0", "-b", "2"]);
        assert_eq!(resolve_spec(&args.sample).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn non_numeric_bounds_are_input_errors() {
        let args = fit_args(&["-a", "zero", "-b", "2", "-c", "8"]);
        assert_eq!(resolve_spec(&args.sample).unwrap_err().exit_code(), 2);

        let args = fit_args(&["-a", "0", "-b", "2", "-c", "0"]);
        assert_eq!(resolve_spec(&args.sample).unwrap_err().exit_code(), 3);
    }

    #[test]
    fn explicit_formula_wins() {
        let args = fit_args(&["-a", "0", "-b", "1", "-c", "4", "-f", "exp-plus-3"]);
        assert_eq!(resolve_formula(&args.sample).unwrap(), Formula::ExpPlus3);
    }

    #[test]
    fn precision_flag_is_applied() {
        let args = fit_args(&["-a", "0", "-b", "1", "-c", "4", "--precision", "1"]);
        assert_eq!(precision_from_args(&args.sample).unwrap(), SamplePrecision::Decimals(1));
    }

    #[test]
    fn oversized_precision_flag_is_a_domain_error() {
        let args = fit_args(&["-a", "0", "-b", "1", "-c", "4", "--precision", "400"]);
        assert_eq!(fit_config_from_args(&args).unwrap_err().exit_code(), 3);
    }
}
