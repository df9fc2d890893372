use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Fit targets as a·x + b·y with non-negative integers x and y.
///
/// The larger coefficient is always reported as x.
#[derive(Debug, Parser)]
#[command(name = "linfit", version)]
pub struct Cli {
    /// First coefficient.
    #[arg(short, allow_negative_numbers = true)]
    pub a: f64,

    /// Second coefficient.
    #[arg(short, allow_negative_numbers = true)]
    pub b: f64,

    /// Target values to approximate, solved against the same coefficients.
    #[arg(required = true, allow_negative_numbers = true)]
    pub targets: Vec<f64>,

    /// Treat residuals within this distance as ties (default: exact ties).
    #[arg(long)]
    pub tie_tol: Option<f64>,

    /// Refuse targets that need more candidates than this.
    #[arg(long)]
    pub max_candidates: Option<u64>,

    /// TOML file with a `[scan]` table of solver settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Decimal places in text output.
    #[arg(long, default_value_t = 3)]
    pub precision: usize,

    /// List the residual of every candidate.
    #[arg(long)]
    pub show_residuals: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// A human-readable report per target.
    Text,

    /// One JSON object per target and line.
    Json,
}
