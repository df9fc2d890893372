//! Linfit command-line interface.
//!
//! Approximates each target `L` as `a·x + b·y` with non-negative integers
//! `x` and `y`, and prints a report per target.
//!
//! ```text
//! linfit -a 0.8 -b 1.25 10 12321.123
//! linfit -a 0.8 -b 1.25 --format json --show-residuals 10
//! ```

mod cli;
mod run;
mod settings;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    run::run(&cli, &mut stdout)
}

/// Logs to stderr. `-v` flags override `RUST_LOG`; the default is `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
