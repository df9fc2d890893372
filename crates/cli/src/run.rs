use std::{io::Write, time::Instant};

use anyhow::Context;
use linfit_core::{Equation, Observer};
use linfit_observers::{Report, ResidualTable, Trace};
use linfit_solvers::scan::{self, Config, Event, Solution};
use serde::Serialize;

use crate::{
    cli::{Cli, Format},
    settings::Settings,
};

/// Solves every target on the command line and writes the results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = settings
        .config(cli.tie_tol, cli.max_candidates)
        .context("invalid scan settings")?;

    let equation = Equation::new(cli.a, cli.b).context("invalid coefficients")?;
    tracing::info!(
        a = equation.a(),
        b = equation.b(),
        orientation = ?equation.orientation(),
        "normalized equation"
    );

    for (index, &target) in cli.targets.iter().enumerate() {
        let outcome = solve_target(&equation, target, &config, cli.show_residuals)
            .with_context(|| format!("failed to solve for target {target}"))?;

        match cli.format {
            Format::Text => {
                if index > 0 {
                    writeln!(out)?;
                }
                write_text(out, &equation, &outcome, cli.precision)?;
            }
            Format::Json => write_json(out, &equation, &outcome)?,
        }
    }

    Ok(())
}

/// A solved target with its timing and optional residual table.
struct Outcome {
    solution: Solution,
    elapsed: std::time::Duration,
    table: Option<ResidualTable>,
}

fn solve_target(
    equation: &Equation,
    target: f64,
    config: &Config,
    show_residuals: bool,
) -> Result<Outcome, scan::Error> {
    let mut table = show_residuals.then(ResidualTable::new);
    let observer = |event: &Event| {
        Trace.observe(event);
        if let Some(table) = table.as_mut() {
            table.observe(event);
        }
        None
    };

    let start = Instant::now();
    let solution = scan::solve(equation, target, config, observer)?;
    let elapsed = start.elapsed();

    tracing::info!(
        target,
        x = solution.x,
        y = solution.y,
        residual = solution.residual,
        candidates = solution.candidates,
        ?elapsed,
        "solved"
    );

    Ok(Outcome {
        solution,
        elapsed,
        table,
    })
}

fn write_text<W: Write>(
    out: &mut W,
    equation: &Equation,
    outcome: &Outcome,
    precision: usize,
) -> anyhow::Result<()> {
    if let Some(table) = &outcome.table {
        writeln!(out, "{table:.precision$}")?;
    }

    let report = Report::new(equation, &outcome.solution)
        .precision(precision)
        .elapsed(outcome.elapsed);
    writeln!(out, "{report}")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    equation: &'a Equation,
    solution: &'a Solution,
    argument_order: (u64, u64),
    elapsed_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    residuals: Option<Vec<JsonRow>>,
}

#[derive(Serialize)]
struct JsonRow {
    x: u64,
    y: Option<u64>,
    residual: Option<f64>,
}

fn write_json<W: Write>(out: &mut W, equation: &Equation, outcome: &Outcome) -> anyhow::Result<()> {
    let residuals = outcome.table.as_ref().map(|table| {
        table
            .rows()
            .iter()
            .map(|row| JsonRow {
                x: row.x,
                y: row.y,
                residual: row.y.map(|_| row.residual),
            })
            .collect()
    });

    let record = JsonRecord {
        equation,
        solution: &outcome.solution,
        argument_order: outcome.solution.in_argument_order(equation),
        elapsed_secs: outcome.elapsed.as_secs_f64(),
        residuals,
    };

    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)?;
    Ok(())
}
