use std::{fmt, time::Duration};

use linfit_core::Equation;
use linfit_solvers::scan::{Solution, Status};

/// A human-readable report of a scan result.
///
/// The report shows the target, the normalized coefficients, the chosen
/// combination with its leftover, and how many residuals the minimum was
/// taken from. Timing is measured by the caller and attached with
/// [`Report::elapsed`].
///
/// # Example
///
/// ```rust
/// use linfit_core::Equation;
/// use linfit_observers::Report;
/// use linfit_solvers::scan::{Config, solve_unobserved};
///
/// let equation = Equation::new(1.25, 0.8).unwrap();
/// let solution = solve_unobserved(&equation, 10.0, &Config::default()).unwrap();
///
/// let text = Report::new(&equation, &solution).to_string();
/// assert!(text.contains("8 * [1.250] + 0 * [0.800] + 0.000 = 10.000"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    equation: &'a Equation,
    solution: &'a Solution,
    precision: usize,
    elapsed: Option<Duration>,
}

impl<'a> Report<'a> {
    /// Creates a report with three decimal places and no timing.
    #[must_use]
    pub fn new(equation: &'a Equation, solution: &'a Solution) -> Self {
        Self {
            equation,
            solution,
            precision: 3,
            elapsed: None,
        }
    }

    /// Sets the number of decimal places for real values.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Attaches the time the solve took.
    #[must_use]
    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    fn combination(&self) -> String {
        let p = self.precision;
        let Solution {
            x, y, residual, ..
        } = *self.solution;
        format!(
            "{x} * [{a:.p$}] + {y} * [{b:.p$}] + {residual:.p$} = {total:.p$}",
            a = self.equation.a(),
            b = self.equation.b(),
            total = self.solution.covered(self.equation) + residual,
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        let combination = self.combination();
        let bar = "=".repeat(combination.chars().count());

        writeln!(f, "==================")?;
        writeln!(f, "optimized solution")?;
        writeln!(f, "==================")?;
        writeln!(f, "L = {:.p$}", self.solution.target)?;
        writeln!(f, "a = {:.p$}", self.equation.a())?;
        writeln!(f, "b = {:.p$}", self.equation.b())?;
        writeln!(f, "{bar}")?;
        writeln!(f, "{combination}")?;
        writeln!(f, "{bar}")?;
        writeln!(
            f,
            "> covered without leftover: {:.p$}",
            self.solution.covered(self.equation)
        )?;
        write!(
            f,
            "> minimum out of {} residuals",
            self.solution.candidates
        )?;
        if self.solution.ties > 1 {
            write!(f, " ({} tied, largest x kept)", self.solution.ties)?;
        }
        if self.solution.status == Status::StoppedByObserver {
            write!(f, "\n> scan stopped early")?;
        }
        if self.equation.orientation().is_swapped() {
            write!(f, "\n> coefficients were given in reverse order")?;
        }
        if let Some(elapsed) = self.elapsed {
            write!(f, "\n> optimization took {elapsed:?}")?;
        }
        Ok(())
    }
}
