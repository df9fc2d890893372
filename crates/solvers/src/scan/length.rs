use linfit_core::Equation;
use uom::si::{f64::Length, length::meter};

use super::{Config, Error, Solution, search::search};

/// The result of fitting a target length with two unit lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthSolution {
    /// The normalized equation, coefficients in meters.
    pub equation: Equation,

    /// The scan result, target and residual in meters.
    pub solution: Solution,

    /// The part of the target not covered by whole units.
    pub leftover: Length,
}

/// Fits `target` with whole units of `unit_x` and `unit_y`.
///
/// The larger unit is always reported as `x`; see
/// [`Solution::in_argument_order`] to recover the argument order.
///
/// # Errors
///
/// Returns an error if either unit is not a finite positive length, or for
/// any reason [`solve`](super::solve) fails.
pub fn solve_length(
    unit_x: Length,
    unit_y: Length,
    target: Length,
    config: &Config,
) -> Result<LengthSolution, Error> {
    let equation = Equation::from_lengths(unit_x, unit_y)?;
    let solution = search(&equation, target.get::<meter>(), config, ())?;

    Ok(LengthSolution {
        equation,
        solution,
        leftover: Length::new::<meter>(solution.residual),
    })
}
