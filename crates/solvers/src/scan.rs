//! Exhaustive minimal-residual scan for `L ≈ a·x + b·y`.
//!
//! # Algorithm
//!
//! The scan works on a normalized [`Equation`] (`a >= b > 0`). Every `x` in
//! `0..=floor(L / a)` is a candidate. For each `x`, the largest admissible
//! `y = floor((L − a·x) / b)` is chosen, which leaves the residual
//! `L − a·x − b·y` in `[0, b)`.
//!
//! The candidates are folded in increasing `x` order into a running best:
//!
//! - a strictly smaller residual replaces the best and resets the tie count
//! - an equal residual is a tie; the larger `x` is kept
//! - a larger residual is ignored
//!
//! The result is the minimal residual with the largest `x` among ties, which
//! favors the solution that uses more of the larger unit.
//!
//! # Residual equality
//!
//! Ties are exact `f64` comparisons by default. Two residuals that are
//! mathematically equal but computed through different rounding paths may
//! not tie. [`Config::with_tie_tol`] opts in to a tolerance, which changes
//! which `x` is reported when residuals differ only by rounding.
//!
//! The bound `0 <= residual < b` holds when the arithmetic is exact. With
//! inputs that are not exactly representable, an accepted residual can come
//! out slightly negative (on the order of `1e-15`). Such a residual is
//! compared like any other, so it wins over an exact zero.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per candidate:
//!
//! - [`Event::Evaluated`]: the candidate was folded into the running best
//! - [`Event::Excluded`]: the real-valued `y` estimate was negative, which
//!   can only happen through rounding at the upper bound of the space
//!
//! Observers can return [`Action::StopEarly`] to finish with the best
//! candidate seen so far.

mod action;
mod best;
mod config;
mod error;
mod evaluate;
mod event;
mod length;
mod search;
mod solution;
mod space;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use evaluate::{Candidate, Evaluation, evaluate};
pub use event::{Event, Update};
pub use length::{LengthSolution, solve_length};
pub use solution::{Solution, Status};
pub use space::SearchSpace;

use linfit_core::{Equation, Observer};

use search::search;

/// Finds the candidate with minimal residual for `target`.
///
/// The observer receives an [`Event`] for every candidate in the search
/// space. See the [module docs](self) for the selection rule.
///
/// # Errors
///
/// Returns an error if `target` is negative or not finite, if `target / b`
/// does not fit in a `u64`, or if the search space is larger than
/// [`Config::max_candidates`].
pub fn solve<Obs>(
    equation: &Equation,
    target: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    search(equation, target, config, observer)
}

/// Finds the candidate with minimal residual without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `target` is negative or not finite, if `target / b`
/// does not fit in a `u64`, or if the search space is larger than
/// [`Config::max_candidates`].
pub fn solve_unobserved(
    equation: &Equation,
    target: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, target, config, ())
}
