use linfit_core::Equation;

/// An evaluated `(x, y)` pair and its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    /// Units of the larger coefficient.
    pub x: u64,

    /// Units of the smaller coefficient, the largest that still fits.
    pub y: u64,

    /// The leftover `L − a·x − b·y`.
    pub residual: f64,
}

/// The outcome of evaluating a single `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// The candidate is admissible.
    Accepted(Candidate),

    /// The real-valued `y` estimate was negative.
    Excluded {
        /// The evaluated `x`.
        x: u64,

        /// The real-valued `(L − a·x) / b`.
        y_estimate: f64,
    },
}

/// Evaluates the candidate for `x`.
///
/// Picks `y = floor((L − a·x) / b)`, the largest `y` that keeps the residual
/// non-negative, so the residual is `b` times the fractional part of the
/// real-valued estimate and lies in `[0, b)`.
///
/// Inside the [`SearchSpace`](super::SearchSpace) the estimate is only
/// negative when `a·x` rounds above `L` at the upper bound.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn evaluate(equation: &Equation, target: f64, x: u64) -> Evaluation {
    let y_estimate = (target - equation.a() * x as f64) / equation.b();
    if y_estimate < 0.0 {
        return Evaluation::Excluded { x, y_estimate };
    }

    let y = y_estimate.floor() as u64;
    Evaluation::Accepted(Candidate {
        x,
        y,
        residual: equation.residual(target, x, y),
    })
}
