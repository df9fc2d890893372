use linfit_core::Equation;

/// Indicates whether the scan covered the whole search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Every candidate in the search space was evaluated.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a minimal-residual scan.
///
/// `x` and `y` follow the normalized [`Equation`]: `x` multiplies the larger
/// coefficient. Use [`Solution::in_argument_order`] to match the caller's
/// original coefficient order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The target `L`.
    pub target: f64,

    /// Units of the larger coefficient.
    pub x: u64,

    /// Units of the smaller coefficient.
    pub y: u64,

    /// The leftover `L − a·x − b·y`.
    pub residual: f64,

    /// Number of `x` values evaluated.
    pub candidates: u64,

    /// Number of evaluated `x` values excluded for a negative `y` estimate.
    pub excluded: u64,

    /// Number of candidates that shared the minimal residual.
    pub ties: u64,
}

impl Solution {
    /// Returns `(x, y)` matched to the caller's coefficient order.
    #[must_use]
    pub fn in_argument_order(&self, equation: &Equation) -> (u64, u64) {
        equation.in_argument_order(self.x, self.y)
    }

    /// Returns `a·x + b·y`, the part of the target that is covered.
    #[must_use]
    pub fn covered(&self, equation: &Equation) -> f64 {
        equation.combine(self.x, self.y)
    }
}
