use std::fmt;

use thiserror::Error;
use uom::si::{f64::Length, length::meter};

use crate::Orientation;

/// Errors that can occur when constructing an [`Equation`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoefficientError {
    #[error("coefficient must be positive, got {0}")]
    NotPositive(f64),

    #[error("coefficient must be finite, got {0}")]
    NotFinite(f64),
}

/// A normalized coefficient pair for `L ≈ a·x + b·y`.
///
/// Construction orders the coefficients so that `a >= b > 0`. The larger
/// coefficient multiplies `x`, the exhaustively scanned variable, which keeps
/// the number of candidates (`L / a`) as small as possible.
///
/// # Post-condition
///
/// After construction, `x` always refers to the larger coefficient. When the
/// caller passed the smaller coefficient first, [`Equation::orientation`]
/// reports [`Orientation::Swapped`] and [`Equation::in_argument_order`] maps a
/// solution back to the caller's argument order.
///
/// # Example
///
/// ```rust
/// use linfit_core::{Equation, Orientation};
///
/// let equation = Equation::new(0.8, 1.25).unwrap();
///
/// assert_eq!(equation.a(), 1.25);
/// assert_eq!(equation.b(), 0.8);
/// assert_eq!(equation.orientation(), Orientation::Swapped);
/// assert_eq!(equation.in_argument_order(8, 0), (0, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Equation {
    a: f64,
    b: f64,
    orientation: Orientation,
}

impl Equation {
    /// Creates a normalized equation from two coefficients.
    ///
    /// Equal coefficients keep their argument order.
    ///
    /// # Errors
    ///
    /// Returns an error if either coefficient is not finite or not positive.
    pub fn new(a: f64, b: f64) -> Result<Self, CoefficientError> {
        let a = validate(a)?;
        let b = validate(b)?;

        if a < b {
            Ok(Self {
                a: b,
                b: a,
                orientation: Orientation::Swapped,
            })
        } else {
            Ok(Self {
                a,
                b,
                orientation: Orientation::AsGiven,
            })
        }
    }

    /// Creates a normalized equation from two unit lengths.
    ///
    /// Both lengths are taken in meters.
    ///
    /// # Errors
    ///
    /// Returns an error if either length is not finite or not positive.
    pub fn from_lengths(a: Length, b: Length) -> Result<Self, CoefficientError> {
        Self::new(a.get::<meter>(), b.get::<meter>())
    }

    /// Returns the larger coefficient, paired with `x`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the smaller coefficient, paired with `y`.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns whether normalization swapped the caller's coefficients.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Maps a normalized `(x, y)` pair back to the caller's argument order.
    #[must_use]
    pub fn in_argument_order<T>(&self, x: T, y: T) -> (T, T) {
        self.orientation.arrange(x, y)
    }

    /// Returns `a·x + b·y`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn combine(&self, x: u64, y: u64) -> f64 {
        self.a * x as f64 + self.b * y as f64
    }

    /// Returns the leftover `target − a·x − b·y`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn residual(&self, target: f64, x: u64, y: u64) -> f64 {
        target - self.a * x as f64 - self.b * y as f64
    }
}

impl TryFrom<(f64, f64)> for Equation {
    type Error = CoefficientError;

    fn try_from((a, b): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L ≈ {}·x + {}·y", self.a, self.b)
    }
}

fn validate(value: f64) -> Result<f64, CoefficientError> {
    if !value.is_finite() {
        return Err(CoefficientError::NotFinite(value));
    }
    if value <= 0.0 {
        return Err(CoefficientError::NotPositive(value));
    }
    Ok(value)
}
