/// Which caller argument ended up as the scanned coefficient.
///
/// Normalization always pairs the larger coefficient with `x`, so the `x`
/// and `y` of a solution follow coefficient magnitude, not argument order.
/// `Orientation` records that choice so it can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// The first argument was already the larger (or equal) coefficient.
    AsGiven,

    /// The arguments were exchanged so the larger coefficient comes first.
    Swapped,
}

impl Orientation {
    /// Returns true if normalization exchanged the coefficients.
    #[must_use]
    pub fn is_swapped(self) -> bool {
        matches!(self, Self::Swapped)
    }

    /// Arranges a normalized `(x, y)` pair back into argument order.
    ///
    /// The first element of the result multiplies the caller's first
    /// coefficient, the second multiplies the caller's second coefficient.
    #[must_use]
    pub fn arrange<T>(self, x: T, y: T) -> (T, T) {
        match self {
            Self::AsGiven => (x, y),
            Self::Swapped => (y, x),
        }
    }
}
