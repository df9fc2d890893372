use std::ops::RangeInclusive;

use linfit_core::Equation;

use super::Error;

/// First `f64` above every `u64`.
#[allow(clippy::cast_precision_loss)]
const U64_LIMIT: f64 = u64::MAX as f64;

/// The bounded set of `x` values worth evaluating.
///
/// For a normalized equation and a non-negative target `L`, the space is
/// `0..=floor(L / a)`. Any larger `x` would force `y` negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSpace {
    upper: u64,
}

impl SearchSpace {
    /// Derives the search space for `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not finite or negative, if the space
    /// holds more than `max_candidates` values, or if `target / b` does not
    /// fit in a `u64`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(equation: &Equation, target: f64, max_candidates: u64) -> Result<Self, Error> {
        if !target.is_finite() {
            return Err(Error::InvalidTarget { target });
        }
        if target < 0.0 {
            return Err(Error::EmptySearchSpace { target });
        }
        if target / equation.b() >= U64_LIMIT {
            return Err(Error::OutOfRange { target });
        }

        let bound = (target / equation.a()).floor();
        let too_many = Error::TooManyCandidates {
            count: bound + 1.0,
            limit: max_candidates,
        };

        // `bound` is below `U64_LIMIT` because `a >= b`.
        let upper = bound as u64;
        match upper.checked_add(1) {
            Some(count) if count <= max_candidates => Ok(Self { upper }),
            _ => Err(too_many),
        }
    }

    /// Returns the largest candidate `x`.
    #[must_use]
    pub fn upper(&self) -> u64 {
        self.upper
    }

    /// Returns the number of candidates, `upper + 1`.
    #[must_use]
    pub fn candidates(&self) -> u64 {
        self.upper + 1
    }

    /// Returns true if `x` is a member of the space.
    #[must_use]
    pub fn contains(&self, x: u64) -> bool {
        x <= self.upper
    }

    /// Returns the candidates in increasing order.
    #[must_use]
    pub fn iter(&self) -> RangeInclusive<u64> {
        0..=self.upper
    }
}

impl IntoIterator for SearchSpace {
    type Item = u64;
    type IntoIter = RangeInclusive<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::scan::Config;

    fn equation(a: f64, b: f64) -> Equation {
        Equation::new(a, b).expect("valid coefficients")
    }

    #[test]
    fn spans_zero_to_floor_of_target_over_a() {
        let space = SearchSpace::new(&equation(1.25, 0.8), 10.0, 100).expect("valid space");

        assert_eq!(space.upper(), 8);
        assert_eq!(space.candidates(), 9);
        assert_eq!(space.iter().collect::<Vec<_>>(), (0..=8).collect::<Vec<_>>());
        assert!(space.contains(8));
        assert!(!space.contains(9));
    }

    #[test]
    fn uses_larger_coefficient_regardless_of_argument_order() {
        let space = SearchSpace::new(&equation(0.8, 1.25), 10.0, 100).expect("valid space");
        assert_eq!(space.upper(), 8);
    }

    #[test]
    fn zero_target_has_single_candidate() {
        let space = SearchSpace::new(&equation(2.0, 1.0), 0.0, 1).expect("valid space");

        assert_eq!(space.upper(), 0);
        assert_eq!(space.into_iter().count(), 1);
    }

    #[test]
    fn target_below_a_has_single_candidate() {
        let space = SearchSpace::new(&equation(2.0, 1.0), 1.5, 100).expect("valid space");
        assert_eq!(space.candidates(), 1);
    }

    #[test]
    fn negative_target_is_empty() {
        let err = SearchSpace::new(&equation(2.0, 1.0), -3.0, 100);
        assert_eq!(err, Err(Error::EmptySearchSpace { target: -3.0 }));
    }

    #[test]
    fn non_finite_target_is_invalid() {
        assert!(matches!(
            SearchSpace::new(&equation(2.0, 1.0), f64::NAN, 100),
            Err(Error::InvalidTarget { .. })
        ));
        assert!(matches!(
            SearchSpace::new(&equation(2.0, 1.0), f64::INFINITY, 100),
            Err(Error::InvalidTarget { .. })
        ));
    }

    #[test]
    fn enforces_candidate_limit() {
        let err = SearchSpace::new(&equation(1.0, 1.0), 10.0, 10);
        assert_eq!(
            err,
            Err(Error::TooManyCandidates {
                count: 11.0,
                limit: 10
            })
        );

        assert!(SearchSpace::new(&equation(1.0, 1.0), 9.0, 10).is_ok());
    }

    #[test]
    fn default_config_accepts_large_targets() {
        let limit = Config::default().max_candidates();

        let space = SearchSpace::new(&equation(1.0, 1.0), 1e9, limit).expect("valid space");
        assert_eq!(space.candidates(), 1_000_000_001);

        let space = SearchSpace::new(&equation(1.0, 1.0), 1e18, limit).expect("valid space");
        assert_eq!(space.upper(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn rejects_targets_beyond_integer_range() {
        let err = SearchSpace::new(&equation(1e6, 1e-30), 1e6, u64::MAX);
        assert_eq!(err, Err(Error::OutOfRange { target: 1e6 }));
    }
}
