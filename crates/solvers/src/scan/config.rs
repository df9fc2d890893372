use thiserror::Error;

/// Configuration for the minimal-residual scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tie_tol: f64,
    max_candidates: u64,
}

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tie_tol must be finite and non-negative")]
    TieTol,

    #[error("max_candidates must be at least 1")]
    MaxCandidates,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.0, u64::MAX).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// A `tie_tol` of zero compares residuals for exact equality.
    ///
    /// # Errors
    ///
    /// Returns an error if `tie_tol` is negative or non-finite, or if
    /// `max_candidates` is zero.
    pub fn new(tie_tol: f64, max_candidates: u64) -> Result<Self, ConfigError> {
        if !tie_tol.is_finite() || tie_tol < 0.0 {
            return Err(ConfigError::TieTol);
        }
        if max_candidates == 0 {
            return Err(ConfigError::MaxCandidates);
        }

        Ok(Self {
            tie_tol,
            max_candidates,
        })
    }

    /// Returns a copy with a residual tie tolerance.
    ///
    /// Residuals within `tie_tol` of the running best are treated as ties
    /// instead of improvements, so the larger `x` wins. This changes the
    /// reported solution whenever rounding alone separates two residuals.
    ///
    /// # Errors
    ///
    /// Returns an error if `tie_tol` is negative or non-finite.
    pub fn with_tie_tol(self, tie_tol: f64) -> Result<Self, ConfigError> {
        Self::new(tie_tol, self.max_candidates)
    }

    /// Returns a copy with a different candidate limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_candidates` is zero.
    pub fn with_max_candidates(self, max_candidates: u64) -> Result<Self, ConfigError> {
        Self::new(self.tie_tol, max_candidates)
    }

    /// Returns the residual tie tolerance.
    #[must_use]
    pub fn tie_tol(&self) -> f64 {
        self.tie_tol
    }

    /// Returns the largest search space the scan accepts.
    ///
    /// Defaults to `u64::MAX`, which never rejects a representable space.
    #[must_use]
    pub fn max_candidates(&self) -> u64 {
        self.max_candidates
    }

    /// Returns true if `residual` ties with `best`.
    #[allow(clippy::float_cmp)]
    pub(super) fn is_tie(&self, residual: f64, best: f64) -> bool {
        if self.tie_tol == 0.0 {
            residual == best
        } else {
            (residual - best).abs() <= self.tie_tol
        }
    }

    /// Returns true if `residual` improves on `best` by more than the tolerance.
    pub(super) fn is_improvement(&self, residual: f64, best: f64) -> bool {
        residual < best - self.tie_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_exact_ties() {
        let config = Config::default();

        assert_eq!(config.tie_tol(), 0.0);
        assert_eq!(config.max_candidates(), u64::MAX);
        assert!(config.is_tie(0.4, 0.4));
        assert!(!config.is_tie(0.1 + 0.2, 0.3));
    }

    #[test]
    fn rejects_invalid_tie_tol() {
        assert_eq!(Config::new(-1e-9, 10), Err(ConfigError::TieTol));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::TieTol));
        assert_eq!(
            Config::default().with_tie_tol(f64::INFINITY),
            Err(ConfigError::TieTol)
        );
    }

    #[test]
    fn rejects_zero_max_candidates() {
        assert_eq!(
            Config::default().with_max_candidates(0),
            Err(ConfigError::MaxCandidates)
        );
    }

    #[test]
    fn tolerance_widens_ties() {
        let config = Config::default().with_tie_tol(1e-9).expect("valid tolerance");

        assert!(config.is_tie(0.1 + 0.2, 0.3));
        assert!(!config.is_improvement(0.3, 0.1 + 0.2));
        assert!(config.is_improvement(0.2, 0.3));
    }

    #[test]
    fn exact_improvement_is_strict() {
        let config = Config::default();

        assert!(config.is_improvement(0.2, 0.3));
        assert!(!config.is_improvement(0.3, 0.3));
        assert!(config.is_improvement(0.3, f64::INFINITY));
    }
}
