use linfit_core::CoefficientError;

/// Errors that can occur during a scan.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid coefficient: {0}")]
    InvalidCoefficient(#[from] CoefficientError),

    #[error("target must be finite, got {target}")]
    InvalidTarget { target: f64 },

    #[error("no candidates for negative target {target}")]
    EmptySearchSpace { target: f64 },

    #[error("search space of {count} candidates exceeds the limit of {limit}")]
    TooManyCandidates { count: f64, limit: u64 },

    #[error("target {target} needs more units of the smaller coefficient than fit in a u64")]
    OutOfRange { target: f64 },

    #[error("no candidate was accepted")]
    NoSolution,
}
