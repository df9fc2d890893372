use super::Candidate;

/// How a candidate changed the running best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// The candidate has a strictly smaller residual and is the new best.
    Improved,

    /// The candidate ties the best residual; the larger `x` is kept.
    Tied,

    /// The candidate has a larger residual.
    Ignored,
}

/// Events emitted by the scan, one per candidate `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A candidate was folded into the running best.
    Evaluated {
        /// The evaluated candidate.
        candidate: Candidate,

        /// How the candidate changed the running best.
        update: Update,

        /// The running best after this candidate.
        best: Candidate,
    },

    /// The candidate was excluded because its `y` estimate was negative.
    Excluded {
        /// The evaluated `x`.
        x: u64,

        /// The real-valued `(L − a·x) / b`.
        y_estimate: f64,
    },
}

impl Event {
    /// Returns the `x` this event is about.
    #[must_use]
    pub fn x(&self) -> u64 {
        match self {
            Self::Evaluated { candidate, .. } => candidate.x,
            Self::Excluded { x, .. } => *x,
        }
    }

    /// Returns the candidate's residual, or `f64::NAN` for an excluded `x`.
    #[must_use]
    pub fn residual(&self) -> f64 {
        match self {
            Self::Evaluated { candidate, .. } => candidate.residual,
            Self::Excluded { .. } => f64::NAN,
        }
    }

    /// Returns the running best, if any candidate has been accepted.
    #[must_use]
    pub fn best(&self) -> Option<Candidate> {
        match self {
            Self::Evaluated { best, .. } => Some(*best),
            Self::Excluded { .. } => None,
        }
    }
}
