use super::{Candidate, Config, Error, Evaluation, Event, Solution, Status, Update};

/// Fold state of the scan: the running best and the scan counters.
///
/// `reference` is the residual that opened the current tie group. With exact
/// ties it equals the best candidate's residual.
pub(super) struct Best {
    candidate: Option<Candidate>,
    reference: f64,
    ties: u64,
    evaluated: u64,
    excluded: u64,
}

impl Best {
    /// Creates an empty best tracker.
    pub(super) fn empty() -> Self {
        Self {
            candidate: None,
            reference: f64::INFINITY,
            ties: 0,
            evaluated: 0,
            excluded: 0,
        }
    }

    /// Folds one evaluation into the state and returns the matching event.
    pub(super) fn record(&mut self, evaluation: Evaluation, config: &Config) -> Event {
        self.evaluated += 1;

        match evaluation {
            Evaluation::Accepted(candidate) => {
                let update = self.update(candidate, config);
                Event::Evaluated {
                    candidate,
                    update,
                    best: self.candidate.unwrap_or(candidate),
                }
            }
            Evaluation::Excluded { x, y_estimate } => {
                self.excluded += 1;
                Event::Excluded { x, y_estimate }
            }
        }
    }

    /// Updates the best candidate, keeping the largest `x` among ties.
    pub(super) fn update(&mut self, candidate: Candidate, config: &Config) -> Update {
        if config.is_improvement(candidate.residual, self.reference) {
            self.reference = candidate.residual;
            self.candidate = Some(candidate);
            self.ties = 1;
            return Update::Improved;
        }

        if config.is_tie(candidate.residual, self.reference) {
            self.ties += 1;
            if self.candidate.is_none_or(|best| candidate.x >= best.x) {
                self.candidate = Some(candidate);
            }
            return Update::Tied;
        }

        Update::Ignored
    }

    /// Finalizes the scan using the best candidate.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSolution` if no candidate was accepted.
    pub(super) fn finish(self, status: Status, target: f64) -> Result<Solution, Error> {
        let best = self.candidate.ok_or(Error::NoSolution)?;
        Ok(Solution {
            status,
            target,
            x: best.x,
            y: best.y,
            residual: best.residual,
            candidates: self.evaluated,
            excluded: self.excluded,
            ties: self.ties,
        })
    }
}
