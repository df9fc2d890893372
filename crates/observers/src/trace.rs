use linfit_core::Observer;
use linfit_solvers::scan::{Action, Event, Update};

/// Forwards scan events to `tracing`.
///
/// Every candidate is logged at `TRACE`. Improvements of the running best and
/// excluded candidates are logged at `DEBUG`. The observer never acts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl Observer<Event, Action> for Trace {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        match *event {
            Event::Evaluated {
                candidate,
                update,
                best,
            } => {
                tracing::trace!(
                    x = candidate.x,
                    y = candidate.y,
                    residual = candidate.residual,
                    ?update,
                    "candidate evaluated"
                );
                if update == Update::Improved {
                    tracing::debug!(
                        x = best.x,
                        y = best.y,
                        residual = best.residual,
                        "new best candidate"
                    );
                }
            }
            Event::Excluded { x, y_estimate } => {
                tracing::debug!(x, y_estimate, "candidate excluded, negative y estimate");
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use linfit_core::Equation;
    use linfit_solvers::scan::{Config, Status, solve};

    #[test]
    fn never_interrupts_the_scan() {
        let equation = Equation::new(1.25, 0.8).expect("valid coefficients");

        let solution = solve(&equation, 10.0, &Config::default(), Trace).expect("should solve");

        assert_eq!(solution.status, Status::Completed);
        assert_eq!(solution.candidates, 9);
    }
}
