use std::ops::ControlFlow;

use linfit_core::{Equation, Observer};

use super::{
    Action, Config, Error, Event, SearchSpace, Solution, Status, best::Best, evaluate::evaluate,
};

/// Core scan implementation.
///
/// Folds every candidate of the search space into a [`Best`] accumulator in
/// increasing `x` order. The fold breaks out early only when the observer
/// asks it to.
pub(super) fn search<Obs>(
    equation: &Equation,
    target: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let space = SearchSpace::new(equation, target, config.max_candidates())?;

    let flow = space.iter().try_fold(Best::empty(), |mut best, x| {
        let event = best.record(evaluate(equation, target, x), config);
        match observer.observe(&event) {
            Some(Action::StopEarly) => ControlFlow::Break(best),
            None => ControlFlow::Continue(best),
        }
    });

    match flow {
        ControlFlow::Continue(best) => best.finish(Status::Completed, target),
        ControlFlow::Break(best) => best.finish(Status::StoppedByObserver, target),
    }
}
