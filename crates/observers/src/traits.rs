//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written against them works with any solver that implements them.
//!
//! # Example
//!
//! ```rust
//! use linfit_core::Observer;
//! use linfit_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct AfterCandidates {
//!     limit: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for AfterCandidates {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         self.seen += 1;
//!         (self.seen >= self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use linfit_core::Observer;
use linfit_solvers::scan;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event has no residual.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for scan::Event {
    fn residual(&self) -> f64 {
        scan::Event::residual(self)
    }
}

impl CanStopEarly for scan::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

/// Stops a solver once a residual is at or below `threshold`.
///
/// Stopping early skips the remaining candidates, so a later candidate with
/// an equal residual and a larger `x` is never seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow {
    threshold: f64,
}

impl StopBelow {
    /// Creates an observer that stops at `residual <= threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual() <= self.threshold).then(A::stop_early)
    }
}
