/// Receives solver events and decides how a scan should proceed.
///
/// Observers let callers watch or cut short a scan without changing the
/// solver API. Logging, residual tables and early stopping are all written
/// as observers.
///
/// The `observe` method returns `Option<A>`: `Some(action)` requests a
/// solver-specific action, `None` lets the solver continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer
/// that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
