/// Receives driver events and optionally returns a control action.
///
/// `E` is the event type emitted by a driver and `A` the action type it
/// accepts back. Returning `None` lets the run continue; returning an action
/// asks the driver to change course (typically to stop early).
///
/// The unit type `()` is the no-op observer. Closures can be adapted with
/// [`ObserverFn`].
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Forwards to the underlying observer, so `&mut obs` can be handed to a
/// driver that takes an observer by value and `obs` inspected afterwards.
impl<E, A, O> Observer<E, A> for &mut O
where
    O: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Adapts a closure into an [`Observer`].
///
/// A plain blanket impl over `FnMut` would overlap with the `()` impl under
/// coherence rules, so closures go through this newtype instead:
///
/// ```
/// use plumb_core::{Observer, ObserverFn};
///
/// let mut seen = 0;
/// let mut obs = ObserverFn(|event: &u32| {
///     seen += *event;
///     None::<()>
/// });
/// obs.observe(&3);
/// obs.observe(&4);
/// drop(obs);
/// assert_eq!(seen, 7);
/// ```
pub struct ObserverFn<F>(pub F);

impl<E, A, F> Observer<E, A> for ObserverFn<F>
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.0)(event)
    }
}
