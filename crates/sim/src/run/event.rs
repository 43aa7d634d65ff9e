/// Event emitted by the driver once per tick.
///
/// Tick 0 carries the initial state after scene setup, before any
/// integration. A bounded-mode reset emits one extra event with the tick
/// count unchanged and `reset` set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickEvent {
    /// Number of integration steps executed so far.
    pub tick: usize,

    /// The plot clock, in seconds. Restarts at zero on reset; in the
    /// unbounded mode it only advances while plotting is enabled.
    pub time: f64,

    /// Angular displacement after this tick, in radians.
    pub theta: f64,

    /// Angular velocity after this tick, in radians per second.
    pub omega: f64,

    /// Whether this tick restarted the pendulum from its initial state.
    pub reset: bool,
}
