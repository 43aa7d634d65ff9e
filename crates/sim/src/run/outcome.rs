/// Indicates why the driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The pendulum settled within the rest thresholds and `repeat` was off.
    Settled,

    /// The time limit was reached and `repeat` was off.
    TimeLimitReached,

    /// An observer returned [`Action::StopEarly`](crate::Action).
    StoppedByObserver,
}

/// The result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Why the driver stopped.
    pub status: Status,

    /// Total number of integration steps executed.
    pub ticks: usize,

    /// The plot clock at exit, in seconds.
    pub time: f64,
}
