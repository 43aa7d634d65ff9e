//! The fixed-step simulation driver.
//!
//! # Algorithm
//!
//! 1. Build the pendulum from the [`Config`] and set up the scene: anchor,
//!    rod, bob, the optional input-summary label, and the optional plot
//!    seeded with the initial angle.
//! 2. Emit a [`TickEvent`] for tick 0 (the initial state).
//! 3. Loop, one fixed `dt` per tick: throttle to the configured tick rate,
//!    advance velocity then position (semi-implicit Euler), then either
//!    - **unbounded mode**: if the pendulum has settled, reset (and clear
//!      trail/plot) when repeating, otherwise stop; push geometry every
//!      surviving tick; append a plot point and advance the clock only on
//!      non-reset ticks while plotting;
//!    - **bounded mode**: push geometry, append a plot point while plotting,
//!      always advance the clock; after `ceil(limit / dt)` ticks, reset and
//!      start another pass when repeating, otherwise stop.
//! 4. Emit a [`TickEvent`] after every tick; an observer returning
//!    [`Action::StopEarly`] ends the run immediately.
//!
//! The per-pass tick count is computed up front so float accumulation in the
//! clock can never add a spurious extra tick: `time_limit = 1.0, dt = 0.1`
//! runs exactly 10 ticks per pass.

mod action;
mod error;
mod event;
mod outcome;

pub use action::Action;
pub use error::RunError;
pub use event::TickEvent;
pub use outcome::{Outcome, Status};

use plumb_core::{AngleTrace, Observer, Pendulum, Scene};

use crate::{Config, Pacer, input_summary};

/// Runs the simulation described by `config` against the given sinks.
///
/// Geometry goes to `scene` every tick; angle-vs-time points go to `trace`
/// when plotting is enabled; `observer` sees a [`TickEvent`] per tick and
/// may stop the run early. Pass `()` for any collaborator you do not need.
///
/// With `repeat` set and no observer stopping it, a run only ends when the
/// process does — that is the demo behavior, not a bug.
///
/// # Errors
///
/// Returns a [`RunError`] if a physical parameter is invalid when first
/// read; numerical blow-up from an oversized `dt` is not detected.
pub fn run<S, T, Obs>(
    config: &Config,
    scene: &mut S,
    trace: &mut T,
    observer: Obs,
) -> Result<Outcome, RunError>
where
    S: Scene,
    T: AngleTrace,
    Obs: Observer<TickEvent, Action>,
{
    let pendulum = config.pendulum();
    let mut driver = Driver {
        config,
        theta0: pendulum.theta,
        omega0: pendulum.omega,
        pendulum,
        scene,
        trace,
        observer,
        pacer: Pacer::new(config.frame_rate),
        time: 0.0,
        ticks: 0,
    };

    driver.setup()?;
    if driver.notify(false).is_some() {
        return Ok(driver.outcome(Status::StoppedByObserver));
    }

    match config.time_limit {
        None => driver.run_until_settled(),
        Some(limit) => driver.run_until_time(limit),
    }
}

/// Shared per-tick logic for both run modes.
struct Driver<'a, S, T, Obs> {
    config: &'a Config,
    pendulum: Pendulum,
    theta0: f64,
    omega0: f64,
    scene: &'a mut S,
    trace: &'a mut T,
    observer: Obs,
    pacer: Pacer,
    time: f64,
    ticks: usize,
}

impl<S, T, Obs> Driver<'_, S, T, Obs>
where
    S: Scene,
    T: AngleTrace,
    Obs: Observer<TickEvent, Action>,
{
    /// One-time scene construction, in the order a renderer expects it.
    fn setup(&mut self) -> Result<(), RunError> {
        self.scene.create_anchor();
        let start = self.pendulum.position()?;
        self.scene.create_rod(start);
        self.scene.create_bob(start, self.config.trail);

        if self.config.labels {
            self.scene.show_label(&input_summary(self.config));
        }
        if self.config.plot {
            self.trace.append(0.0, self.pendulum.theta.to_degrees());
        }
        Ok(())
    }

    /// Advances the model by one tick: pace, then velocity, then position.
    fn advance(&mut self) -> Result<(), RunError> {
        self.pacer.pace();
        self.pendulum.step_velocity()?;
        self.pendulum.step_position();
        self.ticks += 1;
        Ok(())
    }

    fn push_geometry(&mut self) -> Result<(), RunError> {
        let position = self.pendulum.position()?;
        self.scene.set_rod_axis(position);
        self.scene.set_bob_position(position);
        Ok(())
    }

    /// Restarts the pendulum from its initial state and clears the rendered
    /// history. The plot clock restarts at zero.
    fn reset(&mut self) {
        self.pendulum.theta = self.theta0;
        self.pendulum.omega = self.omega0;
        self.scene.clear_trail();
        if self.config.plot {
            self.trace.clear();
        }
        self.time = 0.0;
    }

    fn settled(&self) -> bool {
        let limits = self.config.limits;
        self.pendulum.theta.abs() < limits.angle && self.pendulum.omega.abs() < limits.velocity
    }

    /// Emits a [`TickEvent`] and returns the observer's action, if any.
    fn notify(&mut self, reset: bool) -> Option<Action> {
        let event = TickEvent {
            tick: self.ticks,
            time: self.time,
            theta: self.pendulum.theta,
            omega: self.pendulum.omega,
            reset,
        };
        self.observer.observe(&event)
    }

    fn outcome(&self, status: Status) -> Outcome {
        Outcome {
            status,
            ticks: self.ticks,
            time: self.time,
        }
    }

    /// Unbounded mode: loop until settled, resetting when repeat is on.
    fn run_until_settled(&mut self) -> Result<Outcome, RunError> {
        loop {
            self.advance()?;

            let mut reset = false;
            if self.settled() {
                if self.config.repeat {
                    self.reset();
                    reset = true;
                } else {
                    return Ok(self.outcome(Status::Settled));
                }
            }

            self.push_geometry()?;
            if !reset && self.config.plot {
                self.trace.append(self.time, self.pendulum.theta.to_degrees());
                self.time += self.config.dt;
            }

            if self.notify(reset).is_some() {
                return Ok(self.outcome(Status::StoppedByObserver));
            }
        }
    }

    /// Bounded mode: a fixed number of ticks per pass, no settling check.
    fn run_until_time(&mut self, limit: f64) -> Result<Outcome, RunError> {
        let steps = steps_per_pass(limit, self.config.dt);
        if steps == 0 {
            return Ok(self.outcome(Status::TimeLimitReached));
        }

        loop {
            for _ in 0..steps {
                self.advance()?;
                self.push_geometry()?;
                if self.config.plot {
                    self.trace.append(self.time, self.pendulum.theta.to_degrees());
                }
                self.time += self.config.dt;

                if self.notify(false).is_some() {
                    return Ok(self.outcome(Status::StoppedByObserver));
                }
            }

            if !self.config.repeat {
                return Ok(self.outcome(Status::TimeLimitReached));
            }
            self.reset();
            if self.notify(true).is_some() {
                return Ok(self.outcome(Status::StoppedByObserver));
            }
        }
    }
}

/// Number of ticks a pass of the bounded mode executes: the count an exact
/// `while time < limit` accumulation of `dt` would produce.
fn steps_per_pass(limit: f64, dt: f64) -> usize {
    if limit <= 0.0 || dt <= 0.0 || !(limit / dt).is_finite() {
        return 0;
    }
    (limit / dt).ceil() as usize
}
