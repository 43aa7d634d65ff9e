//! Fixed-step simulation driver for the plumb pendulum toolkit.
//!
//! The driver owns the time loop: each tick it advances the
//! [`Pendulum`](plumb_core::Pendulum) by one step of semi-implicit Euler,
//! decides whether to keep going, reset, or stop, and pushes the updated
//! geometry to a [`Scene`](plumb_core::Scene) and (optionally) an
//! [`AngleTrace`](plumb_core::AngleTrace).
//!
//! # Run modes
//!
//! - **Unbounded** (no time limit): runs until the pendulum settles within
//!   the configured rest thresholds, then either resets and repeats or stops.
//! - **Bounded** (time limit set): runs a fixed number of ticks per pass,
//!   then either resets and repeats or stops. No settling check.
//!
//! An [`Observer`](plumb_core::Observer) receives a [`TickEvent`] per tick
//! and may stop the run early, which is also how the otherwise-endless
//! repeat modes are cancelled cooperatively.
//!
//! # Example
//!
//! ```
//! use plumb_sim::{Config, Status, run};
//!
//! let config = Config::default()
//!     .theta_degrees(30.0)
//!     .dt(0.01)
//!     .frame_rate(f64::INFINITY)
//!     .time_limit(2.0)
//!     .repeat(false);
//!
//! let outcome = run(&config, &mut (), &mut (), ()).unwrap();
//! assert_eq!(outcome.status, Status::TimeLimitReached);
//! assert_eq!(outcome.ticks, 200);
//! ```

mod config;
mod label;
mod pacer;
mod run;

pub use config::{Config, SettleLimits};
pub use label::input_summary;
pub use pacer::Pacer;
pub use run::{Action, Outcome, RunError, Status, TickEvent, run};
