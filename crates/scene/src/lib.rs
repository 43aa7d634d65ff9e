//! Scene implementations for the plumb pendulum simulator.
//!
//! The driver in `plumb-sim` talks to abstract [`Scene`](plumb_core::Scene)
//! and [`AngleTrace`](plumb_core::AngleTrace) sinks. This crate provides two:
//!
//! - [`RecordingScene`] and [`RecordingTrace`] capture every call for
//!   headless runs and tests.
//! - [`SharedScene`] and [`show`] (behind the `render` feature) animate the
//!   pendulum in a native egui window.

mod record;

pub use record::{RecordingScene, RecordingTrace, SceneCall};

#[cfg(feature = "render")]
mod viewer;

#[cfg(feature = "render")]
pub use viewer::{SharedScene, show};
