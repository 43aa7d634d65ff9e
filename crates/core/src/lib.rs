//! Core types for the plumb pendulum animation toolkit.
//!
//! This crate defines the shared abstractions the simulation driver and the
//! rendering sinks build on:
//!
//! - [`Pendulum`] — the damped pendulum model, advanced one fixed time step
//!   at a time with semi-implicit Euler integration
//! - [`Vec3`] — the cartesian position handed to a rendering surface
//! - [`Scene`], [`AngleTrace`] — the external renderer/plotter contract
//! - [`Observer`] — receives driver events and optionally returns control
//!   actions

mod observer;
mod pendulum;
mod scene;
mod vec3;

pub use observer::{Observer, ObserverFn};
pub use pendulum::{ParameterError, Pendulum};
pub use scene::{AngleTrace, Scene};
pub use vec3::Vec3;
