//! Animate the pendulum in a native window.
//!
//! ```text
//! cargo run --example swing --features render
//! cargo run --example swing --features render -- 60
//! ```
//!
//! The pendulum swings at 2000 ticks per second, leaves a trail, and plots
//! its angle over time. It restarts from the initial angle whenever it comes
//! to rest. The optional argument overrides the starting angle in degrees.

use std::error::Error;

use plumb_sim::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let theta = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid angle — expected degrees, e.g. 60");
            std::process::exit(1);
        })
        .unwrap_or(45.0);

    let config = Config::default()
        .theta_degrees(theta)
        .rod_length(5.0)
        .dampening_coeff(0.3)
        .trail(true)
        .plot(true)
        .labels(true)
        .repeat(true);

    plumb_scene::show(config)?;
    Ok(())
}
