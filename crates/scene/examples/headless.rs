//! Run a bounded simulation with no window and print what happened.
//!
//! ```text
//! cargo run --example headless
//! cargo run --example headless -- 5.0
//! ```
//!
//! The optional argument is the simulated duration in seconds (default 3).

use std::error::Error;

use plumb_scene::{RecordingScene, RecordingTrace};
use plumb_sim::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let duration = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid duration — expected a number of seconds, e.g. 5.0");
            std::process::exit(1);
        })
        .unwrap_or(3.0);

    let config = Config::default()
        .time_limit(duration)
        .repeat(false)
        .plot(true)
        .labels(false)
        .frame_rate(f64::INFINITY);

    let mut scene = RecordingScene::new();
    let mut trace = RecordingTrace::new();
    let outcome = plumb_sim::run(&config, &mut scene, &mut trace, ())?;

    println!("status: {:?}", outcome.status);
    println!("ticks:  {}", outcome.ticks);
    println!("time:   {:.3} s", outcome.time);

    if let Some(bob) = scene.last_bob_position() {
        println!("bob:    ({:.4}, {:.4}, {:.4}) m", bob.x, bob.y, bob.z);
    }
    if let Some(last) = trace.points().last() {
        println!("theta:  {:.4} deg at t = {:.3} s", last[1], last[0]);
    }

    Ok(())
}
