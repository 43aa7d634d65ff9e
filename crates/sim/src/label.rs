use crate::Config;

/// Formats the startup label describing the equation of motion and the
/// starting inputs of a run.
#[must_use]
pub fn input_summary(config: &Config) -> String {
    format!(
        "Angular Acceleration (α):\n\
         α = -Dω - (g/L)sin(θ)\n\
         \n\
         Starting Theta (θ) = {theta} °\n\
         Starting Omega (ω) = {omega} °/s\n\
         Damping Coeff (D) = {damping}\n\
         Gravity (g) = {gravity} m/s²\n\
         Rod Length (L) = {length} m",
        theta = config.theta,
        omega = config.omega,
        damping = config.dampening_coeff,
        gravity = config.gravity,
        length = config.rod_length,
    )
}
