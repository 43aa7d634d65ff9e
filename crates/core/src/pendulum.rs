use thiserror::Error;

use crate::Vec3;

/// A damped pendulum advanced one fixed time step at a time.
///
/// The equation of motion is
///
/// ```text
///   α = -(g / L)·sin(θ) - D·ω
/// ```
///
/// integrated with semi-implicit (symplectic) Euler: [`step_velocity`] first
/// updates `omega` from the current angle, then [`step_position`] updates
/// `theta` from the *new* velocity. Calling them in the opposite order is a
/// different integrator and changes the numerical behavior.
///
/// `theta` and `omega` are plain public fields so a driver can reset them in
/// place between runs. The angle is signed and unbounded; it is never
/// normalized into `[-π, π]`.
///
/// # Parameter validation
///
/// `rod_length` and `dampening_coeff` are validated when *read*, not when
/// written. A builder or setter accepts any value; the first operation that
/// actually uses the offending parameter returns a [`ParameterError`].
///
/// [`step_velocity`]: Pendulum::step_velocity
/// [`step_position`]: Pendulum::step_position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    /// Angular displacement from vertical rest, in radians.
    pub theta: f64,
    /// Angular velocity, in radians per second.
    pub omega: f64,
    /// Fixed integration step, in seconds.
    pub dt: f64,
    /// Acceleration due to gravity, in m/s².
    pub gravity: f64,
    /// Whether the rendered bob should leave a trail.
    pub trail: bool,
    rod_length: f64,
    dampening_coeff: f64,
}

/// An error raised when an invalid physical parameter is read.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("rod length must be greater than zero, got {0} m")]
    RodLength(f64),
    #[error("dampening coefficient must not be negative, got {0}")]
    DampeningCoeff(f64),
}

impl Default for Pendulum {
    /// A pendulum released from 45° at rest: dt 0.001 s, 3 m rod, damping
    /// coefficient 0.5, g = 9.8 m/s², no trail.
    fn default() -> Self {
        Self {
            theta: 45.0_f64.to_radians(),
            omega: 0.0,
            dt: 0.001,
            gravity: 9.8,
            trail: false,
            rod_length: 3.0,
            dampening_coeff: 0.5,
        }
    }
}

impl Pendulum {
    /// Sets the starting angle from vertical rest, in degrees.
    #[must_use]
    pub fn with_theta_degrees(mut self, degrees: f64) -> Self {
        self.theta = degrees.to_radians();
        self
    }

    /// Sets the starting angular velocity, in degrees per second.
    #[must_use]
    pub fn with_omega_degrees(mut self, degrees_per_second: f64) -> Self {
        self.omega = degrees_per_second.to_radians();
        self
    }

    /// Sets the integration time step, in seconds.
    #[must_use]
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Sets the rod length, in meters. Not validated until read.
    #[must_use]
    pub fn with_rod_length(mut self, rod_length: f64) -> Self {
        self.rod_length = rod_length;
        self
    }

    /// Sets the damping coefficient. Not validated until read.
    #[must_use]
    pub fn with_dampening_coeff(mut self, dampening_coeff: f64) -> Self {
        self.dampening_coeff = dampening_coeff;
        self
    }

    /// Sets the acceleration due to gravity, in m/s².
    #[must_use]
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets whether the rendered bob should leave a trail.
    #[must_use]
    pub fn with_trail(mut self, trail: bool) -> Self {
        self.trail = trail;
        self
    }

    /// Overwrites the rod length without validating it.
    pub fn set_rod_length(&mut self, rod_length: f64) {
        self.rod_length = rod_length;
    }

    /// Overwrites the damping coefficient without validating it.
    pub fn set_dampening_coeff(&mut self, dampening_coeff: f64) {
        self.dampening_coeff = dampening_coeff;
    }

    /// Returns the rod length, in meters.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::RodLength`] if the stored value is not
    /// strictly positive. NaN fails the check.
    pub fn rod_length(&self) -> Result<f64, ParameterError> {
        if self.rod_length > 0.0 {
            Ok(self.rod_length)
        } else {
            Err(ParameterError::RodLength(self.rod_length))
        }
    }

    /// Returns the damping coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::DampeningCoeff`] if the stored value is
    /// negative. NaN fails the check.
    pub fn dampening_coeff(&self) -> Result<f64, ParameterError> {
        if self.dampening_coeff >= 0.0 {
            Ok(self.dampening_coeff)
        } else {
            Err(ParameterError::DampeningCoeff(self.dampening_coeff))
        }
    }

    /// Computes the angular acceleration at the current state, in rad/s².
    ///
    /// Pure function of the current angle, velocity, and the physical
    /// parameters; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the rod length or damping coefficient
    /// is invalid; this is where a bad write surfaces.
    pub fn angular_acceleration(&self) -> Result<f64, ParameterError> {
        let restoring = -(self.gravity / self.rod_length()?) * self.theta.sin();
        Ok(restoring - self.dampening_coeff()? * self.omega)
    }

    /// Advances the angular velocity by one time step and returns it.
    ///
    /// Must be called before [`step_position`](Pendulum::step_position)
    /// within a tick.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if computing the acceleration fails.
    pub fn step_velocity(&mut self) -> Result<f64, ParameterError> {
        self.omega += self.angular_acceleration()? * self.dt;
        Ok(self.omega)
    }

    /// Advances the angle by one time step using the current (already
    /// updated) velocity and returns it.
    pub fn step_position(&mut self) -> f64 {
        self.theta += self.omega * self.dt;
        self.theta
    }

    /// Returns the cartesian position of the bob center.
    ///
    /// The anchor is the origin; at rest the bob hangs at `(0, -L, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::RodLength`] if the rod length is invalid.
    pub fn position(&self) -> Result<Vec3, ParameterError> {
        let length = self.rod_length()?;
        Ok(Vec3::new(
            length * self.theta.sin(),
            -length * self.theta.cos(),
            0.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    fn pendulum() -> Pendulum {
        Pendulum::default()
            .with_theta_degrees(30.0)
            .with_omega_degrees(10.0)
            .with_dt(0.01)
            .with_rod_length(2.0)
            .with_dampening_coeff(0.25)
            .with_gravity(9.8)
    }

    #[test]
    fn builder_converts_degrees_to_radians() {
        let pen = pendulum();
        assert_relative_eq!(pen.theta, 30.0_f64.to_radians());
        assert_relative_eq!(pen.omega, 10.0_f64.to_radians());
    }

    #[test]
    fn acceleration_is_zero_at_rest_equilibrium() {
        let pen = pendulum().with_theta_degrees(0.0).with_omega_degrees(0.0);
        assert_relative_eq!(pen.angular_acceleration().unwrap(), 0.0);
    }

    #[test]
    fn one_tick_is_deterministic_and_semi_implicit() {
        let mut pen = pendulum();
        let (theta, omega) = (pen.theta, pen.omega);
        let (g, length, damping, dt) = (9.8, 2.0, 0.25, 0.01);

        let expected_omega = omega + (-(g / length) * theta.sin() - damping * omega) * dt;
        let expected_theta = theta + expected_omega * dt;

        assert_eq!(pen.step_velocity().unwrap(), expected_omega);
        assert_eq!(pen.step_position(), expected_theta);
        assert_eq!(pen.omega, expected_omega);
        assert_eq!(pen.theta, expected_theta);
    }

    #[test]
    fn position_hangs_straight_down_at_zero_angle() {
        let pen = pendulum().with_theta_degrees(0.0);
        let pos = pen.position().unwrap();
        assert_relative_eq!(pos.x, 0.0);
        assert_relative_eq!(pos.y, -2.0);
        assert_relative_eq!(pos.z, 0.0);
    }

    #[test]
    fn position_is_horizontal_at_quarter_turn() {
        let mut pen = pendulum();
        pen.theta = FRAC_PI_2;
        let pos = pen.position().unwrap();
        assert_relative_eq!(pos.x, 2.0);
        assert_relative_eq!(pos.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pos.z, 0.0);
    }

    #[test]
    fn valid_parameters_pass_through_unchanged() {
        let pen = pendulum();
        assert_eq!(pen.rod_length().unwrap(), 2.0);
        assert_eq!(pen.dampening_coeff().unwrap(), 0.25);

        let undamped = pendulum().with_dampening_coeff(0.0);
        assert_eq!(undamped.dampening_coeff().unwrap(), 0.0);
    }

    #[test]
    fn invalid_rod_length_fails_on_read_not_on_write() {
        let mut pen = pendulum();
        pen.set_rod_length(0.0);

        assert_eq!(pen.rod_length(), Err(ParameterError::RodLength(0.0)));
        assert_eq!(pen.position(), Err(ParameterError::RodLength(0.0)));
        assert_eq!(
            pen.angular_acceleration(),
            Err(ParameterError::RodLength(0.0))
        );

        pen.set_rod_length(-1.0);
        assert_eq!(pen.rod_length(), Err(ParameterError::RodLength(-1.0)));
    }

    #[test]
    fn negative_dampening_fails_on_read() {
        let mut pen = pendulum();
        pen.set_dampening_coeff(-0.1);

        assert_eq!(
            pen.dampening_coeff(),
            Err(ParameterError::DampeningCoeff(-0.1))
        );
        assert!(pen.angular_acceleration().is_err());
        // The position only reads the rod length, so it still succeeds.
        assert!(pen.position().is_ok());
    }

    #[test]
    fn nan_parameters_are_invalid() {
        let mut pen = pendulum();
        pen.set_rod_length(f64::NAN);
        assert!(pen.rod_length().is_err());

        let mut pen = pendulum();
        pen.set_dampening_coeff(f64::NAN);
        assert!(pen.dampening_coeff().is_err());
    }

    #[test]
    fn step_velocity_propagates_parameter_errors() {
        let mut pen = pendulum();
        pen.set_rod_length(-2.0);
        let before = pen.omega;

        assert!(pen.step_velocity().is_err());
        assert_eq!(pen.omega, before, "a failed step must not mutate state");
    }

    #[test]
    fn angle_is_not_normalized() {
        let mut pen = pendulum().with_dampening_coeff(0.0);
        pen.theta = 12.0 * std::f64::consts::PI;
        pen.step_position();
        assert!(pen.theta > 6.0 * std::f64::consts::TAU - 1.0);
    }
}
