use plumb_core::Pendulum;

/// Rest-detection thresholds for the unbounded run mode.
///
/// The pendulum counts as settled once `|theta| < angle` **and**
/// `|omega| < velocity`, compared against the raw state in radians and
/// radians per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleLimits {
    pub angle: f64,
    pub velocity: f64,
}

impl Default for SettleLimits {
    fn default() -> Self {
        Self {
            angle: 0.01,
            velocity: 0.001,
        }
    }
}

/// Configuration for a simulation run.
///
/// All fields have defaults; construct with `Config::default()` and chain
/// the builder methods as needed.
///
/// # Example
///
/// ```
/// use plumb_sim::Config;
///
/// let config = Config::default()
///     .theta_degrees(60.0)
///     .dampening_coeff(0.1)
///     .trail(true)
///     .time_limit(10.0)
///     .repeat(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Starting angle from vertical rest, in degrees.
    pub theta: f64,
    /// Starting angular velocity, in degrees per second.
    pub omega: f64,
    /// Integration time step, in seconds; must be small relative to the
    /// natural period for the fixed-step integration to stay stable.
    pub dt: f64,
    /// Rod length from anchor to bob center, in meters.
    pub rod_length: f64,
    /// Damping coefficient.
    pub dampening_coeff: f64,
    /// Acceleration due to gravity, in m/s².
    pub gravity: f64,
    /// Whether the bob leaves a trail.
    pub trail: bool,
    /// Maximum loop ticks per second; a pacing hint for the renderer, not
    /// part of the physics. Non-finite or non-positive disables pacing.
    pub frame_rate: f64,
    /// Optional end time in seconds. When set, the run is time-bounded and
    /// the settle thresholds are ignored.
    pub time_limit: Option<f64>,
    /// Whether to restart from the initial state instead of stopping, once
    /// the pendulum settles (unbounded) or the time limit is reached
    /// (bounded).
    pub repeat: bool,
    /// Rest-detection thresholds for the unbounded mode.
    pub limits: SettleLimits,
    /// Whether to display a label summarizing the run inputs.
    pub labels: bool,
    /// Whether to plot angle vs. time.
    pub plot: bool,
    /// Display surface width, in pixels.
    pub display_width: f64,
    /// Display surface height, in pixels.
    pub display_height: f64,
}

impl Default for Config {
    /// The canonical demo: 45° release at rest, dt 1 ms, 5 m rod, damping
    /// 0.3, repeating forever with labels shown and plotting off.
    fn default() -> Self {
        Self {
            theta: 45.0,
            omega: 0.0,
            dt: 0.001,
            rod_length: 5.0,
            dampening_coeff: 0.3,
            gravity: 9.8,
            trail: false,
            frame_rate: 2000.0,
            time_limit: None,
            repeat: true,
            limits: SettleLimits::default(),
            labels: true,
            plot: false,
            display_width: 1900.0,
            display_height: 950.0,
        }
    }
}

impl Config {
    /// Sets the starting angle, in degrees.
    #[must_use]
    pub fn theta_degrees(mut self, degrees: f64) -> Self {
        self.theta = degrees;
        self
    }

    /// Sets the starting angular velocity, in degrees per second.
    #[must_use]
    pub fn omega_degrees(mut self, degrees_per_second: f64) -> Self {
        self.omega = degrees_per_second;
        self
    }

    /// Sets the integration time step, in seconds.
    #[must_use]
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Sets the rod length, in meters.
    #[must_use]
    pub fn rod_length(mut self, rod_length: f64) -> Self {
        self.rod_length = rod_length;
        self
    }

    /// Sets the damping coefficient.
    #[must_use]
    pub fn dampening_coeff(mut self, dampening_coeff: f64) -> Self {
        self.dampening_coeff = dampening_coeff;
        self
    }

    /// Sets the acceleration due to gravity, in m/s².
    #[must_use]
    pub fn gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Enables or disables the bob trail.
    #[must_use]
    pub fn trail(mut self, trail: bool) -> Self {
        self.trail = trail;
        self
    }

    /// Sets the maximum number of loop ticks per second.
    #[must_use]
    pub fn frame_rate(mut self, ticks_per_second: f64) -> Self {
        self.frame_rate = ticks_per_second;
        self
    }

    /// Bounds the run to `seconds` of simulated time per pass.
    #[must_use]
    pub fn time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Removes the time limit, switching back to the unbounded mode.
    #[must_use]
    pub fn no_time_limit(mut self) -> Self {
        self.time_limit = None;
        self
    }

    /// Enables or disables restarting once a pass completes.
    #[must_use]
    pub fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets the rest-detection thresholds (radians, radians per second).
    #[must_use]
    pub fn limits(mut self, angle: f64, velocity: f64) -> Self {
        self.limits = SettleLimits { angle, velocity };
        self
    }

    /// Enables or disables the input-summary label.
    #[must_use]
    pub fn labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enables or disables the angle-vs-time plot.
    #[must_use]
    pub fn plot(mut self, plot: bool) -> Self {
        self.plot = plot;
        self
    }

    /// Sets the display surface size, in pixels.
    #[must_use]
    pub fn display_size(mut self, width: f64, height: f64) -> Self {
        self.display_width = width;
        self.display_height = height;
        self
    }

    /// Builds the pendulum model this configuration describes.
    #[must_use]
    pub fn pendulum(&self) -> Pendulum {
        Pendulum::default()
            .with_theta_degrees(self.theta)
            .with_omega_degrees(self.omega)
            .with_dt(self.dt)
            .with_rod_length(self.rod_length)
            .with_dampening_coeff(self.dampening_coeff)
            .with_gravity(self.gravity)
            .with_trail(self.trail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_the_demo() {
        let config = Config::default();
        assert_relative_eq!(config.theta, 45.0);
        assert_relative_eq!(config.dt, 0.001);
        assert_relative_eq!(config.rod_length, 5.0);
        assert_relative_eq!(config.dampening_coeff, 0.3);
        assert_relative_eq!(config.frame_rate, 2000.0);
        assert_eq!(config.time_limit, None);
        assert!(config.repeat);
        assert!(config.labels);
        assert!(!config.plot);
        assert_relative_eq!(config.limits.angle, 0.01);
        assert_relative_eq!(config.limits.velocity, 0.001);
    }

    #[test]
    fn pendulum_is_built_from_the_config() {
        let config = Config::default()
            .theta_degrees(90.0)
            .omega_degrees(-5.0)
            .dt(0.5)
            .rod_length(1.5)
            .dampening_coeff(0.0)
            .gravity(1.62)
            .trail(true);

        let pen = config.pendulum();
        assert_relative_eq!(pen.theta, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(pen.omega, (-5.0_f64).to_radians());
        assert_relative_eq!(pen.dt, 0.5);
        assert_relative_eq!(pen.rod_length().unwrap(), 1.5);
        assert_relative_eq!(pen.dampening_coeff().unwrap(), 0.0);
        assert_relative_eq!(pen.gravity, 1.62);
        assert!(pen.trail);
    }

    #[test]
    fn time_limit_can_be_set_and_cleared() {
        let config = Config::default().time_limit(3.0);
        assert_eq!(config.time_limit, Some(3.0));
        assert_eq!(config.no_time_limit().time_limit, None);
    }
}
