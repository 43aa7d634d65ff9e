use crate::Vec3;

/// The rendering surface the simulation driver pushes geometry to.
///
/// A scene is an opaque sink: the driver tells it what exists (anchor, rod,
/// bob) and where things are each tick, and the scene decides how to draw
/// them. The creation methods are called once per run; `set_rod_axis` and
/// `set_bob_position` are called every tick; `clear_trail` is called on every
/// reset.
///
/// The unit type `()` is a null scene that discards everything, useful for
/// headless runs and tests that only care about the simulation outcome.
pub trait Scene {
    /// Creates the fixture the pendulum hangs from, at the origin.
    fn create_anchor(&mut self);

    /// Creates the rod, pointing from the origin along `axis`.
    fn create_rod(&mut self, axis: Vec3);

    /// Creates the bob at `position`, optionally leaving a trail as it moves.
    fn create_bob(&mut self, position: Vec3, trail: bool);

    /// Points the rod from the origin along `axis`.
    fn set_rod_axis(&mut self, axis: Vec3);

    /// Moves the bob center to `position`.
    fn set_bob_position(&mut self, position: Vec3);

    /// Discards any retained trail of past bob positions.
    fn clear_trail(&mut self);

    /// Displays a text label describing the run.
    fn show_label(&mut self, text: &str);
}

/// A 2D angle-vs-time curve the driver appends to when plotting is enabled.
pub trait AngleTrace {
    /// Appends a point at `time` seconds with the angle in degrees.
    fn append(&mut self, time: f64, angle_degrees: f64);

    /// Discards the curve so a restarted run begins from an empty plot.
    fn clear(&mut self);
}

impl Scene for () {
    fn create_anchor(&mut self) {}
    fn create_rod(&mut self, _axis: Vec3) {}
    fn create_bob(&mut self, _position: Vec3, _trail: bool) {}
    fn set_rod_axis(&mut self, _axis: Vec3) {}
    fn set_bob_position(&mut self, _position: Vec3) {}
    fn clear_trail(&mut self) {}
    fn show_label(&mut self, _text: &str) {}
}

impl AngleTrace for () {
    fn append(&mut self, _time: f64, _angle_degrees: f64) {}
    fn clear(&mut self) {}
}
