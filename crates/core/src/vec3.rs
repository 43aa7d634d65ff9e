/// A cartesian position or direction in scene space.
///
/// The pendulum swings in the x-y plane, so `z` is always zero for positions
/// derived from the model; it is kept so rendering surfaces receive full 3D
/// coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
