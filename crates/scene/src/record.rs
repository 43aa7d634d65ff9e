//! Recording sinks for headless runs.
//!
//! [`RecordingScene`] and [`RecordingTrace`] keep everything the driver sends
//! them, so a run can be inspected after the fact without a window.

use plumb_core::{AngleTrace, Scene, Vec3};

/// A single scene call, in the order the driver issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    CreateAnchor,
    CreateRod { axis: Vec3 },
    CreateBob { position: Vec3, trail: bool },
    SetRodAxis { axis: Vec3 },
    SetBobPosition { position: Vec3 },
    ClearTrail,
    ShowLabel { text: String },
}

/// A scene that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingScene {
    calls: Vec<SceneCall>,
}

impl RecordingScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[SceneCall] {
        &self.calls
    }

    /// The most recent bob position, if any tick has pushed one.
    #[must_use]
    pub fn last_bob_position(&self) -> Option<Vec3> {
        self.calls.iter().rev().find_map(|call| match call {
            SceneCall::SetBobPosition { position } => Some(*position),
            _ => None,
        })
    }
}

impl Scene for RecordingScene {
    fn create_anchor(&mut self) {
        self.calls.push(SceneCall::CreateAnchor);
    }

    fn create_rod(&mut self, axis: Vec3) {
        self.calls.push(SceneCall::CreateRod { axis });
    }

    fn create_bob(&mut self, position: Vec3, trail: bool) {
        self.calls.push(SceneCall::CreateBob { position, trail });
    }

    fn set_rod_axis(&mut self, axis: Vec3) {
        self.calls.push(SceneCall::SetRodAxis { axis });
    }

    fn set_bob_position(&mut self, position: Vec3) {
        self.calls.push(SceneCall::SetBobPosition { position });
    }

    fn clear_trail(&mut self) {
        self.calls.push(SceneCall::ClearTrail);
    }

    fn show_label(&mut self, text: &str) {
        self.calls.push(SceneCall::ShowLabel {
            text: text.to_string(),
        });
    }
}

/// An angle trace that keeps its points in memory.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    points: Vec<[f64; 2]>,
}

impl RecordingTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected `[time, angle_degrees]` points for the current pass.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }
}

impl AngleTrace for RecordingTrace {
    fn append(&mut self, time: f64, angle_degrees: f64) {
        self.points.push([time, angle_degrees]);
    }

    fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut scene = RecordingScene::new();
        scene.create_anchor();
        scene.create_rod(Vec3::new(0.0, -1.0, 0.0));
        scene.set_bob_position(Vec3::new(1.0, 0.0, 0.0));
        scene.show_label("hello");

        assert_eq!(scene.calls().len(), 4);
        assert_eq!(scene.calls()[0], SceneCall::CreateAnchor);
        assert_eq!(
            scene.calls()[3],
            SceneCall::ShowLabel {
                text: "hello".to_string()
            }
        );
    }

    #[test]
    fn last_bob_position_finds_the_newest_push() {
        let mut scene = RecordingScene::new();
        assert_eq!(scene.last_bob_position(), None);

        scene.set_bob_position(Vec3::new(1.0, 0.0, 0.0));
        scene.set_bob_position(Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(scene.last_bob_position(), Some(Vec3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn trace_clears_its_points() {
        let mut trace = RecordingTrace::new();
        trace.append(0.0, 45.0);
        trace.append(0.1, 44.0);
        assert_eq!(trace.points(), [[0.0, 45.0], [0.1, 44.0]]);

        trace.clear();
        assert!(trace.points().is_empty());
    }
}
