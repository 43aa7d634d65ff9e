//! Interactive egui viewer.
//!
//! [`show`] runs the simulation on a background thread and renders it in a
//! native window: the pendulum on the left, the angle-vs-time plot on the
//! right when plotting is enabled. The driver writes into a [`SharedScene`];
//! the window reads from it each frame.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use plumb_core::{AngleTrace, Scene, Vec3};
use plumb_sim::Config;

/// Upper bound on retained trail points.
const TRAIL_CAP: usize = 4096;

#[derive(Debug, Default)]
struct SceneState {
    rod_axis: Vec3,
    bob: Vec3,
    trail: VecDeque<[f64; 2]>,
    trail_enabled: bool,
    label: Option<String>,
    angle_points: Vec<[f64; 2]>,
    error: Option<String>,
}

/// A thread-safe scene the driver writes and the viewer reads.
///
/// Implements both [`Scene`] and [`AngleTrace`], so clones of one value can
/// serve as both driver sinks. Motion stays in the x-y plane, so the viewer
/// drops the z coordinate when drawing.
#[derive(Debug, Clone, Default)]
pub struct SharedScene {
    state: Arc<Mutex<SceneState>>,
}

impl SharedScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against the state, skipping the update if the lock is
    /// poisoned. A poisoned lock means the other side panicked; dropping
    /// frames is the best remaining option.
    fn with<R>(&self, f: impl FnOnce(&mut SceneState) -> R) -> Option<R> {
        self.state.lock().ok().map(|mut state| f(&mut state))
    }

    fn record_error(&self, message: String) {
        self.with(|state| state.error = Some(message));
    }
}

impl Scene for SharedScene {
    fn create_anchor(&mut self) {}

    fn create_rod(&mut self, axis: Vec3) {
        self.with(|state| state.rod_axis = axis);
    }

    fn create_bob(&mut self, position: Vec3, trail: bool) {
        self.with(|state| {
            state.bob = position;
            state.trail_enabled = trail;
        });
    }

    fn set_rod_axis(&mut self, axis: Vec3) {
        self.with(|state| state.rod_axis = axis);
    }

    fn set_bob_position(&mut self, position: Vec3) {
        self.with(|state| {
            state.bob = position;
            if state.trail_enabled {
                if state.trail.len() == TRAIL_CAP {
                    state.trail.pop_front();
                }
                state.trail.push_back([position.x, position.y]);
            }
        });
    }

    fn clear_trail(&mut self) {
        self.with(|state| state.trail.clear());
    }

    fn show_label(&mut self, text: &str) {
        let text = text.to_string();
        self.with(|state| state.label = Some(text));
    }
}

impl AngleTrace for SharedScene {
    fn append(&mut self, time: f64, angle_degrees: f64) {
        self.with(|state| state.angle_points.push([time, angle_degrees]));
    }

    fn clear(&mut self) {
        self.with(|state| state.angle_points.clear());
    }
}

/// Opens a blocking native window animating the configured simulation.
///
/// The driver runs on a background thread and is detached when the window
/// closes; with `repeat` on it would otherwise never return. A run error
/// (an invalid parameter) is shown in the window instead of a pendulum.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(config: Config) -> Result<(), eframe::Error> {
    let shared = SharedScene::new();
    let viewer = Viewer {
        shared: shared.clone(),
        plot_enabled: config.plot,
        rod_length: config.rod_length,
    };

    let mut scene = shared.clone();
    let mut trace = shared.clone();
    thread::spawn(move || {
        if let Err(err) = plumb_sim::run(&config, &mut scene, &mut trace, ()) {
            scene.record_error(err.to_string());
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            viewer_dimension(config.display_width, 1900.0),
            viewer_dimension(config.display_height, 950.0),
        ]),
        ..Default::default()
    };

    eframe::run_native(
        "3D Pendulum",
        options,
        Box::new(move |_cc| Ok(Box::new(viewer))),
    )
}

fn viewer_dimension(requested: f64, fallback: f32) -> f32 {
    if requested.is_finite() && requested > 0.0 {
        requested as f32
    } else {
        fallback
    }
}

/// The egui [`eframe::App`] that draws the shared scene.
struct Viewer {
    shared: SharedScene,
    plot_enabled: bool,
    rod_length: f64,
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The simulation advances between frames.
        ctx.request_repaint();

        let Some(snapshot) = self.shared.with(|state| Snapshot {
            rod_axis: state.rod_axis,
            bob: state.bob,
            trail: state.trail.iter().copied().collect(),
            label: state.label.clone(),
            angle_points: state.angle_points.clone(),
            error: state.error.clone(),
        }) else {
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &snapshot.error {
                ui.colored_label(egui::Color32::RED, error);
                return;
            }
            if let Some(label) = &snapshot.label {
                ui.monospace(label);
            }

            if self.plot_enabled {
                ui.columns(2, |columns| {
                    self.pendulum_plot(&mut columns[0], &snapshot);
                    Self::angle_plot(&mut columns[1], &snapshot);
                });
            } else {
                self.pendulum_plot(ui, &snapshot);
            }
        });
    }
}

struct Snapshot {
    rod_axis: Vec3,
    bob: Vec3,
    trail: Vec<[f64; 2]>,
    label: Option<String>,
    angle_points: Vec<[f64; 2]>,
    error: Option<String>,
}

impl Viewer {
    fn pendulum_plot(&self, ui: &mut egui::Ui, snapshot: &Snapshot) {
        let extent = 1.1 * self.rod_length.max(1.0);
        Plot::new("pendulum")
            .data_aspect(1.0)
            .include_x(-extent)
            .include_x(extent)
            .include_y(-extent)
            .include_y(0.5)
            .show(ui, |plot_ui| {
                if !snapshot.trail.is_empty() {
                    let trail: PlotPoints = snapshot.trail.iter().copied().collect();
                    plot_ui.line(Line::new(trail).name("Trail"));
                }
                let rod: PlotPoints = vec![[0.0, 0.0], [snapshot.rod_axis.x, snapshot.rod_axis.y]]
                    .into_iter()
                    .collect();
                plot_ui.line(Line::new(rod).name("Rod"));
                plot_ui.points(Points::new(vec![[0.0, 0.0]]).radius(3.0).name("Anchor"));
                plot_ui.points(
                    Points::new(vec![[snapshot.bob.x, snapshot.bob.y]])
                        .radius(6.0)
                        .name("Bob"),
                );
            });
    }

    fn angle_plot(ui: &mut egui::Ui, snapshot: &Snapshot) {
        Plot::new("angle")
            .legend(Legend::default())
            .x_axis_label("Time (s)")
            .y_axis_label("Theta (deg)")
            .show(ui, |plot_ui| {
                let points: PlotPoints = snapshot.angle_points.iter().copied().collect();
                plot_ui.line(Line::new(points).name("Theta vs. Time"));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn state_of(shared: &SharedScene) -> (Vec3, usize, usize) {
        shared
            .with(|state| (state.bob, state.trail.len(), state.angle_points.len()))
            .unwrap()
    }

    #[test]
    fn clones_share_one_state() {
        let mut scene = SharedScene::new();
        let mut trace = scene.clone();

        scene.create_bob(Vec3::new(0.0, -1.0, 0.0), true);
        scene.set_bob_position(Vec3::new(1.0, 0.0, 0.0));
        trace.append(0.0, 45.0);

        let (bob, trail_len, angle_len) = state_of(&scene);
        assert_relative_eq!(bob.x, 1.0);
        assert_relative_eq!(bob.y, 0.0);
        assert_eq!(trail_len, 1);
        assert_eq!(angle_len, 1);
    }

    #[test]
    fn rod_axis_and_bob_are_tracked_separately() {
        let mut scene = SharedScene::new();
        scene.create_rod(Vec3::new(0.0, -1.0, 0.0));
        scene.create_bob(Vec3::new(0.0, -1.0, 0.0), false);

        scene.set_rod_axis(Vec3::new(0.5, -0.5, 0.0));

        let (rod_axis, bob) = scene
            .with(|state| (state.rod_axis, state.bob))
            .unwrap();
        assert_relative_eq!(rod_axis.x, 0.5);
        assert_relative_eq!(rod_axis.y, -0.5);
        assert_relative_eq!(bob.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bob.y, -1.0);
    }

    #[test]
    fn trail_only_grows_when_enabled() {
        let mut scene = SharedScene::new();
        scene.create_bob(Vec3::new(0.0, -1.0, 0.0), false);
        scene.set_bob_position(Vec3::new(1.0, 0.0, 0.0));

        let (_, trail_len, _) = state_of(&scene);
        assert_eq!(trail_len, 0);
    }

    #[test]
    fn trail_is_capped() {
        let mut scene = SharedScene::new();
        scene.create_bob(Vec3::new(0.0, -1.0, 0.0), true);
        for i in 0..(TRAIL_CAP + 100) {
            scene.set_bob_position(Vec3::new(i as f64, 0.0, 0.0));
        }

        let (_, trail_len, _) = state_of(&scene);
        assert_eq!(trail_len, TRAIL_CAP);
    }

    #[test]
    fn clears_reach_the_shared_state() {
        let mut scene = SharedScene::new();
        let mut trace = scene.clone();
        scene.create_bob(Vec3::new(0.0, -1.0, 0.0), true);
        scene.set_bob_position(Vec3::new(1.0, 0.0, 0.0));
        trace.append(0.0, 45.0);

        scene.clear_trail();
        trace.clear();

        let (_, trail_len, angle_len) = state_of(&scene);
        assert_eq!(trail_len, 0);
        assert_eq!(angle_len, 0);
    }
}
