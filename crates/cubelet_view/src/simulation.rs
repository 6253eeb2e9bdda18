use cgmath::{Point2, Point3, Quaternion, Rad, Rotation, Rotation3};
use cubelet_core::{CubeSnapshot, CubeState, Move};
use cubelet_prefs::{AnimationPreferences, InteractionPreferences, Preferences};
use web_time::{Duration, Instant};

use crate::camera::OrbitCamera;
use crate::drag::DragState;
use crate::grip::{self, LayerGrip};
use crate::input::{PointerButton, Viewport};
use crate::queue::MoveQueue;

/// If the last frame time is unknown, assume this frame rate.
const ASSUMED_FPS: f32 = 120.0;

/// Position and orientation of a cubie for one frame, in the cube's local
/// frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubieTransform {
    /// Center of the cubie.
    pub position: Point3<f32>,
    /// Rotation of the cubie from its grid-aligned orientation.
    pub orientation: Quaternion<f32>,
}

/// Interactive cube: the logical model plus pointer gestures, animations, and
/// the programmatic move queue.
#[derive(Debug, Default)]
pub struct CubeSimulation {
    cube: CubeState,
    drag: DragState,
    queue: MoveQueue,
    camera: OrbitCamera,

    /// Time of the last frame, or `None` if nothing was animating.
    last_frame_time: Option<Instant>,
}

impl CubeSimulation {
    /// Constructs a simulation with a solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the logical model.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }
    /// Returns the logical model mutably, e.g., to attach render handles.
    pub fn cube_mut(&mut self) -> &mut CubeState {
        &mut self.cube
    }
    /// Returns the pointer gesture state.
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }
    /// Returns the camera.
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }
    /// Returns the camera mutably.
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Returns whether queued moves are animating or waiting to start.
    pub fn is_playing(&self) -> bool {
        self.queue.is_playing()
    }
    /// Returns the number of queued moves that have not been committed.
    pub fn queued_move_count(&self) -> usize {
        self.queue.len()
    }
    /// Returns whether anything is animating, in which case the caller should
    /// keep calling [`Self::step()`] every frame.
    pub fn is_animating(&self) -> bool {
        self.queue.is_playing() || matches!(self.drag, DragState::Committing(_))
    }

    /// Handles a pointer press. Picking is disabled while queued moves are
    /// playing, so presses then orbit the camera.
    pub fn pointer_down(
        &mut self,
        viewport: &dyn Viewport,
        cursor: Point2<f32>,
        button: PointerButton,
        orbit_modifier: bool,
    ) {
        let picking_enabled = !self.queue.is_playing();
        self.drag.pointer_down(
            viewport,
            &self.cube,
            cursor,
            button,
            orbit_modifier,
            picking_enabled,
        );
    }
    /// Handles a pointer move.
    pub fn pointer_move(
        &mut self,
        viewport: &dyn Viewport,
        cursor: Point2<f32>,
        prefs: &InteractionPreferences,
    ) {
        self.drag
            .pointer_move(viewport, &self.cube, &mut self.camera, cursor, prefs);
    }
    /// Handles a pointer release.
    pub fn pointer_up(&mut self, prefs: &Preferences) {
        self.drag.pointer_up(&prefs.interaction, &prefs.animation);
    }
    /// Cancels the current gesture without committing anything. Call this when
    /// the pointer leaves the viewport or the window loses focus.
    pub fn cancel_gesture(&mut self) {
        self.drag.abort();
    }

    /// Enqueues a single move given in standard notation, such as `R2` or
    /// `U'`, and returns it. Invalid tokens are logged and ignored.
    pub fn apply_named_move(&mut self, token: &str) -> Option<Move> {
        match cubelet_core::parse_move(token) {
            Ok(mv) => {
                self.enqueue(mv);
                Some(mv)
            }
            Err(e) => {
                log::warn!("ignoring move {token:?}: {e}");
                None
            }
        }
    }
    /// Enqueues moves given in standard notation. Each item may be a single
    /// token or a whitespace-separated sequence. Invalid tokens are logged and
    /// ignored. Returns the number of moves enqueued.
    pub fn enqueue_moves<S: AsRef<str>>(&mut self, tokens: impl IntoIterator<Item = S>) -> usize {
        let mut count = 0;
        for s in tokens {
            for mv in cubelet_core::notation::parse_moves_lossy(s.as_ref()) {
                self.enqueue(mv);
                count += 1;
            }
        }
        count
    }
    /// Enqueues a move.
    pub fn enqueue(&mut self, mv: Move) {
        log::debug!("enqueued move {mv}");
        self.queue.push(mv);
    }
    /// Enqueues a scramble of the configured length. If `seed` is `None`, a
    /// random seed is used. Returns the seed.
    pub fn scramble(&mut self, seed: Option<u64>, prefs: &Preferences) -> u64 {
        let seed = seed.unwrap_or_else(cubelet_core::random_seed);
        log::debug!("scrambling with seed {seed}");
        for mv in cubelet_core::scramble(prefs.scramble.length, seed) {
            self.enqueue(mv);
        }
        seed
    }
    /// Enqueues the move bound to `key`, inverted if `shift` is held. Returns
    /// the move, or `None` if the key is unbound.
    pub fn key_press(&mut self, key: char, shift: bool, prefs: &Preferences) -> Option<Move> {
        let mv = prefs.keybinds.move_for_key(key, shift)?;
        self.enqueue(mv);
        Some(mv)
    }

    /// Returns the position and sticker colors of every cubie.
    pub fn snapshot(&self) -> CubeSnapshot {
        self.cube.snapshot()
    }
    /// Returns the cube to the solved configuration immediately, discarding
    /// queued moves and any gesture in progress. Render handles are kept.
    pub fn reset_to_solved(&mut self) {
        log::debug!("resetting to solved");
        self.queue.clear();
        self.drag.abort();
        self.cube.reset_to_solved();
    }

    /// Advances animations to the next frame, using the wall-clock time since
    /// the last frame. Returns whether the cube must be redrawn.
    pub fn step(&mut self, prefs: &AnimationPreferences) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };

        let needs_redraw = self.advance(delta, prefs);

        if needs_redraw && self.is_animating() {
            self.last_frame_time = Some(now);
        } else {
            self.last_frame_time = None;
        }

        needs_redraw
    }

    /// Advances animations by `delta`, committing any move whose animation
    /// finishes. Returns whether the cube must be redrawn.
    pub fn advance(&mut self, delta: Duration, prefs: &AnimationPreferences) -> bool {
        let mut needs_redraw = self.is_animating();

        if let Some(anim) = self.drag.proceed(delta) {
            if let Some(mv) = anim.commit {
                log::debug!("committing dragged move {mv}");
                self.cube.apply_move(mv);
            }
            needs_redraw = true;
        }

        let can_start = !self.drag.blocks_queue();
        if let Some(mv) = self.queue.proceed(delta, &self.cube, prefs, can_start) {
            log::debug!("committing queued move {mv}");
            self.cube.apply_move(mv);
            needs_redraw = true;
        }

        needs_redraw
    }

    /// Returns the layer being rotated and its current angle, if any.
    fn active_twist(&self) -> Option<(&LayerGrip, f32)> {
        self.drag
            .active_twist()
            .or_else(|| self.queue.current().map(|anim| (&anim.grip, anim.angle())))
    }

    /// Returns the transform of every cubie for the current frame, including
    /// any layer that is being dragged or animated.
    pub fn render_transforms(&self, prefs: &InteractionPreferences) -> Vec<CubieTransform> {
        let mut transforms: Vec<CubieTransform> = self
            .cube
            .cubies()
            .iter()
            .map(|cubie| {
                let [x, y, z] = cubie.position.0.map(|c| c as f32 * prefs.cell_pitch);
                CubieTransform {
                    position: Point3::new(x, y, z),
                    orientation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
                }
            })
            .collect();

        if let Some((grip, angle)) = self.active_twist() {
            let rot = Quaternion::from_axis_angle(grip::axis_vector(grip.axis), Rad(angle));
            for &i in &grip.members {
                if let Some(t) = transforms.get_mut(i) {
                    t.position = rot.rotate_point(t.position);
                    t.orientation = rot;
                }
            }
        }

        transforms
    }
}
