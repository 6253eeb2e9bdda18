//! Pointer gestures: orbiting the camera and dragging layers.

use std::f32::consts::{FRAC_PI_2, PI};

use cgmath::{InnerSpace, Point2, Point3, Rotation, Vector3};
use cubelet_core::{CubeState, Face, Layer, Sign};
use cubelet_prefs::{AnimationPreferences, InteractionPreferences};
use web_time::Duration;

use crate::animations::TwistAnimation;
use crate::camera::OrbitCamera;
use crate::grip::{self, LayerGrip};
use crate::input::{PointerButton, Viewport};

/// Converts an accumulated drag angle to a whole number of quarter turns.
///
/// The angle is rounded to the nearest quarter turn and clamped to a half
/// turn in either direction. If that rounds to zero but the angle is more than
/// `snap_threshold` of a quarter turn away from zero, it snaps to a quarter
/// turn in the direction of the drag instead.
pub fn snap_turns(angle: f32, snap_threshold: f32) -> i32 {
    let quarter_turns = angle / FRAC_PI_2;
    let rounded = quarter_turns.round().clamp(-2.0, 2.0) as i32;
    if rounded == 0 && quarter_turns.abs() > snap_threshold {
        Sign::of_float(quarter_turns).int() as i32
    } else {
        rounded
    }
}

/// Face that was pressed, before any layer has been chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct PickSession {
    /// Index of the pressed cubie.
    pub cubie: usize,
    /// Face of the cube closest to the pressed surface.
    pub face: Face,
    /// Candidate drag directions in the cube's local frame.
    pub tangents: [Vector3<f32>; 2],
    /// Candidate drag directions in world space.
    pub world_tangents: [Vector3<f32>; 2],
    /// World-space normal of the drag plane.
    pub plane_normal: Vector3<f32>,
    /// World-space point where the cube was pressed.
    pub press_point: Point3<f32>,
    /// Screen-space cursor position where the cube was pressed.
    pub press_cursor: Point2<f32>,
}

/// Layer being dragged.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Cubies being rotated.
    pub grip: LayerGrip,
    /// Face the drag started on.
    pub face: Face,
    /// World-space drag direction that increases the angle.
    pub world_tangent: Vector3<f32>,
    /// Converts drag distance along `world_tangent` into a right-handed
    /// rotation about the grip axis.
    pub sign: Sign,
    /// World-space normal of the drag plane.
    pub plane_normal: Vector3<f32>,
    /// Last cursor position projected onto the drag plane, starting at the
    /// press point.
    pub last_point: Point3<f32>,
    /// Accumulated rotation angle, in radians.
    pub angle: f32,
}

impl DragSession {
    /// Accumulates the rotation from the last drag point to `point`, both on
    /// the drag plane.
    fn drag_to(&mut self, point: Point3<f32>, prefs: &InteractionPreferences) {
        let distance = (point - self.last_point).dot(self.world_tangent);
        self.last_point = point;
        let delta_angle = distance * prefs.drag_angle_per_unit() * self.sign.float();
        self.angle = (self.angle + delta_angle).clamp(-PI, PI);
    }
}

/// State of the pointer gesture.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Rotating the camera.
    Orbiting {
        /// Cursor position at the last pointer move.
        last_cursor: Point2<f32>,
    },
    /// Pressed on the cube but not yet moved far enough to choose a layer.
    Picking(PickSession),
    /// Dragging a layer.
    Locked(DragSession),
    /// Released a layer; animating it to the nearest quarter turn.
    Committing(TwistAnimation),
}
impl DragState {
    /// Returns whether there is an ongoing gesture or snap animation that
    /// should keep queued moves from starting.
    pub fn blocks_queue(&self) -> bool {
        matches!(self, Self::Picking(_) | Self::Locked(_) | Self::Committing(_))
    }

    /// Returns the layer currently rotated by the gesture and its angle, if
    /// any.
    pub fn active_twist(&self) -> Option<(&LayerGrip, f32)> {
        match self {
            Self::Locked(drag) => Some((&drag.grip, drag.angle)),
            Self::Committing(anim) => Some((&anim.grip, anim.angle())),
            _ => None,
        }
    }

    /// Handles a pointer press.
    ///
    /// Secondary-button presses, presses with the orbit modifier, presses
    /// that miss the cube, and presses while `picking_enabled` is false all
    /// orbit the camera. Presses during a snap animation are ignored.
    pub fn pointer_down(
        &mut self,
        viewport: &dyn Viewport,
        cube: &CubeState,
        cursor: Point2<f32>,
        button: PointerButton,
        orbit_modifier: bool,
        picking_enabled: bool,
    ) {
        if matches!(self, Self::Committing(_)) {
            log::trace!("ignoring pointer press during snap animation");
            return;
        }

        let hit = match button {
            PointerButton::Primary if !orbit_modifier && picking_enabled => {
                viewport.hit_test(cursor).filter(|hit| hit.cubie < cube.cubies().len())
            }
            _ => None,
        };

        let Some(hit) = hit else {
            log::trace!("orbiting from {cursor:?}");
            *self = Self::Orbiting { last_cursor: cursor };
            return;
        };

        let rot = viewport.cube_orientation();
        let face = grip::face_from_normal(hit.local_normal);
        let tangents = grip::tangents_for_face(face);
        let [x, y, z] = face.normal();
        let plane_normal = rot.rotate_vector(Vector3::new(x as f32, y as f32, z as f32));

        log::trace!("picking cubie {} on face {}", hit.cubie, face.name());
        *self = Self::Picking(PickSession {
            cubie: hit.cubie,
            face,
            tangents,
            world_tangents: tangents.map(|t| rot.rotate_vector(t)),
            plane_normal,
            press_point: hit.world_point,
            press_cursor: cursor,
        });
    }

    /// Handles a pointer move.
    pub fn pointer_move(
        &mut self,
        viewport: &dyn Viewport,
        cube: &CubeState,
        camera: &mut OrbitCamera,
        cursor: Point2<f32>,
        prefs: &InteractionPreferences,
    ) {
        match self {
            Self::Idle | Self::Committing(_) => (),

            Self::Orbiting { last_cursor } => {
                camera.orbit(cursor - *last_cursor, prefs);
                *last_cursor = cursor;
            }

            Self::Picking(pick) => {
                if (cursor - pick.press_cursor).magnitude() <= prefs.lock_threshold_px {
                    return;
                }
                let ray = viewport.pointer_ray(cursor);
                let Some(point) = ray.intersect_plane(pick.press_point, pick.plane_normal) else {
                    return;
                };
                if let Some(mut drag) = lock_layer(pick, cube, point) {
                    // Movement before the lock counts toward the angle.
                    drag.drag_to(point, prefs);
                    *self = Self::Locked(drag);
                }
            }

            Self::Locked(drag) => {
                let ray = viewport.pointer_ray(cursor);
                let Some(point) = ray.intersect_plane(drag.last_point, drag.plane_normal) else {
                    return;
                };
                drag.drag_to(point, prefs);
            }
        }
    }

    /// Handles a pointer release. A dragged layer begins animating to the
    /// nearest quarter turn; every other gesture ends.
    pub fn pointer_up(&mut self, interaction: &InteractionPreferences, animation: &AnimationPreferences) {
        match std::mem::take(self) {
            Self::Locked(drag) => {
                let turns = snap_turns(drag.angle, interaction.snap_threshold);
                log::trace!(
                    "releasing {} layer {} at {} rad; snapping to {turns} quarter turns",
                    drag.grip.axis,
                    drag.grip.layer,
                    drag.angle,
                );
                *self = Self::Committing(TwistAnimation::new(
                    drag.grip,
                    drag.angle,
                    turns,
                    animation.snap_duration,
                    animation.twist_interpolation,
                ));
            }
            committing @ Self::Committing(_) => *self = committing,
            Self::Picking(_) => log::trace!("released without dragging"),
            Self::Idle | Self::Orbiting { .. } => (),
        }
    }

    /// Cancels any gesture, discarding in-progress rotation without
    /// committing it.
    pub fn abort(&mut self) {
        if *self != Self::Idle {
            log::trace!("aborting gesture");
        }
        *self = Self::Idle;
    }

    /// Steps the snap animation forward. Returns the animation once it has
    /// finished, after which the gesture is idle.
    pub fn proceed(&mut self, delta: Duration) -> Option<TwistAnimation> {
        let Self::Committing(anim) = self else {
            return None;
        };
        if !anim.proceed(delta) {
            return None;
        }
        match std::mem::take(self) {
            Self::Committing(anim) => Some(anim),
            _ => None,
        }
    }
}

/// Chooses the layer to drag once the cursor has moved far enough. The
/// returned session starts at the press point with no rotation.
fn lock_layer(pick: &PickSession, cube: &CubeState, point: Point3<f32>) -> Option<DragSession> {
    let position = cube.cubies().get(pick.cubie)?.position;

    let i = grip::select_drag_tangent(point - pick.press_point, pick.world_tangents);
    let [x, y, z] = pick.face.normal();
    let normal = Vector3::new(x as f32, y as f32, z as f32);
    let axis = grip::infer_rotation_axis(normal, pick.tangents[i]);
    let layer: Layer = grip::layer_index_from_cubie_position(position, axis);
    let sign = grip::drag_sign(axis, pick.face);

    let grip = LayerGrip::new(cube, axis, layer);
    log::trace!(
        "locked {axis} layer {layer} ({} cubies) from face {}",
        grip.members.len(),
        pick.face.name(),
    );
    Some(DragSession {
        grip,
        face: pick.face,
        world_tangent: pick.world_tangents[i],
        sign,
        plane_normal: pick.plane_normal,
        last_point: pick.press_point,
        angle: 0.0,
    })
}
