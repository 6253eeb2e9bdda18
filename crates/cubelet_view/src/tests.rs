use std::f32::consts::FRAC_PI_2;

use cgmath::{InnerSpace, Point2, Point3, Quaternion, Rad, Rotation3, Vector2, Vector3};
use cubelet_core::{CubeState, Position, parse_move, parse_moves};
use cubelet_prefs::Preferences;
use pretty_assertions::assert_eq;
use web_time::Duration;

use super::*;

const FRAME: Duration = Duration::from_millis(16);
const PX_PER_UNIT: f32 = 100.0;
const SCREEN_CENTER: [f32; 2] = [400.0, 300.0];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Orthographic view of the front face, with the camera on the +Z axis.
struct FrontViewport {
    cube: CubeState,
}
impl FrontViewport {
    fn of(sim: &CubeSimulation) -> Self {
        Self {
            cube: sim.cube().clone(),
        }
    }
}
impl Viewport for FrontViewport {
    fn hit_test(&self, cursor: Point2<f32>) -> Option<PickHit> {
        let [x, y] = world_xy(cursor);
        if x.abs() > 1.5 || y.abs() > 1.5 {
            return None;
        }
        let position = Position::new(x.round() as i8, y.round() as i8, 1);
        Some(PickHit {
            cubie: self.cube.cubie_at(position)?,
            local_normal: Vector3::unit_z(),
            world_point: Point3::new(x, y, 1.5),
        })
    }

    fn pointer_ray(&self, cursor: Point2<f32>) -> Ray {
        front_ray(cursor)
    }
}

/// Same camera as [`FrontViewport`], but the cube is turned a quarter turn
/// about +Y so its left face points at the camera.
struct TurnedViewport {
    cube: CubeState,
}
impl Viewport for TurnedViewport {
    fn hit_test(&self, cursor: Point2<f32>) -> Option<PickHit> {
        let [x, y] = world_xy(cursor);
        if x.abs() > 1.5 || y.abs() > 1.5 {
            return None;
        }
        // World +X is local +Z on this face.
        let position = Position::new(-1, y.round() as i8, x.round() as i8);
        Some(PickHit {
            cubie: self.cube.cubie_at(position)?,
            local_normal: -Vector3::unit_x(),
            world_point: Point3::new(x, y, 1.5),
        })
    }

    fn pointer_ray(&self, cursor: Point2<f32>) -> Ray {
        front_ray(cursor)
    }

    fn cube_orientation(&self) -> Quaternion<f32> {
        Quaternion::from_angle_y(Rad(FRAC_PI_2))
    }
}

fn front_ray(cursor: Point2<f32>) -> Ray {
    let [x, y] = world_xy(cursor);
    Ray {
        origin: Point3::new(x, y, 10.0),
        direction: -Vector3::unit_z(),
    }
}

fn world_xy(cursor: Point2<f32>) -> [f32; 2] {
    [
        (cursor.x - SCREEN_CENTER[0]) / PX_PER_UNIT,
        (SCREEN_CENTER[1] - cursor.y) / PX_PER_UNIT,
    ]
}

fn screen(x: f32, y: f32) -> Point2<f32> {
    Point2::new(
        SCREEN_CENTER[0] + x * PX_PER_UNIT,
        SCREEN_CENTER[1] - y * PX_PER_UNIT,
    )
}

/// Presses at `from` and drags through each point in `path`, all in world
/// units on the front face.
fn drag(sim: &mut CubeSimulation, prefs: &Preferences, from: [f32; 2], path: &[[f32; 2]]) {
    let vp = FrontViewport::of(sim);
    drag_in(&vp, sim, prefs, from, path);
}

/// Presses at `from` and drags through each point in `path`, in world units
/// on the plane z = 1.5.
fn drag_in(
    vp: &dyn Viewport,
    sim: &mut CubeSimulation,
    prefs: &Preferences,
    from: [f32; 2],
    path: &[[f32; 2]],
) {
    sim.pointer_down(vp, screen(from[0], from[1]), PointerButton::Primary, false);
    for &[x, y] in path {
        sim.pointer_move(vp, screen(x, y), &prefs.interaction);
    }
}

/// Steps until nothing is animating, returning the number of times the
/// model changed.
fn run_to_idle(sim: &mut CubeSimulation, prefs: &Preferences) -> usize {
    let mut changes = 0;
    let mut last = sim.snapshot();
    for _ in 0..10_000 {
        sim.advance(FRAME, &prefs.animation);
        let snapshot = sim.snapshot();
        if snapshot != last {
            changes += 1;
            last = snapshot;
        }
        if !sim.is_animating() {
            return changes;
        }
    }
    panic!("animation did not finish");
}

fn solved_then(moves: &str) -> CubeState {
    let mut cube = CubeState::solved();
    for mv in parse_moves(moves).expect("valid moves") {
        cube.apply_move(mv);
    }
    cube
}

#[test]
fn test_queue_of_four_quarter_turns_solves() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    assert_eq!(sim.enqueue_moves(["U", "U", "U", "U"]), 4);
    assert!(sim.is_playing());
    assert_eq!(run_to_idle(&mut sim, &prefs), 4);
    assert_eq!(sim.snapshot(), CubeState::solved().snapshot());
}

#[test]
fn test_invalid_tokens_are_ignored() {
    init_logging();
    let mut sim = CubeSimulation::new();
    assert_eq!(sim.apply_named_move("Q"), None);
    assert_eq!(sim.apply_named_move("R3"), None);
    assert_eq!(sim.queued_move_count(), 0);
    assert_eq!(sim.enqueue_moves(["R U x F2"]), 3);
    assert_eq!(sim.queued_move_count(), 3);
}

#[test]
fn test_named_moves_commit_in_order() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    assert_eq!(
        sim.apply_named_move("R2"),
        parse_move("R2").ok(),
    );
    sim.apply_named_move("L'");
    sim.enqueue_moves("F U'".split_whitespace());
    assert_eq!(run_to_idle(&mut sim, &prefs), 4);
    assert_eq!(*sim.cube(), solved_then("R2 L' F U'"));
}

#[test]
fn test_horizontal_drag_turns_top_layer() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    // A quarter turn is 0.8 units of drag by default.
    drag(&mut sim, &prefs, [0.0, 1.0], &[[0.1, 1.0], [0.5, 1.0], [0.8, 1.0]]);

    let DragState::Locked(session) = sim.drag_state() else {
        panic!("expected locked drag, got {:?}", sim.drag_state());
    };
    assert_eq!(session.grip.members.len(), 9);
    assert!((session.angle - FRAC_PI_2).abs() < 1e-4);

    sim.pointer_up(&prefs);
    assert!(matches!(sim.drag_state(), DragState::Committing(_)));
    assert_eq!(run_to_idle(&mut sim, &prefs), 1);
    assert_eq!(*sim.drag_state(), DragState::Idle);
    assert_eq!(*sim.cube(), solved_then("U"));
}

#[test]
fn test_vertical_drag_turns_right_layer() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [1.0, 0.0], &[[1.0, 0.1], [1.0, 0.9]]);
    sim.pointer_up(&prefs);
    run_to_idle(&mut sim, &prefs);
    assert_eq!(*sim.cube(), solved_then("R'"));
}

#[test]
fn test_drag_below_lock_threshold_does_nothing() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    // 5 px is within the 6 px lock threshold.
    drag(&mut sim, &prefs, [0.0, 0.0], &[[0.03, 0.0], [0.05, 0.0]]);
    assert!(matches!(sim.drag_state(), DragState::Picking(_)));
    sim.pointer_up(&prefs);
    assert_eq!(*sim.drag_state(), DragState::Idle);
    assert_eq!(run_to_idle(&mut sim, &prefs), 0);
    assert!(sim.cube().is_solved());
}

#[test]
fn test_release_snap_threshold() {
    init_logging();
    let prefs = Preferences::default();
    let quarter = prefs.interaction.drag_cell_fraction * prefs.interaction.cell_pitch;

    // Dragging 31% of a quarter turn springs back.
    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [0.0, 1.0], &[[0.1, 1.0], [0.31 * quarter, 1.0]]);
    sim.pointer_up(&prefs);
    assert_eq!(run_to_idle(&mut sim, &prefs), 0);
    assert!(sim.cube().is_solved());

    // 33% of a quarter turn commits a quarter turn.
    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [0.0, 1.0], &[[0.1, 1.0], [0.33 * quarter, 1.0]]);
    sim.pointer_up(&prefs);
    assert_eq!(run_to_idle(&mut sim, &prefs), 1);
    assert_eq!(*sim.cube(), solved_then("U"));

    // Same in the other direction.
    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [0.0, 1.0], &[[-0.1, 1.0], [-0.33 * quarter, 1.0]]);
    sim.pointer_up(&prefs);
    run_to_idle(&mut sim, &prefs);
    assert_eq!(*sim.cube(), solved_then("U'"));
}

#[test]
fn test_single_move_drag_counts_from_press() {
    init_logging();
    let prefs = Preferences::default();
    let quarter = prefs.interaction.drag_cell_fraction * prefs.interaction.cell_pitch;

    // The move that locks the layer is the only one in the gesture.
    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [0.0, 1.0], &[[0.4, 1.0]]);
    let Some((_, angle)) = sim.drag_state().active_twist() else {
        panic!("expected locked drag, got {:?}", sim.drag_state());
    };
    assert!((angle - 0.4 / quarter * FRAC_PI_2).abs() < 1e-4, "{angle}");
    sim.pointer_up(&prefs);
    assert_eq!(run_to_idle(&mut sim, &prefs), 1);
    assert_eq!(*sim.cube(), solved_then("U"));

    // Short flicks snap the same way as slow drags.
    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [1.0, 0.0], &[[1.0, -0.33 * quarter]]);
    sim.pointer_up(&prefs);
    assert_eq!(run_to_idle(&mut sim, &prefs), 1);
    assert_eq!(*sim.cube(), solved_then("R"));

    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [1.0, 0.0], &[[1.0, -0.31 * quarter]]);
    sim.pointer_up(&prefs);
    assert_eq!(run_to_idle(&mut sim, &prefs), 0);
    assert!(sim.cube().is_solved());
}

#[test]
fn test_drag_on_turned_cube() {
    init_logging();
    let prefs = Preferences::default();

    // Horizontal drags on the top row still turn the top layer.
    let mut sim = CubeSimulation::new();
    let vp = TurnedViewport {
        cube: sim.cube().clone(),
    };
    drag_in(&vp, &mut sim, &prefs, [0.0, 1.0], &[[0.1, 1.0], [0.8, 1.0]]);
    let DragState::Locked(session) = sim.drag_state() else {
        panic!("expected locked drag, got {:?}", sim.drag_state());
    };
    assert_eq!(session.face.symbol(), 'L');
    sim.pointer_up(&prefs);
    assert_eq!(run_to_idle(&mut sim, &prefs), 1);
    assert_eq!(*sim.cube(), solved_then("U"));

    // The right column on screen is the front layer, which turns about world
    // +X. Dragging it up is a negative turn about the local Z axis.
    let mut sim = CubeSimulation::new();
    drag_in(&vp, &mut sim, &prefs, [1.0, 0.0], &[[1.0, 0.1], [1.0, 0.8]]);
    let DragState::Locked(session) = sim.drag_state() else {
        panic!("expected locked drag, got {:?}", sim.drag_state());
    };
    assert!((session.angle + FRAC_PI_2).abs() < 1e-4, "{}", session.angle);
    sim.pointer_up(&prefs);
    assert_eq!(run_to_idle(&mut sim, &prefs), 1);
    assert_eq!(*sim.cube(), solved_then("F'"));
}

#[test]
fn test_drag_angle_is_clamped_to_half_turn() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [0.0, 1.0], &[[0.1, 1.0], [50.0, 1.0]]);
    let Some((_, angle)) = sim.drag_state().active_twist() else {
        panic!("expected locked drag");
    };
    assert_eq!(angle, std::f32::consts::PI);
    sim.pointer_up(&prefs);
    run_to_idle(&mut sim, &prefs);
    assert_eq!(*sim.cube(), solved_then("U2"));
}

#[test]
fn test_abort_discards_drag() {
    init_logging();
    let prefs = Preferences::default();

    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [0.0, 1.0], &[[0.1, 1.0], [0.9, 1.0]]);
    sim.cancel_gesture();
    assert_eq!(*sim.drag_state(), DragState::Idle);
    assert_eq!(run_to_idle(&mut sim, &prefs), 0);
    assert!(sim.cube().is_solved());

    // Aborting during the snap animation also discards the move.
    drag(&mut sim, &prefs, [0.0, 1.0], &[[0.1, 1.0], [0.9, 1.0]]);
    sim.pointer_up(&prefs);
    sim.advance(FRAME, &prefs.animation);
    sim.cancel_gesture();
    assert_eq!(run_to_idle(&mut sim, &prefs), 0);
    assert!(sim.cube().is_solved());
}

#[test]
fn test_orbit_routing() {
    init_logging();
    let prefs = Preferences::default();
    let vp = FrontViewport {
        cube: CubeState::solved(),
    };
    let on_cube = screen(0.0, 0.0);
    let off_cube = screen(3.0, 3.0);

    let cases = [
        (on_cube, PointerButton::Secondary, false),
        (on_cube, PointerButton::Middle, false),
        (on_cube, PointerButton::Primary, true),
        (off_cube, PointerButton::Primary, false),
    ];
    for (cursor, button, orbit_modifier) in cases {
        let mut sim = CubeSimulation::new();
        let initial_camera = *sim.camera();
        sim.pointer_down(&vp, cursor, button, orbit_modifier);
        assert!(
            matches!(sim.drag_state(), DragState::Orbiting { .. }),
            "{button:?} {orbit_modifier}",
        );
        sim.pointer_move(&vp, cursor + Vector2::new(20.0, 10.0), &prefs.interaction);
        let camera = *sim.camera();
        assert_eq!(camera.yaw, initial_camera.yaw + 20.0 * prefs.interaction.orbit_sensitivity);
        assert!(camera.pitch > initial_camera.pitch);
        sim.pointer_up(&prefs);
        assert_eq!(*sim.drag_state(), DragState::Idle);
        assert!(sim.cube().is_solved());
    }
}

#[test]
fn test_picking_disabled_while_playing() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    sim.apply_named_move("F");
    sim.advance(FRAME, &prefs.animation);
    let vp = FrontViewport::of(&sim);
    sim.pointer_down(&vp, screen(0.0, 0.0), PointerButton::Primary, false);
    assert!(matches!(sim.drag_state(), DragState::Orbiting { .. }));
    sim.pointer_up(&prefs);
    run_to_idle(&mut sim, &prefs);
    assert_eq!(*sim.cube(), solved_then("F"));
}

#[test]
fn test_queue_waits_for_drag() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    drag(&mut sim, &prefs, [0.0, 1.0], &[[0.1, 1.0], [0.9, 1.0]]);
    sim.apply_named_move("R");
    for _ in 0..100 {
        sim.advance(FRAME, &prefs.animation);
    }
    assert!(sim.cube().is_solved());
    assert_eq!(sim.queued_move_count(), 1);

    sim.pointer_up(&prefs);
    assert_eq!(run_to_idle(&mut sim, &prefs), 2);
    assert_eq!(*sim.cube(), solved_then("U R"));
}

#[test]
fn test_render_transforms_follow_drag() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    let identity = Quaternion::new(1.0, 0.0, 0.0, 0.0);

    let at_rest = sim.render_transforms(&prefs.interaction);
    assert_eq!(at_rest.len(), 26);
    assert!(at_rest.iter().all(|t| t.orientation == identity));

    drag(&mut sim, &prefs, [0.0, 1.0], &[[0.1, 1.0], [0.8, 1.0]]);
    let transforms = sim.render_transforms(&prefs.interaction);
    for (cubie, t) in sim.cube().cubies().iter().zip(&transforms) {
        let [x, y, z] = cubie.position.0.map(f32::from);
        if cubie.position.0[1] == 1 {
            assert_ne!(t.orientation, identity);
            // A quarter turn about +Y takes +Z to +X.
            let expected = Point3::new(z, y, -x);
            assert!((t.position - expected).magnitude() < 1e-4, "{t:?}");
        } else {
            assert_eq!(t.orientation, identity);
            assert_eq!(t.position, Point3::new(x, y, z));
        }
    }
}

#[test]
fn test_reset_during_playback() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    sim.cube_mut()
        .set_render_handle(0, cubelet_core::RenderHandle(42));
    sim.scramble(Some(7), &prefs);
    assert_eq!(sim.queued_move_count(), prefs.scramble.length);
    for _ in 0..50 {
        sim.advance(FRAME, &prefs.animation);
    }
    assert!(!sim.cube().is_solved());

    sim.reset_to_solved();
    let first = sim.snapshot();
    sim.reset_to_solved();
    assert_eq!(sim.snapshot(), first);
    assert_eq!(first, CubeState::solved().snapshot());
    assert!(!sim.is_playing());
    assert_eq!(
        sim.cube().cubies()[0].render_handle,
        Some(cubelet_core::RenderHandle(42)),
    );
}

#[test]
fn test_key_press() {
    init_logging();
    let prefs = Preferences::default();
    let mut sim = CubeSimulation::new();
    assert_eq!(sim.key_press('r', false, &prefs), parse_move("R").ok());
    assert_eq!(sim.key_press('U', true, &prefs), parse_move("U'").ok());
    assert_eq!(sim.key_press('?', false, &prefs), None);
    run_to_idle(&mut sim, &prefs);
    assert_eq!(*sim.cube(), solved_then("R U'"));
}
