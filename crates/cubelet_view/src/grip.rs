//! Choosing which layer a drag turns and in which direction.
//!
//! All of these are pure functions of the picked face and the drag direction,
//! so they can be tested without a viewport.

use cgmath::{InnerSpace, Vector3};
use cubelet_core::{Axis, CubeState, Face, Layer, LayerMembers, Position, Sign};
use float_ord::FloatOrd;

/// Sign of `e_normal × e_tangent` along `e_rotation`, indexed by
/// `[rotation_axis][normal_axis]`. The tangent axis is whichever axis is left
/// over. Entries where the rotation axis equals the normal axis never occur.
const DRAG_SIGN: [[i8; 3]; 3] = [
    // normal: X   Y   Z
    /* X */ [0, 1, -1],
    /* Y */ [-1, 0, 1],
    /* Z */ [1, -1, 0],
];

/// Cubies detached from the cube to rotate together about an axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerGrip {
    /// Axis of rotation.
    pub axis: Axis,
    /// Layer along `axis`.
    pub layer: Layer,
    /// Indices of the cubies in the layer.
    pub members: LayerMembers,
}
impl LayerGrip {
    /// Grips every cubie of `cube` in `layer` along `axis`.
    pub fn new(cube: &CubeState, axis: Axis, layer: Layer) -> Self {
        Self {
            axis,
            layer,
            members: cube.layer_members(axis, layer),
        }
    }
}

/// Returns the unit vector along `axis`.
pub fn axis_vector(axis: Axis) -> Vector3<f32> {
    let [x, y, z] = axis.unit();
    Vector3::new(x as f32, y as f32, z as f32)
}

/// Returns the axis along which `v` has the largest magnitude. Ties are broken
/// in favor of X, then Y, then Z.
pub fn dominant_axis(v: Vector3<f32>) -> Axis {
    // `max_by_key` keeps the last maximum, so iterate in reverse.
    [Axis::Z, Axis::Y, Axis::X]
        .into_iter()
        .max_by_key(|axis| FloatOrd(v[axis.index()].abs()))
        .unwrap_or(Axis::X)
}

/// Snaps an approximate surface normal in the cube's local frame to the
/// nearest face. A degenerate normal snaps to the positive side.
pub fn face_from_normal(normal: Vector3<f32>) -> Face {
    let axis = dominant_axis(normal);
    let sign = match Sign::of_float(normal[axis.index()]) {
        Sign::Neg => Sign::Neg,
        Sign::Zero | Sign::Pos => Sign::Pos,
    };
    Face::from_axis_sign(axis, sign).unwrap_or(Face::R)
}

/// Returns the two local-frame tangent directions on `face`: the unit vectors
/// along the two principal axes perpendicular to its normal.
pub fn tangents_for_face(face: Face) -> [Vector3<f32>; 2] {
    face.axis().perpendiculars().map(axis_vector)
}

/// Returns the index of the tangent in `tangents` most aligned with
/// `world_delta`. Ties go to the first tangent.
pub fn select_drag_tangent(world_delta: Vector3<f32>, tangents: [Vector3<f32>; 2]) -> usize {
    let [a, b] = tangents.map(|t| world_delta.dot(t).abs());
    if a >= b { 0 } else { 1 }
}

/// Returns the axis of the layer rotation that moves the surface along
/// `tangent`: the dominant component of `normal × tangent`.
pub fn infer_rotation_axis(normal: Vector3<f32>, tangent: Vector3<f32>) -> Axis {
    dominant_axis(normal.cross(tangent))
}

/// Returns the layer along `axis` that contains a cubie at `position`.
pub fn layer_index_from_cubie_position(position: Position, axis: Axis) -> Layer {
    Layer::of(position, axis)
}

/// Returns the sign that converts a drag distance along the positive tangent
/// of `face` into a right-handed rotation about `axis`, so that the layer
/// follows the cursor.
pub fn drag_sign(axis: Axis, face: Face) -> Sign {
    let table_sign = Sign::of(DRAG_SIGN[axis.index()][face.axis().index()] as i32);
    if table_sign.is_zero() {
        cubelet_core::debug_panic!("rotation axis {axis} is normal to face {}", face.name());
        return Sign::Pos;
    }
    table_sign * face.sign()
}
