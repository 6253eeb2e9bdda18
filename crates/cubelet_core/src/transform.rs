//! Quarter-turn transforms on grid positions and sticker colors.

use crate::{Axis, Face, FaceColors, Position};

/// Normalizes a quarter-turn count to the range `0..4`. Negative counts wrap
/// around, so `-1` becomes `3`.
pub fn normalize_turns(quarter_turns: i32) -> u8 {
    quarter_turns.rem_euclid(4) as u8
}

/// Rotates a grid position by `quarter_turns` right-handed quarter turns about
/// `axis`.
///
/// Each quarter turn maps the two perpendicular coordinates `(a, b)` to
/// `(-b, a)`, so rotation is exact and four quarter turns are the identity.
#[must_use]
pub fn rotate_coordinate(position: Position, axis: Axis, quarter_turns: i32) -> Position {
    let [a, b] = axis.perpendiculars();
    let mut ret = position;
    for _ in 0..normalize_turns(quarter_turns) {
        let (old_a, old_b) = (ret[a], ret[b]);
        ret[a] = -old_b;
        ret[b] = old_a;
    }
    ret
}

/// Returns the sticker colors of a cubie after `quarter_turns` right-handed
/// quarter turns about `axis`.
///
/// Colors advance along [`Face::cycle()`] for the axis. Missing colors move
/// along the cycle just like present ones, and the two faces perpendicular to
/// the axis are unchanged.
#[must_use]
pub fn rotate_face_labels(faces: FaceColors, axis: Axis, quarter_turns: i32) -> FaceColors {
    let cycle = Face::cycle(axis);
    let n = normalize_turns(quarter_turns) as usize;
    let mut ret = faces;
    for (i, &face) in cycle.iter().enumerate() {
        ret[cycle[(i + n) % 4]] = faces[face];
    }
    ret
}
