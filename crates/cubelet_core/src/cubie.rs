use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{Axis, Face, FaceColors, Sign};

/// Integer grid position of a cubie, with each coordinate in `{-1, 0, 1}`.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(pub [i8; 3]);
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}
impl Index<Axis> for Position {
    type Output = i8;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}
impl IndexMut<Axis> for Position {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.0[axis.index()]
    }
}
impl Position {
    /// The center of the cube, which is never occupied by a tracked cubie.
    pub const CENTER: Self = Self([0, 0, 0]);

    /// Constructs a position from its coordinates.
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self([x, y, z])
    }

    /// Returns the number of nonzero coordinates, which is also the number of
    /// stickers on a cubie at this position.
    pub fn nonzero_count(self) -> usize {
        self.0.iter().filter(|&&c| c != 0).count()
    }

    /// Returns whether every coordinate is in `{-1, 0, 1}`.
    pub fn is_on_grid(self) -> bool {
        self.0.iter().all(|c| (-1..=1).contains(c))
    }

    /// Returns the faces of the cube that this position touches.
    pub fn outer_faces(self) -> impl Iterator<Item = Face> {
        Axis::iter().filter_map(move |axis| Face::from_axis_sign(axis, Sign::of(self[axis].into())))
    }
}

/// Opaque reference to the renderable object that draws a cubie.
///
/// The model only records this so that a renderer can find its object again;
/// it never creates or destroys the object.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u64);

/// One of the 26 movable unit cubes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cubie {
    /// Current grid position.
    pub position: Position,
    /// Current sticker colors.
    pub faces: FaceColors,
    /// Renderable object for this cubie, if one has been registered.
    pub render_handle: Option<RenderHandle>,
}
impl Cubie {
    /// Constructs a cubie in its solved position, with one sticker for each
    /// outer face it touches.
    pub fn solved(position: Position) -> Self {
        let mut faces = FaceColors::default();
        for face in position.outer_faces() {
            faces[face] = Some(face.solved_color());
        }
        Self {
            position,
            faces,
            render_handle: None,
        }
    }
}
