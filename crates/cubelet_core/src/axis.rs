use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Principal axis of the cube.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}
impl Axis {
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Iterator<Item = Axis> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the index of the axis, which can be used to index an `[_; 3]`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the perpendicular axes `[a, b]` from this one, using the
    /// right-hand rule. (The cross product of `a` and `b` is the input.) A
    /// positive quarter turn about the axis moves `a` to `b`.
    pub const fn perpendiculars(self) -> [Axis; 2] {
        use Axis::*;
        match self {
            X => [Y, Z],
            Y => [Z, X],
            Z => [X, Y],
        }
    }

    /// Returns the unit vector along this axis.
    pub const fn unit(self) -> [i8; 3] {
        match self {
            Axis::X => [1, 0, 0],
            Axis::Y => [0, 1, 0],
            Axis::Z => [0, 0, 1],
        }
    }
}
