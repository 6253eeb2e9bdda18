//! Faces, sticker colors, and per-cubie face color maps.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Axis, Sign};

/// Face of the cube, used both for sticker coloring and for move notation.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Face {
    /// Up (Y+).
    U = 0,
    /// Down (Y-).
    D = 1,
    /// Left (X-).
    L = 2,
    /// Right (X+).
    R = 3,
    /// Front (Z+).
    F = 4,
    /// Back (Z-).
    B = 5,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Face {
    /// Returns an iterator over all faces.
    pub fn iter() -> impl Iterator<Item = Face> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the face on the given side of the cube along `axis`.
    ///
    /// Returns `None` if `sign` is zero.
    pub const fn from_axis_sign(axis: Axis, sign: Sign) -> Option<Face> {
        use Face::*;

        match (axis, sign) {
            (_, Sign::Zero) => None,
            (Axis::X, Sign::Pos) => Some(R),
            (Axis::X, Sign::Neg) => Some(L),
            (Axis::Y, Sign::Pos) => Some(U),
            (Axis::Y, Sign::Neg) => Some(D),
            (Axis::Z, Sign::Pos) => Some(F),
            (Axis::Z, Sign::Neg) => Some(B),
        }
    }

    /// Returns the axis perpendicular to the face.
    pub const fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns the side of the cube that the face is on.
    pub const fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }

    /// Returns the outward normal of the face.
    pub const fn normal(self) -> [i8; 3] {
        let mut ret = [0; 3];
        ret[self.axis().index()] = self.sign().int();
        ret
    }

    /// Returns the notation symbol for the face.
    pub const fn symbol(self) -> char {
        use Face::*;

        match self {
            U => 'U',
            D => 'D',
            L => 'L',
            R => 'R',
            F => 'F',
            B => 'B',
        }
    }
    /// Returns the human-friendly name of the face.
    pub const fn name(self) -> &'static str {
        use Face::*;

        match self {
            U => "Up",
            D => "Down",
            L => "Left",
            R => "Right",
            F => "Front",
            B => "Back",
        }
    }

    /// Returns the color of the stickers on this face when the cube is solved.
    pub const fn solved_color(self) -> Color {
        use Face::*;

        match self {
            U => Color::White,
            D => Color::Yellow,
            L => Color::Orange,
            R => Color::Red,
            F => Color::Green,
            B => Color::Blue,
        }
    }

    /// Returns the 4-cycle of faces that move into one another under a
    /// positive quarter turn about `axis`. Each face moves to the next one in
    /// the cycle.
    pub const fn cycle(axis: Axis) -> [Face; 4] {
        use Face::*;

        match axis {
            Axis::X => [U, F, D, B],
            Axis::Y => [F, R, B, L],
            Axis::Z => [U, L, D, R],
        }
    }
}

/// Sticker color.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

/// Color on each face of a cubie, or `None` for faces that point into the
/// cube.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceColors([Option<Color>; 6]);
impl Index<Face> for FaceColors {
    type Output = Option<Color>;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face as usize]
    }
}
impl IndexMut<Face> for FaceColors {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face as usize]
    }
}
impl FaceColors {
    /// Returns the number of faces that have a color.
    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// Iterates over the faces that have a color.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Face, Color)> {
        Face::iter().filter_map(|face| Some((face, self[face]?)))
    }
}
