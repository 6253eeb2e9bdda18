use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transform::normalize_turns;
use crate::{Axis, Position};

/// Error produced when constructing a [`Layer`] from an out-of-range index.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("layer index {0} is not in {{-1, 0, 1}}")]
pub struct LayerError(pub i8);

/// Slice of the cube along an axis: `-1`, `0`, or `1`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i8", into = "i8")]
pub struct Layer(i8);
impl TryFrom<i8> for Layer {
    type Error = LayerError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<Layer> for i8 {
    fn from(layer: Layer) -> Self {
        layer.0
    }
}
impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}
impl Layer {
    /// Layer on the negative side of the axis.
    pub const NEG: Self = Self(-1);
    /// Middle layer.
    pub const MID: Self = Self(0);
    /// Layer on the positive side of the axis.
    pub const POS: Self = Self(1);

    /// Constructs a layer from its index.
    pub const fn new(index: i8) -> Result<Self, LayerError> {
        match index {
            -1..=1 => Ok(Self(index)),
            _ => Err(LayerError(index)),
        }
    }
    /// Returns the layer containing `position` along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not on the grid.
    pub fn of(position: Position, axis: Axis) -> Self {
        match Self::new(position[axis]) {
            Ok(layer) => layer,
            Err(e) => panic!("position {position} is off the grid: {e}"),
        }
    }
    /// Returns the layer index.
    pub const fn get(self) -> i8 {
        self.0
    }
}

/// Rotation of a single layer by a nonzero number of quarter turns.
///
/// Turns are right-handed about the positive axis and stored in the range
/// `{-2, -1, 1, 2}`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    axis: Axis,
    layer: Layer,
    turns: i8,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::notation::fmt_move(*self, f)
    }
}
impl Move {
    /// Constructs a move. Returns `None` if `quarter_turns` is a multiple of
    /// 4, since that does nothing.
    ///
    /// Turn counts outside `{-2, -1, 1, 2}` are normalized; for example `3`
    /// becomes `-1`.
    pub fn new(axis: Axis, layer: Layer, quarter_turns: i32) -> Option<Self> {
        let turns = match normalize_turns(quarter_turns) {
            0 => return None,
            1 => 1,
            2 if quarter_turns < 0 => -2,
            2 => 2,
            _ => -1,
        };
        Some(Self { axis, layer, turns })
    }

    /// Returns the axis of rotation.
    pub fn axis(self) -> Axis {
        self.axis
    }
    /// Returns the layer that is rotated.
    pub fn layer(self) -> Layer {
        self.layer
    }
    /// Returns the signed number of quarter turns.
    pub fn turns(self) -> i8 {
        self.turns
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            turns: -self.turns,
            ..self
        }
    }

    /// Returns whether a cubie at `position` is rotated by this move.
    pub fn affects(self, position: Position) -> bool {
        position[self.axis] == self.layer.get()
    }
}
