use std::collections::HashSet;
use std::ops::Index;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::transform::{rotate_coordinate, rotate_face_labels};
use crate::{Axis, Cubie, FaceColors, Layer, Move, Position, RenderHandle};

/// Number of cubies tracked by the model. The center is never tracked.
pub const CUBIE_COUNT: usize = 26;

/// Indices of the cubies in a single layer. An outer layer has 9 cubies; a
/// middle layer has 8 because the center is not tracked.
pub type LayerMembers = SmallVec<[usize; 9]>;

/// Violation of a structural invariant of [`CubeState`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum StateError {
    #[error("expected 26 cubies; found {0}")]
    WrongCubieCount(usize),
    #[error("cubie {0} is off the grid at {1}")]
    OffGrid(usize, Position),
    #[error("cubie {0} is at the center")]
    AtCenter(usize),
    #[error("more than one cubie at {0}")]
    DuplicatePosition(Position),
    #[error("cubie {index} at {position} has {count} stickers")]
    StickerCount {
        index: usize,
        position: Position,
        count: usize,
    },
}

/// Position and sticker colors of one cubie, as captured by
/// [`CubeState::snapshot()`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubieSnapshot {
    /// Grid position.
    pub position: Position,
    /// Sticker colors.
    pub faces: FaceColors,
}

/// Copy of the logical state of every cubie, indexed the same way as
/// [`CubeState`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeSnapshot(pub Vec<CubieSnapshot>);

/// Logical model of a 3x3x3 cube: 26 cubies, each with a grid position and
/// sticker colors.
///
/// Cubie indices are stable: cubie `i` is always the same physical piece, so
/// render handles and animation groups can refer to cubies by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    cubies: Box<[Cubie]>,
}
impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}
impl Index<usize> for CubeState {
    type Output = Cubie;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cubies[index]
    }
}
impl CubeState {
    /// Constructs a cube in the solved configuration.
    pub fn solved() -> Self {
        let cubies = itertools::iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(x, y, z)| Position::new(x, y, z))
            .filter(|&pos| pos != Position::CENTER)
            .map(Cubie::solved)
            .collect();
        Self { cubies }
    }

    /// Replaces the state with the solved configuration. Render handles are
    /// kept, since cubie `i` is still the same piece.
    pub fn reset_to_solved(&mut self) {
        for (cubie, solved) in self.cubies.iter_mut().zip(Self::solved().cubies) {
            cubie.position = solved.position;
            cubie.faces = solved.faces;
        }
    }

    /// Returns all cubies.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Records the renderable object for a cubie.
    pub fn set_render_handle(&mut self, index: usize, handle: RenderHandle) {
        self.cubies[index].render_handle = Some(handle);
    }

    /// Returns the index of the cubie at `position`, if there is one.
    pub fn cubie_at(&self, position: Position) -> Option<usize> {
        self.cubies.iter().position(|c| c.position == position)
    }

    /// Returns the indices of the cubies whose coordinate along `axis` is
    /// `layer`.
    pub fn layer_members(&self, axis: Axis, layer: Layer) -> LayerMembers {
        self.cubies
            .iter()
            .positions(|c| c.position[axis] == layer.get())
            .collect()
    }

    /// Applies a move to every cubie in its layer: positions are rotated and
    /// sticker colors are cycled. Returns the indices of the cubies that were
    /// moved.
    pub fn apply_move(&mut self, mv: Move) -> LayerMembers {
        let members = self.layer_members(mv.axis(), mv.layer());
        let turns = i32::from(mv.turns());
        for &i in &members {
            let cubie = &mut self.cubies[i];
            cubie.position = rotate_coordinate(cubie.position, mv.axis(), turns);
            cubie.faces = rotate_face_labels(cubie.faces, mv.axis(), turns);
        }
        log::debug!("applied move {mv} to {} cubies", members.len());
        crate::debug_assert_ok!(self.validate());
        members
    }

    /// Returns a copy of the position and sticker colors of every cubie.
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot(
            self.cubies
                .iter()
                .map(|c| CubieSnapshot {
                    position: c.position,
                    faces: c.faces,
                })
                .collect(),
        )
    }

    /// Returns whether every cubie is back in its solved position with its
    /// solved sticker colors.
    pub fn is_solved(&self) -> bool {
        self.snapshot() == Self::solved().snapshot()
    }

    /// Checks the structural invariants of the model: exactly 26 cubies,
    /// occupying distinct non-center grid cells, each with as many stickers as
    /// it has nonzero coordinates.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.cubies.len() != CUBIE_COUNT {
            return Err(StateError::WrongCubieCount(self.cubies.len()));
        }
        let mut seen = HashSet::new();
        for (index, cubie) in self.cubies.iter().enumerate() {
            let position = cubie.position;
            if !position.is_on_grid() {
                return Err(StateError::OffGrid(index, position));
            }
            if position == Position::CENTER {
                return Err(StateError::AtCenter(index));
            }
            if !seen.insert(position) {
                return Err(StateError::DuplicatePosition(position));
            }
            let count = cubie.faces.count();
            if count != position.nonzero_count() {
                return Err(StateError::StickerCount {
                    index,
                    position,
                    count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Color, Face};

    #[test]
    fn test_solved_state() {
        let cube = CubeState::solved();
        assert_eq!(cube.cubies().len(), CUBIE_COUNT);
        cube.validate().expect("solved cube should be valid");

        let up_center = cube.cubie_at(Position::new(0, 1, 0)).expect("up center");
        let faces = cube[up_center].faces;
        assert_eq!(faces[Face::U], Some(Color::White));
        assert_eq!(faces.count(), 1);

        let corner = cube.cubie_at(Position::new(1, 1, 1)).expect("UFR corner");
        let faces = cube[corner].faces;
        assert_eq!(faces[Face::U], Some(Color::White));
        assert_eq!(faces[Face::R], Some(Color::Red));
        assert_eq!(faces[Face::F], Some(Color::Green));
        assert_eq!(faces[Face::D], None);
    }

    #[test]
    fn test_layer_sizes() {
        let cube = CubeState::solved();
        for axis in Axis::iter() {
            assert_eq!(cube.layer_members(axis, Layer::NEG).len(), 9);
            assert_eq!(cube.layer_members(axis, Layer::MID).len(), 8);
            assert_eq!(cube.layer_members(axis, Layer::POS).len(), 9);
        }
    }

    #[test]
    fn test_move_only_touches_its_layer() {
        let mut cube = CubeState::solved();
        let before = cube.snapshot();
        let mv = Move::new(Axis::Z, Layer::MID, 1).expect("nonzero move");
        let moved = cube.apply_move(mv);
        let after = cube.snapshot();
        for i in 0..CUBIE_COUNT {
            if moved.contains(&i) {
                assert_eq!(before.0[i].position[Axis::Z], 0);
            } else {
                assert_eq!(before.0[i], after.0[i]);
            }
        }
    }

    #[test]
    fn test_reset_keeps_render_handles() {
        let mut cube = CubeState::solved();
        cube.set_render_handle(3, RenderHandle(77));
        cube.apply_move(Move::new(Axis::X, Layer::NEG, 1).expect("nonzero move"));
        cube.reset_to_solved();
        assert!(cube.is_solved());
        assert_eq!(cube[3].render_handle, Some(RenderHandle(77)));
    }
}
