//! Logical model of a 3x3x3 twisty cube: cubie positions, sticker colors,
//! quarter-turn transforms, and move notation.
//!
//! This crate has no notion of time or rendering. Animation and pointer input
//! live in `cubelet_view`.

/// Panics in debug builds; logs an error in release builds.
#[macro_export]
macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

/// Checks that a `Result` is `Ok` in debug builds, panicking with the error
/// otherwise. Does nothing in release builds.
#[macro_export]
macro_rules! debug_assert_ok {
    ($result:expr $(,)?) => {
        if cfg!(debug_assertions) {
            if let Err(e) = $result {
                panic!("invariant violated: {e}");
            }
        }
    };
}

mod axis;
mod cubie;
mod face;
pub mod notation;
mod scramble;
mod sign;
mod state;
pub mod transform;
mod twist;

pub use axis::Axis;
pub use cubie::{Cubie, Position, RenderHandle};
pub use face::{Color, Face, FaceColors};
pub use notation::{NotationError, parse_move, parse_moves};
pub use scramble::{random_seed, scramble};
pub use sign::Sign;
pub use state::{CUBIE_COUNT, CubeSnapshot, CubeState, CubieSnapshot, LayerMembers, StateError};
pub use twist::{Layer, LayerError, Move};
