//! Time-based animations.

mod twist;

pub use twist::TwistAnimation;
