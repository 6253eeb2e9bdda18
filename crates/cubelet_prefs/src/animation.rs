use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of a queued move, in seconds.
    pub twist_duration: f32,
    /// Duration of the snap after releasing a drag, in seconds.
    pub snap_duration: f32,
    pub twist_interpolation: InterpolateFn,
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        Lerp,
        Cosine,
        Cubic,
        #[default]
        EaseOutCubic,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, t: f32) -> f32 {
            match self {
                Self::Lerp => t,

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::Cubic => (3.0 - 2.0 * t) * t * t,

                Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            }
        }
    }

}
