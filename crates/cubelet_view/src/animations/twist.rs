use std::f32::consts::FRAC_PI_2;

use cubelet_core::Move;
use cubelet_prefs::InterpolateFn;
use web_time::Duration;

use crate::grip::LayerGrip;

/// Animation of a gripped layer from its current angle to a whole number of
/// quarter turns, followed by a commit to the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistAnimation {
    /// Cubies being rotated.
    pub grip: LayerGrip,
    /// Move to apply to the cube once the animation finishes, if any.
    pub commit: Option<Move>,
    initial_angle: f32,
    final_angle: f32,
    /// Duration of the whole animation, in seconds.
    duration: f32,
    /// Progress of the animation, from 0.0 to 1.0.
    progress: f32,
    interpolation: InterpolateFn,
}
impl TwistAnimation {
    /// Constructs an animation that rotates `grip` from `initial_angle` (in
    /// radians) to `quarter_turns` quarter turns.
    pub fn new(
        grip: LayerGrip,
        initial_angle: f32,
        quarter_turns: i32,
        duration: f32,
        interpolation: InterpolateFn,
    ) -> Self {
        let commit = Move::new(grip.axis, grip.layer, quarter_turns);
        Self {
            grip,
            commit,
            initial_angle,
            final_angle: quarter_turns as f32 * FRAC_PI_2,
            duration,
            progress: 0.0,
            interpolation,
        }
    }

    /// Steps the animation forward. Returns whether the animation has
    /// finished, which only happens once progress reaches exactly 1.0.
    pub fn proceed(&mut self, delta: Duration) -> bool {
        let step = delta.as_secs_f32() / self.duration;
        // Also handles zero and invalid durations.
        if !(0.0..1.0).contains(&step) {
            self.progress = 1.0;
        } else {
            self.progress = (self.progress + step).min(1.0);
        }
        self.is_finished()
    }

    /// Returns whether the animation has reached its final angle.
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Returns the raw progress of the animation, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Returns the current rotation angle of the gripped layer, in radians.
    pub fn angle(&self) -> f32 {
        let t = self.interpolation.interpolate(self.progress);
        self.initial_angle + (self.final_angle - self.initial_angle) * t
    }
}
