use cgmath::{Deg, Quaternion, Rad, Rotation3, Vector2};
use cubelet_prefs::InteractionPreferences;

/// Camera that orbits around the cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Rotation about the vertical axis, in radians.
    pub yaw: f32,
    /// Rotation about the horizontal axis, in radians. Positive values look
    /// down onto the top face.
    pub pitch: f32,
}
impl Default for OrbitCamera {
    fn default() -> Self {
        // Show the front, right, and top faces.
        Self {
            yaw: Rad::from(Deg(-30.0_f32)).0,
            pitch: Rad::from(Deg(25.0_f32)).0,
        }
    }
}
impl OrbitCamera {
    /// Rotates the camera by a cursor movement in pixels.
    pub fn orbit(&mut self, cursor_delta: Vector2<f32>, prefs: &InteractionPreferences) {
        self.yaw += cursor_delta.x * prefs.orbit_sensitivity;
        self.pitch = (self.pitch + cursor_delta.y * prefs.orbit_sensitivity)
            .clamp(-prefs.max_pitch, prefs.max_pitch);
    }

    /// Returns the rotation from world space to view space.
    pub fn rotation(&self) -> Quaternion<f32> {
        Quaternion::from_angle_x(Rad(self.pitch)) * Quaternion::from_angle_y(Rad(self.yaw))
    }
}
