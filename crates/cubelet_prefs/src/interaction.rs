use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Distance in pixels the cursor must move from where it was pressed
    /// before a layer is chosen.
    pub lock_threshold_px: f32,
    /// Distance between the centers of adjacent cubies, in world units.
    pub cell_pitch: f32,
    /// Fraction of `cell_pitch` that the cursor must travel on the drag plane
    /// to turn a layer by a quarter turn.
    pub drag_cell_fraction: f32,
    /// Fraction of a quarter turn past which a released drag commits a
    /// quarter turn instead of springing back.
    pub snap_threshold: f32,
    /// Camera rotation per pixel of cursor movement, in radians.
    pub orbit_sensitivity: f32,
    /// Maximum camera pitch, in radians.
    pub max_pitch: f32,
}

impl Default for InteractionPreferences {
    /// Same values as `default.yaml`. Fields missing from a preferences file
    /// fall back to these.
    fn default() -> Self {
        Self {
            lock_threshold_px: 6.0,
            cell_pitch: 1.0,
            drag_cell_fraction: 0.8,
            snap_threshold: 0.32,
            orbit_sensitivity: 0.01,
            max_pitch: 1.5,
        }
    }
}

impl InteractionPreferences {
    /// Returns the layer rotation in radians per world unit of drag along the
    /// chosen tangent.
    pub fn drag_angle_per_unit(&self) -> f32 {
        std::f32::consts::FRAC_PI_2 / (self.drag_cell_fraction * self.cell_pitch)
    }
}
