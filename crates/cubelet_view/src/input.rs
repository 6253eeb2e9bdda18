//! Types supplied by the host application: pointer buttons, hit tests, and
//! pointer rays.

use cgmath::{InnerSpace, Point2, Point3, Quaternion, Vector3};

/// Threshold below which a ray is considered parallel to a plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Mouse button or equivalent pointer button.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, touch, or pen tip.
    #[default]
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Middle,
}

/// Result of a successful hit test against the cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    /// Index of the cubie that was hit.
    pub cubie: usize,
    /// Surface normal at the hit, in the cube's local frame.
    pub local_normal: Vector3<f32>,
    /// Point that was hit, in world space.
    pub world_point: Point3<f32>,
}

/// Ray from the camera through the cursor, in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Origin of the ray.
    pub origin: Point3<f32>,
    /// Direction of the ray. Need not be normalized.
    pub direction: Vector3<f32>,
}
impl Ray {
    /// Returns the point where the ray meets the plane through `point` with
    /// normal `normal`, or `None` if the ray is parallel to the plane.
    pub fn intersect_plane(&self, point: Point3<f32>, normal: Vector3<f32>) -> Option<Point3<f32>> {
        let denom = self.direction.dot(normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (point - self.origin).dot(normal) / denom;
        Some(self.origin + self.direction * t)
    }
}

/// Scene queries the host application provides for pointer interaction.
pub trait Viewport {
    /// Returns the cubie under `cursor`, if any.
    fn hit_test(&self, cursor: Point2<f32>) -> Option<PickHit>;

    /// Returns the world-space ray under `cursor`.
    fn pointer_ray(&self, cursor: Point2<f32>) -> Ray;

    /// Returns the rotation from the cube's local frame to world space.
    fn cube_orientation(&self) -> Quaternion<f32> {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }
}
