//! Node transform: position and rotation (quaternion).
//!
//! `Transform` is `Copy` and `Default` so scene nodes can embed it directly.
//! The scroll mapper only ever writes `position`; the floating object also
//! drives `rotation` through [`Transform::set_euler_xy`].

use glam::{EulerRot, Quat, Vec3};

/// Position and orientation of a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in scene units.
    pub position: Vec3,
    /// Orientation as a unit quaternion.
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Replace the rotation with an `XYZ` euler rotation around X then Y,
    /// leaving Z untouched at zero.
    pub fn set_euler_xy(&mut self, x: f32, y: f32) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, 0.0);
    }

    /// Returns the `(x, y)` euler angles of the current rotation.
    pub fn euler_xy(&self) -> (f32, f32) {
        let (x, y, _) = self.rotation.to_euler(EulerRot::XYZ);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert!(t.rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
        assert_eq!(t.euler_xy(), (0.0, 0.0));
    }

    #[test]
    fn euler_xy_roundtrip() {
        let mut t = Transform::default();
        t.set_euler_xy(0.3, 0.2);
        let (x, y) = t.euler_xy();
        assert!((x - 0.3).abs() < 1e-5);
        assert!((y - 0.2).abs() < 1e-5);
    }
}
