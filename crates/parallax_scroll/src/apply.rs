//! Writing a path position onto the resolved node.

use glam::Vec3;
use parallax_core::{Handle, World};

use crate::target::{NameLookup, TargetKind};

/// Depth the scene's own camera is assumed to sit at when we move content
/// instead of the camera.
///
/// This does not match the first waypoint's depth (900); keep it
/// configurable rather than silently reconciling the two.
pub const DEFAULT_CAMERA_Z: f32 = 1200.0;

/// Capability the mapper needs to move a node.  The mapper is the only
/// writer of the positions it controls.
pub trait PositionSink: NameLookup {
    /// Overwrite a node's position.  Returns `false` if the node no longer
    /// exists.
    fn write_position(&mut self, node: Self::Node, position: Vec3) -> bool;
}

impl PositionSink for World {
    fn write_position(&mut self, node: Handle, position: Vec3) -> bool {
        self.set_position(node, position)
    }
}

/// The position a node of `kind` must take for the view to match a camera
/// at `position`.
///
/// A camera takes it verbatim.  Content moved in place of the camera takes
/// the mirror image: `(−x, −y, default_camera_z − z)`.
pub fn target_position(kind: TargetKind, position: Vec3, default_camera_z: f32) -> Vec3 {
    match kind {
        TargetKind::Camera => position,
        TargetKind::Fallback => Vec3::new(-position.x, -position.y, default_camera_z - position.z),
    }
}

/// Write `position` onto `node` according to `kind`.  Returns whether the
/// node still existed.
pub fn apply<S: PositionSink + ?Sized>(
    scene: &mut S,
    node: S::Node,
    kind: TargetKind,
    position: Vec3,
    default_camera_z: f32,
) -> bool {
    scene.write_position(node, target_position(kind, position, default_camera_z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallax_core::NodeKind;

    #[test]
    fn camera_takes_position_verbatim() {
        let mut w = World::new();
        let cam = w.spawn("Camera").with_kind(NodeKind::Camera).build();
        let p = Vec3::new(10.0, 20.0, 300.0);
        assert!(apply(&mut w, cam, TargetKind::Camera, p, DEFAULT_CAMERA_Z));
        assert_eq!(w.position(cam), Some(p));
    }

    #[test]
    fn fallback_takes_the_inverse() {
        let mut w = World::new();
        let group = w.spawn("Group").with_kind(NodeKind::Group).build();
        apply(&mut w, group, TargetKind::Fallback, Vec3::new(10.0, 20.0, 300.0), DEFAULT_CAMERA_Z);
        assert_eq!(w.position(group), Some(Vec3::new(-10.0, -20.0, 900.0)));
    }

    #[test]
    fn fallback_depth_uses_the_given_camera_z() {
        let p = target_position(TargetKind::Fallback, Vec3::new(0.0, 0.0, 1600.0), 1000.0);
        assert_eq!(p, Vec3::new(0.0, 0.0, -600.0));
    }

    #[test]
    fn stale_node_reports_false() {
        let mut w = World::new();
        let cam = w.spawn("Camera").build();
        w.despawn(cam);
        assert!(!apply(&mut w, cam, TargetKind::Camera, Vec3::ONE, DEFAULT_CAMERA_Z));
    }
}
