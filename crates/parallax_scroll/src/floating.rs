//! The floating shape on the foreground layer.
//!
//! Unlike the camera path this runs every frame: the shape orbits the origin
//! on its own clock, sinks as the page scrolls, bobs and tumbles.  Whenever
//! it crosses the `z = 0` plane the page has to move its canvas in front of
//! or behind the content, so the only event this module reports is a
//! [`DepthLayer`] change.

use glam::Vec3;
use parallax_core::Transform;

use crate::config::FloatingConfig;

/// Which side of the page content the shape is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthLayer {
    Front,
    Back,
}

impl DepthLayer {
    fn from_depth(z: f32) -> Self {
        if z > 0.0 {
            DepthLayer::Front
        } else {
            DepthLayer::Back
        }
    }
}

/// Pose of the shape for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingPose {
    pub position: Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl FloatingPose {
    /// Pose at `elapsed` seconds with the page scrolled `scroll_offset`
    /// pixels.  Pure.
    pub fn at(config: &FloatingConfig, elapsed: f32, scroll_offset: f32) -> Self {
        let t = elapsed;
        let radius_x = config.base_radius_x + (t * config.radius_x_rate).sin() * config.radius_x_swing;
        let radius_z = config.base_radius_z + (t * config.radius_z_rate).cos() * config.radius_z_swing;

        let x = (t * config.orbit_rate).sin() * radius_x;
        let z = (t * config.orbit_rate).cos() * radius_z;
        let y = config.start_height - scroll_offset * config.scroll_factor
            + (t * config.bob_rate).sin() * config.bob_amplitude;

        Self {
            position: Vec3::new(x, y, z),
            rotation_x: t * config.spin_x_rate,
            rotation_y: t * config.spin_y_rate,
        }
    }

    pub fn write_to(&self, transform: &mut Transform) {
        transform.position = self.position;
        transform.set_euler_xy(self.rotation_x, self.rotation_y);
    }
}

/// Frame-to-frame state of the floating shape.
#[derive(Debug, Clone)]
pub struct FloatingObject {
    config: FloatingConfig,
    pose: FloatingPose,
    layer: DepthLayer,
}

impl FloatingObject {
    pub fn new(config: FloatingConfig) -> Self {
        let pose = FloatingPose {
            position: config.rest_position,
            rotation_x: 0.0,
            rotation_y: 0.0,
        };
        Self {
            config,
            pose,
            layer: DepthLayer::Front,
        }
    }

    /// Advance to `elapsed` seconds.  Returns the new layer only when it
    /// differs from the previous frame's.
    pub fn tick(&mut self, elapsed: f32, scroll_offset: f32) -> Option<DepthLayer> {
        self.pose = FloatingPose::at(&self.config, elapsed, scroll_offset);
        let layer = DepthLayer::from_depth(self.pose.position.z);
        if layer == self.layer {
            return None;
        }
        log::trace!("floating shape moved to {layer:?} at z={}", self.pose.position.z);
        self.layer = layer;
        Some(layer)
    }

    pub fn pose(&self) -> &FloatingPose {
        &self.pose
    }

    pub fn layer(&self) -> DepthLayer {
        self.layer
    }

    /// Stacking index the page should give the canvas for the current layer.
    pub fn stack_index(&self) -> i32 {
        match self.layer {
            DepthLayer::Front => self.config.front_stack_index,
            DepthLayer::Back => self.config.back_stack_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn shape() -> FloatingObject {
        FloatingObject::new(FloatingConfig::default())
    }

    #[test]
    fn starts_at_rest_in_front() {
        let s = shape();
        assert_eq!(s.pose().position, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(s.layer(), DepthLayer::Front);
        assert_eq!(s.stack_index(), -5);
    }

    #[test]
    fn pose_at_time_zero() {
        let p = FloatingPose::at(&FloatingConfig::default(), 0.0, 0.0);
        // sin(0) orbit, cos(0) = 1 depth at radius 2 + 1
        assert!(p.position.abs_diff_eq(Vec3::new(0.0, 3.0, 3.0), 1e-6));
        assert_eq!((p.rotation_x, p.rotation_y), (0.0, 0.0));
    }

    #[test]
    fn scrolling_sinks_the_shape() {
        let cfg = FloatingConfig::default();
        let top = FloatingPose::at(&cfg, 1.0, 0.0);
        let down = FloatingPose::at(&cfg, 1.0, 1000.0);
        assert!((top.position.y - down.position.y - 5.0).abs() < 1e-5);
        assert_eq!(top.position.x, down.position.x);
        assert_eq!(top.position.z, down.position.z);
    }

    #[test]
    fn only_layer_changes_are_reported() {
        let mut s = shape();
        assert_eq!(s.tick(0.0, 0.0), None);
        assert_eq!(s.tick(0.1, 0.0), None);

        // cos(0.4 t) turns negative after t = π / 0.8
        let behind = PI / 0.8 + 0.5;
        assert_eq!(s.tick(behind, 0.0), Some(DepthLayer::Back));
        assert_eq!(s.stack_index(), -20);
        assert_eq!(s.tick(behind + 0.1, 0.0), None);

        let in_front_again = 3.0 * PI / 0.8 + 0.5;
        assert_eq!(s.tick(in_front_again, 0.0), Some(DepthLayer::Front));
    }

    #[test]
    fn pose_writes_into_transform() {
        let mut t = Transform::default();
        let pose = FloatingPose::at(&FloatingConfig::default(), 2.0, 300.0);
        pose.write_to(&mut t);
        assert_eq!(t.position, pose.position);
        let (rx, ry) = t.euler_xy();
        assert!((rx - 0.6).abs() < 1e-5);
        assert!((ry - 0.4).abs() < 1e-5);
    }
}
