//! The camera path: four waypoints, three eased segments.
//!
//! Scroll progress is measured in viewport heights.  Integer progress values
//! sit exactly on a waypoint; in between, every axis is eased with the same
//! smoothstep factor.  Past the last segment the path holds at the final
//! waypoint instead of extrapolating.

use glam::Vec3;

use crate::easing::{lerp, smoothstep};

/// Number of waypoints on a path.
pub const WAYPOINT_COUNT: usize = 4;
/// Number of eased segments between them.
pub const SEGMENT_COUNT: usize = WAYPOINT_COUNT - 1;

/// Hero → About → Work → Contact camera stops.
pub const DEFAULT_WAYPOINTS: [Vec3; WAYPOINT_COUNT] = [
    Vec3::new(0.0, 160.0, 900.0),
    Vec3::new(0.0, 50.0, 8000.0),
    Vec3::new(-50.0, 280.0, 200.0),
    Vec3::new(0.0, 160.0, 900.0),
];

// Largest progress value still mapped by floor() into the last segment.
const LAST_SEGMENT_CEILING: f32 = SEGMENT_COUNT as f32 - 0.001;

/// An immutable four-point path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointPath {
    points: [Vec3; WAYPOINT_COUNT],
}

impl Default for WaypointPath {
    fn default() -> Self {
        Self::new(DEFAULT_WAYPOINTS)
    }
}

impl WaypointPath {
    pub fn new(points: [Vec3; WAYPOINT_COUNT]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vec3; WAYPOINT_COUNT] {
        &self.points
    }

    /// Segment index and local parameter for a progress value.
    ///
    /// `index = floor(clamp(progress, 0, 2.999))`,
    /// `t = clamp(progress − index, 0, 1)`.  NaN and negative progress are
    /// treated as `0`; `+∞` lands on the last waypoint like any progress ≥ 3.
    pub fn segment(progress: f32) -> (usize, f32) {
        let progress = if progress.is_nan() { 0.0 } else { progress.max(0.0) };
        let index = progress.clamp(0.0, LAST_SEGMENT_CEILING).floor() as usize;
        let t = (progress - index as f32).clamp(0.0, 1.0);
        (index, t)
    }

    /// Position on the path for a scroll progress.  Pure and total.
    pub fn compute_position(&self, progress: f32) -> Vec3 {
        let (index, t) = Self::segment(progress);
        let ease = smoothstep(t);
        let from = self.points[index];
        let to = self.points[index + 1];
        Vec3::new(
            lerp(from.x, to.x, ease),
            lerp(from.y, to.y, ease),
            lerp(from.z, to.z, ease),
        )
    }
}

/// [`WaypointPath::compute_position`] on the default path.
pub fn compute_position(progress: f32) -> Vec3 {
    WaypointPath::default().compute_position(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: [Vec3; 4] = DEFAULT_WAYPOINTS;

    #[test]
    fn boundaries_land_on_waypoints() {
        assert_eq!(compute_position(0.0), P[0]);
        assert_eq!(compute_position(1.0), P[1]);
        assert_eq!(compute_position(2.0), P[2]);
        assert_eq!(compute_position(3.0), P[3]);
    }

    #[test]
    fn holds_at_final_waypoint_past_three() {
        let end = compute_position(3.0);
        for p in [3.0, 3.01, 3.5, 4.0, 10.0, 1.0e6] {
            assert_eq!(compute_position(p), end, "progress {p}");
        }
    }

    #[test]
    fn half_a_viewport_is_the_eased_midpoint() {
        // 500px scrolled in a 1000px viewport
        assert_eq!(compute_position(500.0 / 1000.0), Vec3::new(0.0, 105.0, 4450.0));
    }

    #[test]
    fn no_overshoot_inside_segments() {
        for seg in 0..SEGMENT_COUNT {
            let (a, b) = (P[seg], P[seg + 1]);
            let lo = a.min(b) - Vec3::splat(1e-3);
            let hi = a.max(b) + Vec3::splat(1e-3);
            for i in 1..100 {
                let p = compute_position(seg as f32 + i as f32 / 100.0);
                assert!(p.cmpge(lo).all() && p.cmple(hi).all(), "segment {seg}, step {i}: {p}");
            }
        }
    }

    #[test]
    fn same_progress_same_output() {
        let path = WaypointPath::default();
        for p in [0.0, 0.37, 1.5, 2.25, 2.9995, 8.0] {
            assert_eq!(path.compute_position(p), path.compute_position(p));
        }
    }

    #[test]
    fn segment_selection() {
        assert_eq!(WaypointPath::segment(0.25), (0, 0.25));
        assert_eq!(WaypointPath::segment(1.0), (1, 0.0));
        assert_eq!(WaypointPath::segment(2.5), (2, 0.5));
        assert_eq!(WaypointPath::segment(5.0), (2, 1.0));
    }

    #[test]
    fn garbage_progress_maps_to_start() {
        assert_eq!(compute_position(-3.0), P[0]);
        assert_eq!(compute_position(f32::NAN), P[0]);
        assert_eq!(compute_position(f32::NEG_INFINITY), P[0]);
    }

    #[test]
    fn custom_path_is_respected() {
        let path = WaypointPath::new([Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(path.compute_position(2.0), Vec3::Y);
        assert_eq!(path.compute_position(9.0), Vec3::Z);
    }

    #[test]
    fn infinite_progress_holds_at_the_end() {
        let path = WaypointPath::new([Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(WaypointPath::segment(f32::INFINITY), (2, 1.0));
        assert_eq!(path.compute_position(f32::INFINITY), path.compute_position(3.0));
        assert_eq!(path.compute_position(1.0e30), Vec3::Z);
        assert_eq!(path.compute_position(f32::NAN), Vec3::ZERO);
    }
}
