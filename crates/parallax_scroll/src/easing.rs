/// Linear interpolation written as `a·(1−t) + b·t`.
///
/// This form lands exactly on `a` at `t = 0` and exactly on `b` at `t = 1`,
/// which the waypoint path relies on for its boundary values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Cubic smoothstep `t²(3 − 2t)`, with `t` clamped to `[0, 1]` first.
///
/// Monotonic on `[0, 1]`, zero slope at both ends, and `smoothstep(0.5)` is
/// exactly `0.5`.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
    }

    #[test]
    fn smoothstep_clamps_input() {
        assert_eq!(smoothstep(-2.0), 0.0);
        assert_eq!(smoothstep(7.0), 1.0);
    }

    #[test]
    fn smoothstep_is_monotonic() {
        let mut prev = smoothstep(0.0);
        for i in 1..=100 {
            let cur = smoothstep(i as f32 / 100.0);
            assert!(cur >= prev, "smoothstep decreased at step {i}");
            prev = cur;
        }
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        assert_eq!(lerp(280.0, 160.0, 0.0), 280.0);
        assert_eq!(lerp(280.0, 160.0, 1.0), 160.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }
}
