/// Page scroll as reported by the host.
///
/// The host feeds this from its scroll notifications; the rest of the
/// workspace only ever reads the normalised [`progress`](Self::progress).
/// Offsets are absolute, never deltas, so a dropped or reordered
/// notification cannot leave the state out of sync.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
    viewport_height: f32,
}

impl ScrollState {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            offset: 0.0,
            viewport_height,
        }
    }

    /// Record the current vertical scroll offset in pixels.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Record the viewport height in pixels (on resize).
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Scroll depth in viewport heights.
    ///
    /// Always finite and non-negative.  A zero/negative/non-finite viewport
    /// height or a NaN offset yields `0.0`, negative offsets (overscroll
    /// bounce) clamp to `0.0`, and an overflowing ratio saturates at
    /// `f32::MAX`, which is still past the end of any path.
    pub fn progress(&self) -> f32 {
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.0) {
            log::debug!(
                "scroll: unusable viewport height {}, progress forced to 0",
                self.viewport_height
            );
            return 0.0;
        }
        if self.offset.is_nan() {
            log::debug!("scroll: NaN offset, progress forced to 0");
            return 0.0;
        }
        (self.offset / self.viewport_height).clamp(0.0, f32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_offset_over_height() {
        let mut s = ScrollState::new(1000.0);
        s.set_offset(500.0);
        assert_eq!(s.progress(), 0.5);
        s.set_offset(3500.0);
        assert_eq!(s.progress(), 3.5);
    }

    #[test]
    fn zero_height_does_not_produce_nan() {
        let mut s = ScrollState::new(0.0);
        s.set_offset(250.0);
        assert_eq!(s.progress(), 0.0);
        s.set_viewport_height(f32::NAN);
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn negative_and_nan_offsets_clamp_to_zero() {
        let mut s = ScrollState::new(800.0);
        s.set_offset(-40.0);
        assert_eq!(s.progress(), 0.0);
        s.set_offset(f32::NEG_INFINITY);
        assert_eq!(s.progress(), 0.0);
        s.set_offset(f32::NAN);
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn overflowing_ratio_stays_finite() {
        let mut s = ScrollState::new(1.0e-39);
        s.set_offset(500.0);
        assert_eq!(s.progress(), f32::MAX);
        s.set_viewport_height(800.0);
        s.set_offset(f32::INFINITY);
        assert_eq!(s.progress(), f32::MAX);
    }
}
