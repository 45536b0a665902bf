//! Frame timing.
//!
//! `Time` is produced once per frame by the runner's [`TimeClock`] and handed
//! to frame callbacks.  The floating background object is driven purely by
//! `elapsed`, so a stalled tab resumes where the clock says it should be
//! rather than replaying missed frames.
//!
//! # Example
//! ```rust,ignore
//! fn update(&mut self, ctx: &mut FrameContext) {
//!     let angle = 0.4 * ctx.time.elapsed as f32;
//!     self.x = angle.sin() * self.radius;
//! }
//! ```

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// A snapshot of timing information for the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    /// Seconds elapsed since the previous frame, clamped to 0.1.
    pub delta: f32,

    /// Total seconds elapsed since the clock started.
    pub elapsed: f64,

    /// Number of frames ticked so far (starts at 0 for the first frame).
    pub frame_count: u64,
}

impl Time {
    /// Snapshot for a given elapsed time, used by hosts that own their own
    /// clock (the browser's `requestAnimationFrame` timestamp) and by tests.
    pub fn at(elapsed: f64) -> Self {
        Self {
            delta: 0.0,
            elapsed,
            frame_count: 0,
        }
    }
}

// ─── Clock (lives in the runner) ───────────────────────────────────────────

/// Stateful timer that produces [`Time`] snapshots.
pub struct TimeClock {
    start:       Instant,
    last_tick:   Instant,
    frame_count: u64,
}

impl TimeClock {
    /// Create a new clock, starting the epoch now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start:       now,
            last_tick:   now,
            frame_count: 0,
        }
    }

    /// Current snapshot without advancing the frame counter.
    ///
    /// Scroll callbacks are not on the frame path; they still want valid
    /// timing data but must not count as a frame.
    pub fn peek(&self) -> Time {
        let now     = Instant::now();
        let delta   = (now - self.last_tick).as_secs_f32().min(0.1);
        let elapsed = (now - self.start).as_secs_f64();
        Time { delta, elapsed, frame_count: self.frame_count }
    }

    /// Advance by one frame.  Returns the [`Time`] snapshot for this frame.
    pub fn tick(&mut self) -> Time {
        let now     = Instant::now();
        let delta   = (now - self.last_tick).as_secs_f32().min(0.1);
        let elapsed = (now - self.start).as_secs_f64();
        let count   = self.frame_count;

        self.last_tick    = now;
        self.frame_count += 1;

        Time { delta, elapsed, frame_count: count }
    }
}

impl Default for TimeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_frames_and_peek_does_not() {
        let mut clock = TimeClock::new();
        assert_eq!(clock.tick().frame_count, 0);
        assert_eq!(clock.tick().frame_count, 1);
        assert_eq!(clock.peek().frame_count, 2);
        assert_eq!(clock.peek().frame_count, 2);
    }

    #[test]
    fn delta_is_clamped() {
        let mut clock = TimeClock::new();
        let t = clock.tick();
        assert!(t.delta >= 0.0 && t.delta <= 0.1);
        assert!(t.elapsed >= 0.0);
    }
}
