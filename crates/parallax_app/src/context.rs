use glam::Vec3;
use parallax_core::{ScrollState, Time, World};
use parallax_scroll::FloatingObject;

/// Per-event context passed to every [`ParallaxApp`](crate::ParallaxApp)
/// callback.
pub struct FrameContext<'a> {
    // ── Read-only ──────────────────────────────────────────────────────────
    /// Frame timing.  On scroll callbacks this is a peek, not a tick.
    pub time: Time,

    /// Latest scroll offset and viewport height.
    pub scroll: &'a ScrollState,

    /// Path position from the latest scroll apply, if a target resolved.
    pub camera_position: Option<Vec3>,

    /// The floating foreground shape.
    pub floating: &'a FloatingObject,

    // ── Read-write ─────────────────────────────────────────────────────────
    /// The loaded scene, `None` until the host reports it.
    ///
    /// The mapper owns the position of whichever node it resolved; pages
    /// should leave that field alone.
    pub world: Option<&'a mut World>,

    pub(crate) unmount_requested: bool,
}

impl<'a> FrameContext<'a> {
    /// Ask the runner to release its subscriptions after this callback.
    pub fn request_unmount(&mut self) {
        self.unmount_requested = true;
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.scroll.progress()
    }

    #[inline]
    pub fn viewport_height(&self) -> f32 {
        self.scroll.viewport_height()
    }

    /// Convenience accessor returning a mutable reference to the scene if
    /// it has loaded.
    pub fn world(&mut self) -> Option<&mut World> {
        self.world.as_deref_mut()
    }
}
