use parallax_scroll::DepthLayer;

use crate::context::FrameContext;

/// Page-side hooks around the background animation.
///
/// Every method has an empty default, so a page that only wants the camera
/// to follow the scroll implements nothing (the unit type `()` does exactly
/// that).
///
/// ```rust,ignore
/// struct Page { layer_index: i32 }
///
/// impl ParallaxApp for Page {
///     fn on_layer_change(&mut self, _layer: DepthLayer, ctx: &mut FrameContext) {
///         self.layer_index = ctx.floating.stack_index();
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait ParallaxApp {
    /// Called once when the runner mounts, before the first apply.
    fn setup(&mut self, ctx: &mut FrameContext) {}

    /// Called when the host reports that the 3D scene finished loading.
    fn on_scene_loaded(&mut self, ctx: &mut FrameContext) {}

    /// Called after every applied scroll event.  `ctx.camera_position` is
    /// `None` while no target has resolved.
    fn on_scroll(&mut self, ctx: &mut FrameContext) {}

    /// Called every frame after the floating shape has moved.
    fn update(&mut self, ctx: &mut FrameContext) {}

    /// Called when the floating shape crosses to the other side of the page.
    fn on_layer_change(&mut self, layer: DepthLayer, ctx: &mut FrameContext) {}

    /// Called when the viewport height changes.
    fn on_resize(&mut self, viewport_height: f32, ctx: &mut FrameContext) {}
}

impl ParallaxApp for () {}
