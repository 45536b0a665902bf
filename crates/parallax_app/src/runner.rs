use glam::Vec3;
use parallax_core::{Handle, ScrollState, Time, TimeClock, World};
use parallax_scroll::{FloatingObject, ScrollCameraMapper};

use crate::builder::AppConfig;
use crate::context::FrameContext;
use crate::subscription::{EventKind, EventListeners, Subscription};
use crate::traits::ParallaxApp;

/// Notifications from the page host.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// The external 3D scene finished loading.
    SceneLoaded(World),
    /// Absolute vertical scroll offset in pixels.
    Scroll { offset: f32 },
    /// New viewport height in pixels.
    Resized { viewport_height: f32 },
    /// An animation frame.  `elapsed` is the host's own clock in seconds
    /// (e.g. the `requestAnimationFrame` timestamp); `None` uses the
    /// runner's wall clock.
    Frame { elapsed: Option<f64> },
    /// The owning view is going away.
    Unmount,
}

/// Owns the scene, the scroll state, the mapper and the floating shape, and
/// dispatches host events to them and to the page's [`ParallaxApp`].
pub struct Runner<A: ParallaxApp> {
    app: A,
    config: AppConfig,
    listeners: EventListeners,
    subscriptions: Vec<Subscription>,
    world: Option<World>,
    scroll: ScrollState,
    clock: TimeClock,
    mapper: ScrollCameraMapper<Handle>,
    floating: FloatingObject,
    camera_position: Option<Vec3>,
}

// Builds a FrameContext from disjoint field borrows of a Runner.
macro_rules! frame_ctx {
    ($self:ident, $time:expr) => {
        FrameContext {
            time: $time,
            scroll: &$self.scroll,
            camera_position: $self.camera_position,
            floating: &$self.floating,
            world: $self.world.as_mut(),
            unmount_requested: false,
        }
    };
}

impl<A: ParallaxApp> Runner<A> {
    pub(crate) fn new(app: A, config: AppConfig) -> Self {
        let mapper = ScrollCameraMapper::new(&config.mapper);
        let floating = FloatingObject::new(config.mapper.floating.clone());
        let scroll = ScrollState::new(config.viewport_height);
        Self {
            app,
            config,
            listeners: EventListeners::new(),
            subscriptions: Vec::new(),
            world: None,
            scroll,
            clock: TimeClock::new(),
            mapper,
            floating,
            camera_position: None,
        }
    }

    // ── Lifecycle ──────────────────────────────────────────────────────────

    /// Subscribe to scroll and frame notifications, run the page's `setup`
    /// and, if configured, position the target once.  Mounting twice is a
    /// no-op.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            return;
        }
        log::info!("mounting {}", self.config.title);
        self.subscriptions.push(self.listeners.subscribe(EventKind::Scroll));
        self.subscriptions.push(self.listeners.subscribe(EventKind::Frame));

        let mut ctx = frame_ctx!(self, self.clock.peek());
        self.app.setup(&mut ctx);
        let unmount = ctx.unmount_requested;

        if unmount {
            self.unmount();
        } else if self.config.apply_on_mount {
            self.apply_scroll();
        }
    }

    /// Release every subscription.  Later scroll and frame events are
    /// ignored until the runner is mounted again.
    pub fn unmount(&mut self) {
        if !self.subscriptions.is_empty() {
            log::info!("unmounting {}", self.config.title);
        }
        self.subscriptions.clear();
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    // ── Dispatch ───────────────────────────────────────────────────────────

    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::SceneLoaded(world) => self.scene_loaded(world),
            HostEvent::Scroll { offset } => {
                if !self.listeners.is_subscribed(EventKind::Scroll) {
                    return;
                }
                self.scroll.set_offset(offset);
                self.apply_scroll();
            }
            HostEvent::Resized { viewport_height } => self.resized(viewport_height),
            HostEvent::Frame { elapsed } => {
                if self.listeners.is_subscribed(EventKind::Frame) {
                    self.frame(elapsed);
                }
            }
            HostEvent::Unmount => self.unmount(),
        }
    }

    fn scene_loaded(&mut self, world: World) {
        log::info!("scene loaded with {} nodes", world.len());
        self.world = Some(world);

        let mut ctx = frame_ctx!(self, self.clock.peek());
        self.app.on_scene_loaded(&mut ctx);
        if ctx.unmount_requested {
            self.unmount();
            return;
        }

        // don't leave the camera at its authored pose until the next scroll
        if self.is_mounted() {
            self.apply_scroll();
        }
    }

    fn resized(&mut self, viewport_height: f32) {
        self.scroll.set_viewport_height(viewport_height);

        let mut ctx = frame_ctx!(self, self.clock.peek());
        self.app.on_resize(viewport_height, &mut ctx);
        if ctx.unmount_requested {
            self.unmount();
            return;
        }

        // progress is relative to the viewport, so it moved
        if self.is_mounted() {
            self.apply_scroll();
        }
    }

    fn apply_scroll(&mut self) {
        let progress = self.scroll.progress();
        self.camera_position = match self.world.as_mut() {
            Some(world) => self.mapper.update(world, progress),
            None => None,
        };

        let mut ctx = frame_ctx!(self, self.clock.peek());
        self.app.on_scroll(&mut ctx);
        if ctx.unmount_requested {
            self.unmount();
        }
    }

    fn frame(&mut self, host_elapsed: Option<f64>) {
        let ticked = self.clock.tick();
        let time = match host_elapsed {
            Some(elapsed) => Time {
                frame_count: ticked.frame_count,
                ..Time::at(elapsed)
            },
            None => ticked,
        };
        let changed = self
            .floating
            .tick(time.elapsed as f32, self.scroll.offset());

        let mut ctx = frame_ctx!(self, time);
        if let Some(layer) = changed {
            self.app.on_layer_change(layer, &mut ctx);
        }
        self.app.update(&mut ctx);
        if ctx.unmount_requested {
            self.unmount();
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn mapper(&self) -> &ScrollCameraMapper<Handle> {
        &self.mapper
    }

    pub fn floating(&self) -> &FloatingObject {
        &self.floating
    }

    /// Path position from the latest apply.
    pub fn camera_position(&self) -> Option<Vec3> {
        self.camera_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::App;
    use parallax_core::NodeKind;
    use parallax_scroll::DepthLayer;

    #[derive(Default)]
    struct Recorder {
        setups: u32,
        scrolls: Vec<Option<Vec3>>,
        loads: u32,
        frames: u32,
        layers: Vec<DepthLayer>,
        unmount_on_scroll: bool,
    }

    impl ParallaxApp for Recorder {
        fn setup(&mut self, _ctx: &mut FrameContext) {
            self.setups += 1;
        }

        fn on_scene_loaded(&mut self, ctx: &mut FrameContext) {
            assert!(ctx.world().is_some());
            self.loads += 1;
        }

        fn on_scroll(&mut self, ctx: &mut FrameContext) {
            self.scrolls.push(ctx.camera_position);
            if self.unmount_on_scroll {
                ctx.request_unmount();
            }
        }

        fn update(&mut self, _ctx: &mut FrameContext) {
            self.frames += 1;
        }

        fn on_layer_change(&mut self, layer: DepthLayer, _ctx: &mut FrameContext) {
            self.layers.push(layer);
        }
    }

    fn scene_with_camera() -> (World, Handle) {
        let mut w = World::new();
        let cam = w
            .spawn("Camera")
            .with_kind(NodeKind::Camera)
            .with_position(Vec3::new(0.0, 0.0, 1200.0))
            .build();
        w.spawn("Robot").build();
        (w, cam)
    }

    fn runner() -> Runner<Recorder> {
        App::new(Recorder::default()).with_viewport_height(1000.0).build()
    }

    #[test]
    fn events_before_mount_are_ignored() {
        let mut r = runner();
        r.handle(HostEvent::Scroll { offset: 500.0 });
        r.handle(HostEvent::Frame { elapsed: None });
        assert_eq!(r.scroll().offset(), 0.0);
        assert!(r.app().scrolls.is_empty());
        assert_eq!(r.app().frames, 0);
    }

    #[test]
    fn mount_applies_once_without_a_scene() {
        let mut r = runner();
        r.mount();
        r.mount();
        assert_eq!(r.app().setups, 1);
        assert_eq!(r.app().scrolls, vec![None]);
    }

    #[test]
    fn scroll_moves_the_camera_once_loaded() {
        let mut r = runner();
        r.mount();
        r.handle(HostEvent::Scroll { offset: 200.0 });
        assert_eq!(r.camera_position(), None);

        let (world, cam) = scene_with_camera();
        r.handle(HostEvent::SceneLoaded(world));
        assert_eq!(r.app().loads, 1);
        r.handle(HostEvent::Scroll { offset: 500.0 });

        let expected = Vec3::new(0.0, 105.0, 4450.0);
        assert_eq!(r.camera_position(), Some(expected));
        assert_eq!(r.world().unwrap().position(cam), Some(expected));
        assert_eq!(r.app().scrolls.last(), Some(&Some(expected)));
    }

    #[test]
    fn scene_load_applies_current_scroll() {
        let mut r = runner();
        r.mount();
        r.handle(HostEvent::Scroll { offset: 1000.0 });
        let (world, cam) = scene_with_camera();
        r.handle(HostEvent::SceneLoaded(world));
        assert_eq!(r.world().unwrap().position(cam), Some(Vec3::new(0.0, 50.0, 8000.0)));
    }

    #[test]
    fn resize_reapplies_with_new_progress() {
        let mut r = runner();
        r.mount();
        let (world, cam) = scene_with_camera();
        r.handle(HostEvent::SceneLoaded(world));
        r.handle(HostEvent::Scroll { offset: 1000.0 });
        r.handle(HostEvent::Resized { viewport_height: 500.0 });
        assert_eq!(r.world().unwrap().position(cam), Some(Vec3::new(-50.0, 280.0, 200.0)));
    }

    #[test]
    fn zero_height_viewport_stays_at_start() {
        let mut r = runner();
        r.mount();
        let (world, cam) = scene_with_camera();
        r.handle(HostEvent::SceneLoaded(world));
        r.handle(HostEvent::Resized { viewport_height: 0.0 });
        r.handle(HostEvent::Scroll { offset: 640.0 });
        assert_eq!(r.world().unwrap().position(cam), Some(Vec3::new(0.0, 160.0, 900.0)));
    }

    #[test]
    fn unmount_stops_scroll_handling() {
        let mut r = runner();
        r.mount();
        let (world, cam) = scene_with_camera();
        r.handle(HostEvent::SceneLoaded(world));
        r.handle(HostEvent::Unmount);
        assert!(!r.is_mounted());

        let before = r.world().unwrap().position(cam);
        r.handle(HostEvent::Scroll { offset: 2500.0 });
        r.handle(HostEvent::Frame { elapsed: None });
        assert_eq!(r.world().unwrap().position(cam), before);
        assert_eq!(r.app().frames, 0);
    }

    #[test]
    fn app_can_request_unmount() {
        let mut r = runner();
        r.app_mut().unmount_on_scroll = true;
        r.mount();
        assert!(!r.is_mounted());
    }

    #[test]
    fn frames_drive_the_floating_shape() {
        let mut r = runner();
        r.mount();
        r.handle(HostEvent::Frame { elapsed: None });
        r.handle(HostEvent::Frame { elapsed: None });
        assert_eq!(r.app().frames, 2);
        // first frames are at t ≈ 0, well in front of the page
        assert!(r.app().layers.is_empty());
        assert_eq!(r.floating().layer(), DepthLayer::Front);
    }

    #[test]
    fn host_clock_drives_layer_changes() {
        let mut r = runner();
        r.mount();
        r.handle(HostEvent::Frame { elapsed: Some(0.0) });
        assert!(r.app().layers.is_empty());

        // z = cos(0.4 t) * radius_z turns negative past t = π / 0.8
        let behind = std::f64::consts::PI / 0.8 + 0.5;
        r.handle(HostEvent::Frame { elapsed: Some(behind) });
        r.handle(HostEvent::Frame { elapsed: Some(behind + 0.01) });
        assert_eq!(r.app().layers, vec![DepthLayer::Back]);
        assert_eq!(r.floating().stack_index(), -20);
        assert_eq!(r.app().frames, 3);

        r.handle(HostEvent::Frame { elapsed: Some(0.0) });
        assert_eq!(r.app().layers, vec![DepthLayer::Back, DepthLayer::Front]);
        assert_eq!(r.floating().stack_index(), -5);
    }
}
