// Replays a page session: a few scroll events while the scene is still
// loading, then a sweep from the hero section past the contact section,
// with animation frames in between.
//
//     parallax_demo [app-config.toml]

use anyhow::Context as _;
use parallax_app::{
    App, AppConfig, DepthLayer, FrameContext, HostEvent, NodeKind, ParallaxApp, Transform, Vec3,
    World,
};

// scroll step per event, in pixels
const SCROLL_STEP: f32 = 120.0;
// animation frames rendered between scroll events
const FRAMES_PER_STEP: u32 = 6;
// simulated frame interval, in seconds
const FRAME_SECONDS: f64 = 1.0 / 30.0;

#[derive(Default)]
struct SessionLog {
    applied: u32,
    skipped: u32,
    layer_changes: u32,
    stack_index: i32,
    // what a renderer would put on the floating mesh
    shape: Transform,
}

impl ParallaxApp for SessionLog {
    fn on_scene_loaded(&mut self, ctx: &mut FrameContext) {
        if let Some(world) = ctx.world() {
            let names: Vec<&str> = world.iter().map(|n| n.name.as_str()).collect();
            log::info!("scene nodes: {names:?}");
        }
    }

    fn on_scroll(&mut self, ctx: &mut FrameContext) {
        match ctx.camera_position {
            Some(p) => {
                self.applied += 1;
                log::info!(
                    "progress {:>5.2} -> camera ({:>7.1}, {:>6.1}, {:>7.1})",
                    ctx.progress(),
                    p.x,
                    p.y,
                    p.z
                );
            }
            None => self.skipped += 1,
        }
    }

    fn update(&mut self, ctx: &mut FrameContext) {
        ctx.floating.pose().write_to(&mut self.shape);
    }

    fn on_layer_change(&mut self, layer: DepthLayer, ctx: &mut FrameContext) {
        self.layer_changes += 1;
        self.stack_index = ctx.floating.stack_index();
        // layer changes are reported before `update` for the same frame
        ctx.floating.pose().write_to(&mut self.shape);
        let (rx, ry) = self.shape.euler_xy();
        log::info!(
            "floating shape now {layer:?} at t={:.2}s (stack index {}, rotation {rx:.2}/{ry:.2})",
            ctx.time.elapsed,
            self.stack_index
        );
    }
}

/// What the authoring tool typically exports for the hero scene.
fn stand_in_scene() -> World {
    let mut world = World::new();
    world.spawn("Scene").with_kind(NodeKind::Group).build();
    world
        .spawn("Camera")
        .with_kind(NodeKind::Camera)
        .with_position(Vec3::new(0.0, 0.0, 1200.0))
        .build();
    world
        .spawn("Robot")
        .with_kind(NodeKind::Mesh { asset_key: "robot.glb".into() })
        .build();
    world.spawn("Head").build();
    world
}

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_path(&path).with_context(|| format!("loading {path}"))?,
        None => AppConfig::default(),
    };
    parallax_app::logging::init(config.level_filter()?)?;

    let viewport = config.viewport_height;
    let mut runner = App::new(SessionLog::default()).with_config(config).build();
    runner.mount();

    let end = viewport * 3.5;
    let mut offset = 0.0;
    let mut step = 0;
    let mut clock = 0.0;
    while offset <= end {
        if step == 3 {
            runner.handle(HostEvent::SceneLoaded(stand_in_scene()));
        }
        runner.handle(HostEvent::Scroll { offset });
        for _ in 0..FRAMES_PER_STEP {
            runner.handle(HostEvent::Frame { elapsed: Some(clock) });
            clock += FRAME_SECONDS;
        }
        offset += SCROLL_STEP;
        step += 1;
    }

    let target = runner
        .mapper()
        .target()
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "<none>".to_string());
    runner.handle(HostEvent::Unmount);

    let session = runner.app();
    log::info!(
        "done: target {target}, {} applied, {} skipped while loading, {} layer changes",
        session.applied,
        session.skipped,
        session.layer_changes
    );
    Ok(())
}
