//! Browser bindings.
//!
//! The page's 3D runtime stays in JavaScript; it reports the nodes it loaded
//! through `addNode` + `sceneLoaded`, reads positions back with
//! `nodePosition`, and calls `frame` from its animation loop.  Scroll is
//! picked up directly from `window` between `mount` and `unmount`.
//!
//! ```js
//! const scene = new ParallaxScene();
//! scene.mount();
//! spline.onLoad(() => {
//!   scene.addNode("Camera", true, 0, 160, 900);
//!   scene.sceneLoaded();
//! });
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use parallax_core::{NodeKind, World};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::builder::{App, AppConfig};
use crate::runner::{HostEvent, Runner};
use crate::Vec3;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = crate::logging::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger not installed: {err:#}")));
    }
}

fn js_err(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

/// Scroll-driven background exposed to JavaScript.
#[wasm_bindgen]
pub struct ParallaxScene {
    runner: Rc<RefCell<Runner<()>>>,
    pending: World,
    scroll_listener: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl ParallaxScene {
    /// `config` is an optional TOML document (see `AppConfig`).
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<ParallaxScene, JsValue> {
        let mut config = match config {
            Some(text) => AppConfig::from_toml_str(&text).map_err(js_err)?,
            None => AppConfig::default(),
        };
        if let Some((_, height)) = read_window_scroll() {
            config.viewport_height = height;
        }
        log::set_max_level(config.level_filter().map_err(js_err)?);

        Ok(ParallaxScene {
            runner: Rc::new(RefCell::new(App::new(()).with_config(config).build())),
            pending: World::new(),
            scroll_listener: None,
        })
    }

    /// Register a node of the loaded scene.  Call before `sceneLoaded`.
    #[wasm_bindgen(js_name = "addNode")]
    pub fn add_node(&mut self, name: &str, is_camera: bool, x: f32, y: f32, z: f32) {
        let kind = if is_camera { NodeKind::Camera } else { NodeKind::Empty };
        self.pending
            .spawn(name)
            .with_kind(kind)
            .with_position(Vec3::new(x, y, z))
            .build();
    }

    /// Hand the registered nodes over as the loaded scene.
    #[wasm_bindgen(js_name = "sceneLoaded")]
    pub fn scene_loaded(&mut self) {
        let world = std::mem::take(&mut self.pending);
        self.runner.borrow_mut().handle(HostEvent::SceneLoaded(world));
    }

    /// Start following `window` scroll.
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.scroll_listener.is_some() {
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let runner = Rc::clone(&self.runner);
        let listener = Closure::<dyn FnMut()>::new(move || {
            let Some((offset, height)) = read_window_scroll() else {
                return;
            };
            let mut runner = runner.borrow_mut();
            if runner.scroll().viewport_height() != height {
                runner.handle(HostEvent::Resized { viewport_height: height });
            }
            runner.handle(HostEvent::Scroll { offset });
        });
        window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())?;
        self.scroll_listener = Some(listener);

        let mut runner = self.runner.borrow_mut();
        runner.mount();
        if let Some((offset, _)) = read_window_scroll() {
            runner.handle(HostEvent::Scroll { offset });
        }
        Ok(())
    }

    /// Stop following scroll and release the listener.
    pub fn unmount(&mut self) -> Result<(), JsValue> {
        self.runner.borrow_mut().handle(HostEvent::Unmount);
        if let Some(listener) = self.scroll_listener.take() {
            if let Some(window) = web_sys::window() {
                window.remove_event_listener_with_callback(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                )?;
            }
        }
        Ok(())
    }

    /// Manual scroll notification for hosts that scroll an inner element.
    #[wasm_bindgen(js_name = "onScroll")]
    pub fn on_scroll(&self, offset: f32, viewport_height: f32) {
        let mut runner = self.runner.borrow_mut();
        if runner.scroll().viewport_height() != viewport_height {
            runner.handle(HostEvent::Resized { viewport_height });
        }
        runner.handle(HostEvent::Scroll { offset });
    }

    /// Advance the floating shape by one animation frame.  Pass the
    /// `requestAnimationFrame` timestamp (milliseconds) to keep the shape in
    /// step with the page's own animations.
    pub fn frame(&self, timestamp_ms: Option<f64>) {
        let elapsed = timestamp_ms.map(|ms| ms / 1000.0);
        self.runner.borrow_mut().handle(HostEvent::Frame { elapsed });
    }

    /// `[x, y, z]` of a node, or `undefined` if the scene has no such node.
    #[wasm_bindgen(js_name = "nodePosition")]
    pub fn node_position(&self, name: &str) -> Option<Vec<f32>> {
        let runner = self.runner.borrow();
        let world = runner.world()?;
        let position = world.position(world.find_by_name(name)?)?;
        Some(position.to_array().to_vec())
    }

    /// `[x, y, z, rotationX, rotationY]` of the floating shape.
    #[wasm_bindgen(js_name = "floatingPose")]
    pub fn floating_pose(&self) -> Vec<f32> {
        let runner = self.runner.borrow();
        let pose = runner.floating().pose();
        let p = pose.position;
        vec![p.x, p.y, p.z, pose.rotation_x, pose.rotation_y]
    }

    /// Stacking index for the floating shape's canvas.
    #[wasm_bindgen(js_name = "floatingStackIndex")]
    pub fn floating_stack_index(&self) -> i32 {
        self.runner.borrow().floating().stack_index()
    }
}

impl Drop for ParallaxScene {
    fn drop(&mut self) {
        if let Err(err) = self.unmount() {
            log::warn!("failed to detach scroll listener: {err:?}");
        }
    }
}

/// `(scrollY, innerHeight)` of the current window.
fn read_window_scroll() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()? as f32;
    let height = window.inner_height().ok()?.as_f64()? as f32;
    Some((offset, height))
}
