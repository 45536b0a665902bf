//! Drives the parallax background from host events.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use parallax_app::{App, FrameContext, HostEvent, ParallaxApp, World};
//!
//! struct Page;
//!
//! impl ParallaxApp for Page {
//!     fn on_scroll(&mut self, ctx: &mut FrameContext) {
//!         log::debug!("camera at {:?}", ctx.camera_position);
//!     }
//! }
//!
//! let mut runner = App::new(Page).with_viewport_height(900.0).build();
//! runner.mount();
//! runner.handle(HostEvent::SceneLoaded(World::new()));
//! runner.handle(HostEvent::Scroll { offset: 450.0 });
//! runner.handle(HostEvent::Unmount);
//! ```

pub mod builder;
pub mod context;
pub mod logging;
pub mod runner;
pub mod subscription;
pub mod traits;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use builder::{App, AppConfig};
pub use context::FrameContext;
pub use runner::{HostEvent, Runner};
pub use subscription::{EventKind, EventListeners, Subscription};
pub use traits::ParallaxApp;

// ── Re-export the most-used primitives ─────────────────────────────────────
pub use parallax_core::{Handle, NodeKind, ScrollState, Time, Transform, World};
pub use parallax_scroll::{DepthLayer, MapperConfig};

pub use parallax_core::glam::Vec3;
