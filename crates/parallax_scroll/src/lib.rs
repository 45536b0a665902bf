//! Scroll-driven camera animation for the portfolio background.
//!
//! The pieces, bottom-up:
//!
//! * [`easing`] — smoothstep and lerp.
//! * [`path`] — the four-waypoint camera path and the pure
//!   `progress -> position` mapping.
//! * [`target`] — ordered, name-based discovery of the node to move.
//! * [`apply`] — writing a position onto a camera node, or its inverse onto
//!   a fallback node.
//! * [`mapper`] — [`ScrollCameraMapper`], which ties the above together and
//!   remembers the resolved target.
//! * [`floating`] — the frame-driven floating shape on the foreground layer.
//! * [`config`] — every tunable above, loadable from TOML.
//!
//! ```rust,ignore
//! use parallax_core::{World, NodeKind, ScrollState};
//! use parallax_scroll::{MapperConfig, ScrollCameraMapper};
//!
//! let mut world = World::new();
//! world.spawn("Camera").with_kind(NodeKind::Camera).build();
//!
//! let mut mapper = ScrollCameraMapper::new(&MapperConfig::default());
//! let mut scroll = ScrollState::new(1000.0);
//! scroll.set_offset(500.0);
//! mapper.update(&mut world, scroll.progress());
//! ```

pub mod apply;
pub mod config;
pub mod easing;
pub mod error;
pub mod floating;
pub mod mapper;
pub mod path;
pub mod target;

pub use apply::{apply, target_position, PositionSink, DEFAULT_CAMERA_Z};
pub use config::{FloatingConfig, MapperConfig, TargetConfig};
pub use error::ConfigError;
pub use floating::{DepthLayer, FloatingObject, FloatingPose};
pub use mapper::{LogSampler, ScrollCameraMapper};
pub use path::{compute_position, WaypointPath, DEFAULT_WAYPOINTS};
pub use target::{CandidateTier, NameLookup, ResolvedTarget, TargetKind, TargetResolver};
