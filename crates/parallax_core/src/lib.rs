//! parallax_core: scene primitives shared by the mapper and the app layer.
//!
//! Nothing in here knows about scrolling curves or camera waypoints; it only
//! models the externally-authored scene (named nodes with transforms), the
//! raw scroll input and frame timing.

pub mod scene;
pub mod scroll;
pub mod time;
pub mod transform;

pub use scene::{Handle, Node, NodeKind, World};
pub use scroll::ScrollState;
pub use time::{Time, TimeClock};
pub use transform::Transform;

// re-export glam so downstream crates stay on the same version
pub use glam;
