//! Lightweight stand-in for the externally loaded 3D scene.

pub mod world;

pub use world::{Node, NodeBuilder, NodeKind, World};
// also expose the handle type so callers don't need to reach into the
// submodule.
pub use world::Handle;
