//! Scene world: the named-node graph the background animation writes into.
//!
//! The real scene is authored in an external tool and arrives asynchronously;
//! `World` models what the animation needs from it and nothing more: nodes
//! addressable by name, each with a mutable transform.  Handles are backed by
//! a monotonically-increasing `u64` so they stay stable across removals.
//!
//! # Quick start
//! ```rust,ignore
//! use parallax_core::{World, NodeKind};
//! use glam::Vec3;
//!
//! let mut world = World::new();
//! let cam = world.spawn("Camera")
//!     .with_kind(NodeKind::Camera)
//!     .with_position(Vec3::new(0.0, 160.0, 900.0))
//!     .build();
//!
//! assert_eq!(world.find_by_name("Camera"), Some(cam));
//! world.set_position(cam, Vec3::ZERO);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;

use crate::transform::Transform;

// ─── ID generation ─────────────────────────────────────────────────────────

static ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

// ─── Handle ────────────────────────────────────────────────────────────────

/// Opaque handle referencing a node inside a [`World`].
///
/// Handles are stable: removing other nodes does not invalidate existing
/// handles.  A handle becomes invalid only after its node is despawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u64);

// ─── Node kinds ────────────────────────────────────────────────────────────

/// What the authoring tool says a node is.
///
/// The mapper does not trust this for target selection (it goes by name),
/// but hosts use it to describe what they loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NodeKind {
    /// A viewpoint the scene is rendered from.
    Camera,
    /// A container of other nodes.
    Group,
    /// Geometry identified by an asset key.
    Mesh { asset_key: String },
    /// Marker or unknown node.
    #[default]
    Empty,
}

// ─── Node ──────────────────────────────────────────────────────────────────

/// One scene node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique, stable identifier (mirrors the map key for convenience).
    pub id: u64,
    /// Name assigned in the authoring tool; lookups match it exactly.
    pub name: String,
    pub transform: Transform,
    pub kind: NodeKind,
}

impl Node {
    fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            transform: Transform::default(),
            kind: NodeKind::default(),
        }
    }
}

// ─── Node builder ──────────────────────────────────────────────────────────

/// Fluent builder returned by [`World::spawn`].
///
/// Call `.build()` to insert the node and receive its [`Handle`].
pub struct NodeBuilder<'a> {
    world: &'a mut World,
    node: Node,
}

impl<'a> NodeBuilder<'a> {
    pub fn with_position(mut self, pos: Vec3) -> Self {
        self.node.transform.position = pos;
        self
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.node.kind = kind;
        self
    }

    /// Finalise the builder, insert the node, and return its handle.
    pub fn build(self) -> Handle {
        let id = self.node.id;
        self.world.nodes.insert(id, self.node);
        Handle(id)
    }
}

// ─── World ─────────────────────────────────────────────────────────────────

/// The scene container.
#[derive(Debug, Default, Clone)]
pub struct World {
    nodes: HashMap<u64, Node>,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    // ── Spawning ───────────────────────────────────────────────────────────

    /// Begin building a new node with the given name.
    pub fn spawn(&mut self, name: impl Into<String>) -> NodeBuilder<'_> {
        let id = next_id();
        NodeBuilder {
            world: self,
            node: Node::new(id, name),
        }
    }

    /// Remove the node from the world.  Returns `true` if it existed.
    pub fn despawn(&mut self, handle: Handle) -> bool {
        self.nodes.remove(&handle.0).is_some()
    }

    // ── Lookup ─────────────────────────────────────────────────────────────

    /// Find a node by exact name.
    ///
    /// Authoring tools allow duplicate names; when several nodes share one,
    /// the earliest spawned wins so the answer does not depend on map order.
    pub fn find_by_name(&self, name: &str) -> Option<Handle> {
        self.nodes
            .values()
            .filter(|n| n.name == name)
            .map(|n| n.id)
            .min()
            .map(Handle)
    }

    // ── Position ───────────────────────────────────────────────────────────

    /// Overwrite the position.  Returns `false` if the handle is stale.
    pub fn set_position(&mut self, handle: Handle, pos: Vec3) -> bool {
        match self.nodes.get_mut(&handle.0) {
            Some(n) => {
                n.transform.position = pos;
                true
            }
            None => false,
        }
    }

    /// Read the position.
    pub fn position(&self, handle: Handle) -> Option<Vec3> {
        self.nodes.get(&handle.0).map(|n| n.transform.position)
    }

    /// Returns `true` if the world contains this handle.
    pub fn contains(&self, handle: Handle) -> bool {
        self.nodes.contains_key(&handle.0)
    }

    // ── Iteration ──────────────────────────────────────────────────────────

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────
