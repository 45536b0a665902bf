//! Finding the node to move.
//!
//! Scenes come from an external authoring tool and their node names are not
//! guaranteed, so resolution walks an ordered list of candidate tiers and
//! takes the first exact name hit.  Cameras are preferred; when the scene has
//! none we move a container (or the character itself) in the opposite
//! direction instead.
//!
//! The tiers are plain data so they can be tested without any 3D engine and
//! overridden from configuration.

use parallax_core::{Handle, World};

use crate::config::TargetConfig;

/// Capability the resolver needs from a scene: exact-name lookup.
pub trait NameLookup {
    type Node: Copy + PartialEq + std::fmt::Debug;

    fn find_by_name(&self, name: &str) -> Option<Self::Node>;
}

impl NameLookup for World {
    type Node = Handle;

    fn find_by_name(&self, name: &str) -> Option<Handle> {
        World::find_by_name(self, name)
    }
}

/// How a resolved node must be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A camera: receives the path position as-is.
    Camera,
    /// Scene content standing in for a camera: receives the inverse.
    Fallback,
}

/// One priority level of candidate names.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateTier {
    pub names: Vec<String>,
    pub kind: TargetKind,
    /// The tier is only consulted when at least one of these names exists in
    /// the scene.  Empty means always consulted.
    pub requires_any: Vec<String>,
}

impl CandidateTier {
    pub fn new<S: AsRef<str>>(names: &[S], kind: TargetKind) -> Self {
        Self {
            names: names.iter().map(|n| n.as_ref().to_owned()).collect(),
            kind,
            requires_any: Vec::new(),
        }
    }

    pub fn requiring<S: AsRef<str>>(mut self, anchors: &[S]) -> Self {
        self.requires_any = anchors.iter().map(|n| n.as_ref().to_owned()).collect();
        self
    }

    fn is_enabled<L: NameLookup + ?Sized>(&self, scene: &L) -> bool {
        self.requires_any.is_empty()
            || self.requires_any.iter().any(|a| scene.find_by_name(a).is_some())
    }
}

/// Result of a successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget<N> {
    pub node: N,
    pub kind: TargetKind,
    /// The candidate name that matched.
    pub name: String,
}

impl<N> ResolvedTarget<N> {
    pub fn is_camera(&self) -> bool {
        self.kind == TargetKind::Camera
    }
}

/// Ordered strategy list of candidate tiers.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetResolver {
    tiers: Vec<CandidateTier>,
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::from_config(&TargetConfig::default())
    }
}

impl TargetResolver {
    pub fn new(tiers: Vec<CandidateTier>) -> Self {
        Self { tiers }
    }

    /// Cameras, then containers, then character proxies gated on an anchor.
    pub fn from_config(config: &TargetConfig) -> Self {
        Self::new(vec![
            CandidateTier::new(&config.camera_names, TargetKind::Camera),
            CandidateTier::new(&config.container_names, TargetKind::Fallback),
            CandidateTier::new(&config.proxy_names, TargetKind::Fallback)
                .requiring(&config.proxy_anchors),
        ])
    }

    pub fn tiers(&self) -> &[CandidateTier] {
        &self.tiers
    }

    /// First exact match across the tiers, in order.  `None` means the
    /// mapping does not apply yet (scene still loading, or unknown rig).
    pub fn resolve<L: NameLookup + ?Sized>(&self, scene: &L) -> Option<ResolvedTarget<L::Node>> {
        self.tiers
            .iter()
            .filter(|tier| tier.is_enabled(scene))
            .find_map(|tier| {
                tier.names.iter().find_map(|name| {
                    scene.find_by_name(name).map(|node| ResolvedTarget {
                        node,
                        kind: tier.kind,
                        name: name.clone(),
                    })
                })
            })
    }
}
