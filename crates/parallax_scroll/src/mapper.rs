//! [`ScrollCameraMapper`]: progress in, node position out.
//!
//! Every call recomputes from the absolute progress it is given, so event
//! storms, duplicates and reordering are harmless.  The only state kept
//! between calls is which node was resolved, and that only moves forward
//! from unresolved to resolved (unless the host removes the node).

use std::fmt::Debug;

use glam::Vec3;
use rand::Rng;

use crate::apply::{apply, PositionSink};
use crate::config::MapperConfig;
use crate::path::WaypointPath;
use crate::target::{ResolvedTarget, TargetResolver};

/// Decides which unresolved-target invocations get a log line.
///
/// While the scene is loading the mapper runs on every scroll event; logging
/// all of them would drown the console.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSampler {
    rate: f64,
}

impl LogSampler {
    /// `rate` is clamped into `[0, 1]`.
    pub fn new(rate: f64) -> Self {
        let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn should_log(&self) -> bool {
        self.rate > 0.0 && rand::thread_rng().gen_bool(self.rate)
    }
}

/// Maps scroll progress onto the scene's camera, or onto a fallback node
/// moved in the opposite direction.
///
/// The first node that resolves stays bound.  A camera that finishes loading
/// after a fallback has been bound does not take over; lookups that re-run
/// on every scroll event would switch to it.  The binding is only dropped
/// when its node leaves the scene, in which case resolution runs again in
/// the same call.
#[derive(Debug, Clone)]
pub struct ScrollCameraMapper<N> {
    path: WaypointPath,
    resolver: TargetResolver,
    default_camera_z: f32,
    sampler: LogSampler,
    target: Option<ResolvedTarget<N>>,
    skipped: u64,
}

impl<N: Copy + PartialEq + Debug> ScrollCameraMapper<N> {
    pub fn new(config: &MapperConfig) -> Self {
        Self::with_parts(
            config.path(),
            TargetResolver::from_config(&config.targets),
            config.default_camera_z,
            LogSampler::new(config.warn_sample_rate),
        )
    }

    pub fn with_parts(
        path: WaypointPath,
        resolver: TargetResolver,
        default_camera_z: f32,
        sampler: LogSampler,
    ) -> Self {
        Self {
            path,
            resolver,
            default_camera_z,
            sampler,
            target: None,
            skipped: 0,
        }
    }

    /// Pure mapping, no scene involved.
    pub fn compute_position(&self, progress: f32) -> Vec3 {
        self.path.compute_position(progress)
    }

    pub fn target(&self) -> Option<&ResolvedTarget<N>> {
        self.target.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }

    /// Number of invocations skipped because nothing resolved.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Compute the position for `progress` and write it onto the target.
    ///
    /// Returns the path position (before any fallback inversion), or `None`
    /// when the scene has no usable node yet.  Not an error: the next call
    /// simply tries again.
    pub fn update<S>(&mut self, scene: &mut S, progress: f32) -> Option<Vec3>
    where
        S: PositionSink<Node = N> + ?Sized,
    {
        let position = self.compute_position(progress);

        if let Some(target) = &self.target {
            if apply(&mut *scene, target.node, target.kind, position, self.default_camera_z) {
                return Some(position);
            }
            log::info!(
                "scroll target {:?} ({}) left the scene, resolving again",
                target.node,
                target.name
            );
            self.target = None;
        }

        let Some(target) = self.resolver.resolve(&*scene) else {
            self.skipped += 1;
            if self.sampler.should_log() {
                log::warn!("no camera or fallback node found in scene yet");
            }
            return None;
        };

        log::info!("scroll target resolved: {} ({:?})", target.name, target.kind);
        let written = apply(&mut *scene, target.node, target.kind, position, self.default_camera_z);
        self.target = Some(target);
        written.then_some(position)
    }
}
