//! Tunables for the mapper and the floating object.
//!
//! `Default` reproduces the shipped behaviour; a TOML file only needs the
//! keys it wants to change:
//!
//! ```toml
//! default_camera_z = 1000.0
//!
//! [targets]
//! camera_names = ["Hero Camera", "Camera"]
//!
//! [floating]
//! scroll_factor = 0.004
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::apply::DEFAULT_CAMERA_Z;
use crate::error::ConfigError;
use crate::path::{WaypointPath, DEFAULT_WAYPOINTS, WAYPOINT_COUNT};

/// Candidate names, in priority order, for each resolution tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub camera_names: Vec<String>,
    pub container_names: Vec<String>,
    pub proxy_names: Vec<String>,
    /// Proxies are only trusted once one of these nodes has loaded.
    pub proxy_anchors: Vec<String>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            camera_names: owned(&[
                "Camera 2",
                "Camera",
                "Personal Camera",
                "Main Camera",
                "Default Camera",
            ]),
            container_names: owned(&["Scene", "Group"]),
            proxy_names: owned(&["Robot", "Character"]),
            proxy_anchors: owned(&["Head", "head"]),
        }
    }
}

/// Orbit, drift and layering of the floating foreground shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    /// Position before the first frame.
    pub rest_position: Vec3,
    pub base_radius_x: f32,
    pub radius_x_swing: f32,
    pub radius_x_rate: f32,
    pub base_radius_z: f32,
    pub radius_z_swing: f32,
    pub radius_z_rate: f32,
    /// Angular speed of the orbit (rad/s).
    pub orbit_rate: f32,
    pub start_height: f32,
    /// Scene units the shape sinks per scrolled pixel.
    pub scroll_factor: f32,
    pub bob_amplitude: f32,
    pub bob_rate: f32,
    pub spin_x_rate: f32,
    pub spin_y_rate: f32,
    pub front_stack_index: i32,
    pub back_stack_index: i32,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            rest_position: Vec3::new(0.0, 4.0, 0.0),
            base_radius_x: 3.5,
            radius_x_swing: 1.5,
            radius_x_rate: 0.3,
            base_radius_z: 2.0,
            radius_z_swing: 1.0,
            radius_z_rate: 0.2,
            orbit_rate: 0.4,
            start_height: 3.0,
            scroll_factor: 0.005,
            bob_amplitude: 0.5,
            bob_rate: 0.5,
            spin_x_rate: 0.3,
            spin_y_rate: 0.2,
            front_stack_index: -5,
            back_stack_index: -20,
        }
    }
}

/// Everything the scroll mapper can be told.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Assumed depth of the scene's own camera, used when content is moved
    /// instead of a camera.
    pub default_camera_z: f32,
    /// Fraction of unresolved-target invocations that log a warning.
    pub warn_sample_rate: f64,
    pub waypoints: Vec<Vec3>,
    pub targets: TargetConfig,
    pub floating: FloatingConfig,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            default_camera_z: DEFAULT_CAMERA_Z,
            warn_sample_rate: 0.05,
            waypoints: DEFAULT_WAYPOINTS.to_vec(),
            targets: TargetConfig::default(),
            floating: FloatingConfig::default(),
        }
    }
}

impl MapperConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded mapper config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waypoints.len() != WAYPOINT_COUNT {
            return Err(ConfigError::WaypointCount {
                expected: WAYPOINT_COUNT,
                found: self.waypoints.len(),
            });
        }
        if let Some(index) = self.waypoints.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::NonFiniteWaypoint { index });
        }
        if !(0.0..=1.0).contains(&self.warn_sample_rate) {
            return Err(ConfigError::SampleRate(self.warn_sample_rate));
        }
        if !self.default_camera_z.is_finite() {
            return Err(ConfigError::CameraDepth(self.default_camera_z));
        }
        Ok(())
    }

    /// The configured path, falling back to the default one if the waypoint
    /// list is not exactly four points long.
    pub fn path(&self) -> WaypointPath {
        match <[Vec3; WAYPOINT_COUNT]>::try_from(self.waypoints.as_slice()) {
            Ok(points) => WaypointPath::new(points),
            Err(_) => {
                log::warn!(
                    "config has {} waypoints, using the default path",
                    self.waypoints.len()
                );
                WaypointPath::default()
            }
        }
    }
}
