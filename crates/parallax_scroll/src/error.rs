use std::path::PathBuf;

use thiserror::Error;

/// Failures loading or validating a [`MapperConfig`](crate::MapperConfig).
///
/// The mapper itself never fails at runtime; only configuration can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("expected exactly {expected} waypoints, found {found}")]
    WaypointCount { expected: usize, found: usize },
    #[error("waypoint {index} has a non-finite coordinate")]
    NonFiniteWaypoint { index: usize },
    #[error("warning sample rate {0} is outside [0, 1]")]
    SampleRate(f64),
    #[error("default camera depth must be finite, got {0}")]
    CameraDepth(f32),
}
