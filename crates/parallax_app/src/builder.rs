use std::path::Path;

use anyhow::Context as _;
use log::LevelFilter;
use parallax_scroll::MapperConfig;
use serde::{Deserialize, Serialize};

use crate::runner::Runner;
use crate::traits::ParallaxApp;

/// Initial configuration of the background and its host integration.
///
/// Loadable from TOML; the mapper settings live under a `[mapper]` table:
///
/// ```toml
/// title = "Portfolio"
/// viewport_height = 900.0
/// log_level = "debug"
///
/// [mapper]
/// default_camera_z = 1000.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Viewport height assumed until the host reports a resize.
    pub viewport_height: f32,
    /// Position the target once as soon as the runner mounts, instead of
    /// waiting for the first scroll.
    pub apply_on_mount: bool,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub mapper: MapperConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Parallax Background".to_string(),
            viewport_height: 1080.0,
            apply_on_mount: true,
            log_level: "info".to_string(),
            mapper: MapperConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("malformed app config")?;
        config.mapper.validate()?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn level_filter(&self) -> anyhow::Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| anyhow::anyhow!("unknown log level {:?}", self.log_level))
    }
}

/// Entry point.  Uses the builder pattern to configure the runner.
pub struct App<A: ParallaxApp> {
    config: AppConfig,
    app_state: A,
}

impl<A: ParallaxApp> App<A> {
    pub fn new(app_state: A) -> Self {
        Self {
            config: AppConfig::default(),
            app_state,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config.title = title.to_string();
        self
    }

    pub fn with_viewport_height(mut self, height: f32) -> Self {
        self.config.viewport_height = height;
        self
    }

    pub fn with_mapper_config(mut self, mapper: MapperConfig) -> Self {
        self.config.mapper = mapper;
        self
    }

    pub fn apply_on_mount(mut self, enabled: bool) -> Self {
        self.config.apply_on_mount = enabled;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Create the runner.  Nothing is subscribed until [`Runner::mount`].
    pub fn build(self) -> Runner<A> {
        Runner::new(self.app_state, self.config)
    }
}
