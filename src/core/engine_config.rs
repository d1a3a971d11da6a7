use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::actions::partition_viewport::DEFAULT_CHUNK_SIZE;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::worker_count::resolve_worker_count;

const DEFAULT_WIDTH_PX: u32 = 800;
const DEFAULT_HEIGHT_PX: u32 = 600;
const DEFAULT_X_WIDTH: f64 = 3.5;
const DEFAULT_MAX_ITER: u32 = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
    #[error("worker count must be greater than zero")]
    ZeroWorkers,
}

/// Initial view as it appears in a config file, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub x_center: f64,
    pub y_center: f64,
    pub x_width: f64,
    pub width_px: u32,
    pub height_px: u32,
    pub max_iter: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            x_center: 0.0,
            y_center: 0.0,
            x_width: DEFAULT_X_WIDTH,
            width_px: DEFAULT_WIDTH_PX,
            height_px: DEFAULT_HEIGHT_PX,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

impl ViewportConfig {
    pub fn build(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(
            self.x_center,
            self.y_center,
            self.x_width,
            self.width_px,
            self.height_px,
            self.max_iter,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub viewport: ViewportConfig,
    pub chunk_size: u32,
    /// Worker threads; `None` uses one per available core.
    pub workers: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport.build()?;

        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }

        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }

        Ok(())
    }

    pub fn initial_viewport(&self) -> Result<Viewport, ConfigError> {
        Ok(self.viewport.build()?)
    }

    #[must_use]
    pub fn worker_count(&self) -> NonZeroUsize {
        resolve_worker_count(self.workers.and_then(NonZeroUsize::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_view() {
        let config = EngineConfig::default();
        let viewport = config.initial_viewport().unwrap();

        assert_eq!(viewport.center().real, 0.0);
        assert_eq!(viewport.center().imag, 0.0);
        assert_eq!(viewport.x_width(), 3.5);
        assert_eq!((viewport.width_px(), viewport.height_px()), (800, 600));
        assert_eq!(viewport.max_iter(), 200);
        assert_eq!(config.chunk_size, 200);
        assert_eq!(config.workers, None);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = EngineConfig::from_json_str(
            r#"{ "viewport": { "x_center": -0.75, "max_iter": 500 }, "workers": 2 }"#,
        )
        .unwrap();

        assert_eq!(config.viewport.x_center, -0.75);
        assert_eq!(config.viewport.max_iter, 500);
        assert_eq!(config.viewport.width_px, 800);
        assert_eq!(config.chunk_size, 200);
        assert_eq!(config.worker_count().get(), 2);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(
            EngineConfig::from_json_str("{}").unwrap(),
            EngineConfig::default()
        );
    }

    #[test]
    fn test_invalid_values_fail_fast() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "chunk_size": 0 }"#),
            Err(ConfigError::ZeroChunkSize)
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "workers": 0 }"#),
            Err(ConfigError::ZeroWorkers)
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "viewport": { "max_iter": 0 } }"#),
            Err(ConfigError::Viewport(ViewportError::ZeroMaxIterations))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "viewport": { "x_width": -3.5 } }"#),
            Err(ConfigError::Viewport(ViewportError::InvalidWidth { .. }))
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            EngineConfig::from_json_str("{ chunk_size: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = EngineConfig::from_path("does/not/exist/engine.json");

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
