use crate::error::ConfigError;
use crate::models::LoopCount;
use serde::Deserialize;
use std::path::Path;

/// Service configuration loaded from YAML.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ResizeConfig {
    /// Target height used when the caller doesn't supply one
    pub default_size: u32,

    /// Recompress lossless output with oxipng
    pub optimize_png: bool,

    /// Override for the GIF loop count in NETSCAPE2.0 terms (0 = forever).
    /// Unset keeps the source's loop behaviour.
    pub loop_count: Option<u16>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            default_size: 256,
            optimize_png: false,
            loop_count: None,
        }
    }
}

impl ResizeConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration if a path is given, falling back to defaults on
    /// any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    default_size = config.default_size,
                    optimize_png = config.optimize_png,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Loop count to write for an animation whose source used `source`.
    pub fn resolve_loop_count(&self, source: LoopCount) -> LoopCount {
        match self.loop_count {
            Some(count) => LoopCount::from_netscape(Some(count)),
            None => source,
        }
    }
}
