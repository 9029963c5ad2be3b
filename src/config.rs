//! Project configuration (shadowpaste.yaml) parsing.
//!
//! The config file supplies default paths and compositing options. Command
//! line flags override it; built-in defaults fill whatever it leaves out.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compose::CompositeOptions;
use crate::error::{PasteError, Result};
use crate::types::Size;

/// Config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "shadowpaste.yaml";

/// Base image used when neither flags nor config name one.
pub const DEFAULT_BASE: &str = "1.png";
/// Overlay image used when neither flags nor config name one.
pub const DEFAULT_OVERLAY: &str = "2.png";
/// Output path used when neither flags nor config name one.
pub const DEFAULT_OUTPUT: &str = "3.png";

/// Configuration loaded from shadowpaste.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Brightness threshold for shadow detection (0-255).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,

    /// Overlay footprint as `WxH`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_size: Option<Size>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load config from a yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PasteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `shadowpaste.yaml` in `dir` if it exists, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PasteError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PasteError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Config written by `shadowpaste init`: every setting spelled out.
    pub fn starter() -> Self {
        let options = CompositeOptions::default();
        Self {
            threshold: Some(options.threshold),
            overlay_size: Some(options.overlay_size),
            base: Some(PathBuf::from(DEFAULT_BASE)),
            overlay: Some(PathBuf::from(DEFAULT_OVERLAY)),
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
        }
    }

    /// Compositing options with built-in defaults for anything unset.
    pub fn options(&self) -> CompositeOptions {
        let defaults = CompositeOptions::default();
        CompositeOptions {
            threshold: self.threshold.unwrap_or(defaults.threshold),
            overlay_size: self.overlay_size.unwrap_or(defaults.overlay_size),
        }
    }

    pub fn effective_base(&self) -> PathBuf {
        self.base.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_BASE))
    }

    pub fn effective_overlay(&self) -> PathBuf {
        self.overlay
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OVERLAY))
    }

    pub fn effective_output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}
