//! Configuration module

use anyhow::{Context, Result};
use sentag_core::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Resource configuration
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Step flow and flags
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Token cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resource-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ResourcesConfig {
    /// Resource manifest; the bundled resource set when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
}

/// Token cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Persist the token cache after every call
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// Cache file location
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            path: default_cache_path(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_path() -> PathBuf {
    PathBuf::from(".sentag/token_cache.json")
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Pretty print JSON output
    #[serde(default)]
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            pretty_json: false,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

impl CliConfig {
    /// Parse a configuration document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Load a configuration file.
    ///
    /// Relative manifest and cache paths are resolved against the directory
    /// containing the configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration: {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        if let Some(manifest) = config.resources.manifest.as_mut() {
            if manifest.is_relative() {
                *manifest = base.join(&*manifest);
            }
        }
        if config.cache.path.is_relative() {
            config.cache.path = base.join(&config.cache.path);
        }

        Ok(config)
    }
}
