//! Configuration management

use crate::error::{DocShapeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `render.transform`
pub const TRANSFORM_ENV: &str = "DOCSHAPE_TRANSFORM";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
}

/// Settings that shape every rendered response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Terminator written after every CSV row
    #[serde(default = "default_line_terminator")]
    pub line_terminator: String,

    /// Content type for CSV bodies (e.g. `text/csv` to trigger a download)
    #[serde(default = "default_csv_content_type")]
    pub csv_content_type: String,

    /// Content type for bodies wrapped in a callback
    #[serde(default = "default_callback_content_type")]
    pub callback_content_type: String,

    /// Name of the transform applied to documents before formatting
    #[serde(default = "default_transform")]
    pub transform: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_terminator: default_line_terminator(),
            csv_content_type: default_csv_content_type(),
            callback_content_type: default_callback_content_type(),
            transform: default_transform(),
        }
    }
}

impl RenderConfig {
    /// Check values that would otherwise only fail once a request arrives
    pub fn validate(&self) -> Result<()> {
        if self.line_terminator.is_empty() {
            return Err(DocShapeError::Config(
                "line_terminator must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_line_terminator() -> String {
    "\n".to_string()
}

fn default_csv_content_type() -> String {
    "text/plain".to_string()
}

fn default_callback_content_type() -> String {
    "text/javascript".to_string()
}

fn default_transform() -> String {
    "identity".to_string()
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default().with_transform_override(std::env::var(TRANSFORM_ENV).ok()))
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config.with_transform_override(std::env::var(TRANSFORM_ENV).ok()))
    }

    /// Replace the configured transform when an override is present
    pub fn with_transform_override(mut self, transform: Option<String>) -> Self {
        if let Some(name) = transform.filter(|name| !name.is_empty()) {
            self.render.transform = name;
        }
        self
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }
}
