//! Application configuration for the demo.

use bevy::prelude::*;
use chromafix_core::{AccessibilityConfig, ConfigError};

/// Default window title.
const DEFAULT_TITLE: &str = "Chromafix";
/// Environment variable naming a JSON accessibility config file.
const CONFIG_ENV: &str = "CHROMAFIX_CONFIG";

/// Runtime configuration for the Chromafix demo application.
#[derive(Resource, Clone)]
pub struct AppConfig {
    /// Primary window title.
    pub title: String,
    /// Accessibility settings handed to the plugin.
    pub accessibility: AccessibilityConfig,
}

impl AppConfig {
    /// Load from `CHROMAFIX_CONFIG` (if set), then apply env overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let accessibility = match std::env::var(CONFIG_ENV) {
            Ok(path) => AccessibilityConfig::load(path)?,
            Err(_) => AccessibilityConfig::default(),
        };
        Ok(Self {
            title: DEFAULT_TITLE.to_string(),
            accessibility: accessibility.with_env_overrides()?,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            accessibility: AccessibilityConfig::default(),
        }
    }
}
