//! Per-scene accessibility configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::mode::CvdMode;

/// Environment variable overriding [`AccessibilityConfig::default_mode`].
pub const MODE_ENV: &str = "CHROMAFIX_MODE";
/// Environment variable overriding [`AccessibilityConfig::fix_enabled`].
pub const FIX_ENV: &str = "CHROMAFIX_FIX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Mode applied when the scene starts.
    pub default_mode: CvdMode,
    /// Initial state of the fix-enabled flag.
    pub fix_enabled: bool,
    /// Re-select materials on mode change while the fix is on. When off,
    /// materials only follow the mode on the next fix toggle.
    pub reapply_on_mode_change: bool,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            default_mode: CvdMode::Normal,
            fix_enabled: false,
            reapply_on_mode_change: false,
        }
    }
}

impl AccessibilityConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Apply `CHROMAFIX_MODE` / `CHROMAFIX_FIX` from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(MODE_ENV) {
            self.default_mode = mode.parse()?;
        }
        if let Some(value) = lookup(FIX_ENV) {
            self.fix_enabled = parse_flag(FIX_ENV, &value)?;
        }
        Ok(self)
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = AccessibilityConfig::from_json_str(r#"{"default_mode":"deuteranopia"}"#)
            .unwrap();
        assert_eq!(config.default_mode, CvdMode::Deuteranopia);
        assert!(!config.fix_enabled);
        assert!(!config.reapply_on_mode_change);

        let empty = AccessibilityConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, AccessibilityConfig::default());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = AccessibilityConfig::from_json_str(r#"{"default_mode":"sepia"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = AccessibilityConfig::default()
            .with_overrides(|var| (var == MODE_ENV).then(|| "sepia".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMode(ref m) if m == "sepia"));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = AccessibilityConfig::default()
            .with_overrides(|var| match var {
                MODE_ENV => Some("tritan".to_string()),
                FIX_ENV => Some("on".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.default_mode, CvdMode::Tritanopia);
        assert!(config.fix_enabled);
    }

    #[test]
    fn test_bad_flag_reports_variable() {
        let err = AccessibilityConfig::default()
            .with_overrides(|var| (var == FIX_ENV).then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { var: FIX_ENV, .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AccessibilityConfig::load("/nonexistent/chromafix.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
