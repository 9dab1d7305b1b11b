//! The closed set of color-vision-deficiency modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Color vision deficiency category used to pick grading params and
/// material variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvdMode {
    /// No adjustment.
    #[default]
    Normal,
    /// Red-blind (missing L cones).
    Protanopia,
    /// Green-blind (missing M cones).
    Deuteranopia,
    /// Blue-blind (missing S cones).
    Tritanopia,
}

impl CvdMode {
    /// Every mode, in select-slot order.
    pub const ALL: [CvdMode; 4] = [
        CvdMode::Normal,
        CvdMode::Protanopia,
        CvdMode::Deuteranopia,
        CvdMode::Tritanopia,
    ];

    /// Human-readable label for menus and log lines.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
        }
    }

    /// Compact integer form, used by the shared context's atomic slot.
    pub const fn index(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Protanopia => 1,
            Self::Deuteranopia => 2,
            Self::Tritanopia => 3,
        }
    }

    /// Inverse of [`CvdMode::index`].
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Normal),
            1 => Some(Self::Protanopia),
            2 => Some(Self::Deuteranopia),
            3 => Some(Self::Tritanopia),
            _ => None,
        }
    }

    /// 1-based select slot (`select-mode-N`), so `1` is Normal.
    pub const fn slot(self) -> u8 {
        self.index() + 1
    }

    /// Mode bound to select slot `slot` (1..=4).
    pub const fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            0 => None,
            n => Self::from_index(n - 1),
        }
    }
}

impl fmt::Display for CvdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CvdMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "none" => Ok(Self::Normal),
            "protanopia" | "protan" => Ok(Self::Protanopia),
            "deuteranopia" | "deutan" => Ok(Self::Deuteranopia),
            "tritanopia" | "tritan" => Ok(Self::Tritanopia),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}
