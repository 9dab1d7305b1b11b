//! Bevy messages for accessibility commands and their outcomes.

use bevy::prelude::*;
use chromafix_core::{ColorGradeParams, CvdMode, InputAction};

/// Inbound command, from hotkeys or any other UI.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum CvdCommand {
    /// Make `mode` current and grade the scene for it.
    SetMode(CvdMode),
    /// Flip the material fix.
    ToggleFix,
    /// Set the material fix explicitly.
    SetFix(bool),
}

impl From<InputAction> for CvdCommand {
    fn from(action: InputAction) -> Self {
        match action {
            InputAction::ToggleFix => Self::ToggleFix,
            InputAction::SelectMode(mode) => Self::SetMode(mode),
        }
    }
}

/// Fired after a mode change has been applied.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct CvdModeChanged {
    pub mode: CvdMode,
    /// Parameters computed for `mode`, whether or not a volume received them.
    pub params: ColorGradeParams,
}

/// Fired when the material fix flag changes.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixToggled {
    pub enabled: bool,
}
