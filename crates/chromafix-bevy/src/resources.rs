//! Bevy resources for the colorblind-assistance pipeline.

use bevy::prelude::*;
use chromafix_core::{
    AccessibilityConfig, ControllerState, CvdMode, FixWriter, ModeController, ModeReader,
};

/// Scene configuration, inserted by [`crate::ChromafixPlugin`].
#[derive(Resource, Debug, Clone, Default)]
pub struct CvdSettings {
    pub config: AccessibilityConfig,
}

/// Keys mapped to accessibility commands.
#[derive(Resource, Debug, Clone)]
pub struct CvdKeyBindings {
    pub toggle_fix: KeyCode,
    /// Checked in order; the first just-pressed key wins.
    pub select_mode: [(KeyCode, CvdMode); 4],
}

impl Default for CvdKeyBindings {
    fn default() -> Self {
        Self {
            toggle_fix: KeyCode::KeyF,
            select_mode: [
                (KeyCode::Digit1, CvdMode::Normal),
                (KeyCode::Digit2, CvdMode::Protanopia),
                (KeyCode::Digit3, CvdMode::Deuteranopia),
                (KeyCode::Digit4, CvdMode::Tritanopia),
            ],
        }
    }
}

/// Live scene state: the mode controller plus the fix flag writer.
///
/// Inserted at `PostStartup` once the scene's volume has been looked up.
#[derive(Resource, Debug)]
pub struct CvdState {
    pub(crate) controller: ModeController,
    pub(crate) fix: FixWriter,
    pub(crate) reader: ModeReader,
}

impl CvdState {
    pub fn current_mode(&self) -> CvdMode {
        self.controller.current_mode()
    }

    pub fn fix_enabled(&self) -> bool {
        self.fix.get()
    }

    pub fn controller_state(&self) -> ControllerState {
        self.controller.state()
    }

    /// Read handle for code outside the ECS that follows the mode.
    pub fn reader(&self) -> ModeReader {
        self.reader.clone()
    }
}
