//! Discrete input actions understood by the session.
//!
//! Device polling and key mapping live in the host; by the time an event
//! reaches the core it is one of these.

use serde::{Deserialize, Serialize};

use crate::mode::CvdMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InputAction {
    /// Flip the fix-enabled flag.
    ToggleFix,
    /// Make `mode` current.
    SelectMode(CvdMode),
}

impl InputAction {
    /// Action for the `select-mode-N` event (N = 1..=4).
    pub fn select_slot(slot: u8) -> Option<Self> {
        CvdMode::from_slot(slot).map(Self::SelectMode)
    }
}
