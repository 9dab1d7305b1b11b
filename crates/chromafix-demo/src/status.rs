//! Log outbound accessibility messages.

use bevy::prelude::*;
use chromafix_bevy::{CvdModeChanged, FixToggled};

pub fn log_status(
    mut mode_changed: MessageReader<CvdModeChanged>,
    mut fix_toggled: MessageReader<FixToggled>,
) {
    for changed in mode_changed.read() {
        let filter = changed.params.color_filter;
        tracing::info!(
            "mode {}: saturation {:+.0}, filter ({:.2}, {:.2}, {:.2})",
            changed.mode,
            changed.params.saturation,
            filter.red,
            filter.green,
            filter.blue
        );
    }
    for toggled in fix_toggled.read() {
        tracing::info!("material fix {}", if toggled.enabled { "on" } else { "off" });
    }
}
