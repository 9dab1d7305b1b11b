//! Scene-wide mode controller.
//!
//! Owns the write side of the shared mode state and pushes the policy's
//! parameters into the color-adjustment sink. Whether a sink exists is
//! decided once, at construction; a controller without one keeps tracking
//! the mode so material selection still works.

use crate::context::{ModeReader, ModeWriter};
use crate::error::SetupError;
use crate::mode::CvdMode;
use crate::params::ColorGradeParams;
use crate::policy::compute_params;
use crate::sink::ColorAdjustmentSink;

/// Sink-application state, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// A sink was present at startup; mode changes are applied to it.
    Ready,
    /// No sink at startup. Terminal for the scene's lifetime.
    Disabled,
}

#[derive(Debug)]
pub struct ModeController {
    state: ControllerState,
    writer: ModeWriter,
}

impl ModeController {
    /// Validate the sink and apply the writer's current mode to it.
    ///
    /// A missing sink is reported here, once, and the controller becomes
    /// [`ControllerState::Disabled`].
    pub fn initialize<S>(writer: ModeWriter, sink: Option<&mut S>) -> Self
    where
        S: ColorAdjustmentSink + ?Sized,
    {
        match sink {
            Some(sink) => {
                tracing::info!("Color adjustments found, CVD controller ready");
                let controller = Self {
                    state: ControllerState::Ready,
                    writer,
                };
                sink.apply(&compute_params(controller.current_mode()));
                controller
            }
            None => {
                tracing::error!("{}", SetupError::MissingSink);
                Self {
                    state: ControllerState::Disabled,
                    writer,
                }
            }
        }
    }

    /// Make `mode` current and apply its grading to `sink`.
    ///
    /// The shared mode is updated in every state. Sink application is
    /// skipped when disabled, or when a ready controller is handed no sink.
    pub fn set_mode<S>(&mut self, mode: CvdMode, sink: Option<&mut S>) -> ColorGradeParams
    where
        S: ColorAdjustmentSink + ?Sized,
    {
        self.writer.set(mode);
        let params = compute_params(mode);

        match (self.state, sink) {
            (ControllerState::Ready, Some(sink)) => {
                sink.apply(&params);
                tracing::info!("{mode} mode applied");
            }
            (ControllerState::Ready, None) => {
                tracing::debug!("{mode} mode set; sink not available this call");
            }
            (ControllerState::Disabled, _) => {
                tracing::debug!("{mode} mode set; grading disabled");
            }
        }

        params
    }

    pub fn current_mode(&self) -> CvdMode {
        self.writer.get()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == ControllerState::Ready
    }

    /// Handle for components that follow the current mode.
    pub fn reader(&self) -> ModeReader {
        self.writer.reader()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ModeContext;
    use crate::sink::ColorAdjustments;

    fn writer(mode: CvdMode) -> ModeWriter {
        ModeContext::new(mode, false).split().0
    }

    #[test]
    fn test_initialize_applies_initial_mode() {
        let mut sink = ColorAdjustments::default();
        let controller = ModeController::initialize(writer(CvdMode::Tritanopia), Some(&mut sink));
        assert_eq!(controller.state(), ControllerState::Ready);
        assert_eq!(sink.params, compute_params(CvdMode::Tritanopia));
        assert_eq!(sink.writes, 1);
    }

    #[test]
    fn test_set_mode_writes_sink_and_state() {
        let mut sink = ColorAdjustments::default();
        let mut controller = ModeController::initialize(writer(CvdMode::Normal), Some(&mut sink));
        let reader = controller.reader();

        controller.set_mode(CvdMode::Protanopia, Some(&mut sink));
        assert_eq!(controller.current_mode(), CvdMode::Protanopia);
        assert_eq!(reader.mode(), CvdMode::Protanopia);
        assert_eq!(sink.params.saturation, -40.0);
    }

    #[test]
    fn test_set_mode_twice_is_idempotent() {
        let mut once = ColorAdjustments::default();
        let mut twice = ColorAdjustments::default();
        let mut a = ModeController::initialize(writer(CvdMode::Normal), Some(&mut once));
        let mut b = ModeController::initialize(writer(CvdMode::Normal), Some(&mut twice));

        a.set_mode(CvdMode::Deuteranopia, Some(&mut once));
        b.set_mode(CvdMode::Deuteranopia, Some(&mut twice));
        b.set_mode(CvdMode::Deuteranopia, Some(&mut twice));

        assert_eq!(once.params, twice.params);
    }

    #[test]
    fn test_disabled_controller_still_tracks_mode() {
        let mut controller =
            ModeController::initialize::<ColorAdjustments>(writer(CvdMode::Normal), None);
        assert_eq!(controller.state(), ControllerState::Disabled);

        // A sink supplied later is ignored: disabled is terminal.
        let mut late = ColorAdjustments::default();
        controller.set_mode(CvdMode::Deuteranopia, Some(&mut late));
        assert_eq!(controller.current_mode(), CvdMode::Deuteranopia);
        assert_eq!(late.writes, 0);
        assert!(late.params.is_neutral());
    }

    #[test]
    fn test_ready_controller_without_sink_skips_application() {
        let mut sink = ColorAdjustments::default();
        let mut controller = ModeController::initialize(writer(CvdMode::Normal), Some(&mut sink));
        let params = controller.set_mode::<ColorAdjustments>(CvdMode::Tritanopia, None);
        assert_eq!(params, compute_params(CvdMode::Tritanopia));
        assert!(controller.is_ready());
        assert_eq!(sink.writes, 1);
    }
}
