//! Headless wiring of controller, broadcaster and shared state for one scene.

use crate::broadcaster::{Broadcaster, SelectorId};
use crate::config::AccessibilityConfig;
use crate::context::{ModeContext, ModeReader};
use crate::controller::ModeController;
use crate::input::InputAction;
use crate::mode::CvdMode;
use crate::selector::{MaterialSelector, VariantConfig};
use crate::sink::{ColorAdjustmentSink, RenderTarget};

/// Everything a scene needs to react to accessibility input.
///
/// Created once per scene load; dropping it discards the mode state.
#[derive(Debug)]
pub struct AccessibilitySession<M, T> {
    controller: ModeController,
    broadcaster: Broadcaster<M, T>,
    reader: ModeReader,
    reapply_on_mode_change: bool,
}

impl<M, T> AccessibilitySession<M, T>
where
    M: Clone + PartialEq,
    T: RenderTarget<M>,
{
    /// Build the scene state from `config` and validate the sink once.
    pub fn start<S>(config: &AccessibilityConfig, sink: Option<&mut S>) -> Self
    where
        S: ColorAdjustmentSink + ?Sized,
    {
        let (modes, fix, reader) =
            ModeContext::new(config.default_mode, config.fix_enabled).split();
        Self {
            controller: ModeController::initialize(modes, sink),
            broadcaster: Broadcaster::new(fix),
            reader,
            reapply_on_mode_change: config.reapply_on_mode_change,
        }
    }

    /// Bind an object's variants and start driving it.
    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        config: VariantConfig<M>,
        mut target: Option<T>,
    ) -> SelectorId {
        let selector = MaterialSelector::bind(name, config, target.as_mut(), self.reader.clone());
        self.broadcaster.register(selector, target)
    }

    pub fn remove_object(&mut self, id: SelectorId) -> Option<T> {
        self.broadcaster.unregister(id).and_then(|(_, target)| target)
    }

    /// Dispatch one input action.
    pub fn handle<S>(&mut self, action: InputAction, sink: Option<&mut S>)
    where
        S: ColorAdjustmentSink + ?Sized,
    {
        match action {
            InputAction::ToggleFix => {
                self.broadcaster.toggle_fix();
            }
            InputAction::SelectMode(mode) => self.set_mode(mode, sink),
        }
    }

    pub fn set_mode<S>(&mut self, mode: CvdMode, sink: Option<&mut S>)
    where
        S: ColorAdjustmentSink + ?Sized,
    {
        self.controller.set_mode(mode, sink);
        if self.reapply_on_mode_change && self.broadcaster.fix_enabled() {
            self.broadcaster.refresh();
        }
    }

    pub fn current_mode(&self) -> CvdMode {
        self.controller.current_mode()
    }

    pub fn fix_enabled(&self) -> bool {
        self.broadcaster.fix_enabled()
    }

    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    pub fn broadcaster(&self) -> &Broadcaster<M, T> {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut Broadcaster<M, T> {
        &mut self.broadcaster
    }

    pub fn reader(&self) -> ModeReader {
        self.reader.clone()
    }
}
