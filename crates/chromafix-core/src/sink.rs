//! Host-side boundaries: the color-adjustment stage and per-object
//! material slots.

use palette::Srgb;

use crate::params::ColorGradeParams;

/// A scene-wide post-processing stage with four writable controls.
///
/// The controller only ever writes to it.
pub trait ColorAdjustmentSink {
    fn set_post_exposure(&mut self, value: f32);
    fn set_contrast(&mut self, value: f32);
    fn set_saturation(&mut self, value: f32);
    fn set_color_filter(&mut self, value: Srgb<f32>);

    /// Write every field of `params`.
    fn apply(&mut self, params: &ColorGradeParams) {
        self.set_post_exposure(params.post_exposure);
        self.set_contrast(params.contrast);
        self.set_saturation(params.saturation);
        self.set_color_filter(params.color_filter);
    }
}

/// A renderable object's single active-material slot.
pub trait RenderTarget<M> {
    /// Material currently assigned, if any.
    fn active_material(&self) -> Option<&M>;
    fn set_active_material(&mut self, material: M);
}

/// In-memory color-adjustment override.
///
/// Stands in for an engine volume override in headless hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorAdjustments {
    pub params: ColorGradeParams,
    /// Number of `apply` calls received.
    pub writes: u32,
}

impl ColorAdjustmentSink for ColorAdjustments {
    fn set_post_exposure(&mut self, value: f32) {
        self.params.post_exposure = value;
    }

    fn set_contrast(&mut self, value: f32) {
        self.params.contrast = value;
    }

    fn set_saturation(&mut self, value: f32) {
        self.params.saturation = value;
    }

    fn set_color_filter(&mut self, value: Srgb<f32>) {
        self.params.color_filter = value;
    }

    fn apply(&mut self, params: &ColorGradeParams) {
        self.params = *params;
        self.writes += 1;
    }
}

/// Single-slot render target holding an optional material.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialSlot<M> {
    pub material: Option<M>,
    /// Number of assignments made through [`RenderTarget::set_active_material`].
    pub assignments: u32,
}

impl<M> MaterialSlot<M> {
    pub fn new(material: Option<M>) -> Self {
        Self {
            material,
            assignments: 0,
        }
    }
}

impl<M> RenderTarget<M> for MaterialSlot<M> {
    fn active_material(&self) -> Option<&M> {
        self.material.as_ref()
    }

    fn set_active_material(&mut self, material: M) {
        self.material = Some(material);
        self.assignments += 1;
    }
}
