//! ECS components: the scene's color-adjustment volume and per-object
//! material variants.

use bevy::prelude::*;
use bevy::render::view::ColorGrading;
use chromafix_core::{
    ColorAdjustmentSink, ColorGradeParams, CvdMode, MaterialSelector, RenderTarget,
    VariantConfig,
};
use palette::Srgb;

/// Scene-wide color adjustments, one per scene (usually on the camera).
///
/// Scenes without one still track the mode; only grading is skipped.
/// The values reach the frame through the entity's [`ColorGrading`], see
/// [`ColorAdjustmentVolume::write_grading`].
#[derive(Component, Debug, Clone, PartialEq)]
#[require(ColorGrading)]
pub struct ColorAdjustmentVolume {
    /// Exposure offset in EV.
    pub post_exposure: f32,
    /// Contrast in percent around 0.
    pub contrast: f32,
    /// Saturation in percent, -100..=100.
    pub saturation: f32,
    /// Multiplicative tint; white is neutral.
    pub color_filter: Color,
}

impl Default for ColorAdjustmentVolume {
    fn default() -> Self {
        Self::from(ColorGradeParams::neutral())
    }
}

impl From<ColorGradeParams> for ColorAdjustmentVolume {
    fn from(params: ColorGradeParams) -> Self {
        let mut volume = Self {
            post_exposure: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            color_filter: Color::WHITE,
        };
        volume.apply(&params);
        volume
    }
}

impl ColorAdjustmentVolume {
    /// Copy the adjustments into a camera's `ColorGrading`.
    ///
    /// Exposure maps to `global.exposure`, saturation and contrast become
    /// multipliers around 1 (`1 + percent / 100`). `ColorGrading` has no
    /// per-channel multiplier, so `color_filter` stays on the volume for
    /// hosts that run their own tint pass. Other grading fields are left
    /// as the host set them.
    pub fn write_grading(&self, grading: &mut ColorGrading) {
        grading.global.exposure = self.post_exposure;
        grading.global.post_saturation = percent_to_scale(self.saturation);

        let contrast = percent_to_scale(self.contrast);
        for section in [
            &mut grading.shadows,
            &mut grading.midtones,
            &mut grading.highlights,
        ] {
            section.contrast = contrast;
        }
    }
}

fn percent_to_scale(percent: f32) -> f32 {
    (1.0 + percent / 100.0).max(0.0)
}

impl ColorAdjustmentSink for ColorAdjustmentVolume {
    fn set_post_exposure(&mut self, value: f32) {
        self.post_exposure = value;
    }

    fn set_contrast(&mut self, value: f32) {
        self.contrast = value;
    }

    fn set_saturation(&mut self, value: f32) {
        self.saturation = value;
    }

    fn set_color_filter(&mut self, value: Srgb<f32>) {
        self.color_filter = Color::srgb(value.red, value.green, value.blue);
    }
}

/// Material variants for one mesh entity.
///
/// Bound on the first frame the plugin sees it: an unset normal material
/// defaults to the entity's current `MeshMaterial3d<M>`.
#[derive(Component, Debug)]
pub struct CvdMaterialVariants<M: Material> {
    pub(crate) config: VariantConfig<Handle<M>>,
    pub(crate) selector: Option<MaterialSelector<Handle<M>>>,
}

impl<M: Material> Default for CvdMaterialVariants<M> {
    fn default() -> Self {
        Self {
            config: VariantConfig::default(),
            selector: None,
        }
    }
}

impl<M: Material> CvdMaterialVariants<M> {
    pub fn new(normal: Handle<M>) -> Self {
        Self {
            config: VariantConfig::default().with_normal(normal),
            selector: None,
        }
    }

    pub fn with_variant(mut self, mode: CvdMode, material: Handle<M>) -> Self {
        self.config = self.config.with_variant(mode, material);
        self
    }

    /// `false` until bound, and forever after a failed binding.
    pub fn is_bound(&self) -> bool {
        self.selector.as_ref().is_some_and(MaterialSelector::is_bound)
    }

    pub fn variant_for(&self, mode: CvdMode) -> Option<&Handle<M>> {
        let variants = self.selector.as_ref()?.variants()?;
        Some(variants.variant_for(mode))
    }
}

/// Active-material slot of a mesh entity.
pub(crate) struct MaterialTarget<'w, M: Material>(pub(crate) Mut<'w, MeshMaterial3d<M>>);

impl<M: Material> RenderTarget<Handle<M>> for MaterialTarget<'_, M> {
    fn active_material(&self) -> Option<&Handle<M>> {
        Some(&self.0.0)
    }

    fn set_active_material(&mut self, material: Handle<M>) {
        self.0.0 = material;
    }
}
