//! Scene-wide color adjustment values produced for one mode.

use palette::Srgb;
use serde::{Deserialize, Serialize};

/// Inclusive bounds of the saturation control, in percent.
pub const SATURATION_RANGE: (f32, f32) = (-100.0, 100.0);

/// The four fields written to a color-adjustment stage.
///
/// Values follow post-processing volume conventions: exposure in EV,
/// contrast and saturation in percent around 0, and a multiplicative
/// color filter where white is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorGradeParams {
    /// Exposure offset in EV. 0.0 = neutral.
    pub post_exposure: f32,
    /// Contrast in percent. 0.0 = neutral.
    pub contrast: f32,
    /// Saturation in percent, within [`SATURATION_RANGE`]. 0.0 = neutral.
    pub saturation: f32,
    /// Multiplicative tint. White = neutral.
    pub color_filter: Srgb<f32>,
}

impl ColorGradeParams {
    /// Identity transform: the image passes through unchanged.
    pub fn neutral() -> Self {
        Self {
            post_exposure: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            color_filter: Srgb::new(1.0, 1.0, 1.0),
        }
    }

    /// Whether every field holds its neutral value.
    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Whether saturation lies inside [`SATURATION_RANGE`].
    pub fn saturation_in_range(&self) -> bool {
        let (min, max) = SATURATION_RANGE;
        (min..=max).contains(&self.saturation)
    }
}

impl Default for ColorGradeParams {
    fn default() -> Self {
        Self::neutral()
    }
}
