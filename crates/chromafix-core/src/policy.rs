//! Mode → grading policy.
//!
//! The table below is a designer-tuned approximation: a fixed desaturation
//! plus a tint that pulls the hues a given deficiency confuses toward the
//! ones it still separates. It is not a colorimetric simulation and the
//! constants are kept as authored so scenes stay visually reproducible.

use palette::Srgb;

use crate::mode::CvdMode;
use crate::params::ColorGradeParams;

/// Grading parameters for `mode`.
///
/// Total and pure: every mode maps to exactly one parameter set.
pub fn compute_params(mode: CvdMode) -> ColorGradeParams {
    match mode {
        CvdMode::Normal => ColorGradeParams::neutral(),
        // Desaturated with a cyan-ish tint.
        CvdMode::Protanopia => ColorGradeParams {
            post_exposure: 0.0,
            contrast: 0.0,
            saturation: -40.0,
            color_filter: Srgb::new(0.7, 1.0, 1.0),
        },
        // Desaturated with a magenta-ish tint.
        CvdMode::Deuteranopia => ColorGradeParams {
            post_exposure: 0.0,
            contrast: 0.0,
            saturation: -40.0,
            color_filter: Srgb::new(1.0, 0.8, 1.0),
        },
        // Stronger desaturation with a yellowish tint.
        CvdMode::Tritanopia => ColorGradeParams {
            post_exposure: 0.0,
            contrast: 0.0,
            saturation: -50.0,
            color_filter: Srgb::new(1.0, 1.0, 0.7),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(params: &ColorGradeParams) -> [f32; 3] {
        let c = params.color_filter;
        [c.red, c.green, c.blue]
    }

    #[test]
    fn test_normal_is_identity() {
        let params = compute_params(CvdMode::Normal);
        assert_eq!(params.post_exposure, 0.0);
        assert_eq!(params.contrast, 0.0);
        assert_eq!(params.saturation, 0.0);
        assert_eq!(filter(&params), [1.0, 1.0, 1.0]);
        assert!(params.is_neutral());
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        for mode in CvdMode::ALL {
            let a = compute_params(mode);
            let b = compute_params(mode);
            assert_eq!(a.saturation.to_bits(), b.saturation.to_bits());
            assert_eq!(a.post_exposure.to_bits(), b.post_exposure.to_bits());
            assert_eq!(a.contrast.to_bits(), b.contrast.to_bits());
            for (x, y) in filter(&a).iter().zip(filter(&b).iter()) {
                assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }

    #[test]
    fn test_saturation_stays_in_range() {
        for mode in CvdMode::ALL {
            let params = compute_params(mode);
            assert!(params.saturation.abs() <= 100.0, "{mode}: {}", params.saturation);
            assert!(params.saturation_in_range());
        }
    }

    #[test]
    fn test_table_matches_tuned_constants() {
        let protan = compute_params(CvdMode::Protanopia);
        assert_eq!(protan.saturation, -40.0);
        assert_eq!(filter(&protan), [0.7, 1.0, 1.0]);

        let deutan = compute_params(CvdMode::Deuteranopia);
        assert_eq!(deutan.saturation, -40.0);
        assert_eq!(filter(&deutan), [1.0, 0.8, 1.0]);

        let tritan = compute_params(CvdMode::Tritanopia);
        assert_eq!(tritan.saturation, -50.0);
        assert_eq!(filter(&tritan), [1.0, 1.0, 0.7]);

        for mode in CvdMode::ALL {
            let params = compute_params(mode);
            assert_eq!(params.post_exposure, 0.0);
            assert_eq!(params.contrast, 0.0);
        }
    }

    #[test]
    fn test_only_normal_is_neutral() {
        for mode in CvdMode::ALL {
            assert_eq!(compute_params(mode).is_neutral(), mode == CvdMode::Normal);
        }
    }
}
