use crate::diagnostics::QuantizeStats;
use crate::image::traits::{ImageView, ImageViewMut};
use crate::image::{gray, ImageF32, RgbaImage, OVER_RANGE, UNDER_RANGE};

/// Scale mapping `[0, 1]` onto the 256 display levels.
pub const LEVEL_SCALE: f32 = 255.999;

/// Quantize a field to opaque gray pixels via `floor(255.999 * v)`.
///
/// With `mark_overflow`, samples that quantize above 255 or below 0 are drawn
/// with [`OVER_RANGE`] / [`UNDER_RANGE`] instead of being clamped. NaN samples
/// are always counted and, with `mark_overflow`, drawn as [`UNDER_RANGE`].
pub fn quantize_field(field: &ImageF32, mark_overflow: bool) -> (RgbaImage, QuantizeStats) {
    let mut out = RgbaImage::new(field.w, field.h);
    let mut stats = QuantizeStats::default();
    for (src, dst) in field.rows().zip(out.rows_mut()) {
        for (px, &v) in dst.iter_mut().zip(src) {
            let level = (LEVEL_SCALE * v).floor();
            *px = if level.is_nan() {
                stats.not_a_number += 1;
                if mark_overflow {
                    UNDER_RANGE
                } else {
                    gray(0)
                }
            } else if level > 255.0 {
                if mark_overflow {
                    stats.over_range += 1;
                    OVER_RANGE
                } else {
                    stats.clamped += 1;
                    gray(255)
                }
            } else if level < 0.0 {
                if mark_overflow {
                    stats.under_range += 1;
                    UNDER_RANGE
                } else {
                    stats.clamped += 1;
                    gray(0)
                }
            } else {
                gray(level as u8)
            };
        }
    }
    (out, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_floor_to_levels() {
        let field = ImageF32::from_vec(4, 1, vec![0.0, 0.5, 0.999, 1.0]);
        let (img, stats) = quantize_field(&field, true);
        let levels: Vec<u8> = img.data.iter().map(|px| px[0]).collect();
        assert_eq!(levels, vec![0, 127, 255, 255]);
        assert_eq!(stats, QuantizeStats::default());
        assert!(img.data.iter().all(|px| px[3] == 255));
    }

    #[test]
    fn debug_marks_out_of_range_samples() {
        let field = ImageF32::from_vec(3, 1, vec![1.2, -0.1, 0.25]);
        let (img, stats) = quantize_field(&field, true);
        assert_eq!(img.data, vec![OVER_RANGE, UNDER_RANGE, gray(63)]);
        assert_eq!(stats.over_range, 1);
        assert_eq!(stats.under_range, 1);
    }

    #[test]
    fn without_debug_out_of_range_samples_clamp() {
        let field = ImageF32::from_vec(3, 1, vec![1.2, -0.1, 0.25]);
        let (img, stats) = quantize_field(&field, false);
        assert_eq!(img.data, vec![gray(255), gray(0), gray(63)]);
        assert_eq!(stats.clamped, 2);
    }

    #[test]
    fn nan_samples_are_counted_and_marked_in_debug() {
        let field = ImageF32::from_vec(2, 1, vec![f32::NAN, 0.5]);
        let (img, stats) = quantize_field(&field, true);
        assert_eq!(img.data, vec![UNDER_RANGE, gray(127)]);
        assert_eq!(stats.not_a_number, 1);
        assert_eq!(stats.under_range, 0);

        let (img, stats) = quantize_field(&field, false);
        assert_eq!(img.data, vec![gray(0), gray(127)]);
        assert_eq!(stats.not_a_number, 1);
    }

    #[test]
    fn tiny_negative_value_is_under_range() {
        let field = ImageF32::from_vec(1, 1, vec![-0.001]);
        let (img, _) = quantize_field(&field, true);
        assert_eq!(img.data[0], UNDER_RANGE);
    }
}
