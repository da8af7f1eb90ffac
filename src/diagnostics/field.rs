use crate::image::traits::ImageView;
use crate::image::ImageF32;
use serde::{Deserialize, Serialize};

/// Summary statistics of a field at one point of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    /// Samples outside `[0, 1]`.
    pub out_of_unit: usize,
}

impl FieldStats {
    pub fn from_field(field: &ImageF32) -> Self {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut out_of_unit = 0usize;
        for row in field.rows() {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
                sum += v as f64;
                if !(0.0..=1.0).contains(&v) {
                    out_of_unit += 1;
                }
            }
        }
        let denom = field.area().max(1) as f64;
        if field.area() == 0 {
            min = 0.0;
            max = 0.0;
        }
        Self {
            min,
            max,
            mean: (sum / denom) as f32,
            out_of_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FieldStats;
    use crate::image::ImageF32;

    #[test]
    fn stats_cover_range_and_overflow() {
        let field = ImageF32::from_vec(2, 2, vec![-0.5, 0.25, 0.75, 1.5]);
        let stats = FieldStats::from_field(&field);
        assert_eq!(stats.min, -0.5);
        assert_eq!(stats.max, 1.5);
        assert!((stats.mean - 0.5).abs() < 1e-6);
        assert_eq!(stats.out_of_unit, 2);
    }

    #[test]
    fn empty_field_reports_zeros() {
        let stats = FieldStats::from_field(&ImageF32::new(0, 0));
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.mean, 0.0);
    }
}
