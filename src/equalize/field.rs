use super::build_table;
use crate::image::ImageF32;
use log::debug;

/// Number of levels used by the float-field equalizer.
pub const FINE_BINS: usize = 1024;

/// Equalize a float field in place with [`FINE_BINS`] levels.
///
/// Samples are bucketed by `clamp(floor(1024 * v), 0, 1023)` and remapped to
/// `table[bin] / 1023`. Fields with at most one sample are left untouched.
pub fn equalize_field(field: &mut ImageF32) {
    equalize_values(&mut field.data, field.w * field.h, FINE_BINS);
}

pub(crate) fn equalize_values(values: &mut [f32], area: usize, bins: usize) {
    if area <= 1 || values.len() <= 1 || bins < 2 {
        debug!("equalize_values skipped area={} bins={}", area, bins);
        return;
    }
    let top = (bins - 1) as f32;
    let bin_of = |v: f32| ((v * bins as f32).floor().max(0.0) as usize).min(bins - 1);

    let mut counts = vec![0u32; bins];
    for &v in values.iter() {
        counts[bin_of(v)] += 1;
    }
    let table = build_table(&counts, area);

    for v in values.iter_mut() {
        *v = table[bin_of(*v)].clamp(0.0, top) / top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pseudo_random_field(w: usize, h: usize) -> ImageF32 {
        let mut state = 0x2545_f491_u32;
        let data = (0..w * h)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                // Squared to skew the distribution toward 0.
                let u = (state >> 8) as f32 / (1u32 << 24) as f32;
                u * u
            })
            .collect();
        ImageF32::from_vec(w, h, data)
    }

    #[test]
    fn single_sample_field_is_untouched() {
        let mut field = ImageF32::filled(1, 1, 0.3);
        equalize_field(&mut field);
        assert_eq!(field.data, vec![0.3]);

        let mut empty = ImageF32::new(0, 5);
        equalize_field(&mut empty);
        assert!(empty.data.is_empty());
    }

    #[test]
    fn constant_field_maps_to_white() {
        let mut field = ImageF32::filled(4, 4, 0.5);
        equalize_field(&mut field);
        assert!(field.data.iter().all(|&v| v == 1.0), "{:?}", field.data);
    }

    #[test]
    fn output_is_in_unit_range_and_order_preserving() {
        let original = pseudo_random_field(32, 32);
        let mut field = original.clone();
        equalize_field(&mut field);
        assert!(field.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
        for i in 0..original.data.len() {
            for j in (i + 1)..original.data.len().min(i + 40) {
                if original.data[i] < original.data[j] {
                    assert!(field.data[i] <= field.data[j]);
                }
            }
        }
    }

    #[test]
    fn equalization_flattens_skewed_distribution() {
        let mut field = pseudo_random_field(64, 64);
        let below_before = field.data.iter().filter(|&&v| v < 0.5).count();
        equalize_field(&mut field);
        let below_after = field.data.iter().filter(|&&v| v < 0.5).count();
        let half = field.data.len() / 2;
        assert!(below_before > half + half / 3, "input should be skewed");
        let diff = below_after.abs_diff(half);
        assert!(diff < field.data.len() / 20, "below_after={below_after}");
    }

    #[test]
    fn second_pass_changes_at_most_one_step() {
        let mut field = pseudo_random_field(16, 16);
        equalize_field(&mut field);
        let once = field.clone();
        equalize_field(&mut field);
        let step = 1.0 / (FINE_BINS - 1) as f32;
        for (a, b) in once.data.iter().zip(&field.data) {
            assert!((a - b).abs() <= step + 1e-6, "once={a} twice={b}");
        }
    }
}
