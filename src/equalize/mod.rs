//! Histogram equalization at two precisions.
//!
//! Both variants bucket samples into `bins` levels, accumulate the cumulative
//! frequency and remap every sample through the resulting table:
//!
//! - [`equalize_field`]: 1024 levels over an `ImageF32` in `[0, 1]`.
//! - [`equalize_pixels`]: 256 levels over the gray channel of an `RgbaImage`,
//!   skipping samples whose opacity does not mark them as valid.

pub mod field;
pub mod pixels;

pub use field::{equalize_field, FINE_BINS};
pub use pixels::{equalize_pixels, GraySample, COARSE_BINS};

use serde::{Deserialize, Serialize};

/// Which equalizer the pipeline runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualizerKind {
    /// 1024-level equalization of the float field inside the refine loop.
    #[default]
    Fine,
    /// 256-level equalization of the quantized pixels, once after quantization.
    Coarse,
}

/// Turn per-bin counts into a remap table.
///
/// Walking left to right, every bin that moves the running cumulative count is
/// overwritten with `cumulative * (bins - 1) / area`. Empty bins keep their
/// count (zero); no sample maps to them.
pub(crate) fn build_table(counts: &[u32], area: usize) -> Vec<f32> {
    let scale = (counts.len().saturating_sub(1)) as f64 / area as f64;
    let mut table: Vec<f32> = counts.iter().map(|&c| c as f32).collect();
    let mut cumulative = 0u64;
    for (slot, &count) in table.iter_mut().zip(counts) {
        if count != 0 {
            cumulative += count as u64;
            *slot = (cumulative as f64 * scale) as f32;
        }
    }
    table
}
