use super::build_table;
use crate::image::{gray, Rgba8, RgbaImage};
use log::debug;

/// Number of levels used by the packed-pixel equalizer.
pub const COARSE_BINS: usize = 256;

/// Opacity bit that marks a pixel as a valid sample.
const VALID_ALPHA_BIT: u8 = 0x80;

/// Gray level of one pixel plus whether it takes part in the histogram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraySample {
    pub level: u8,
    pub valid: bool,
}

impl GraySample {
    /// Reads the gray level from the red channel; the pixel is valid when the
    /// high bit of its opacity is set.
    #[inline]
    pub fn from_pixel(px: Rgba8) -> Self {
        Self {
            level: px[0],
            valid: px[3] & VALID_ALPHA_BIT != 0,
        }
    }
}

/// Equalize the gray levels of `image` in place with [`COARSE_BINS`] levels.
///
/// Invalid samples are left out of the histogram (the denominator shrinks
/// instead) but are still remapped. Every pixel is written back as opaque
/// gray. Images with at most one pixel, or without any valid pixel, are left
/// untouched.
pub fn equalize_pixels(image: &mut RgbaImage) {
    let samples: Vec<GraySample> = image
        .data
        .iter()
        .map(|&px| GraySample::from_pixel(px))
        .collect();
    let Some(levels) = equalize_samples(&samples, image.w * image.h) else {
        debug!("equalize_pixels skipped w={} h={}", image.w, image.h);
        return;
    };
    for (px, level) in image.data.iter_mut().zip(levels) {
        *px = gray(level);
    }
}

/// Remapped gray levels for `samples`, or `None` when there is nothing to
/// equalize.
pub fn equalize_samples(samples: &[GraySample], area: usize) -> Option<Vec<u8>> {
    if area <= 1 || samples.len() <= 1 {
        return None;
    }
    let mut counts = vec![0u32; COARSE_BINS];
    let mut valid_area = area;
    for s in samples {
        if s.valid {
            counts[s.level as usize] += 1;
        } else {
            valid_area -= 1;
        }
    }
    if valid_area == 0 {
        return None;
    }
    let table = build_table(&counts, valid_area);
    let top = (COARSE_BINS - 1) as f32;
    Some(
        samples
            .iter()
            .map(|s| table[s.level as usize].clamp(0.0, top) as u8)
            .collect(),
    )
}
