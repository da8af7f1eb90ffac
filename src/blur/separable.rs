//! Toroidal separable Gaussian blur with an optional high-pass "flip" mode.
//!
//! Each pass convolves the rows of its input with the mirrored kernel, wrapping
//! indices around the row ends, and writes the result transposed. Running the
//! pass twice (field → scratch → field) therefore covers both axes and leaves
//! the output in the original orientation.
use super::kernel::{GaussianKernel, MIN_RADIUS_LIMIT};
use crate::image::{ImageF32, ImageView};
use crate::types::ClampRange;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Gaussian blur state: configured sigma, clamp range, cached kernel and the
/// scratch buffers reused across calls.
///
/// A negative sigma selects flip mode, a zero sigma disables the blur.
#[derive(Clone, Debug)]
pub struct GaussianBlur {
    sigma: f32,
    clamp: ClampRange,
    kernel: Option<GaussianKernel>,
    scratch: Vec<f32>,
    original: Vec<f32>,
}

impl Default for GaussianBlur {
    fn default() -> Self {
        Self::new(1.8, ClampRange::default())
    }
}

impl GaussianBlur {
    pub fn new(sigma: f32, clamp: ClampRange) -> Self {
        Self {
            sigma,
            clamp,
            kernel: None,
            scratch: Vec::new(),
            original: Vec::new(),
        }
    }

    #[inline]
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    pub fn set_sigma(&mut self, sigma: f32) {
        self.sigma = sigma;
    }

    #[inline]
    pub fn clamp(&self) -> ClampRange {
        self.clamp
    }

    pub fn set_clamp(&mut self, clamp: ClampRange) {
        self.clamp = clamp;
    }

    #[inline]
    pub fn is_flip(&self) -> bool {
        self.sigma < 0.0
    }

    /// Kernel built by the most recent [`filter`](Self::filter) call, if any.
    pub fn kernel(&self) -> Option<&GaussianKernel> {
        self.kernel.as_ref()
    }

    /// Blur `field` in place.
    ///
    /// No-op when sigma is zero or the field is empty. The kernel is built
    /// from `sigma²`, so flip mode blurs exactly as much as the positive
    /// sigma would. In flip mode the result is
    /// `clamp(original - blurred + half_range)`.
    pub fn filter(&mut self, field: &mut ImageF32) {
        if self.sigma == 0.0 || field.area() == 0 {
            return;
        }
        let (width, height) = (field.w, field.h);
        let size = field.area();
        let flip = self.is_flip();
        let sigma = self.sigma as f64;
        self.ensure_kernel(sigma * sigma, width.min(height));
        let Some(kernel) = self.kernel.as_ref() else {
            return;
        };
        let weights = kernel.weights();
        let clamp = self.clamp;

        if flip {
            self.original.clear();
            self.original.extend_from_slice(&field.data);
        }
        self.scratch.resize(size, 0.0);

        blur_pass(&field.data, &mut self.scratch, width, height, weights, clamp);
        blur_pass(&self.scratch, &mut field.data, height, width, weights, clamp);

        if flip {
            let half = clamp.half_range();
            for (dst, &orig) in field.data.iter_mut().zip(self.original.iter()) {
                *dst = clamp.apply(orig - *dst + half);
            }
        }
    }

    fn ensure_kernel(&mut self, sigma: f64, max_radius: usize) {
        let limit = max_radius.max(MIN_RADIUS_LIMIT);
        let stale = match &self.kernel {
            Some(k) => k.sigma() != sigma || k.radius_limit() != limit,
            None => true,
        };
        if stale {
            let kernel = GaussianKernel::build(sigma, max_radius);
            debug!(
                "GaussianBlur kernel rebuilt sigma={:.3} max_radius={} len={} mass={:.6}",
                sigma,
                max_radius,
                kernel.weights().len(),
                kernel.mass()
            );
            self.kernel = Some(kernel);
        }
    }
}

/// Convolve every row of `src` (`width × height`, row-major) with the mirrored
/// kernel and write the result transposed into `dst` (`height × width`).
///
/// Sample `(col, row)` of `src` lands at `dst[col * height + row]`. Rows wrap
/// toroidally, so the kernel may be wider than the row itself.
pub fn blur_pass(
    src: &[f32],
    dst: &mut [f32],
    width: usize,
    height: usize,
    weights: &[f32],
    clamp: ClampRange,
) {
    debug_assert_eq!(src.len(), width * height);
    debug_assert_eq!(dst.len(), width * height);
    if width == 0 || height == 0 {
        return;
    }

    let column = |(col, out): (usize, &mut [f32])| {
        for (row, dst_px) in out.iter_mut().enumerate() {
            let line = &src[row * width..(row + 1) * width];
            *dst_px = clamp.apply(convolve_at(line, col, weights));
        }
    };

    #[cfg(feature = "parallel")]
    {
        dst.par_chunks_mut(height).enumerate().for_each(column);
    }
    #[cfg(not(feature = "parallel"))]
    {
        dst.chunks_mut(height).enumerate().for_each(column);
    }
}

#[inline]
fn convolve_at(line: &[f32], col: usize, weights: &[f32]) -> f32 {
    let n = line.len() as isize;
    let c = col as isize;
    let mut sum = line[col] * weights[0];
    for (m, &w) in weights.iter().enumerate().skip(1) {
        let m = m as isize;
        let left = (c - m).rem_euclid(n) as usize;
        let right = (c + m).rem_euclid(n) as usize;
        sum += (line[left] + line[right]) * w;
    }
    sum
}
