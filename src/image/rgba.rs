//! Owned 8-bit RGBA pixel buffer produced by quantization.
//!
//! Regular output pixels are gray (`[v, v, v, 255]`); debug mode additionally
//! emits the two sentinel colors below for samples that quantize out of range.
use super::traits::{ImageView, ImageViewMut};

/// A single RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Sentinel for samples that quantize above 255 in debug mode.
pub const OVER_RANGE: Rgba8 = [255, 0, 0, 255];
/// Sentinel for samples that quantize below 0 in debug mode.
pub const UNDER_RANGE: Rgba8 = [0, 0, 255, 255];

/// Opaque gray pixel with `level` replicated into all three color channels.
#[inline]
pub const fn gray(level: u8) -> Rgba8 {
    [level, level, level, 255]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    pub w: usize,
    pub h: usize,
    pub data: Vec<Rgba8>,
}

impl RgbaImage {
    /// Fully transparent black buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![[0; 4]; w * h],
        }
    }

    /// Wrap existing pixels. Panics if `data.len() != w * h`.
    pub fn from_pixels(w: usize, h: usize, data: Vec<Rgba8>) -> Self {
        assert_eq!(
            data.len(),
            w * h,
            "pixel buffer length must equal width * height"
        );
        Self { w, h, data }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Rgba8) {
        self.data[y * self.w + x] = px;
    }

    /// Flatten into interleaved RGBA bytes.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.iter().copied()).collect()
    }
}

impl ImageView for RgbaImage {
    type Pixel = Rgba8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn pixels(&self) -> &[Rgba8] {
        &self.data
    }
}

impl ImageViewMut for RgbaImage {
    #[inline]
    fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.data
    }
}
