//! Owned single-channel f32 field in row-major layout.
//!
//! This is the working buffer of the pipeline: the field source fills it,
//! the blur and the fine equalizer mutate it in place, and quantization reads
//! it back out.
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Field width in samples
    pub w: usize,
    /// Field height in samples
    pub h: usize,
    /// Samples in row-major order, `w * h` long
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Zero-initialized field of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, 0.0)
    }

    /// `w × h` field where every sample holds `value`.
    pub fn filled(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            data: vec![value; w * h],
        }
    }

    /// Wrap an existing row-major buffer. Panics if `data.len() != w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            w * h,
            "field buffer length must equal width * height"
        );
        Self { w, h, data }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn pixels(&self) -> &[f32] {
        &self.data
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn pixels_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
