//! Read/write access shared by the dense row-major buffers of this crate.
use std::slice::{ChunksExact, ChunksExactMut};

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// All samples in row-major order; `len == width * height`.
    fn pixels(&self) -> &[Self::Pixel];

    #[inline]
    fn area(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    fn row(&self, y: usize) -> &[Self::Pixel] {
        let w = self.width();
        &self.pixels()[y * w..(y + 1) * w]
    }

    /// Row iterator; yields nothing for a zero-width buffer.
    fn rows(&self) -> ChunksExact<'_, Self::Pixel> {
        self.pixels().chunks_exact(self.width().max(1))
    }
}

pub trait ImageViewMut: ImageView {
    fn pixels_mut(&mut self) -> &mut [Self::Pixel];

    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel] {
        let w = self.width();
        &mut self.pixels_mut()[y * w..(y + 1) * w]
    }

    fn rows_mut(&mut self) -> ChunksExactMut<'_, Self::Pixel> {
        let w = self.width().max(1);
        self.pixels_mut().chunks_exact_mut(w)
    }
}
