//! Adaptive Gaussian kernel and toroidal separable blur.

pub mod kernel;
pub mod separable;

pub use kernel::GaussianKernel;
pub use separable::{blur_pass, GaussianBlur};
