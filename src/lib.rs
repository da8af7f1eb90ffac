#![doc = include_str!("../README.md")]

pub mod blur;
pub mod config;
pub mod diagnostics;
pub mod equalize;
pub mod image;
pub mod pipeline;
pub mod source;
pub mod tone;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::blur::{GaussianBlur, GaussianKernel};
pub use crate::diagnostics::RunReport;
pub use crate::equalize::{equalize_field, equalize_pixels, EqualizerKind};
pub use crate::pipeline::{Pipeline, PipelineConfig};
pub use crate::tone::{bias_gain, ToneCurve};
pub use crate::types::{ClampRange, SourceRange};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use noisegen::prelude::*;
///
/// let source = FnSource::new(SourceRange::Signed, |x, y| ((x ^ y) as f32 * 0.1).sin());
/// let mut pipeline = Pipeline::new(PipelineConfig {
///     width: 128,
///     height: 128,
///     blur_sigma: 1.8,
///     equalize: true,
///     ..Default::default()
/// });
/// let image = pipeline.run(&source);
/// println!("{}x{}", image.w, image.h);
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, RgbaImage};
    pub use crate::source::{FieldSource, FnSource};
    pub use crate::{ClampRange, Pipeline, PipelineConfig, SourceRange, ToneCurve};
}
