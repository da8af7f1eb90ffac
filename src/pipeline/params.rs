//! Parameters configuring one pipeline run.
//!
//! Defaults reproduce the plain noise tool: no blur, no equalization, linear
//! tone curve, `[0, 1]` clamping and no debug coloring.
use crate::equalize::EqualizerKind;
use crate::tone::ToneCurve;
use crate::types::ClampRange;

/// Immutable pipeline configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Output width in pixels.
    pub width: usize,
    /// Output height in pixels.
    pub height: usize,
    /// Blur strength. The kernel is built from `blur_sigma²`; zero disables
    /// the blur and a negative value selects flip (edge-enhancement) mode.
    pub blur_sigma: f32,
    /// Number of blur (+ equalize) rounds.
    pub iterations: usize,
    /// Enables histogram equalization.
    pub equalize: bool,
    /// Which equalizer runs when `equalize` is set.
    pub equalizer: EqualizerKind,
    /// Tone curve applied while acquiring the field.
    pub tone: ToneCurve,
    /// Range every blurred sample is clamped into.
    pub clamp: ClampRange,
    /// Draw out-of-range samples with sentinel colors instead of clamping.
    pub debug: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            blur_sigma: 0.0,
            iterations: 1,
            equalize: false,
            equalizer: EqualizerKind::Fine,
            tone: ToneCurve::default(),
            clamp: ClampRange::default(),
            debug: false,
        }
    }
}

impl PipelineConfig {
    /// Float-field equalization inside the refine loop.
    #[inline]
    pub fn equalize_field(&self) -> bool {
        self.equalize && self.equalizer == EqualizerKind::Fine
    }

    /// Pixel equalization after quantization.
    #[inline]
    pub fn equalize_pixels(&self) -> bool {
        self.equalize && self.equalizer == EqualizerKind::Coarse
    }

    /// Debug sentinels stay on with the float equalizer, which does not
    /// guarantee exact range closure, and are dropped with the pixel one.
    #[inline]
    pub fn marks_overflow(&self) -> bool {
        self.debug && !self.equalize_pixels()
    }
}
