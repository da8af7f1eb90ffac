//! Pipeline driving one field from source to display pixels.
//!
//! Typical usage:
//! ```no_run
//! use noisegen::{Pipeline, PipelineConfig};
//! use noisegen::source::{NoiseSettings, NoiseSource};
//!
//! let mut pipeline = Pipeline::new(PipelineConfig {
//!     blur_sigma: 2.5,
//!     equalize: true,
//!     ..Default::default()
//! });
//! let image = pipeline.run(&NoiseSource::new(NoiseSettings::default()));
//! assert_eq!(image.w, 512);
//! ```
use super::params::PipelineConfig;
use super::quantize::quantize_field;
use crate::blur::GaussianBlur;
use crate::diagnostics::{
    elapsed_ms, FieldStats, InputDescriptor, QuantizeStats, RunReport, Stage, TimingBreakdown,
};
use crate::equalize::{equalize_field, equalize_pixels};
use crate::image::traits::ImageViewMut;
use crate::image::{ImageF32, RgbaImage};
use crate::source::FieldSource;
use log::debug;
use std::time::Instant;

/// Stateful orchestrator: immutable configuration plus the blur with its
/// lazily rebuilt kernel and scratch buffers.
pub struct Pipeline {
    config: PipelineConfig,
    blur: GaussianBlur,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let blur = GaussianBlur::new(config.blur_sigma, config.clamp);
        Self { config, blur }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Blur state, including the kernel cached by the last refine.
    pub fn blur(&self) -> &GaussianBlur {
        &self.blur
    }

    /// Sample `source` over the configured extent, shift to `[0, 1]` according
    /// to its range convention and apply the tone curve unless it is linear.
    pub fn acquire<S: FieldSource + ?Sized>(&self, source: &S) -> ImageF32 {
        let (w, h) = (self.config.width, self.config.height);
        let mut field = ImageF32::new(w, h);
        let range = source.range();
        let tone = self.config.tone;
        let shaped = !tone.is_identity();
        for (y, row) in field.rows_mut().enumerate() {
            for (x, dst) in row.iter_mut().enumerate() {
                let unit = range.to_unit(source.sample(x, y));
                *dst = if shaped { tone.apply(unit) } else { unit };
            }
        }
        field
    }

    /// Run the blur/equalize rounds on `field` in place.
    ///
    /// With a non-zero sigma, `iterations` rounds of {blur, fine equalize}
    /// run. With a zero sigma the fine equalizer, when enabled, runs once.
    pub fn refine(&mut self, field: &mut ImageF32) {
        let equalize = self.config.equalize_field();
        if self.config.blur_sigma != 0.0 {
            for round in 0..self.config.iterations {
                debug!("Pipeline::refine round={} sigma={}", round, self.config.blur_sigma);
                self.blur.filter(field);
                if equalize {
                    equalize_field(field);
                }
            }
        } else if equalize {
            equalize_field(field);
        }
    }

    /// Quantize `field` to pixels, then equalize them when the pixel
    /// equalizer is selected.
    pub fn render(&self, field: &ImageF32) -> (RgbaImage, QuantizeStats) {
        let (mut image, stats) = quantize_field(field, self.config.marks_overflow());
        if self.config.equalize_pixels() {
            equalize_pixels(&mut image);
        }
        (image, stats)
    }

    /// Acquire, refine and render in one go.
    pub fn run<S: FieldSource + ?Sized>(&mut self, source: &S) -> RgbaImage {
        self.run_with_report(source).0
    }

    /// Like [`run`](Self::run), also returning timings and field statistics.
    pub fn run_with_report<S: FieldSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> (RgbaImage, RunReport) {
        let cfg = &self.config;
        debug!(
            "Pipeline::run start w={} h={} sigma={} iterations={} equalize={} debug={}",
            cfg.width, cfg.height, cfg.blur_sigma, cfg.iterations, cfg.equalize, cfg.debug
        );
        let input = InputDescriptor {
            width: cfg.width,
            height: cfg.height,
            blur_sigma: cfg.blur_sigma,
            iterations: cfg.iterations,
            equalizer: cfg.equalize.then_some(cfg.equalizer),
            debug: cfg.debug,
        };
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let mut field = timings.time(Stage::Acquire, || self.acquire(source));
        let acquired = FieldStats::from_field(&field);

        timings.time(Stage::Refine, || self.refine(&mut field));
        let refined = FieldStats::from_field(&field);

        let (image, quantize) = timings.time(Stage::Render, || self.render(&field));

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "Pipeline::run done total_ms={:.3} over={} under={} nan={}",
            timings.total_ms, quantize.over_range, quantize.under_range, quantize.not_a_number
        );

        let report = RunReport {
            input,
            timings,
            acquired,
            refined,
            kernel_len: self.blur.kernel().map(|k| k.weights().len()),
            quantize,
        };
        (image, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equalize::EqualizerKind;
    use crate::image::{gray, OVER_RANGE, UNDER_RANGE};
    use crate::source::FnSource;
    use crate::tone::ToneCurve;
    use crate::types::SourceRange;

    fn config(w: usize, h: usize) -> PipelineConfig {
        PipelineConfig {
            width: w,
            height: h,
            ..Default::default()
        }
    }

    #[test]
    fn flat_field_without_blur_or_equalize_is_unchanged() {
        let mut pipeline = Pipeline::new(config(4, 4));
        let source = FnSource::new(SourceRange::Unit, |_, _| 0.5);
        let mut field = pipeline.acquire(&source);
        pipeline.refine(&mut field);
        assert_eq!(field.data, vec![0.5; 16]);
        assert!(pipeline.blur().kernel().is_none());
    }

    #[test]
    fn signed_source_is_shifted_to_unit_range() {
        let pipeline = Pipeline::new(config(2, 1));
        let source = FnSource::new(SourceRange::Signed, |x, _| if x == 0 { -1.0 } else { 1.0 });
        let field = pipeline.acquire(&source);
        assert_eq!(field.data, vec![0.0, 1.0]);
    }

    #[test]
    fn tone_curve_is_applied_after_shift() {
        let tone = ToneCurve::new(3.0, 0.5);
        let pipeline = Pipeline::new(PipelineConfig {
            tone,
            ..config(3, 1)
        });
        let source = FnSource::new(SourceRange::Signed, |x, _| x as f32 * 0.5 - 0.5);
        let field = pipeline.acquire(&source);
        let expected: Vec<f32> = [0.25, 0.5, 0.75].iter().map(|&u| tone.apply(u)).collect();
        assert_eq!(field.data, expected);
    }

    #[test]
    fn flat_tone_curve_keeps_white_white() {
        let pipeline = Pipeline::new(PipelineConfig {
            tone: ToneCurve::new(0.0, 0.0),
            debug: true,
            ..config(2, 1)
        });
        let source = FnSource::new(SourceRange::Unit, |x, _| x as f32);
        let field = pipeline.acquire(&source);
        assert_eq!(field.data, vec![0.0, 1.0]);
        let (img, stats) = pipeline.render(&field);
        assert_eq!(img.data, vec![gray(0), gray(255)]);
        assert_eq!(stats.not_a_number, 0);
    }

    #[test]
    fn zero_iterations_leave_field_untouched_even_with_equalize() {
        let mut pipeline = Pipeline::new(PipelineConfig {
            blur_sigma: 2.0,
            iterations: 0,
            equalize: true,
            ..config(8, 8)
        });
        let source = FnSource::new(SourceRange::Unit, |x, y| ((x + y) % 5) as f32 / 4.0);
        let mut field = pipeline.acquire(&source);
        let before = field.clone();
        pipeline.refine(&mut field);
        assert_eq!(field, before);
    }

    #[test]
    fn zero_sigma_with_equalize_equalizes_once() {
        let mut pipeline = Pipeline::new(PipelineConfig {
            equalize: true,
            iterations: 5,
            ..config(2, 2)
        });
        let source = FnSource::new(SourceRange::Unit, |_, y| y as f32);
        let mut field = pipeline.acquire(&source);
        pipeline.refine(&mut field);
        // Lower half sits at cumulative 2/4, upper half at 4/4.
        assert!((field.data[0] - 0.5).abs() < 1e-6, "{:?}", field.data);
        assert_eq!(field.data[3], 1.0);
        assert!(pipeline.blur().kernel().is_none());
    }

    #[test]
    fn debug_sentinels_are_dropped_only_for_pixel_equalizer() {
        let source = FnSource::new(SourceRange::Unit, |x, _| if x == 0 { 1.5 } else { -0.5 });

        let plain = Pipeline::new(PipelineConfig {
            debug: true,
            ..config(2, 1)
        });
        let field = plain.acquire(&source);
        let (img, stats) = plain.render(&field);
        assert_eq!(img.data, vec![OVER_RANGE, UNDER_RANGE]);
        assert_eq!((stats.over_range, stats.under_range), (1, 1));

        let fine = Pipeline::new(PipelineConfig {
            debug: true,
            equalize: true,
            equalizer: EqualizerKind::Fine,
            ..config(2, 1)
        });
        assert!(fine.config().marks_overflow());
        let (img, stats) = fine.render(&field);
        assert_eq!(img.data, vec![OVER_RANGE, UNDER_RANGE]);
        assert_eq!((stats.over_range, stats.under_range), (1, 1));

        let coarse = Pipeline::new(PipelineConfig {
            debug: true,
            equalize: true,
            equalizer: EqualizerKind::Coarse,
            ..config(2, 1)
        });
        assert!(!coarse.config().marks_overflow());
        let (img, stats) = coarse.render(&field);
        assert_eq!(stats.over_range + stats.under_range, 0);
        assert_eq!(img.data, vec![gray(255), gray(127)]);
    }

    #[test]
    fn report_tracks_kernel_and_stages() {
        let mut pipeline = Pipeline::new(PipelineConfig {
            blur_sigma: 1.8,
            iterations: 2,
            ..config(16, 16)
        });
        let source = FnSource::new(SourceRange::Unit, |x, y| ((x * 3 + y) % 7) as f32 / 6.0);
        let (image, report) = pipeline.run_with_report(&source);
        assert_eq!((image.w, image.h), (16, 16));
        // Kernel sigma 1.8² = 3.24: ceil(3.24 * 3.5255) + 1 taps.
        assert_eq!(report.kernel_len, Some(13));
        let stages: Vec<Stage> = report.timings.stages.iter().map(|t| t.stage).collect();
        assert_eq!(stages, vec![Stage::Acquire, Stage::Refine, Stage::Render]);
        assert!(report.refined.max - report.refined.min < report.acquired.max - report.acquired.min);
    }
}
