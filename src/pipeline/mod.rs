//! Field post-processing pipeline.
//!
//! Stages, in order:
//! - acquire: sample the [`FieldSource`](crate::source::FieldSource), shift to
//!   `[0, 1]` and optionally apply the tone curve;
//! - refine: `iterations` rounds of toroidal blur, each optionally followed by
//!   1024-level equalization;
//! - render: quantize to 8-bit gray, marking out-of-range samples in debug
//!   mode, then optionally run the 256-level pixel equalizer.
//!
//! Modules
//! - [`params`] – [`PipelineConfig`] and the derived stage switches.
//! - [`quantize`] – float → RGBA8 conversion with debug sentinels.
//! - `runner` – the [`Pipeline`] itself.

pub mod params;
pub mod quantize;
mod runner;

pub use params::PipelineConfig;
pub use quantize::{quantize_field, LEVEL_SCALE};
pub use runner::Pipeline;
