use super::{FieldStats, TimingBreakdown};
use crate::equalize::EqualizerKind;
use serde::Serialize;

/// Result produced by [`Pipeline::run_with_report`](crate::Pipeline).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub acquired: FieldStats,
    pub refined: FieldStats,
    /// Number of weights in the blur kernel, when a blur ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_len: Option<usize>,
    pub quantize: QuantizeStats,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub blur_sigma: f32,
    pub iterations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equalizer: Option<EqualizerKind>,
    pub debug: bool,
}

/// Outcome of quantizing the field to 8-bit pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantizeStats {
    /// Samples drawn with the over-range sentinel.
    pub over_range: usize,
    /// Samples drawn with the under-range sentinel.
    pub under_range: usize,
    /// Samples clamped into `[0, 255]` without being marked.
    pub clamped: usize,
    /// NaN samples; drawn with the under-range sentinel in debug mode.
    pub not_a_number: usize,
}
