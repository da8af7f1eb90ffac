use serde::{Deserialize, Serialize};

/// Inclusive value range applied to every blurred sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClampRange {
    pub min: f32,
    pub max: f32,
}

impl Default for ClampRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl ClampRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Midpoint offset used by the flip recombination.
    #[inline]
    pub fn half_range(&self) -> f32 {
        (self.max - self.min) * 0.5
    }

    /// `min(max(v, min), max)`; unlike `f32::clamp` this never panics when
    /// `min > max`.
    #[inline]
    pub fn apply(&self, v: f32) -> f32 {
        v.max(self.min).min(self.max)
    }
}

/// Value convention of a field source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRange {
    /// Samples lie in `[-1, 1]` and are shifted with `s * 0.5 + 0.5`.
    #[default]
    Signed,
    /// Samples already lie in `[0, 1]`.
    Unit,
}

impl SourceRange {
    #[inline]
    pub fn to_unit(self, sample: f32) -> f32 {
        match self {
            SourceRange::Signed => sample * 0.5 + 0.5,
            SourceRange::Unit => sample,
        }
    }
}
