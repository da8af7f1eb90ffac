//! Generalized bias/gain tone curve over `[0, 1]`.
//!
//! `shape == 1` is the identity. Larger shapes flatten the curve near both
//! ends and steepen it around `turning` (smoothstep-like); shapes below 1 do
//! the opposite, taking off and landing steeply (square-root/square-like).
use serde::{Deserialize, Serialize};

/// Evaluate the curve at `x`.
///
/// The two rational branches (`x < turning` and `x >= turning`) are selected
/// with the sign bit of `turning - x` instead of a conditional: `f` is `0` on
/// the lower branch and `-1` on the upper one, `n` is `1` or `-1`
/// respectively. `f32::MIN_POSITIVE` is added last to the denominator, so a
/// branch whose denominator cancels to exactly zero (`x == turning == 0`, or
/// `x == 1` with `shape == 0`) divides a zero numerator by a tiny positive
/// number instead of producing `0 / 0`.
#[inline]
pub fn bias_gain(x: f32, shape: f32, turning: f32) -> f32 {
    let d = turning - x;
    let sign = (d.to_bits() as i32) >> 31;
    let f = sign as f32;
    let n = (sign | 1) as f32;
    ((turning * n - f) * (x + f)) / ((x + shape * d) * n - f + f32::MIN_POSITIVE) - f
}

/// Tone curve parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToneCurve {
    /// Steepness, `>= 0`; `1` is linear.
    pub shape: f32,
    /// Point in `[0, 1]` where the curve switches branches.
    pub turning: f32,
}

impl Default for ToneCurve {
    fn default() -> Self {
        Self {
            shape: 1.0,
            turning: 0.5,
        }
    }
}

impl ToneCurve {
    pub const fn new(shape: f32, turning: f32) -> Self {
        Self { shape, turning }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.shape == 1.0
    }

    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        bias_gain(x, self.shape, self.turning)
    }

    pub fn apply_slice(&self, values: &mut [f32]) {
        for v in values.iter_mut() {
            *v = self.apply(*v);
        }
    }
}
