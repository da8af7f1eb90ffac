use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Pipeline stages that are timed separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Sampling the source, range shift and tone curve.
    Acquire,
    /// Blur and float equalization rounds.
    Refine,
    /// Quantization plus pixel equalization.
    Render,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: Stage,
    pub elapsed_ms: f64,
}

/// Wall-clock cost of one `run_with_report` call, stage by stage.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Run `f`, recording its duration under `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.stages.push(StageTiming {
            stage,
            elapsed_ms: elapsed_ms(start),
        });
        out
    }

    /// Milliseconds recorded for `stage`, summed over repeated entries.
    pub fn stage_ms(&self, stage: Stage) -> Option<f64> {
        self.stages
            .iter()
            .filter(|t| t.stage == stage)
            .map(|t| t.elapsed_ms)
            .reduce(|a, b| a + b)
    }
}

#[inline]
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
