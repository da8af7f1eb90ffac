//! Serializable run diagnostics: stage timings, field statistics before and
//! after refinement, and quantization overflow counts.

pub mod field;
pub mod run;
pub mod timing;

pub use field::FieldStats;
pub use run::{InputDescriptor, QuantizeStats, RunReport};
pub use timing::{elapsed_ms, Stage, StageTiming, TimingBreakdown};
