use crate::equalize::EqualizerKind;
use crate::pipeline::PipelineConfig;
use crate::source::{CellularReturn, FractalMode, NoiseKind, NoiseSettings};
use crate::tone::ToneCurve;
use crate::types::ClampRange;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct NoiseGenConfig {
    #[serde(default = "default_extent")]
    pub width: usize,
    #[serde(default = "default_extent")]
    pub height: usize,
    #[serde(default)]
    pub noise: NoiseConfig,
    #[serde(default)]
    pub pipeline: PipelineSection,
    pub output: NoiseGenOutputConfig,
}

fn default_extent() -> usize {
    512
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// One of: simplex, smooth, perlin, cubic, value, cellular.
    #[serde(rename = "type")]
    pub noise_type: String,
    /// One of: none, fbm, ridged, pingpong.
    pub fractal: String,
    /// Cellular return type: value, distance, distance2, distance2add,
    /// distance2sub, distance2mul, distance2div.
    pub cellular: String,
    pub octaves: u32,
    pub frequency: f32,
    pub seed: i32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            noise_type: "simplex".to_string(),
            fractal: "fbm".to_string(),
            cellular: "value".to_string(),
            octaves: 3,
            frequency: 1.0 / 32.0,
            seed: 1337,
        }
    }
}

impl NoiseConfig {
    pub fn resolve(&self) -> NoiseSettings {
        NoiseSettings {
            kind: NoiseKind::parse(&self.noise_type),
            fractal: FractalMode::parse(&self.fractal),
            cellular: CellularReturn::parse(&self.cellular),
            octaves: self.octaves,
            frequency: self.frequency,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PipelineSection {
    /// Zero disables the blur; negative values select edge-enhancement.
    pub blur_sigma: f32,
    pub iterations: usize,
    pub equalize: bool,
    pub equalizer: EqualizerKind,
    /// Tone curve shape; must be non-negative, `1.0` is linear.
    pub curvature: f32,
    /// Tone curve turning point in `[0, 1]`.
    pub middle: f32,
    pub clamp_min: f32,
    pub clamp_max: f32,
    pub debug: bool,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            blur_sigma: 0.0,
            iterations: 1,
            equalize: false,
            equalizer: EqualizerKind::Fine,
            curvature: 1.0,
            middle: 0.5,
            clamp_min: 0.0,
            clamp_max: 1.0,
            debug: false,
        }
    }
}

impl PipelineSection {
    pub fn resolve(&self, width: usize, height: usize) -> Result<PipelineConfig, String> {
        if !self.curvature.is_finite() || self.curvature < 0.0 {
            return Err(format!("curvature must be non-negative, got {}", self.curvature));
        }
        if !(0.0..=1.0).contains(&self.middle) {
            return Err(format!("middle must lie in [0, 1], got {}", self.middle));
        }
        if !self.blur_sigma.is_finite() {
            return Err(format!("blur_sigma must be finite, got {}", self.blur_sigma));
        }
        Ok(PipelineConfig {
            width,
            height,
            blur_sigma: self.blur_sigma,
            iterations: self.iterations,
            equalize: self.equalize,
            equalizer: self.equalizer,
            tone: ToneCurve::new(self.curvature, self.middle),
            clamp: ClampRange::new(self.clamp_min, self.clamp_max),
            debug: self.debug,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct NoiseGenOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<NoiseGenConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<NoiseGenConfig, serde_json::Error> {
    serde_json::from_str(json)
}
