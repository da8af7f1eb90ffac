//! Field sources feeding the pipeline.
//!
//! The pipeline only needs `sample(x, y)`; [`NoiseSource`] adapts
//! `fastnoise_lite` for the command-line tool, [`FnSource`] wraps closures and
//! an [`ImageF32`] replays a stored field.
use crate::image::ImageF32;
use crate::types::SourceRange;
use fastnoise_lite::{CellularReturnType, FastNoiseLite, FractalType, NoiseType};
use serde::{Deserialize, Serialize};

/// Deterministic scalar field over integer coordinates.
pub trait FieldSource {
    fn sample(&self, x: usize, y: usize) -> f32;

    /// Value convention of [`sample`](Self::sample).
    fn range(&self) -> SourceRange {
        SourceRange::Signed
    }
}

/// Closure-backed source.
pub struct FnSource<F> {
    f: F,
    range: SourceRange,
}

impl<F: Fn(usize, usize) -> f32> FnSource<F> {
    pub fn new(range: SourceRange, f: F) -> Self {
        Self { f, range }
    }
}

impl<F: Fn(usize, usize) -> f32> FieldSource for FnSource<F> {
    #[inline]
    fn sample(&self, x: usize, y: usize) -> f32 {
        (self.f)(x, y)
    }

    fn range(&self) -> SourceRange {
        self.range
    }
}

/// Replays a stored field; coordinates wrap toroidally. An empty field reads
/// as 0 everywhere.
impl FieldSource for ImageF32 {
    #[inline]
    fn sample(&self, x: usize, y: usize) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.get(x % self.w, y % self.h)
    }

    fn range(&self) -> SourceRange {
        SourceRange::Unit
    }
}

/// Noise algorithms offered by the command-line tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    Simplex,
    SmoothSimplex,
    Perlin,
    Cubic,
    Value,
    Cellular,
}

impl NoiseKind {
    /// Case-insensitive name lookup; unknown names fall back to simplex.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "perlin" => NoiseKind::Perlin,
            "cubic" => NoiseKind::Cubic,
            "value" => NoiseKind::Value,
            "cellular" => NoiseKind::Cellular,
            "smooth" | "simplex2s" | "smooth_simplex" => NoiseKind::SmoothSimplex,
            _ => NoiseKind::Simplex,
        }
    }

    fn to_fastnoise(self) -> NoiseType {
        match self {
            NoiseKind::Simplex => NoiseType::OpenSimplex2,
            NoiseKind::SmoothSimplex => NoiseType::OpenSimplex2S,
            NoiseKind::Perlin => NoiseType::Perlin,
            NoiseKind::Cubic => NoiseType::ValueCubic,
            NoiseKind::Value => NoiseType::Value,
            NoiseKind::Cellular => NoiseType::Cellular,
        }
    }
}

/// Octave combination mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalMode {
    None,
    Fbm,
    Ridged,
    PingPong,
}

impl FractalMode {
    /// Case-insensitive name lookup; unknown names fall back to fBm.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "none" => FractalMode::None,
            "ridged" => FractalMode::Ridged,
            "pingpong" | "ping_pong" => FractalMode::PingPong,
            _ => FractalMode::Fbm,
        }
    }

    fn to_fastnoise(self) -> FractalType {
        match self {
            FractalMode::None => FractalType::None,
            FractalMode::Fbm => FractalType::FBm,
            FractalMode::Ridged => FractalType::Ridged,
            FractalMode::PingPong => FractalType::PingPong,
        }
    }
}

/// What cellular noise returns per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellularReturn {
    CellValue,
    Distance,
    Distance2,
    Distance2Add,
    Distance2Sub,
    Distance2Mul,
    Distance2Div,
}

impl CellularReturn {
    /// Case-insensitive name lookup; unknown names fall back to cell value.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "distance" => CellularReturn::Distance,
            "distance2" => CellularReturn::Distance2,
            "distance2add" => CellularReturn::Distance2Add,
            "distance2sub" => CellularReturn::Distance2Sub,
            "distance2mul" => CellularReturn::Distance2Mul,
            "distance2div" => CellularReturn::Distance2Div,
            _ => CellularReturn::CellValue,
        }
    }

    fn to_fastnoise(self) -> CellularReturnType {
        match self {
            CellularReturn::CellValue => CellularReturnType::CellValue,
            CellularReturn::Distance => CellularReturnType::Distance,
            CellularReturn::Distance2 => CellularReturnType::Distance2,
            CellularReturn::Distance2Add => CellularReturnType::Distance2Add,
            CellularReturn::Distance2Sub => CellularReturnType::Distance2Sub,
            CellularReturn::Distance2Mul => CellularReturnType::Distance2Mul,
            CellularReturn::Distance2Div => CellularReturnType::Distance2Div,
        }
    }
}

/// Noise generator settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseSettings {
    pub kind: NoiseKind,
    pub fractal: FractalMode,
    pub cellular: CellularReturn,
    pub octaves: u32,
    pub frequency: f32,
    pub seed: i32,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            kind: NoiseKind::Simplex,
            fractal: FractalMode::Fbm,
            cellular: CellularReturn::CellValue,
            octaves: 3,
            frequency: 1.0 / 32.0,
            seed: 1337,
        }
    }
}

/// `fastnoise_lite` generator sampled at integer pixel coordinates.
pub struct NoiseSource {
    settings: NoiseSettings,
    noise: FastNoiseLite,
}

impl NoiseSource {
    pub fn new(settings: NoiseSettings) -> Self {
        let mut noise = FastNoiseLite::new();
        noise.set_seed(Some(settings.seed));
        noise.set_frequency(Some(settings.frequency));
        noise.set_noise_type(Some(settings.kind.to_fastnoise()));
        noise.set_fractal_type(Some(settings.fractal.to_fastnoise()));
        noise.set_fractal_octaves(Some(settings.octaves.max(1) as i32));
        noise.set_cellular_return_type(Some(settings.cellular.to_fastnoise()));
        Self { settings, noise }
    }

    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }
}

impl FieldSource for NoiseSource {
    #[inline]
    fn sample(&self, x: usize, y: usize) -> f32 {
        self.noise.get_noise_2d(x as f32, y as f32)
    }
}
