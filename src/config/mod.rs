//! JSON configuration for the `noisegen` command-line tool.

pub mod noisegen;

pub use noisegen::{load_config, NoiseGenConfig};
