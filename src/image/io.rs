//! I/O helpers for the pipeline output and JSON reports.
//!
//! - `save_rgba_png`: write the quantized `RgbaImage` to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbaImage;
use ::image::{ImageBuffer, Rgba};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save a quantized pixel buffer to a PNG.
pub fn save_rgba_png(buffer: &RgbaImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.w as u32, buffer.h as u32, buffer.to_raw())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
