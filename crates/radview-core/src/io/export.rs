use std::path::Path;

use image::ImageFormat;

use crate::error::Result;
use crate::render::RenderedFrame;

/// Save a rendered frame as 8-bit grayscale PNG.
pub fn save_png(frame: &RenderedFrame, path: &Path) -> Result<()> {
    frame.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a rendered frame as 8-bit grayscale TIFF.
pub fn save_tiff(frame: &RenderedFrame, path: &Path) -> Result<()> {
    frame.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a rendered frame, choosing the format from the file extension.
/// Anything other than TIFF falls back to PNG.
pub fn save_frame(frame: &RenderedFrame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(frame, path),
        _ => save_png(frame, path),
    }
}
