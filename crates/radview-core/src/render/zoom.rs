use image::imageops::{self, FilterType};
use image::GrayImage;

/// Scale a composited frame by a single zoom factor on both axes.
///
/// Output dimensions are floored (and kept at least 1x1) so repeated renders
/// at the same factor are identical. Resampling uses a triangle (bilinear)
/// filter rather than nearest-neighbour.
pub fn scale_frame(frame: &GrayImage, zoom_factor: f64) -> GrayImage {
    if (zoom_factor - 1.0).abs() < f64::EPSILON {
        return frame.clone();
    }

    let width = ((f64::from(frame.width()) * zoom_factor).floor() as u32).max(1);
    let height = ((f64::from(frame.height()) * zoom_factor).floor() as u32).max(1);
    imageops::resize(frame, width, height, FilterType::Triangle)
}
