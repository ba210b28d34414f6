use image::GrayImage;
use rayon::prelude::*;

use crate::buffer::SampleBuffer;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Map raw samples to an 8-bit frame with the linear VOI windowing transform.
///
/// Samples at or below `level - width/2` render black, samples at or above
/// `level + width/2` render white, values in between map linearly. A
/// non-positive `width` falls back to min-max windowing over the actual
/// sample range, so missing window metadata still yields a usable image.
///
/// The output is a fresh allocation; the input buffer is never touched. A
/// window that saturates the whole frame is valid output, not an error.
pub fn apply_window(buffer: &SampleBuffer, level: i32, width: i32) -> GrayImage {
    let (low, span) = if width > 0 {
        (f64::from(level) - f64::from(width) / 2.0, f64::from(width))
    } else {
        min_max_range(buffer)
    };
    render_linear(buffer, low, span)
}

/// Windowing range derived from the buffer's actual minimum and maximum.
/// A uniform buffer collapses to a zero span.
fn min_max_range(buffer: &SampleBuffer) -> (f64, f64) {
    let mut min = u16::MAX;
    let mut max = u16::MIN;
    for &sample in buffer.samples.iter() {
        min = min.min(sample);
        max = max.max(sample);
    }
    if max > min {
        (f64::from(min), f64::from(max - min))
    } else {
        (f64::from(min), 0.0)
    }
}

fn render_linear(buffer: &SampleBuffer, low: f64, span: f64) -> GrayImage {
    let (rows, columns) = buffer.samples.dim();
    let mut shades = vec![0u8; rows * columns];

    if rows * columns >= PARALLEL_PIXEL_THRESHOLD {
        shades
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(|(row, out_row)| {
                for (col, shade) in out_row.iter_mut().enumerate() {
                    *shade = map_sample(buffer.samples[[row, col]], low, span);
                }
            });
    } else {
        for (shade, &sample) in shades.iter_mut().zip(buffer.samples.iter()) {
            *shade = map_sample(sample, low, span);
        }
    }

    GrayImage::from_raw(columns as u32, rows as u32, shades)
        .expect("shade buffer matches frame dimensions")
}

/// Map one raw sample into [0, 255]. A zero span is a degenerate range;
/// everything maps to 0.
fn map_sample(sample: u16, low: f64, span: f64) -> u8 {
    if span <= 0.0 {
        return 0;
    }
    let scaled = (f64::from(sample) - low) / span * 255.0;
    scaled.round().clamp(0.0, 255.0) as u8
}
