use ndarray::Array2;
use radview_core::buffer::SampleBuffer;

/// Buffer filled with a single sample value.
#[allow(dead_code)]
pub fn uniform_buffer(rows: usize, columns: usize, fill: u16, bits_stored: u8) -> SampleBuffer {
    SampleBuffer {
        samples: Array2::from_elem((rows, columns), fill),
        bits_stored,
        photometric_interpretation: "MONOCHROME2".to_string(),
        modality: "CT".to_string(),
        window_center: 0,
        window_width: 0,
    }
}

/// Buffer whose samples increase row-major from 0, capped at the precision
/// limit.
#[allow(dead_code)]
pub fn ramp_buffer(rows: usize, columns: usize, bits_stored: u8) -> SampleBuffer {
    let cap: u16 = if bits_stored >= 16 {
        u16::MAX
    } else {
        (1u16 << bits_stored) - 1
    };
    let samples = Array2::from_shape_fn((rows, columns), |(row, col)| {
        ((row * columns + col).min(usize::from(cap))) as u16
    });

    SampleBuffer {
        samples,
        bits_stored,
        photometric_interpretation: "MONOCHROME2".to_string(),
        modality: "CT".to_string(),
        window_center: 0,
        window_width: 0,
    }
}
