use ndarray::Array2;

/// Decoded grayscale samples for one loaded image plus its acquisition
/// metadata.
///
/// Owned by the session for the lifetime of one load and replaced wholesale
/// on the next; the samples are never mutated in place.
#[derive(Clone, Debug)]
pub struct SampleBuffer {
    /// Raw intensity samples, row-major, shape = (rows, columns).
    pub samples: Array2<u16>,
    /// Bits of sample precision used by the source (1..=16).
    pub bits_stored: u8,
    /// Photometric interpretation string, empty when the source has none.
    pub photometric_interpretation: String,
    /// Acquisition modality string, empty when the source has none.
    pub modality: String,
    /// Window center from the source metadata, 0 when absent.
    pub window_center: i32,
    /// Window width from the source metadata, 0 when absent.
    pub window_width: i32,
}

impl SampleBuffer {
    pub fn rows(&self) -> usize {
        self.samples.nrows()
    }

    pub fn columns(&self) -> usize {
        self.samples.ncols()
    }

    /// Largest value a sample may take at this precision.
    pub fn max_sample_value(&self) -> u16 {
        if self.bits_stored >= 16 {
            u16::MAX
        } else {
            (1u16 << self.bits_stored) - 1
        }
    }
}
