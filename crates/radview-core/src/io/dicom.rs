use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use dicom_object::{open_file, DefaultDicomObject};
use ndarray::Array2;
use tracing::debug;

use crate::buffer::SampleBuffer;
use crate::consts::MAX_BITS_STORED;
use crate::error::{RadviewError, Result};

/// Source image decoding, consumed at the session boundary.
pub trait Decoder {
    /// Decode the file at `path` into a sample buffer with its metadata.
    fn decode(&self, path: &Path) -> Result<SampleBuffer>;
}

/// Decoder for DICOM files with native (uncompressed) grayscale pixel data.
///
/// Window metadata is optional in the source; absent center/width read as 0
/// and the session applies its own fallback. Multi-frame objects contribute
/// their first frame only.
#[derive(Clone, Copy, Debug, Default)]
pub struct DicomFileDecoder;

impl Decoder for DicomFileDecoder {
    fn decode(&self, path: &Path) -> Result<SampleBuffer> {
        let obj = open_file(path).map_err(|e| RadviewError::Decode(e.to_string()))?;

        let rows = require_u16(&obj, "Rows")?;
        let columns = require_u16(&obj, "Columns")?;
        if rows == 0 || columns == 0 {
            return Err(RadviewError::InvalidDimensions {
                rows: u32::from(rows),
                columns: u32::from(columns),
            });
        }

        let bits_allocated = require_u16(&obj, "BitsAllocated")?;
        let bits_stored = require_u16(&obj, "BitsStored")?;
        if !(1..=u16::from(MAX_BITS_STORED)).contains(&bits_stored) {
            return Err(RadviewError::Decode(format!(
                "unsupported BitsStored {bits_stored}"
            )));
        }

        let samples_per_pixel = optional_u16(&obj, "SamplesPerPixel").unwrap_or(1);
        if samples_per_pixel != 1 {
            return Err(RadviewError::Decode(format!(
                "unsupported SamplesPerPixel {samples_per_pixel}; only grayscale is handled"
            )));
        }

        let pixel_representation = optional_u16(&obj, "PixelRepresentation").unwrap_or(0);
        if pixel_representation != 0 {
            return Err(RadviewError::Decode(
                "signed sample representation is not supported".into(),
            ));
        }

        let photometric_interpretation = optional_string(&obj, "PhotometricInterpretation");
        let modality = optional_string(&obj, "Modality");
        let window_center = optional_f64(&obj, "WindowCenter").unwrap_or(0.0) as i32;
        let window_width = optional_f64(&obj, "WindowWidth").unwrap_or(0.0) as i32;

        let pixel_data = obj
            .element_by_name("PixelData")
            .map_err(|_| RadviewError::MissingPixelData)?;
        let bytes = pixel_data
            .to_bytes()
            .map_err(|_| RadviewError::MissingPixelData)?;

        let samples = samples_from_bytes(
            &bytes,
            usize::from(rows),
            usize::from(columns),
            bits_allocated,
            bits_stored as u8,
        )?;

        debug!(rows, columns, bits_stored, "Decoded DICOM object");

        Ok(SampleBuffer {
            samples,
            bits_stored: bits_stored as u8,
            photometric_interpretation,
            modality,
            window_center,
            window_width,
        })
    }
}

/// Convert little-endian raw pixel data into row-major samples.
///
/// Only the first `rows * columns` pixels are consumed, so a multi-frame
/// buffer yields its first frame. Values are masked to `bits_stored` to drop
/// padding bits above the stored precision.
pub fn samples_from_bytes(
    bytes: &[u8],
    rows: usize,
    columns: usize,
    bits_allocated: u16,
    bits_stored: u8,
) -> Result<Array2<u16>> {
    let pixel_count = rows * columns;
    let mask = if bits_stored >= 16 {
        u16::MAX
    } else {
        (1u16 << bits_stored) - 1
    };

    let samples: Vec<u16> = match bits_allocated {
        8 => {
            if bytes.len() < pixel_count {
                return Err(RadviewError::MissingPixelData);
            }
            bytes[..pixel_count]
                .iter()
                .map(|&b| u16::from(b) & mask)
                .collect()
        }
        16 => {
            let byte_count = pixel_count * 2;
            if bytes.len() < byte_count {
                return Err(RadviewError::MissingPixelData);
            }
            let mut raw = vec![0u16; pixel_count];
            LittleEndian::read_u16_into(&bytes[..byte_count], &mut raw);
            raw.into_iter().map(|s| s & mask).collect()
        }
        other => {
            return Err(RadviewError::Decode(format!(
                "unsupported BitsAllocated {other}"
            )));
        }
    };

    Array2::from_shape_vec((rows, columns), samples)
        .map_err(|e| RadviewError::Decode(e.to_string()))
}

fn require_u16(obj: &DefaultDicomObject, name: &str) -> Result<u16> {
    obj.element_by_name(name)
        .map_err(|e| RadviewError::Decode(format!("missing {name}: {e}")))?
        .to_int::<u16>()
        .map_err(|e| RadviewError::Decode(format!("invalid {name}: {e}")))
}

fn optional_u16(obj: &DefaultDicomObject, name: &str) -> Option<u16> {
    obj.element_by_name(name).ok()?.to_int::<u16>().ok()
}

fn optional_f64(obj: &DefaultDicomObject, name: &str) -> Option<f64> {
    obj.element_by_name(name).ok()?.to_float64().ok()
}

/// String attribute with DICOM space padding stripped; empty when absent.
fn optional_string(obj: &DefaultDicomObject, name: &str) -> String {
    obj.element_by_name(name)
        .ok()
        .and_then(|e| e.to_str().ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
