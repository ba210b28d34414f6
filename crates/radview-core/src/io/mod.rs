pub mod dicom;
pub mod export;

pub use dicom::{Decoder, DicomFileDecoder};
