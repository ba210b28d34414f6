use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode source image: {0}")]
    Decode(String),

    #[error("Decoded object carries no usable pixel data")]
    MissingPixelData,

    #[error("Invalid image dimensions: {columns}x{rows}")]
    InvalidDimensions { rows: u32, columns: u32 },

    #[error("{operation} called before any image was loaded")]
    InvalidState { operation: &'static str },

    #[error("Invalid preset file: {0}")]
    InvalidPreset(String),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RadviewError>;
