//! Errors from upload validation, decoding, and the simulator session.

use chromasight_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("file is {size} bytes, larger than the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("unsupported file type: {0} (expected PNG or JPEG)")]
    UnsupportedType(String),
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("no image has been uploaded")]
    NoImage,
    #[error("no deficiency kind has been selected")]
    NoDeficiencySelected,
}
