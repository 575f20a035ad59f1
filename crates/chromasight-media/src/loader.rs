//! Upload validation and conversion between encoded images and `RgbaBuffer`.

use std::io::Cursor;
use std::path::Path;

use chromasight_core::CoreError;
use chromasight_core::image::RgbaBuffer;
use image::{ImageFormat, RgbaImage};

use crate::error::MediaError;

/// Encoded formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Png,
    Jpeg,
}

impl UploadFormat {
    /// Map a MIME type to an accepted format.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Check an upload's declared type and size before decoding anything.
pub fn validate_upload(mime: &str, size: u64, limit: u64) -> Result<UploadFormat, MediaError> {
    let Some(format) = UploadFormat::from_mime(mime) else {
        tracing::warn!(mime, "rejected upload with unsupported type");
        return Err(MediaError::UnsupportedType(mime.to_string()));
    };
    if size > limit {
        tracing::warn!(size, limit, "rejected oversized upload");
        return Err(MediaError::FileTooLarge { size, limit });
    }
    Ok(format)
}

/// Decode PNG or JPEG bytes to RGBA8. The format is sniffed from the
/// content, so a declared MIME type only gates the upload.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaBuffer, MediaError> {
    let format = sniff_format(bytes)?;
    let img = image::load_from_memory_with_format(bytes, format.image_format())
        .map_err(MediaError::Decode)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, ?format, "decoded image");
    Ok(RgbaBuffer::new(width, height, rgba.into_raw())?)
}

/// Load an image from disk.
pub fn load_image(path: &Path) -> Result<RgbaBuffer, MediaError> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

fn sniff_format(bytes: &[u8]) -> Result<UploadFormat, MediaError> {
    match image::guess_format(bytes).map_err(MediaError::Decode)? {
        ImageFormat::Png => Ok(UploadFormat::Png),
        ImageFormat::Jpeg => Ok(UploadFormat::Jpeg),
        other => Err(MediaError::UnsupportedType(format!("{other:?}"))),
    }
}

/// Encode a buffer as PNG.
pub fn encode_png(buffer: &RgbaBuffer) -> Result<Vec<u8>, MediaError> {
    let img = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec())
        .ok_or_else(|| CoreError::InvalidImageBuffer {
            width: buffer.width(),
            height: buffer.height(),
            len: buffer.as_bytes().len(),
        })?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(MediaError::Encode)?;
    Ok(out.into_inner())
}
