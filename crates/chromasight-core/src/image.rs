//! Image representation for the simulation engine.

use std::fmt;

use crate::error::CoreError;

/// Bytes per pixel. Buffers are always RGBA8.
pub const CHANNELS: usize = 4;

/// A single RGBA8 pixel.
pub type Pixel = [u8; 4];

/// Row-major RGBA8 image. Always `width * height * 4` bytes long.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Wrap raw RGBA bytes, checking them against the declared dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        validate_dimensions(width, height, data.len())?;
        Ok(Self { width, height, data })
    }

    /// Build a buffer from whole pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Pixel]) -> Result<Self, CoreError> {
        Self::new(width, height, bytemuck::cast_slice::<Pixel, u8>(pixels).to_vec())
    }

    /// A buffer filled with one pixel value.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let count = width as usize * height as usize;
        let data = pixel.repeat(count);
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixels(&self) -> &[Pixel] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels().get(idx).copied()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl fmt::Debug for RgbaBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RgbaBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Check that `len` bytes is exactly a `width x height` RGBA image.
pub fn validate_dimensions(width: u32, height: u32, len: usize) -> Result<(), CoreError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS));
    if len % CHANNELS != 0 || expected != Some(len) {
        return Err(CoreError::InvalidImageBuffer { width, height, len });
    }
    Ok(())
}
