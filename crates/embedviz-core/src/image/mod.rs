//! Canonical image representation and renderer-buffer conversion.
//!
//! Thumbnails arrive as grayscale, RGB or RGBA grids and leave as packed
//! 32-bit pixel buffers. [`ImageGrid`] is the single in-memory image type
//! the rest of the pipeline deals with: explicit height, width and channel
//! count over one row-major byte buffer, top-left origin. Raw numeric grids
//! are narrowed to bytes by [`ImageGrid::from_f32`], the one boundary where
//! pixel values are range-checked.

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};


/// Channel layout of an [`ImageGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channels {
    /// One channel, intensity only.
    Gray,
    /// Three channels, no transparency.
    Rgb,
    /// Four channels including alpha.
    Rgba,
}

impl Channels {
    /// Number of bytes per pixel.
    pub const fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }

    /// Map a raw channel count to a layout.
    ///
    /// # Errors
    ///
    /// `UnsupportedChannels` for anything but 1, 3 or 4.
    pub fn from_count(channels: usize) -> VizResult<Self> {
        match channels {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            other => Err(VizError::UnsupportedChannels { channels: other }),
        }
    }
}

/// One thumbnail image: dimensions, channel layout and a row-major byte
/// buffer with top-left origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageGrid {
    height: usize,
    width: usize,
    channels: Channels,
    data: Vec<u8>,
}

impl ImageGrid {
    fn validated(height: usize, width: usize, channels: Channels, data: Vec<u8>) -> VizResult<Self> {
        if height == 0 || width == 0 {
            return Err(VizError::EmptyImage { height, width });
        }
        let expected = height * width * channels.count();
        if data.len() != expected {
            return Err(VizError::PixelCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Grayscale image from one intensity byte per pixel.
    pub fn gray(height: usize, width: usize, data: Vec<u8>) -> VizResult<Self> {
        Self::validated(height, width, Channels::Gray, data)
    }

    /// RGB image from three bytes per pixel.
    pub fn rgb(height: usize, width: usize, data: Vec<u8>) -> VizResult<Self> {
        Self::validated(height, width, Channels::Rgb, data)
    }

    /// RGBA image from four bytes per pixel.
    pub fn rgba(height: usize, width: usize, data: Vec<u8>) -> VizResult<Self> {
        Self::validated(height, width, Channels::Rgba, data)
    }

    /// Narrow a raw numeric grid to bytes.
    ///
    /// # Errors
    ///
    /// - `UnsupportedChannels` when `channels` is not 1, 3 or 4.
    /// - `ValueOutOfRange` when any value is not finite or falls outside
    ///   [0, 255].
    pub fn from_f32(
        height: usize,
        width: usize,
        channels: usize,
        values: &[f32],
    ) -> VizResult<Self> {
        let layout = Channels::from_count(channels)?;
        let mut data = Vec::with_capacity(values.len());
        for &v in values {
            if !v.is_finite() || !(0.0..=255.0).contains(&v) {
                return Err(VizError::ValueOutOfRange {
                    field: "pixel",
                    value: f64::from(v),
                    min: 0.0,
                    max: 255.0,
                });
            }
            data.push(v.round() as u8);
        }
        Self::validated(height, width, layout, data)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// (height, width) pair.
    pub fn dims(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Raw row-major bytes, top-left origin.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn pixel_rgba(&self, row: usize, col: usize) -> [u8; 4] {
        let i = (row * self.width + col) * self.channels.count();
        match self.channels {
            Channels::Gray => {
                let v = self.data[i];
                [v, v, v, 255]
            }
            Channels::Rgb => [self.data[i], self.data[i + 1], self.data[i + 2], 255],
            Channels::Rgba => [
                self.data[i],
                self.data[i + 1],
                self.data[i + 2],
                self.data[i + 3],
            ],
        }
    }
}

/// A renderer-ready pixel buffer: one `u32` per pixel, four channel bytes
/// packed in little-endian RGBA order (red in the low byte).
///
/// Row 0 is the *bottom* row when produced with vertical flipping, matching
/// renderers whose coordinate origin is bottom-left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedImage {
    pub height: usize,
    pub width: usize,
    pub pixels: Vec<u32>,
}

impl PackedImage {
    /// One row of packed pixels.
    ///
    /// # Panics
    ///
    /// Panics when `row >= height`.
    pub fn row(&self, row: usize) -> &[u32] {
        &self.pixels[row * self.width..(row + 1) * self.width]
    }

    /// Alpha byte of one packed pixel.
    pub fn alpha_of(pixel: u32) -> u8 {
        (pixel >> 24) as u8
    }
}

/// Convert an image to a packed pixel buffer for the renderer.
///
/// Canonicalizes to RGBA (a missing alpha channel becomes fully opaque),
/// overwrites every pixel's alpha with `alpha` when provided, and reverses
/// the row order when `flip_vertical` is set: the source convention puts
/// the origin top-left while the target renderer's is bottom-left.
///
/// Idempotent on the alpha channel: normalizing twice with the same `alpha`
/// packs the same buffer as normalizing once.
pub fn normalize(image: &ImageGrid, alpha: Option<u8>, flip_vertical: bool) -> PackedImage {
    let (height, width) = image.dims();
    let mut pixels = Vec::with_capacity(height * width);

    for row in 0..height {
        let src_row = if flip_vertical { height - 1 - row } else { row };
        for col in 0..width {
            let mut px = image.pixel_rgba(src_row, col);
            if let Some(a) = alpha {
                px[3] = a;
            }
            pixels.push(u32::from_le_bytes(px));
        }
    }

    PackedImage {
        height,
        width,
        pixels,
    }
}
