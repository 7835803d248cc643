//! Straight-alpha RGBA8 pixel buffers.
//!
//! Avatars and bundled icons are decoded once, pre-scaled to their display
//! size, and kept as plain byte buffers so the renderer can blit them
//! without touching the decoder again.

use thiserror::Error;

/// Errors raised while decoding a bundled or party-provided image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to decode png: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("unsupported png color type: {0:?}")]
    UnsupportedColor(png::ColorType),
}

/// An image as straight (non-premultiplied) RGBA8 bytes, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl RgbaImage {
    /// Decode a PNG from memory into RGBA8.
    ///
    /// Palette and 16-bit inputs are normalized to 8-bit by the decoder;
    /// grayscale and RGB are expanded to RGBA here.
    pub fn decode_png(bytes: &[u8]) -> Result<Self, ImageError> {
        let mut decoder = png::Decoder::new(bytes);
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        buf.truncate(info.buffer_size());

        let data = match info.color_type {
            png::ColorType::Rgba => buf,
            png::ColorType::Rgb => buf
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], 255])
                .collect(),
            png::ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0], px[1]])
                .collect(),
            png::ColorType::Grayscale => {
                buf.iter().flat_map(|&g| [g, g, g, 255]).collect()
            }
            other => return Err(ImageError::UnsupportedColor(other)),
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            data,
        })
    }

    /// Scale to `width` x `height` with nearest-neighbor sampling.
    ///
    /// Avatars are small enough that filtering quality is irrelevant next
    /// to keeping the per-frame path allocation-free.
    pub fn scaled(&self, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 || self.width == 0 || self.height == 0 {
            return Self {
                width: 0,
                height: 0,
                data: Vec::new(),
            };
        }

        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            let src_y = (y as u64 * self.height as u64 / height as u64) as u32;
            for x in 0..width {
                let src_x = (x as u64 * self.width as u64 / width as u64) as u32;
                let idx = ((src_y * self.width + src_x) * 4) as usize;
                data.extend_from_slice(&self.data[idx..idx + 4]);
            }
        }

        Self {
            width,
            height,
            data,
        }
    }
}
