//! Borrowed view of source pixels handed to an encoder.

use crate::pixel::PixelOrder;
use crate::texture::TextureError;
use image::{Rgba, RgbaImage};

/// A rectangle of pixels in some channel order with an arbitrary row stride.
#[derive(Debug, Clone, Copy)]
pub struct Surface<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
    pitch: usize,
    order: PixelOrder,
}

impl<'a> Surface<'a> {
    /// Wrap `pixels`, checking that every row up to `height` is covered.
    ///
    /// `pitch` is the distance in bytes between the starts of two rows.
    pub fn new(
        pixels: &'a [u8],
        width: u32,
        height: u32,
        pitch: usize,
        order: PixelOrder,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions { width, height });
        }

        let row_bytes = width as usize * order.channels() as usize;
        let needed = pitch.max(row_bytes) * (height as usize - 1) + row_bytes;
        if pitch < row_bytes || pixels.len() < needed {
            return Err(TextureError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
            pitch,
            order,
        })
    }

    /// Tightly packed surface, pitch = `width × channels`.
    pub fn packed(
        pixels: &'a [u8],
        width: u32,
        height: u32,
        order: PixelOrder,
    ) -> Result<Self, TextureError> {
        let pitch = width as usize * order.channels() as usize;
        Self::new(pixels, width, height, pitch, order)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn order(&self) -> PixelOrder {
        self.order
    }

    /// Bytes of row `y`, without any padding past the last pixel.
    pub fn row(&self, y: u32) -> &'a [u8] {
        let start = y as usize * self.pitch;
        let len = self.width as usize * self.order.channels() as usize;
        &self.pixels[start..start + len]
    }

    /// Expand to an RGBA image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let channels = self.order.channels() as usize;
        let mut image = RgbaImage::new(self.width, self.height);
        for y in 0..self.height {
            let row = self.row(y);
            for (x, pixel) in row.chunks_exact(channels).enumerate() {
                image.put_pixel(x as u32, y, Rgba(self.order.to_rgba(pixel)));
            }
        }
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_surface() {
        let pixels = [0u8; 2 * 3 * 3];
        let surface = Surface::packed(&pixels, 2, 3, PixelOrder::Rgb).unwrap();
        assert_eq!(surface.pitch(), 6);
        assert_eq!(surface.row(2).len(), 6);
    }

    #[test]
    fn test_rejects_short_buffer() {
        let pixels = [0u8; 11];
        let err = Surface::packed(&pixels, 2, 2, PixelOrder::Bgr).unwrap_err();
        assert_eq!(
            err,
            TextureError::BufferTooSmall {
                needed: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_last_row_needs_no_padding() {
        // Pitch 8 for 2 RGB pixels: rows at 0 and 8, last row ends at 14
        let pixels = [0u8; 14];
        assert!(Surface::new(&pixels, 2, 2, 8, PixelOrder::Rgb).is_ok());
        assert!(Surface::new(&pixels[..13], 2, 2, 8, PixelOrder::Rgb).is_err());
    }

    #[test]
    fn test_rejects_pitch_shorter_than_row() {
        let pixels = [0u8; 64];
        assert!(Surface::new(&pixels, 4, 2, 3, PixelOrder::Grey).is_err());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = Surface::packed(&[], 0, 5, PixelOrder::Grey).unwrap_err();
        assert_eq!(
            err,
            TextureError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn test_to_rgba_image_honours_pitch_and_order() {
        // 1×2 BGRA with two bytes of row padding
        let pixels = [1, 2, 3, 4, 0xEE, 0xEE, 5, 6, 7, 8];
        let surface = Surface::new(&pixels, 1, 2, 6, PixelOrder::Bgra).unwrap();
        let image = surface.to_rgba_image();

        assert_eq!(image.get_pixel(0, 0).0, [3, 2, 1, 4]);
        assert_eq!(image.get_pixel(0, 1).0, [7, 6, 5, 8]);
    }
}
