//! Uncompressed (packed) pixel formats.
//!
//! All formats are stored little endian, one pixel after another, rows
//! tightly packed. The 32- and 24-bit layouts are the byte orders the DDS
//! masks in [`DdsHeader`](crate::dds::DdsHeader) describe: B, G, R(, A).

use crate::dds::conversion::{quantize, rgb888_to_rgb565};
use crate::dds::types::TextureFormat;
use image::RgbaImage;

/// Packs RGBA pixels into one of the uncompressed formats.
pub struct PackedEncoder;

impl PackedEncoder {
    /// Encode a whole image. Returns `None` for block formats.
    pub fn encode_image(format: TextureFormat, image: &RgbaImage) -> Option<Vec<u8>> {
        let bpp = format.packed_bytes_per_pixel()? as usize;
        let mut output = Vec::with_capacity(image.width() as usize * image.height() as usize * bpp);
        for pixel in image.pixels() {
            Self::push_pixel(format, pixel.0, &mut output);
        }
        Some(output)
    }

    fn push_pixel(format: TextureFormat, [r, g, b, a]: [u8; 4], out: &mut Vec<u8>) {
        match format {
            TextureFormat::Argb4444 => {
                let value = (quantize(a, 4) << 12)
                    | (quantize(r, 4) << 8)
                    | (quantize(g, 4) << 4)
                    | quantize(b, 4);
                out.extend_from_slice(&value.to_le_bytes());
            }
            TextureFormat::Argb1555 => {
                let value = (quantize(a, 1) << 15) | Self::pack_555(r, g, b);
                out.extend_from_slice(&value.to_le_bytes());
            }
            TextureFormat::Rgb555 => {
                out.extend_from_slice(&Self::pack_555(r, g, b).to_le_bytes());
            }
            TextureFormat::Rgb565 => {
                out.extend_from_slice(&rgb888_to_rgb565(r, g, b).to_le_bytes());
            }
            TextureFormat::Rgb888 => out.extend_from_slice(&[b, g, r]),
            TextureFormat::Argb8888 => out.extend_from_slice(&[b, g, r, a]),
            _ => {}
        }
    }

    fn pack_555(r: u8, g: u8, b: u8) -> u16 {
        (((r >> 3) as u16) << 10) | (((g >> 3) as u16) << 5) | (b >> 3) as u16
    }
}
