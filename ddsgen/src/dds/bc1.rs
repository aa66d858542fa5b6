//! BC1/DXT1 block compression.
//!
//! BC1 compresses 4×4 blocks of RGB(A) pixels to 8 bytes:
//! - 2 bytes: color0 (RGB565)
//! - 2 bytes: color1 (RGB565)
//! - 4 bytes: 16 2-bit indices (one per pixel)
//!
//! When `color0 > color1` the block is opaque and the indices select from
//! `c0, c1, 2/3 c0 + 1/3 c1, 1/3 c0 + 2/3 c1`. When `color0 <= color1`
//! the third entry is the midpoint and index 3 means transparent black,
//! which is how DXT1a stores 1-bit alpha.

use crate::dds::conversion::*;

/// Pixels with alpha below this are transparent in DXT1a.
pub const ALPHA_THRESHOLD: u8 = 128;

/// BC1 block encoder.
pub struct Bc1Encoder;

impl Bc1Encoder {
    /// Compress a 4×4 block in opaque 4-colour mode.
    pub fn compress_block(pixels: &Block) -> [u8; 8] {
        let (c0, c1) = Self::find_endpoints(pixels.iter());

        // 4-colour mode needs c0 > c1; equal endpoints only ever use index 0
        let (c0, c1) = if c0 > c1 { (c0, c1) } else { (c1, c0) };

        let palette = four_colour_palette(c0, c1);
        let mut indices = 0u32;
        for (i, pixel) in pixels.iter().enumerate() {
            indices |= closest_index(pixel, &palette) << (i * 2);
        }

        Self::pack(c0, c1, indices)
    }

    /// Compress a 4×4 block keeping 1-bit alpha.
    ///
    /// Blocks without transparent pixels are identical to
    /// [`compress_block`](Self::compress_block).
    pub fn compress_block_with_alpha(pixels: &Block) -> [u8; 8] {
        if pixels.iter().all(|p| p[3] >= ALPHA_THRESHOLD) {
            return Self::compress_block(pixels);
        }

        let opaque = pixels.iter().filter(|p| p[3] >= ALPHA_THRESHOLD);
        let (c0, c1) = if pixels.iter().any(|p| p[3] >= ALPHA_THRESHOLD) {
            Self::find_endpoints(opaque)
        } else {
            (0, 0)
        };

        // 3-colour mode needs c0 <= c1
        let (c0, c1) = if c0 <= c1 { (c0, c1) } else { (c1, c0) };

        let palette = three_colour_palette(c0, c1);
        let mut indices = 0u32;
        for (i, pixel) in pixels.iter().enumerate() {
            let index = if pixel[3] < ALPHA_THRESHOLD {
                3
            } else {
                closest_index(pixel, &palette)
            };
            indices |= index << (i * 2);
        }

        Self::pack(c0, c1, indices)
    }

    /// Bounding-box endpoints of the given pixels as (max, min) RGB565.
    fn find_endpoints<'a>(pixels: impl Iterator<Item = &'a [u8; 4]>) -> (u16, u16) {
        let mut min = [255u8; 3];
        let mut max = [0u8; 3];

        for pixel in pixels {
            for c in 0..3 {
                min[c] = min[c].min(pixel[c]);
                max[c] = max[c].max(pixel[c]);
            }
        }

        (
            rgb888_to_rgb565(max[0], max[1], max[2]),
            rgb888_to_rgb565(min[0], min[1], min[2]),
        )
    }

    fn pack(c0: u16, c1: u16, indices: u32) -> [u8; 8] {
        let mut output = [0u8; 8];
        output[0..2].copy_from_slice(&c0.to_le_bytes());
        output[2..4].copy_from_slice(&c1.to_le_bytes());
        output[4..8].copy_from_slice(&indices.to_le_bytes());
        output
    }
}
