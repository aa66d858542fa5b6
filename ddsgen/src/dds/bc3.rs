//! BC3/DXT5 block compression.
//!
//! BC3 compresses 4×4 blocks of RGBA pixels to 16 bytes:
//! - 8 bytes: alpha0, alpha1 and 16 3-bit indices
//! - 8 bytes: colour block encoded like opaque BC1

use crate::dds::bc1::Bc1Encoder;
use crate::dds::conversion::Block;

/// BC3 block encoder.
pub struct Bc3Encoder;

impl Bc3Encoder {
    /// Compress a 4×4 RGBA block to 16 bytes.
    pub fn compress_block(pixels: &Block) -> [u8; 16] {
        let mut output = [0u8; 16];
        output[0..8].copy_from_slice(&Self::compress_alpha(pixels));
        output[8..16].copy_from_slice(&Bc1Encoder::compress_block(pixels));
        output
    }

    /// Compress the alpha channel in 8-alpha interpolation mode.
    fn compress_alpha(pixels: &Block) -> [u8; 8] {
        let (min_alpha, max_alpha) = pixels
            .iter()
            .fold((255u8, 0u8), |(lo, hi), p| (lo.min(p[3]), hi.max(p[3])));

        // 8-alpha mode keeps alpha0 >= alpha1
        let palette = Self::build_alpha_palette(max_alpha, min_alpha);
        let indices = Self::generate_alpha_indices(pixels, &palette);

        let mut output = [0u8; 8];
        output[0] = max_alpha;
        output[1] = min_alpha;
        output[2..8].copy_from_slice(&indices[0..6]);
        output
    }

    /// Two endpoints followed by six evenly spaced interpolants.
    fn build_alpha_palette(alpha0: u8, alpha1: u8) -> [u8; 8] {
        let a0 = alpha0 as u16;
        let a1 = alpha1 as u16;

        let mut palette = [alpha0, alpha1, 0, 0, 0, 0, 0, 0];
        for step in 1..=6u16 {
            palette[step as usize + 1] = (((7 - step) * a0 + step * a1) / 7) as u8;
        }
        palette
    }

    /// 3-bit palette index per pixel, packed little endian into 48 bits.
    fn generate_alpha_indices(pixels: &Block, palette: &[u8; 8]) -> [u8; 8] {
        let mut indices = 0u64;

        for (i, pixel) in pixels.iter().enumerate() {
            let alpha = pixel[3];
            let best_index = palette
                .iter()
                .enumerate()
                .min_by_key(|(_, &pal)| (alpha as i32 - pal as i32).unsigned_abs())
                .map(|(idx, _)| idx)
                .unwrap_or(0);
            indices |= (best_index as u64) << (i * 3);
        }

        indices.to_le_bytes()
    }
}
