//! BC2/DXT3 block compression.
//!
//! BC2 stores 4×4 RGBA blocks in 16 bytes:
//! - 8 bytes: explicit alpha, 4 bits per pixel in row-major order
//! - 8 bytes: colour block encoded like opaque BC1

use crate::dds::bc1::Bc1Encoder;
use crate::dds::conversion::{quantize, Block};

/// BC2 block encoder.
pub struct Bc2Encoder;

impl Bc2Encoder {
    /// Compress a 4×4 RGBA block to 16 bytes.
    pub fn compress_block(pixels: &Block) -> [u8; 16] {
        let mut output = [0u8; 16];
        output[0..8].copy_from_slice(&Self::compress_alpha(pixels));
        output[8..16].copy_from_slice(&Bc1Encoder::compress_block(pixels));
        output
    }

    fn compress_alpha(pixels: &Block) -> [u8; 8] {
        let mut bits = 0u64;
        for (i, pixel) in pixels.iter().enumerate() {
            bits |= (quantize(pixel[3], 4) as u64) << (i * 4);
        }
        bits.to_le_bytes()
    }
}
