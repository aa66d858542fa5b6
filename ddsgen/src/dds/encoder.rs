//! DDS encoder - main API for encoding images to DDS format.

use crate::dds::bc1::Bc1Encoder;
use crate::dds::bc2::Bc2Encoder;
use crate::dds::bc3::Bc3Encoder;
use crate::dds::conversion::Block;
use crate::dds::mipmap::MipmapGenerator;
use crate::dds::packed::PackedEncoder;
use crate::dds::types::{DdsError, DdsHeader, TextureFormat};
use crate::texture::{ChunkSink, EncodeSummary};
use image::RgbaImage;
use tracing::trace;

/// DDS encoder configuration.
#[derive(Debug, Clone)]
pub struct DdsEncoder {
    format: TextureFormat,
    generate_mipmaps: bool,
    mipmap_count: Option<usize>,
}

impl DdsEncoder {
    /// Create a new DDS encoder with the specified format.
    ///
    /// By default, generates full mipmap chain down to 1×1.
    pub fn new(format: TextureFormat) -> Self {
        Self {
            format,
            generate_mipmaps: true,
            mipmap_count: None,
        }
    }

    /// Disable mipmap generation.
    pub fn without_mipmaps(mut self) -> Self {
        self.generate_mipmaps = false;
        self
    }

    /// Cap the chain at `count` levels, the base level included.
    pub fn with_mipmap_count(mut self, count: usize) -> Self {
        self.generate_mipmaps = true;
        self.mipmap_count = Some(count);
        self
    }

    /// Number of levels that will be written for a `width`×`height` image.
    pub fn level_count(&self, width: u32, height: u32) -> u32 {
        if !self.generate_mipmaps {
            return 1;
        }
        let full = MipmapGenerator::full_chain_len(width, height);
        match self.mipmap_count {
            Some(count) => full.min(count.max(1) as u32),
            None => full,
        }
    }

    /// Total file size, header included.
    pub fn expected_size(&self, width: u32, height: u32) -> usize {
        let mut size = crate::dds::DDS_HEADER_LEN;
        let (mut w, mut h) = (width, height);
        for _ in 0..self.level_count(width, height) {
            size += self.format.surface_size(w, h);
            w = (w / 2).max(1);
            h = (h / 2).max(1);
        }
        size
    }

    /// Encode RGBA image to a complete DDS file in memory.
    #[cfg(test)]
    pub(crate) fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, DdsError> {
        let mut output = Vec::with_capacity(self.expected_size(image.width(), image.height()));
        self.encode_to(image, &mut output)?;
        Ok(output)
    }

    /// Encode RGBA image, streaming the header and then each mip level to `sink`.
    ///
    /// # Errors
    ///
    /// Returns error if image dimensions are invalid for the format or the
    /// sink rejects a chunk. Chunks written before a failure stay written.
    pub fn encode_to(
        &self,
        image: &RgbaImage,
        sink: &mut dyn ChunkSink,
    ) -> Result<EncodeSummary, DdsError> {
        let (width, height) = image.dimensions();
        self.check_dimensions(width, height)?;

        let mipmaps = if self.generate_mipmaps {
            match self.mipmap_count {
                Some(count) => MipmapGenerator::generate_chain_with_count(image, count),
                None => MipmapGenerator::generate_chain(image),
            }
        } else {
            vec![image.clone()]
        };

        self.encode_with_mipmaps(&mipmaps, sink)
    }

    /// Encode with pre-generated mipmap chain (level 0 = full resolution).
    pub fn encode_with_mipmaps(
        &self,
        mipmaps: &[RgbaImage],
        sink: &mut dyn ChunkSink,
    ) -> Result<EncodeSummary, DdsError> {
        let Some(base_image) = mipmaps.first() else {
            return Err(DdsError::InvalidMipmapChain(
                "Empty mipmap chain".to_string(),
            ));
        };
        let (width, height) = base_image.dimensions();
        self.check_dimensions(width, height)?;

        let header = DdsHeader::new(width, height, mipmaps.len() as u32, self.format);
        let mut bytes_written = 0usize;

        let header_bytes = header.to_bytes();
        write_chunk(sink, &header_bytes, &mut bytes_written)?;

        for (level, mipmap) in mipmaps.iter().enumerate() {
            let data = self.compress_image(mipmap);
            trace!(
                level,
                width = mipmap.width(),
                height = mipmap.height(),
                bytes = data.len(),
                "Writing mip level"
            );
            write_chunk(sink, &data, &mut bytes_written)?;
        }

        Ok(EncodeSummary {
            width,
            height,
            format: self.format,
            mip_levels: mipmaps.len() as u32,
            bytes_written,
        })
    }

    fn check_dimensions(&self, width: u32, height: u32) -> Result<(), DdsError> {
        if width == 0 || height == 0 {
            return Err(DdsError::InvalidDimensions(width, height));
        }
        if self.format.is_block_compressed()
            && !(width.is_power_of_two() && height.is_power_of_two())
        {
            return Err(DdsError::NotPowerOfTwo {
                format: self.format,
                width,
                height,
            });
        }
        Ok(())
    }

    /// Compress a single level into the target format.
    fn compress_image(&self, image: &RgbaImage) -> Vec<u8> {
        if let Some(packed) = PackedEncoder::encode_image(self.format, image) {
            return packed;
        }

        let blocks_wide = image.width().div_ceil(4);
        let blocks_high = image.height().div_ceil(4);
        let mut output = Vec::with_capacity(self.format.surface_size(image.width(), image.height()));

        for block_y in 0..blocks_high {
            for block_x in 0..blocks_wide {
                let block = Self::extract_block(image, block_x, block_y);
                match self.format {
                    TextureFormat::Dxt1a => {
                        output.extend_from_slice(&Bc1Encoder::compress_block_with_alpha(&block))
                    }
                    TextureFormat::Dxt3 => {
                        output.extend_from_slice(&Bc2Encoder::compress_block(&block))
                    }
                    TextureFormat::Dxt5 => {
                        output.extend_from_slice(&Bc3Encoder::compress_block(&block))
                    }
                    _ => output.extend_from_slice(&Bc1Encoder::compress_block(&block)),
                }
            }
        }

        output
    }

    /// Extract a 4×4 pixel block from the image.
    ///
    /// Levels smaller than a block (2×2, 1×1) repeat their edge pixels.
    fn extract_block(image: &RgbaImage, block_x: u32, block_y: u32) -> Block {
        let mut block = [[0u8; 4]; 16];
        let max_x = image.width() - 1;
        let max_y = image.height() - 1;

        for y in 0..4 {
            for x in 0..4 {
                let pixel_x = (block_x * 4 + x).min(max_x);
                let pixel_y = (block_y * 4 + y).min(max_y);
                block[(y * 4 + x) as usize] = image.get_pixel(pixel_x, pixel_y).0;
            }
        }

        block
    }
}

fn write_chunk(
    sink: &mut dyn ChunkSink,
    chunk: &[u8],
    bytes_written: &mut usize,
) -> Result<(), DdsError> {
    sink.write_chunk(chunk)
        .map_err(|e| DdsError::WriteFailed(e.to_string()))?;
    *bytes_written += chunk.len();
    Ok(())
}
