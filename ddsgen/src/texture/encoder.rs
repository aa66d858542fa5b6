//! TextureEncoder trait for abstracting texture encoding strategies.
//!
//! The driver only talks to this trait: it hands over a [`Surface`], the
//! resolved [`EncodeConfig`] and a [`ChunkSink`], and gets back either a
//! summary or a coded [`TextureError`].
//!
//! # Example
//!
//! ```
//! use ddsgen::config::{EncodeConfig, MipmapPolicy};
//! use ddsgen::dds::TextureFormat;
//! use ddsgen::pixel::PixelOrder;
//! use ddsgen::texture::{DdsTextureEncoder, Surface, TextureEncoder};
//!
//! let config = EncodeConfig {
//!     pixel_order: PixelOrder::Rgb,
//!     texture_format: TextureFormat::Dxt1,
//!     mipmaps: MipmapPolicy::none(),
//! };
//! let pixels = vec![0u8; 8 * 8 * 3];
//! let surface = Surface::packed(&pixels, 8, 8, PixelOrder::Rgb).unwrap();
//!
//! let mut out = Vec::new();
//! let summary = DdsTextureEncoder.encode(&surface, &config, &mut out).unwrap();
//! assert_eq!(summary.bytes_written, out.len());
//! assert_eq!(out.len(), DdsTextureEncoder.expected_size(8, 8, &config));
//! ```

use crate::config::EncodeConfig;
use crate::dds::{DdsEncoder, TextureFormat};
use crate::texture::{ChunkSink, Surface, TextureError};
use tracing::debug;

/// What an encoder produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    /// Levels written, the base level included
    pub mip_levels: u32,
    pub bytes_written: usize,
}

/// Trait for texture encoding strategies.
///
/// # Implementors
///
/// - [`DdsTextureEncoder`] - Encodes to DirectDraw Surface (DDS) format
pub trait TextureEncoder {
    /// Encode `surface` according to `config`, streaming into `sink`.
    ///
    /// # Errors
    ///
    /// Returns `TextureError` if:
    /// - Surface dimensions are invalid for the format
    /// - The sink rejects a chunk
    fn encode(
        &self,
        surface: &Surface<'_>,
        config: &EncodeConfig,
        sink: &mut dyn ChunkSink,
    ) -> Result<EncodeSummary, TextureError>;

    /// Bytes `encode` will write for a `width`×`height` surface.
    fn expected_size(&self, width: u32, height: u32, config: &EncodeConfig) -> usize;

    /// Return a human-readable name for this encoder.
    fn name(&self) -> &str;
}

/// DDS implementation of [`TextureEncoder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DdsTextureEncoder;

impl DdsTextureEncoder {
    fn dds_encoder(config: &EncodeConfig) -> DdsEncoder {
        let encoder = DdsEncoder::new(config.texture_format);
        match config.mipmaps.level_cap() {
            None => encoder.without_mipmaps(),
            Some(0) => encoder,
            Some(levels) => encoder.with_mipmap_count(levels as usize),
        }
    }
}

impl TextureEncoder for DdsTextureEncoder {
    fn encode(
        &self,
        surface: &Surface<'_>,
        config: &EncodeConfig,
        sink: &mut dyn ChunkSink,
    ) -> Result<EncodeSummary, TextureError> {
        debug!(
            width = surface.width(),
            height = surface.height(),
            order = %surface.order(),
            format = %config.texture_format,
            "Encoding surface"
        );
        let image = surface.to_rgba_image();
        let summary = Self::dds_encoder(config).encode_to(&image, sink)?;
        Ok(summary)
    }

    fn expected_size(&self, width: u32, height: u32, config: &EncodeConfig) -> usize {
        Self::dds_encoder(config).expected_size(width, height)
    }

    fn name(&self) -> &str {
        "DDS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MipmapPolicy;
    use crate::pixel::PixelOrder;
    use crate::texture::codes;

    fn config(format: TextureFormat, mipmaps: MipmapPolicy) -> EncodeConfig {
        EncodeConfig {
            pixel_order: PixelOrder::Rgba,
            texture_format: format,
            mipmaps,
        }
    }

    /// Mock encoder for testing trait object behavior.
    struct MockTextureEncoder;

    impl TextureEncoder for MockTextureEncoder {
        fn encode(
            &self,
            surface: &Surface<'_>,
            config: &EncodeConfig,
            sink: &mut dyn ChunkSink,
        ) -> Result<EncodeSummary, TextureError> {
            sink.write_chunk(&[0xDE, 0xAD, 0xBE, 0xEF])
                .map_err(|e| TextureError::WriteFailed(e.to_string()))?;
            Ok(EncodeSummary {
                width: surface.width(),
                height: surface.height(),
                format: config.texture_format,
                mip_levels: 1,
                bytes_written: 4,
            })
        }

        fn expected_size(&self, _width: u32, _height: u32, _config: &EncodeConfig) -> usize {
            4
        }

        fn name(&self) -> &str {
            "Mock Encoder"
        }
    }

    #[test]
    fn test_trait_object_encode() {
        let encoder: Box<dyn TextureEncoder> = Box::new(MockTextureEncoder);
        let pixels = [0u8; 16];
        let surface = Surface::packed(&pixels, 2, 2, PixelOrder::Rgba).unwrap();
        let mut out = Vec::new();

        let summary = encoder
            .encode(&surface, &config(TextureFormat::Dxt1, MipmapPolicy::none()), &mut out)
            .unwrap();

        assert_eq!(out, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(summary.width, 2);
        assert_eq!(encoder.name(), "Mock Encoder");
    }

    #[test]
    fn test_dds_output_matches_expected_size() {
        let pixels = vec![128u8; 32 * 16 * 4];
        let surface = Surface::packed(&pixels, 32, 16, PixelOrder::Rgba).unwrap();

        for policy in [MipmapPolicy::none(), MipmapPolicy::all(), MipmapPolicy::capped(3)] {
            let cfg = config(TextureFormat::Dxt5, policy);
            let mut out = Vec::new();
            let summary = DdsTextureEncoder.encode(&surface, &cfg, &mut out).unwrap();

            assert_eq!(out.len(), DdsTextureEncoder.expected_size(32, 16, &cfg));
            assert_eq!(summary.bytes_written, out.len());
        }
    }

    #[test]
    fn test_dds_mip_policy_levels() {
        let pixels = vec![0u8; 16 * 16];
        let surface = Surface::packed(&pixels, 16, 16, PixelOrder::Grey).unwrap();
        let mut out = Vec::new();

        let none = DdsTextureEncoder
            .encode(&surface, &config(TextureFormat::Rgb565, MipmapPolicy::none()), &mut out)
            .unwrap();
        let all = DdsTextureEncoder
            .encode(&surface, &config(TextureFormat::Rgb565, MipmapPolicy::all()), &mut out)
            .unwrap();
        let capped = DdsTextureEncoder
            .encode(&surface, &config(TextureFormat::Rgb565, MipmapPolicy::capped(2)), &mut out)
            .unwrap();

        assert_eq!(none.mip_levels, 1);
        assert_eq!(all.mip_levels, 5);
        assert_eq!(capped.mip_levels, 2);
    }

    #[test]
    fn test_dds_swizzles_source_order() {
        let pixels = [10u8, 20, 30, 40];
        let surface = Surface::packed(&pixels, 1, 1, PixelOrder::Bgra).unwrap();
        let mut out = Vec::new();

        DdsTextureEncoder
            .encode(
                &surface,
                &config(TextureFormat::Argb8888, MipmapPolicy::none()),
                &mut out,
            )
            .unwrap();

        // Source B=10 G=20 R=30 A=40, stored as B, G, R, A
        assert_eq!(&out[128..], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_dds_reports_not_power_of_two_code() {
        let pixels = vec![0u8; 12 * 8 * 3];
        let surface = Surface::packed(&pixels, 12, 8, PixelOrder::Rgb).unwrap();
        let mut out = Vec::new();

        let err = DdsTextureEncoder
            .encode(&surface, &config(TextureFormat::Dxt1, MipmapPolicy::none()), &mut out)
            .unwrap_err();

        assert_eq!(err.code(), codes::NOT_POWER_OF_TWO);
        assert!(out.is_empty());
    }
}
