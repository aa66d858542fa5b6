//! DDS (DirectDraw Surface) texture encoding.
//!
//! Encodes RGBA images into DDS containers, either block compressed or as
//! packed uncompressed pixels, with optional box-filtered mipmaps.
//!
//! # Example
//!
//! ```no_run
//! use ddsgen::dds::{DdsEncoder, TextureFormat};
//! use image::RgbaImage;
//!
//! let image = RgbaImage::new(256, 256);
//!
//! let encoder = DdsEncoder::new(TextureFormat::Dxt5).with_mipmap_count(4);
//! let mut file = std::fs::File::create("output.dds").unwrap();
//! let summary = encoder.encode_to(&image, &mut file).unwrap();
//!
//! assert_eq!(summary.mip_levels, 4);
//! ```
//!
//! # Format Details
//!
//! ## DXT1 (BC1)
//!
//! - 8 bytes per 4×4 block
//! - Two RGB565 endpoints + 2-bit indices
//! - `DXT1a` is the same layout using the 3-colour + transparent mode for
//!   blocks that contain pixels with alpha below 128
//!
//! ## DXT3 (BC2)
//!
//! - 16 bytes per 4×4 block: explicit 4-bit alpha, then a DXT1 colour block
//!
//! ## DXT5 (BC3)
//!
//! - 16 bytes per 4×4 block: two alpha endpoints + 3-bit indices, then a
//!   DXT1 colour block
//!
//! ## Packed
//!
//! `4444`, `1555`, `8888`, `565`, `888` and `555` store each pixel
//! little endian with the channel masks written to the header.
//!
//! Block formats need power-of-two dimensions. Packed formats take any
//! non-zero size.

mod bc1;
mod bc2;
mod bc3;
mod conversion;
mod encoder;
mod header;
mod mipmap;
mod packed;
mod types;

// Public API
pub use encoder::DdsEncoder;
pub use types::{DdsError, DdsHeader, DdsPixelFormat, FormatNameError, TextureFormat};
pub use types::{
    DDPF_ALPHAPIXELS, DDPF_FOURCC, DDPF_RGB, DDSCAPS_COMPLEX, DDSCAPS_MIPMAP, DDSCAPS_TEXTURE,
    DDSD_CAPS, DDSD_HEIGHT, DDSD_LINEARSIZE, DDSD_MIPMAPCOUNT, DDSD_PITCH, DDSD_PIXELFORMAT,
    DDSD_WIDTH, DDS_HEADER_LEN,
};

// Re-export for advanced usage
pub use mipmap::MipmapGenerator;
