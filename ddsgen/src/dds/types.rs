//! DDS format types and error definitions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Target texture format.
///
/// `Dxt1a` is never named on the command line; it is what `DXT1` becomes
/// for sources that carry an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// BC1, opaque 4-colour blocks
    Dxt1,
    /// BC1 with 1-bit alpha
    Dxt1a,
    /// BC2, explicit 4-bit alpha
    Dxt3,
    /// BC3, interpolated 8-bit alpha
    Dxt5,
    Argb4444,
    Argb1555,
    Argb8888,
    Rgb565,
    Rgb888,
    /// X1R5G5B5
    Rgb555,
}

/// Command-line spelling of every selectable format.
const FORMAT_NAMES: [(&str, TextureFormat); 9] = [
    ("DXT1", TextureFormat::Dxt1),
    ("DXT3", TextureFormat::Dxt3),
    ("DXT5", TextureFormat::Dxt5),
    ("4444", TextureFormat::Argb4444),
    ("1555", TextureFormat::Argb1555),
    ("8888", TextureFormat::Argb8888),
    ("565", TextureFormat::Rgb565),
    ("888", TextureFormat::Rgb888),
    ("555", TextureFormat::Rgb555),
];

impl TextureFormat {
    /// Promote `Dxt1` to `Dxt1a` for 4-channel sources.
    pub fn with_alpha_for(self, bytes_per_pixel: u8) -> Self {
        match self {
            TextureFormat::Dxt1 if bytes_per_pixel == 4 => TextureFormat::Dxt1a,
            other => other,
        }
    }

    pub fn is_block_compressed(self) -> bool {
        self.block_size().is_some()
    }

    /// Bytes per 4×4 block for DXT formats.
    pub fn block_size(self) -> Option<u32> {
        match self {
            TextureFormat::Dxt1 | TextureFormat::Dxt1a => Some(8),
            TextureFormat::Dxt3 | TextureFormat::Dxt5 => Some(16),
            _ => None,
        }
    }

    /// Bytes per pixel for packed formats.
    pub fn packed_bytes_per_pixel(self) -> Option<u32> {
        match self {
            TextureFormat::Argb4444
            | TextureFormat::Argb1555
            | TextureFormat::Rgb565
            | TextureFormat::Rgb555 => Some(2),
            TextureFormat::Rgb888 => Some(3),
            TextureFormat::Argb8888 => Some(4),
            _ => None,
        }
    }

    /// Encoded size of one surface of `width`×`height` pixels.
    pub fn surface_size(self, width: u32, height: u32) -> usize {
        match self.block_size() {
            Some(block) => {
                width.div_ceil(4) as usize * height.div_ceil(4) as usize * block as usize
            }
            None => {
                let bpp = self.packed_bytes_per_pixel().unwrap_or(4);
                width as usize * height as usize * bpp as usize
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TextureFormat::Dxt1a => "DXT1a",
            other => FORMAT_NAMES
                .iter()
                .find(|(_, format)| *format == other)
                .map(|(name, _)| *name)
                .unwrap_or("?"),
        }
    }
}

impl FromStr for TextureFormat {
    type Err = FormatNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORMAT_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, format)| *format)
            .ok_or_else(|| FormatNameError::new("texture format", s))
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that is not in one of the format tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct FormatNameError {
    kind: &'static str,
    value: String,
}

impl FormatNameError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Errors that can occur during DDS encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdsError {
    /// Image dimensions are zero
    InvalidDimensions(u32, u32),
    /// Block formats need power-of-two surfaces
    NotPowerOfTwo {
        format: TextureFormat,
        width: u32,
        height: u32,
    },
    /// Invalid mipmap chain
    InvalidMipmapChain(String),
    /// The output sink rejected a chunk
    WriteFailed(String),
}

impl fmt::Display for DdsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DdsError::InvalidDimensions(w, h) => {
                write!(f, "Invalid dimensions: {}×{}", w, h)
            }
            DdsError::NotPowerOfTwo {
                format,
                width,
                height,
            } => write!(
                f,
                "{} needs power-of-two dimensions, got {}×{}",
                format, width, height
            ),
            DdsError::InvalidMipmapChain(msg) => write!(f, "Invalid mipmap chain: {}", msg),
            DdsError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
        }
    }
}

impl std::error::Error for DdsError {}

/// DDS file header (124 bytes total).
///
/// Based on Microsoft DDS specification:
/// https://docs.microsoft.com/en-us/windows/win32/direct3ddds/dds-header
#[repr(C)]
#[derive(Debug, Clone)]
pub struct DdsHeader {
    /// Magic number: "DDS " (0x20534444)
    pub magic: [u8; 4],
    /// Size of structure (124 bytes)
    pub size: u32,
    /// Flags indicating which fields are valid
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    /// Row pitch for packed formats, top-level size for block formats
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mipmap_count: u32,
    pub reserved1: [u32; 11],
    /// Pixel format structure (32 bytes)
    pub pixel_format: DdsPixelFormat,
    pub caps: u32,
    pub caps2: u32,
    pub caps3: u32,
    pub caps4: u32,
    pub reserved2: u32,
}

/// DDS pixel format structure (32 bytes).
#[repr(C)]
#[derive(Debug, Clone)]
pub struct DdsPixelFormat {
    /// Size of structure (32 bytes)
    pub size: u32,
    pub flags: u32,
    /// FourCC code for block formats ("DXT1", "DXT3", "DXT5")
    pub fourcc: [u8; 4],
    pub rgb_bit_count: u32,
    pub r_bit_mask: u32,
    pub g_bit_mask: u32,
    pub b_bit_mask: u32,
    pub a_bit_mask: u32,
}

// DDS header flags (DDSD_*)
pub const DDSD_CAPS: u32 = 0x1;
pub const DDSD_HEIGHT: u32 = 0x2;
pub const DDSD_WIDTH: u32 = 0x4;
pub const DDSD_PITCH: u32 = 0x8;
pub const DDSD_PIXELFORMAT: u32 = 0x1000;
pub const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub const DDSD_LINEARSIZE: u32 = 0x80000;

// DDS pixel format flags (DDPF_*)
pub const DDPF_ALPHAPIXELS: u32 = 0x1;
pub const DDPF_FOURCC: u32 = 0x4;
pub const DDPF_RGB: u32 = 0x40;

// DDS caps flags (DDSCAPS_*)
pub const DDSCAPS_COMPLEX: u32 = 0x8;
pub const DDSCAPS_MIPMAP: u32 = 0x400000;
pub const DDSCAPS_TEXTURE: u32 = 0x1000;

/// Size of magic + header in bytes.
pub const DDS_HEADER_LEN: usize = 128;
