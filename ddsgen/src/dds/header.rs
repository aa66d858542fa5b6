//! DDS header construction.

use crate::dds::types::*;

/// Channel layout of a packed (uncompressed) format.
struct PackedLayout {
    bit_count: u32,
    masks: [u32; 4],
    has_alpha: bool,
}

fn packed_layout(format: TextureFormat) -> Option<PackedLayout> {
    let (bit_count, masks, has_alpha) = match format {
        TextureFormat::Argb4444 => (16, [0x0F00, 0x00F0, 0x000F, 0xF000], true),
        TextureFormat::Argb1555 => (16, [0x7C00, 0x03E0, 0x001F, 0x8000], true),
        TextureFormat::Argb8888 => (
            32,
            [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000],
            true,
        ),
        TextureFormat::Rgb565 => (16, [0xF800, 0x07E0, 0x001F, 0], false),
        TextureFormat::Rgb888 => (24, [0xFF_0000, 0x00_FF00, 0x00_00FF, 0], false),
        TextureFormat::Rgb555 => (16, [0x7C00, 0x03E0, 0x001F, 0], false),
        _ => return None,
    };
    Some(PackedLayout {
        bit_count,
        masks,
        has_alpha,
    })
}

impl DdsHeader {
    /// Create a new DDS header for the given dimensions and format.
    ///
    /// # Arguments
    ///
    /// * `width` - Texture width in pixels
    /// * `height` - Texture height in pixels
    /// * `mipmap_count` - Number of mipmap levels (1 = no mipmaps)
    /// * `format` - Target texture format
    pub fn new(width: u32, height: u32, mipmap_count: u32, format: TextureFormat) -> Self {
        let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;
        if mipmap_count > 1 {
            flags |= DDSD_MIPMAPCOUNT;
        }

        let mut caps = DDSCAPS_TEXTURE;
        if mipmap_count > 1 {
            caps |= DDSCAPS_COMPLEX | DDSCAPS_MIPMAP;
        }

        let (pitch_or_linear_size, pixel_format) = match packed_layout(format) {
            Some(layout) => {
                flags |= DDSD_PITCH;
                let mut pf_flags = DDPF_RGB;
                if layout.has_alpha {
                    pf_flags |= DDPF_ALPHAPIXELS;
                }
                let pitch = width * layout.bit_count / 8;
                (
                    pitch,
                    DdsPixelFormat {
                        size: 32,
                        flags: pf_flags,
                        fourcc: [0; 4],
                        rgb_bit_count: layout.bit_count,
                        r_bit_mask: layout.masks[0],
                        g_bit_mask: layout.masks[1],
                        b_bit_mask: layout.masks[2],
                        a_bit_mask: layout.masks[3],
                    },
                )
            }
            None => {
                flags |= DDSD_LINEARSIZE;
                let fourcc = match format {
                    TextureFormat::Dxt3 => *b"DXT3",
                    TextureFormat::Dxt5 => *b"DXT5",
                    _ => *b"DXT1",
                };
                (
                    u32::try_from(format.surface_size(width, height)).unwrap_or(u32::MAX),
                    DdsPixelFormat {
                        size: 32,
                        flags: DDPF_FOURCC,
                        fourcc,
                        rgb_bit_count: 0,
                        r_bit_mask: 0,
                        g_bit_mask: 0,
                        b_bit_mask: 0,
                        a_bit_mask: 0,
                    },
                )
            }
        };

        DdsHeader {
            magic: *b"DDS ",
            size: 124,
            flags,
            height,
            width,
            pitch_or_linear_size,
            depth: 0,
            mipmap_count,
            reserved1: [0; 11],
            pixel_format,
            caps,
            caps2: 0,
            caps3: 0,
            caps4: 0,
            reserved2: 0,
        }
    }

    /// Convert header to byte array for writing to file.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(DDS_HEADER_LEN);

        bytes.extend_from_slice(&self.magic);

        bytes.extend_from_slice(&self.size.to_le_bytes());
        bytes.extend_from_slice(&self.flags.to_le_bytes());
        bytes.extend_from_slice(&self.height.to_le_bytes());
        bytes.extend_from_slice(&self.width.to_le_bytes());
        bytes.extend_from_slice(&self.pitch_or_linear_size.to_le_bytes());
        bytes.extend_from_slice(&self.depth.to_le_bytes());
        bytes.extend_from_slice(&self.mipmap_count.to_le_bytes());

        for &val in &self.reserved1 {
            bytes.extend_from_slice(&val.to_le_bytes());
        }

        // Pixel format (32 bytes)
        bytes.extend_from_slice(&self.pixel_format.size.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.flags.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.fourcc);
        bytes.extend_from_slice(&self.pixel_format.rgb_bit_count.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.r_bit_mask.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.g_bit_mask.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.b_bit_mask.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.a_bit_mask.to_le_bytes());

        bytes.extend_from_slice(&self.caps.to_le_bytes());
        bytes.extend_from_slice(&self.caps2.to_le_bytes());
        bytes.extend_from_slice(&self.caps3.to_le_bytes());
        bytes.extend_from_slice(&self.caps4.to_le_bytes());
        bytes.extend_from_slice(&self.reserved2.to_le_bytes());

        bytes
    }
}
