//! Encode configuration, resolved from parameters and the loaded image.
//!
//! [`resolve`] is pure: it only looks at the validated
//! [`Parameters`](crate::params::Parameters) and the image's
//! [`ImageInfo`](crate::image::ImageInfo).
//!
//! # Example
//!
//! ```
//! use ddsgen::config::resolve;
//! use ddsgen::dds::TextureFormat;
//! use ddsgen::image::ImageInfo;
//! use ddsgen::params::{parse_args, validate, Invocation};
//! use ddsgen::pixel::PixelOrder;
//!
//! let Invocation::Convert(map) = parse_args(["-fDXT1", "-s2-2", "in.png"]).unwrap() else {
//!     unreachable!()
//! };
//! let params = validate(&map).unwrap();
//! let info = ImageInfo { width: 512, height: 512, bytes_per_pixel: 4 };
//!
//! let plan = resolve(&params, &info).unwrap();
//! assert_eq!(plan.config.pixel_order, PixelOrder::Rgba);
//! assert_eq!(plan.config.texture_format, TextureFormat::Dxt1a);
//! assert_eq!(plan.tiles.map(|t| t.tile_size()), Some((256, 256)));
//! ```

pub mod defaults;

use thiserror::Error;

use crate::dds::TextureFormat;
use crate::image::ImageInfo;
use crate::params::Parameters;
use crate::pixel::PixelOrder;
use crate::tile::{TileError, TileGrid, TilePlan};

/// Mipmap generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MipmapPolicy {
    pub generate: bool,
    /// Cap on total levels, the base level included. 0 means all levels.
    pub max_levels: u32,
}

impl MipmapPolicy {
    /// Base level only.
    pub fn none() -> Self {
        Self {
            generate: false,
            max_levels: 0,
        }
    }

    /// Full chain down to 1×1.
    pub fn all() -> Self {
        Self {
            generate: true,
            max_levels: 0,
        }
    }

    pub fn capped(max_levels: u32) -> Self {
        Self {
            generate: true,
            max_levels,
        }
    }

    /// `None` without mipmaps, else the level cap (0 = unlimited).
    pub fn level_cap(&self) -> Option<u32> {
        self.generate.then_some(self.max_levels)
    }
}

/// Everything an encoder needs besides the pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    pub pixel_order: PixelOrder,
    pub texture_format: TextureFormat,
    pub mipmaps: MipmapPolicy,
}

/// Resolved work for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodePlan {
    pub config: EncodeConfig,
    /// `Some` when the image is split into tiles
    pub tiles: Option<TilePlan>,
}

/// Errors raised while resolving the encode configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Unable to determine pixel format (RGBA/BGRA, RGB/BGR, GREY) for {0} bytes per pixel")]
    UnsupportedPixelFormat(u8),

    #[error("Pixel format {order} incompatible with the input file ({bpp} bytes per pixel)")]
    IncompatiblePixelFormat { order: PixelOrder, bpp: u8 },

    #[error("Texture format undefined")]
    MissingTextureFormat,

    #[error(transparent)]
    Tile(#[from] TileError),
}

/// Derive the encode plan for `params` applied to an image described by `info`.
///
/// Checks run in a fixed order: pixel order, texture format, mipmaps,
/// then the tile grid.
pub fn resolve(params: &Parameters, info: &ImageInfo) -> Result<EncodePlan, ResolveError> {
    let bpp = info.bytes_per_pixel;

    let pixel_order = match params.pixel_order {
        None => PixelOrder::infer(bpp).ok_or(ResolveError::UnsupportedPixelFormat(bpp))?,
        Some(order) if order.channels() == bpp => order,
        Some(order) => return Err(ResolveError::IncompatiblePixelFormat { order, bpp }),
    };

    let texture_format = params
        .texture_format
        .ok_or(ResolveError::MissingTextureFormat)?
        .with_alpha_for(bpp);

    let mipmaps = match (params.generate_mipmaps, params.mipmap_levels) {
        (Some(true), None | Some(0)) => MipmapPolicy::all(),
        (Some(true), Some(levels)) => MipmapPolicy::capped(levels),
        _ => MipmapPolicy::none(),
    };

    let tiles = match &params.split {
        Some(split) => {
            let grid = TileGrid::parse(split)?;
            Some(TilePlan::new(grid, params.layout, info.width, info.height)?)
        }
        None => None,
    };

    Ok(EncodePlan {
        config: EncodeConfig {
            pixel_order,
            texture_format,
            mipmaps,
        },
        tiles,
    })
}
