//! ddsgen - Image to DDS texture conversion
//!
//! This library converts a decoded raster image into a DDS texture file,
//! optionally cutting it into a grid of tiles first.
//!
//! # High-Level API
//!
//! A conversion runs in four steps: parse the command line, load the
//! source image, resolve the effective settings and drive the encoder.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ddsgen::config::resolve;
//! use ddsgen::driver::EncodeDriver;
//! use ddsgen::image::SourceImage;
//! use ddsgen::params::{parse_args, validate, Invocation};
//! use ddsgen::texture::DdsTextureEncoder;
//!
//! let Invocation::Convert(map) = parse_args(["map.png", "-f", "DXT1"])? else {
//!     return Ok(());
//! };
//! let params = validate(&map)?;
//! let source = SourceImage::open(&params.input)?;
//! let plan = resolve(&params, &source.info())?;
//!
//! let driver = EncodeDriver::new(DdsTextureEncoder);
//! driver.run_untiled(&source, &plan.config, &params.output)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dds;
pub mod driver;
pub mod image;
pub mod logging;
pub mod params;
pub mod pixel;
pub mod texture;
pub mod tile;

/// Version of the ddsgen library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
