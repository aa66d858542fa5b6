//! Texture encoding seam.
//!
//! [`TextureEncoder`] is what the encode driver calls; [`DdsTextureEncoder`]
//! is the implementation shipped with the crate.

mod encoder;
mod error;
mod sink;
mod surface;

pub use encoder::{DdsTextureEncoder, EncodeSummary, TextureEncoder};
pub use error::{codes, TextureError};
pub use sink::ChunkSink;
pub use surface::Surface;
