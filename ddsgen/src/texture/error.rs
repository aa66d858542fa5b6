//! Encoder failures and their numeric codes.

use crate::dds::{DdsError, TextureFormat};
use thiserror::Error;

/// Numeric codes reported for encoder failures.
pub mod codes {
    pub const FAILED: i32 = -1;
    pub const INVALID_DIMENSIONS: i32 = -3;
    pub const BUFFER_TOO_SMALL: i32 = -5;
    pub const WRITE_FAILED: i32 = -8;
    pub const NOT_POWER_OF_TWO: i32 = -24;
}

/// Errors reported by a [`TextureEncoder`](super::TextureEncoder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureError {
    #[error("invalid dimensions {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel buffer too small: need {needed} bytes, have {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("write failed: {0}")]
    WriteFailed(String),

    #[error("{format} needs power-of-two dimensions, got {width}×{height}")]
    NotPowerOfTwo {
        format: TextureFormat,
        width: u32,
        height: u32,
    },

    #[error("encoding failed: {0}")]
    Failed(String),
}

impl TextureError {
    /// Numeric code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            TextureError::InvalidDimensions { .. } => codes::INVALID_DIMENSIONS,
            TextureError::BufferTooSmall { .. } => codes::BUFFER_TOO_SMALL,
            TextureError::WriteFailed(_) => codes::WRITE_FAILED,
            TextureError::NotPowerOfTwo { .. } => codes::NOT_POWER_OF_TWO,
            TextureError::Failed(_) => codes::FAILED,
        }
    }
}

impl From<DdsError> for TextureError {
    fn from(err: DdsError) -> Self {
        match err {
            DdsError::InvalidDimensions(width, height) => {
                TextureError::InvalidDimensions { width, height }
            }
            DdsError::NotPowerOfTwo {
                format,
                width,
                height,
            } => TextureError::NotPowerOfTwo {
                format,
                width,
                height,
            },
            DdsError::WriteFailed(msg) => TextureError::WriteFailed(msg),
            DdsError::InvalidMipmapChain(msg) => TextureError::Failed(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            TextureError::InvalidDimensions {
                width: 0,
                height: 4
            }
            .code(),
            -3
        );
        assert_eq!(
            TextureError::BufferTooSmall {
                needed: 10,
                actual: 2
            }
            .code(),
            -5
        );
        assert_eq!(TextureError::WriteFailed("x".into()).code(), -8);
        assert_eq!(TextureError::Failed("x".into()).code(), -1);
    }

    #[test]
    fn test_from_dds_error_keeps_not_power_of_two() {
        let err: TextureError = DdsError::NotPowerOfTwo {
            format: TextureFormat::Dxt5,
            width: 96,
            height: 64,
        }
        .into();

        assert_eq!(err.code(), codes::NOT_POWER_OF_TWO);
        assert_eq!(
            err.to_string(),
            "DXT5 needs power-of-two dimensions, got 96×64"
        );
    }

    #[test]
    fn test_from_dds_write_failure() {
        let err: TextureError = DdsError::WriteFailed("broken pipe".into()).into();
        assert_eq!(err, TextureError::WriteFailed("broken pipe".into()));
    }
}
