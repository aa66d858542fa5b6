//! Source image loading.
//!
//! Decodes any format the `image` crate is built with and normalizes it to
//! 8 bits per channel, keeping the channel count: grey, grey + alpha, RGB
//! or RGBA.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a source image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unable to load image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Size and channel count of a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bytes_per_pixel: u8,
}

/// Decoded pixels, rows top to bottom with no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    info: ImageInfo,
    pixels: Vec<u8>,
}

impl SourceImage {
    /// Decode the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| ImageError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            path = %path.display(),
            color = ?decoded.color(),
            width = decoded.width(),
            height = decoded.height(),
            "Decoded source image"
        );
        Ok(Self::from_dynamic(decoded))
    }

    /// Wrap already decoded pixels.
    pub fn from_raw(
        width: u32,
        height: u32,
        bytes_per_pixel: u8,
        pixels: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * bytes_per_pixel as usize;
        if pixels.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            info: ImageInfo {
                width,
                height,
                bytes_per_pixel,
            },
            pixels,
        })
    }

    fn from_dynamic(decoded: DynamicImage) -> Self {
        let (width, height) = (decoded.width(), decoded.height());
        let (bytes_per_pixel, pixels) = match decoded {
            DynamicImage::ImageLuma8(img) => (1, img.into_raw()),
            DynamicImage::ImageLumaA8(img) => (2, img.into_raw()),
            DynamicImage::ImageRgb8(img) => (3, img.into_raw()),
            DynamicImage::ImageRgba8(img) => (4, img.into_raw()),
            other @ DynamicImage::ImageLuma16(_) => (1, other.to_luma8().into_raw()),
            other @ DynamicImage::ImageLumaA16(_) => (2, other.to_luma_alpha8().into_raw()),
            other if other.color().has_alpha() => (4, other.to_rgba8().into_raw()),
            other => (3, other.to_rgb8().into_raw()),
        };

        Self {
            info: ImageInfo {
                width,
                height,
                bytes_per_pixel,
            },
            pixels,
        }
    }

    pub fn info(&self) -> ImageInfo {
        self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    pub fn bytes_per_pixel(&self) -> u8 {
        self.info.bytes_per_pixel
    }

    /// Bytes from the start of one row to the next.
    pub fn row_stride(&self) -> usize {
        self.info.width as usize * self.info.bytes_per_pixel as usize
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, LumaA, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_open_rgb_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rgb.png");
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([10, 20, 30]));
        img.save(&path).unwrap();

        let source = SourceImage::open(&path).unwrap();
        assert_eq!(
            source.info(),
            ImageInfo {
                width: 3,
                height: 2,
                bytes_per_pixel: 3
            }
        );
        assert_eq!(source.row_stride(), 9);
        assert_eq!(&source.pixels()[15..18], &[10, 20, 30]);
    }

    #[test]
    fn test_open_keeps_channel_count() {
        let dir = TempDir::new().unwrap();

        let grey = dir.path().join("grey.png");
        GrayImage::new(4, 4).save(&grey).unwrap();
        assert_eq!(SourceImage::open(&grey).unwrap().bytes_per_pixel(), 1);

        let grey_alpha = dir.path().join("grey_alpha.png");
        GrayAlphaImage::from_pixel(4, 4, LumaA([1, 2]))
            .save(&grey_alpha)
            .unwrap();
        assert_eq!(SourceImage::open(&grey_alpha).unwrap().bytes_per_pixel(), 2);

        let rgba = dir.path().join("rgba.png");
        RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4]))
            .save(&rgba)
            .unwrap();
        let source = SourceImage::open(&rgba).unwrap();
        assert_eq!(source.bytes_per_pixel(), 4);
        assert_eq!(&source.pixels()[..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_sixteen_bit_images_are_narrowed() {
        let decoded = DynamicImage::ImageRgb16(image::ImageBuffer::from_pixel(
            2,
            2,
            Rgb([0xFFFFu16, 0, 0x8080]),
        ));
        let source = SourceImage::from_dynamic(decoded);
        assert_eq!(source.bytes_per_pixel(), 3);
        assert_eq!(&source.pixels()[..3], &[0xFF, 0, 0x80]);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.png");

        let err = SourceImage::open(&path).unwrap_err();
        assert!(matches!(err, ImageError::Load { path: p, .. } if p == path));
    }

    #[test]
    fn test_open_garbage_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("noise.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(SourceImage::open(&path).is_err());
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(SourceImage::from_raw(2, 2, 3, vec![0; 12]).is_ok());
        let err = SourceImage::from_raw(2, 2, 3, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            ImageError::BufferSize {
                expected: 12,
                actual: 11
            }
        ));
    }
}
