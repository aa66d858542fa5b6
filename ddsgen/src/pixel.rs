//! Source pixel channel order.

use std::fmt;
use std::str::FromStr;

use crate::dds::FormatNameError;

/// Channel arrangement of a source pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelOrder {
    /// Single luminance channel
    Grey,
    Rgb,
    Bgr,
    Rgba,
    Bgra,
}

/// Command-line spelling of every pixel order.
const PIXEL_ORDER_NAMES: [(&str, PixelOrder); 5] = [
    ("GREY", PixelOrder::Grey),
    ("RGB", PixelOrder::Rgb),
    ("BGR", PixelOrder::Bgr),
    ("RGBA", PixelOrder::Rgba),
    ("BGRA", PixelOrder::Bgra),
];

impl PixelOrder {
    /// Number of bytes one pixel occupies in this order.
    pub fn channels(self) -> u8 {
        match self {
            PixelOrder::Grey => 1,
            PixelOrder::Rgb | PixelOrder::Bgr => 3,
            PixelOrder::Rgba | PixelOrder::Bgra => 4,
        }
    }

    /// Default order for an image with `bytes_per_pixel` channels.
    pub fn infer(bytes_per_pixel: u8) -> Option<Self> {
        match bytes_per_pixel {
            1 => Some(PixelOrder::Grey),
            3 => Some(PixelOrder::Rgb),
            4 => Some(PixelOrder::Rgba),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        PIXEL_ORDER_NAMES
            .iter()
            .find(|(_, order)| *order == self)
            .map(|(name, _)| *name)
            .unwrap_or("?")
    }

    /// Expand one source pixel to RGBA.
    ///
    /// `pixel` must hold at least [`channels`](Self::channels) bytes.
    #[inline]
    pub fn to_rgba(self, pixel: &[u8]) -> [u8; 4] {
        match self {
            PixelOrder::Grey => [pixel[0], pixel[0], pixel[0], 255],
            PixelOrder::Rgb => [pixel[0], pixel[1], pixel[2], 255],
            PixelOrder::Bgr => [pixel[2], pixel[1], pixel[0], 255],
            PixelOrder::Rgba => [pixel[0], pixel[1], pixel[2], pixel[3]],
            PixelOrder::Bgra => [pixel[2], pixel[1], pixel[0], pixel[3]],
        }
    }
}

impl FromStr for PixelOrder {
    type Err = FormatNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PIXEL_ORDER_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, order)| *order)
            .ok_or_else(|| FormatNameError::new("pixel order", s))
    }
}

impl fmt::Display for PixelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for (name, order) in PIXEL_ORDER_NAMES {
            assert_eq!(name.parse::<PixelOrder>().unwrap(), order);
            assert_eq!(order.to_string(), name);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("rgb".parse::<PixelOrder>().is_err());
        assert!("Grey".parse::<PixelOrder>().is_err());
        assert!("GRAY".parse::<PixelOrder>().is_err());
    }

    #[test]
    fn test_channels() {
        assert_eq!(PixelOrder::Grey.channels(), 1);
        assert_eq!(PixelOrder::Bgr.channels(), 3);
        assert_eq!(PixelOrder::Bgra.channels(), 4);
    }

    #[test]
    fn test_infer() {
        assert_eq!(PixelOrder::infer(1), Some(PixelOrder::Grey));
        assert_eq!(PixelOrder::infer(3), Some(PixelOrder::Rgb));
        assert_eq!(PixelOrder::infer(4), Some(PixelOrder::Rgba));
        assert_eq!(PixelOrder::infer(2), None);
        assert_eq!(PixelOrder::infer(0), None);
    }

    #[test]
    fn test_to_rgba_swizzles() {
        assert_eq!(PixelOrder::Grey.to_rgba(&[7]), [7, 7, 7, 255]);
        assert_eq!(PixelOrder::Rgb.to_rgba(&[1, 2, 3]), [1, 2, 3, 255]);
        assert_eq!(PixelOrder::Bgr.to_rgba(&[1, 2, 3]), [3, 2, 1, 255]);
        assert_eq!(PixelOrder::Rgba.to_rgba(&[1, 2, 3, 4]), [1, 2, 3, 4]);
        assert_eq!(PixelOrder::Bgra.to_rgba(&[1, 2, 3, 4]), [3, 2, 1, 4]);
    }
}
