//! Mipmap chain generation for DDS textures.

use image::{Rgba, RgbaImage};

/// Mipmap generator.
pub struct MipmapGenerator;

impl MipmapGenerator {
    /// Generate the full mipmap chain down to 1×1.
    ///
    /// Each level halves both axes, never going below one pixel, so
    /// rectangular sources keep shrinking along the longer axis until
    /// both reach 1.
    ///
    /// # Returns
    ///
    /// Vector of images: [original, half-size, quarter-size, ...]
    pub fn generate_chain(source: &RgbaImage) -> Vec<RgbaImage> {
        Self::generate_chain_with_count(source, usize::MAX)
    }

    /// Generate at most `count` levels, the original included.
    ///
    /// Stops early once a 1×1 level has been produced.
    pub fn generate_chain_with_count(source: &RgbaImage, count: usize) -> Vec<RgbaImage> {
        let mut mipmaps = vec![source.clone()];

        while mipmaps.len() < count {
            let Some(current) = mipmaps.last() else { break };
            if current.width() <= 1 && current.height() <= 1 {
                break;
            }
            let next = Self::downsample_box_2x(current);
            mipmaps.push(next);
        }

        mipmaps
    }

    /// Number of levels a full chain for `width`×`height` has.
    pub fn full_chain_len(width: u32, height: u32) -> u32 {
        32 - width.max(height).max(1).leading_zeros()
    }

    /// Downsample image by 2× using a box filter.
    ///
    /// Each output pixel averages a 2×2 block of input pixels. On odd or
    /// unit axes the block is clamped to the last row/column.
    fn downsample_box_2x(source: &RgbaImage) -> RgbaImage {
        let (src_w, src_h) = source.dimensions();
        let new_width = (src_w / 2).max(1);
        let new_height = (src_h / 2).max(1);

        let mut output = RgbaImage::new(new_width, new_height);

        for y in 0..new_height {
            let y0 = (y * 2).min(src_h - 1);
            let y1 = (y * 2 + 1).min(src_h - 1);
            for x in 0..new_width {
                let x0 = (x * 2).min(src_w - 1);
                let x1 = (x * 2 + 1).min(src_w - 1);

                let p00 = source.get_pixel(x0, y0);
                let p10 = source.get_pixel(x1, y0);
                let p01 = source.get_pixel(x0, y1);
                let p11 = source.get_pixel(x1, y1);

                let mut avg = [0u8; 4];
                for (c, out) in avg.iter_mut().enumerate() {
                    let sum = p00[c] as u16 + p10[c] as u16 + p01[c] as u16 + p11[c] as u16;
                    *out = (sum / 4) as u8;
                }

                output.put_pixel(x, y, Rgba(avg));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsample_halves_each_axis() {
        let level = MipmapGenerator::downsample_box_2x(&RgbaImage::new(16, 8));
        assert_eq!(level.dimensions(), (8, 4));
    }

    #[test]
    fn test_flat_colour_survives_every_level() {
        let source = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));

        for level in MipmapGenerator::generate_chain(&source) {
            assert!(level.pixels().all(|p| p.0 == [255, 0, 0, 255]));
        }
    }

    #[test]
    fn test_downsample_averages_correctly() {
        let mut source = RgbaImage::new(2, 2);
        source.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        source.put_pixel(1, 0, Rgba([100, 0, 0, 255]));
        source.put_pixel(0, 1, Rgba([0, 100, 0, 255]));
        source.put_pixel(1, 1, Rgba([0, 0, 100, 255]));

        let downsampled = MipmapGenerator::downsample_box_2x(&source);

        assert_eq!(downsampled.dimensions(), (1, 1));
        assert_eq!(downsampled.get_pixel(0, 0).0, [25, 25, 25, 255]);
    }

    #[test]
    fn test_downsample_single_row() {
        let mut source = RgbaImage::new(4, 1);
        for x in 0..4 {
            source.put_pixel(x, 0, Rgba([x as u8 * 40, 0, 0, 255]));
        }

        let downsampled = MipmapGenerator::downsample_box_2x(&source);

        assert_eq!(downsampled.dimensions(), (2, 1));
        // Row is clamped, so (0 + 40 + 0 + 40) / 4
        assert_eq!(downsampled.get_pixel(0, 0)[0], 20);
        assert_eq!(downsampled.get_pixel(1, 0)[0], 100);
    }

    #[test]
    fn test_downsample_odd_width_clamps() {
        let source = RgbaImage::from_pixel(3, 3, Rgba([60, 60, 60, 60]));
        let downsampled = MipmapGenerator::downsample_box_2x(&source);
        assert_eq!(downsampled.dimensions(), (1, 1));
        assert_eq!(downsampled.get_pixel(0, 0).0, [60, 60, 60, 60]);
    }

    #[test]
    fn test_generate_chain_square() {
        let chain = MipmapGenerator::generate_chain(&RgbaImage::new(32, 32));

        let sizes: Vec<u32> = chain.iter().map(|level| level.width()).collect();
        assert_eq!(sizes, vec![32, 16, 8, 4, 2, 1]);
        assert!(chain.iter().all(|level| level.width() == level.height()));
    }

    #[test]
    fn test_generate_chain_rectangular() {
        let chain = MipmapGenerator::generate_chain(&RgbaImage::new(8, 2));

        let dims: Vec<_> = chain.iter().map(|level| level.dimensions()).collect();
        assert_eq!(dims, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
        assert_eq!(MipmapGenerator::full_chain_len(8, 2), 4);
    }

    #[test]
    fn test_generate_chain_with_count() {
        let chain = MipmapGenerator::generate_chain_with_count(&RgbaImage::new(64, 64), 3);

        assert_eq!(chain.len(), 3);
        assert_eq!(chain[2].dimensions(), (16, 16));
    }

    #[test]
    fn test_count_larger_than_chain_stops_at_1x1() {
        let chain = MipmapGenerator::generate_chain_with_count(&RgbaImage::new(4, 4), 10);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.last().map(|level| level.dimensions()), Some((1, 1)));

        let single = MipmapGenerator::generate_chain_with_count(&RgbaImage::new(64, 64), 1);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_generate_chain_1x1() {
        let chain = MipmapGenerator::generate_chain(&RgbaImage::new(1, 1));
        assert_eq!(chain.len(), 1);
        assert_eq!(MipmapGenerator::full_chain_len(1, 1), 1);
    }

    #[test]
    fn test_full_chain_len() {
        assert_eq!(MipmapGenerator::full_chain_len(256, 256), 9);
        assert_eq!(MipmapGenerator::full_chain_len(4096, 16), 13);
        assert_eq!(MipmapGenerator::full_chain_len(5, 3), 3);
    }

    #[test]
    fn test_alpha_is_filtered_like_colour() {
        let source = RgbaImage::from_fn(2, 2, |x, _| Rgba([0, 0, 0, if x == 0 { 0 } else { 200 }]));

        let level = MipmapGenerator::downsample_box_2x(&source);
        assert_eq!(level.get_pixel(0, 0)[3], 100);
    }
}
