//! Colour conversion helpers shared by the block and packed encoders.

/// One 4×4 block of RGBA pixels in row-major order.
pub type Block = [[u8; 4]; 16];

/// Convert RGB888 (8-bit per channel) to RGB565 (16-bit packed).
///
/// RGB565 format:
/// - Bits 15-11: Red (5 bits)
/// - Bits 10-5: Green (6 bits)
/// - Bits 4-0: Blue (5 bits)
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

/// Convert RGB565 (16-bit packed) to RGB888 (8-bit per channel).
///
/// Replicates the high bits into the low bits so that 0x1F maps to 0xFF.
pub fn rgb565_to_rgb888(color: u16) -> [u8; 3] {
    let r5 = (color >> 11) & 0x1F;
    let g6 = (color >> 5) & 0x3F;
    let b5 = color & 0x1F;

    [
        ((r5 << 3) | (r5 >> 2)) as u8,
        ((g6 << 2) | (g6 >> 4)) as u8,
        ((b5 << 3) | (b5 >> 2)) as u8,
    ]
}

/// Squared distance between two colours, weighted R=3, G=6, B=1.
pub fn color_distance_squared(a: &[u8; 4], b: &[u8; 3]) -> u32 {
    let dr = (a[0] as i32 - b[0] as i32) * 3;
    let dg = (a[1] as i32 - b[1] as i32) * 6;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}

fn mix(a: [u8; 3], b: [u8; 3], wa: u16, wb: u16) -> [u8; 3] {
    let total = wa + wb;
    [
        ((wa * a[0] as u16 + wb * b[0] as u16) / total) as u8,
        ((wa * a[1] as u16 + wb * b[1] as u16) / total) as u8,
        ((wa * a[2] as u16 + wb * b[2] as u16) / total) as u8,
    ]
}

/// Palette of the opaque 4-colour mode (`c0 > c1`).
pub fn four_colour_palette(c0: u16, c1: u16) -> [[u8; 3]; 4] {
    let rgb0 = rgb565_to_rgb888(c0);
    let rgb1 = rgb565_to_rgb888(c1);
    [rgb0, rgb1, mix(rgb0, rgb1, 2, 1), mix(rgb0, rgb1, 1, 2)]
}

/// Palette of the 3-colour mode (`c0 <= c1`); index 3 is transparent black.
pub fn three_colour_palette(c0: u16, c1: u16) -> [[u8; 3]; 3] {
    let rgb0 = rgb565_to_rgb888(c0);
    let rgb1 = rgb565_to_rgb888(c1);
    [rgb0, rgb1, mix(rgb0, rgb1, 1, 1)]
}

/// Index of the palette entry closest to `pixel`.
pub fn closest_index(pixel: &[u8; 4], palette: &[[u8; 3]]) -> u32 {
    let mut best_dist = u32::MAX;
    let mut best_index = 0;
    for (idx, colour) in palette.iter().enumerate() {
        let dist = color_distance_squared(pixel, colour);
        if dist < best_dist {
            best_dist = dist;
            best_index = idx as u32;
        }
    }
    best_index
}

/// Reduce an 8-bit channel to `bits` bits, rounding to nearest.
#[inline]
pub fn quantize(value: u8, bits: u32) -> u16 {
    let max = (1u32 << bits) - 1;
    ((value as u32 * max + 127) / 255) as u16
}
