//! Tile rectangles, extraction and naming.

use std::path::{Path, PathBuf};

use super::{TileError, TileGrid, TileLayout};
use crate::config::defaults::OUTPUT_EXTENSION;
use crate::image::SourceImage;
use crate::params::output_stem;

/// One tile's position in the grid and in the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub col: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A validated grid over an image of known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlan {
    grid: TileGrid,
    layout: TileLayout,
    tile_width: u32,
    tile_height: u32,
    step_x: u32,
    step_y: u32,
}

impl TilePlan {
    /// Check that `grid` fits a `width`×`height` image under `layout`.
    pub fn new(
        grid: TileGrid,
        layout: TileLayout,
        width: u32,
        height: u32,
    ) -> Result<Self, TileError> {
        let geometry = || TileError::InvalidSplitGeometry {
            columns: grid.columns,
            rows: grid.rows,
            width,
            height,
            layout,
        };

        if grid.columns == 0 || grid.rows == 0 || width == 0 || height == 0 {
            return Err(geometry());
        }

        let (tile_width, step_x) = axis(layout, width, grid.columns).ok_or_else(geometry)?;
        let (tile_height, step_y) = axis(layout, height, grid.rows).ok_or_else(geometry)?;

        Ok(Self {
            grid,
            layout,
            tile_width,
            tile_height,
            step_x,
            step_y,
        })
    }

    pub fn grid(&self) -> TileGrid {
        self.grid
    }

    pub fn layout(&self) -> TileLayout {
        self.layout
    }

    /// Size shared by every tile.
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Tiles in row-major order: rows outer, columns inner.
    pub fn tiles(&self) -> impl Iterator<Item = TileRect> + '_ {
        (0..self.grid.rows).flat_map(move |row| {
            (0..self.grid.columns).map(move |col| TileRect {
                col,
                row,
                x: col * self.step_x,
                y: row * self.step_y,
                width: self.tile_width,
                height: self.tile_height,
            })
        })
    }

    /// Copy the pixels of `rect` out of `image`, rows tightly packed.
    pub fn extract(&self, image: &SourceImage, rect: &TileRect) -> Vec<u8> {
        let bpp = image.bytes_per_pixel() as usize;
        let src_stride = image.row_stride();
        let row_bytes = rect.width as usize * bpp;
        let pixels = image.pixels();

        let mut buffer = Vec::with_capacity(row_bytes * rect.height as usize);
        for y in rect.y..rect.y + rect.height {
            let start = y as usize * src_stride + rect.x as usize * bpp;
            buffer.extend_from_slice(&pixels[start..start + row_bytes]);
        }
        buffer
    }

    /// Output file for `rect`: `<col+1>_<rows-row>_<stem>.dds` beside `output`.
    ///
    /// Rows are numbered from the bottom, so the top row of a 2-row grid
    /// is `_2_`.
    pub fn tile_path(&self, output: &Path, rect: &TileRect) -> PathBuf {
        let name = format!(
            "{}_{}_{}.{}",
            rect.col + 1,
            self.grid.rows - rect.row,
            output_stem(output),
            OUTPUT_EXTENSION
        );
        match output.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

/// Tile length and step along one axis, or `None` if `count` does not fit.
fn axis(layout: TileLayout, length: u32, count: u32) -> Option<(u32, u32)> {
    match layout {
        TileLayout::Exact => {
            if length % count != 0 {
                return None;
            }
            let tile = length / count;
            Some((tile, tile))
        }
        TileLayout::SharedEdge => {
            if (length as u64 + count as u64 - 1) % count as u64 != 0 {
                return None;
            }
            let mut bound = length / count;
            if count == 1 {
                bound -= 1;
            }
            Some((bound + 1, bound))
        }
    }
}
