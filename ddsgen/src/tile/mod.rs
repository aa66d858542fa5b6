//! Splitting a source image into a grid of separately encoded tiles.
//!
//! ```
//! use ddsgen::tile::{TileGrid, TileLayout, TilePlan};
//!
//! let grid = TileGrid::parse("2-2").unwrap();
//! let plan = TilePlan::new(grid, TileLayout::Exact, 512, 512).unwrap();
//! assert_eq!(plan.tiles().count(), 4);
//! assert_eq!(plan.tile_size(), (256, 256));
//! ```

mod error;
mod grid;
mod plan;

pub use error::TileError;
pub use grid::{TileGrid, TileLayout};
pub use plan::{TilePlan, TileRect};
