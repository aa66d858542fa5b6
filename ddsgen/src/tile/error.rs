//! Error types for tile partitioning.

use std::fmt;

use super::TileLayout;

/// Errors that can occur while planning a tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// The `-s` value is not `<columns>-<rows>`
    InvalidSplitSyntax(String),
    /// The grid does not fit the image under the selected layout
    InvalidSplitGeometry {
        columns: u32,
        rows: u32,
        width: u32,
        height: u32,
        layout: TileLayout,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::InvalidSplitSyntax(value) => {
                write!(f, "Invalid parameter ('s') value ( -s n-m ): '{}'", value)
            }
            TileError::InvalidSplitGeometry {
                columns,
                rows,
                width,
                height,
                layout,
            } => write!(
                f,
                "Split impossible with those values: {}-{} tiles on a {}×{} image ({} layout)",
                columns, rows, width, height, layout
            ),
        }
    }
}

impl std::error::Error for TileError {}
