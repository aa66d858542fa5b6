//! Tile grid and layout descriptions.

use std::fmt;
use std::str::FromStr;

use super::TileError;
use crate::dds::FormatNameError;

/// Number of tile columns and rows, both at least one once planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileGrid {
    pub columns: u32,
    pub rows: u32,
}

impl TileGrid {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Parse `<columns>-<rows>`.
    ///
    /// The first `-` separates the two counts; it may be neither the first
    /// nor the last character. Both sides must be whole unsigned numbers.
    /// Zero counts parse here and are rejected by [`TilePlan::new`](super::TilePlan::new).
    pub fn parse(value: &str) -> Result<Self, TileError> {
        let syntax = || TileError::InvalidSplitSyntax(value.to_string());

        let dash = value.find('-').ok_or_else(syntax)?;
        if dash == 0 || dash == value.len() - 1 {
            return Err(syntax());
        }

        let columns = value[..dash].parse::<u32>().map_err(|_| syntax())?;
        let rows = value[dash + 1..].parse::<u32>().map_err(|_| syntax())?;
        Ok(Self { columns, rows })
    }

    pub fn tile_count(&self) -> u32 {
        self.columns * self.rows
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.columns, self.rows)
    }
}

/// How tiles are cut out of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileLayout {
    /// Disjoint tiles of exactly `width / columns` × `height / rows`.
    #[default]
    Exact,
    /// Neighbouring tiles share their border row and column.
    ///
    /// Fits `k·columns + 1` wide images such as `2^n + 1` height maps:
    /// each tile is `k + 1` pixels wide.
    SharedEdge,
}

const LAYOUT_NAMES: [(&str, TileLayout); 2] = [
    ("exact", TileLayout::Exact),
    ("shared", TileLayout::SharedEdge),
];

impl TileLayout {
    pub fn name(self) -> &'static str {
        match self {
            TileLayout::Exact => "exact",
            TileLayout::SharedEdge => "shared",
        }
    }
}

impl FromStr for TileLayout {
    type Err = FormatNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LAYOUT_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, layout)| *layout)
            .ok_or_else(|| FormatNameError::new("tile layout", s))
    }
}

impl fmt::Display for TileLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        assert_eq!(TileGrid::parse("2-3").unwrap(), TileGrid::new(2, 3));
        assert_eq!(TileGrid::parse("10-1").unwrap(), TileGrid::new(10, 1));
    }

    #[test]
    fn test_parse_accepts_zero_counts() {
        assert_eq!(TileGrid::parse("0-4").unwrap(), TileGrid::new(0, 4));
    }

    #[test]
    fn test_parse_rejects_bad_syntax() {
        for value in ["", "-", "22", "-2", "2-", "a-2", "2-b", "2-2-2", "2 -2", "2-2x", "-2-2"] {
            assert_eq!(
                TileGrid::parse(value).unwrap_err(),
                TileError::InvalidSplitSyntax(value.to_string()),
                "{value:?}"
            );
        }
    }

    #[test]
    fn test_grid_display_and_count() {
        let grid = TileGrid::new(4, 2);
        assert_eq!(grid.to_string(), "4-2");
        assert_eq!(grid.tile_count(), 8);
    }

    #[test]
    fn test_layout_names() {
        assert_eq!("exact".parse::<TileLayout>().unwrap(), TileLayout::Exact);
        assert_eq!(
            "shared".parse::<TileLayout>().unwrap(),
            TileLayout::SharedEdge
        );
        assert!("Exact".parse::<TileLayout>().is_err());
        assert_eq!(TileLayout::default(), TileLayout::Exact);
        assert_eq!(TileLayout::SharedEdge.to_string(), "shared");
    }
}
