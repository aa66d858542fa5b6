//! Encode driver: opens output files and feeds pixels to the encoder.
//!
//! The driver is the only part of the crate that touches the output
//! filesystem. One file is open at a time; it is flushed and closed before
//! the next tile starts.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::EncodeConfig;
use crate::image::SourceImage;
use crate::texture::{EncodeSummary, Surface, TextureEncoder, TextureError};
use crate::tile::{TilePlan, TileRect};

/// Failures that end a run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Impossible to open/create the file : {}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The encoder failed on an untiled image.
    #[error("Code {code}: {0}", code = .0.code())]
    Encode(TextureError),
}

/// Result of encoding one tile.
#[derive(Debug)]
pub struct TileOutcome {
    pub path: PathBuf,
    pub rect: TileRect,
    pub result: Result<EncodeSummary, TextureError>,
}

/// Totals for a tiled run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TiledSummary {
    pub written: usize,
    pub failed: usize,
}

/// Writes encoder output to files.
pub struct EncodeDriver<E> {
    encoder: E,
}

impl<E: TextureEncoder> EncodeDriver<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Encode the whole image into `output`.
    pub fn run_untiled(
        &self,
        image: &SourceImage,
        config: &EncodeConfig,
        output: &Path,
    ) -> Result<EncodeSummary, DriverError> {
        let file = create_output(output)?;
        let surface = Surface::new(
            image.pixels(),
            image.width(),
            image.height(),
            image.row_stride(),
            config.pixel_order,
        )
        .map_err(DriverError::Encode)?;

        let summary = self
            .encode_into(file, &surface, config)
            .map_err(DriverError::Encode)?;

        info!(
            output = %output.display(),
            encoder = self.encoder.name(),
            format = %summary.format,
            mip_levels = summary.mip_levels,
            bytes = summary.bytes_written,
            "Texture written"
        );
        Ok(summary)
    }

    /// Encode every tile of `tiles` into its own file next to `output`.
    ///
    /// `on_tile` sees each outcome as soon as the tile is done. Encode
    /// failures are reported there and the loop moves on; failing to open a
    /// tile file stops the run and leaves later tiles unattempted.
    pub fn run_tiled(
        &self,
        image: &SourceImage,
        config: &EncodeConfig,
        tiles: &TilePlan,
        output: &Path,
        mut on_tile: impl FnMut(&TileOutcome),
    ) -> Result<TiledSummary, DriverError> {
        let mut summary = TiledSummary::default();
        let bpp = image.bytes_per_pixel() as usize;

        for rect in tiles.tiles() {
            let path = tiles.tile_path(output, &rect);
            let file = create_output(&path)?;

            let buffer = tiles.extract(image, &rect);
            let result = Surface::new(
                &buffer,
                rect.width,
                rect.height,
                rect.width as usize * bpp,
                config.pixel_order,
            )
            .and_then(|surface| self.encode_into(file, &surface, config));

            match &result {
                Ok(encoded) => {
                    summary.written += 1;
                    info!(
                        tile = %path.display(),
                        col = rect.col,
                        row = rect.row,
                        bytes = encoded.bytes_written,
                        "Tile written"
                    );
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!(
                        tile = %path.display(),
                        code = e.code(),
                        error = %e,
                        "Tile encode failed"
                    );
                }
            }

            on_tile(&TileOutcome { path, rect, result });
        }

        Ok(summary)
    }

    fn encode_into(
        &self,
        file: File,
        surface: &Surface<'_>,
        config: &EncodeConfig,
    ) -> Result<EncodeSummary, TextureError> {
        let mut writer = BufWriter::new(file);
        let summary = self.encoder.encode(surface, config, &mut writer)?;
        writer
            .flush()
            .map_err(|e| TextureError::WriteFailed(e.to_string()))?;
        Ok(summary)
    }
}

fn create_output(path: &Path) -> Result<File, DriverError> {
    File::create(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "Cannot create output file");
        DriverError::OutputOpen {
            path: path.to_path_buf(),
            source,
        }
    })
}
