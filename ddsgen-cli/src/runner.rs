//! CLI runner for common setup and operations.
//!
//! Encapsulates logging initialization and the two conversion paths so
//! `main` only has to pick one.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::CliError;
use ddsgen::config::defaults::{DEFAULT_LOG_DIR, LOG_DIR_ENV, LOG_FILE, LOG_STDOUT_ENV};
use ddsgen::config::EncodeConfig;
use ddsgen::driver::{DriverError, EncodeDriver, TileOutcome};
use ddsgen::image::SourceImage;
use ddsgen::logging::{init_logging, LoggingGuard};
use ddsgen::texture::{codes, DdsTextureEncoder, TextureEncoder, TextureError};
use ddsgen::tile::TilePlan;
use tracing::{error, info};

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    driver: EncodeDriver<DdsTextureEncoder>,
}

impl CliRunner {
    /// Create a new CLI runner, initializing logging.
    ///
    /// The log directory comes from `DDSGEN_LOG_DIR` (current directory by
    /// default). Setting `DDSGEN_LOG_STDOUT=1` mirrors log events on stdout.
    pub fn new() -> Result<Self, CliError> {
        let log_dir = env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
        let stdout_enabled = env::var(LOG_STDOUT_ENV).is_ok_and(|v| v == "1");

        let logging_guard =
            init_logging(&log_dir, LOG_FILE, stdout_enabled).map_err(CliError::LoggingInit)?;

        Ok(Self {
            logging_guard,
            driver: EncodeDriver::new(DdsTextureEncoder),
        })
    }

    /// Log startup information.
    pub fn log_startup(&self, args: &[String]) {
        info!("ddsgen v{}", ddsgen::VERSION);
        info!(?args, encoder = self.driver.encoder().name(), "Command line");
    }

    /// Convert the whole image into `output`.
    ///
    /// An encoder failure is reported but is not an error for the caller;
    /// only failing to create the file is.
    pub fn convert_untiled(
        &self,
        image: &SourceImage,
        config: &EncodeConfig,
        output: &Path,
    ) -> Result<(), CliError> {
        match self.driver.run_untiled(image, config, output) {
            Ok(_) => {
                println!("Success");
                Ok(())
            }
            Err(DriverError::Encode(e)) => {
                error!(output = %output.display(), code = e.code(), error = %e, "Encoding failed");
                println!("Error : Code {}", e.code());
                print_encode_hint(&e);
                Ok(())
            }
            Err(error) => Err(CliError::Output {
                error,
                tiled: false,
            }),
        }
    }

    /// Convert every tile of `tiles` into its own file.
    pub fn convert_tiled(
        &self,
        image: &SourceImage,
        config: &EncodeConfig,
        tiles: &TilePlan,
        output: &Path,
    ) -> Result<(), CliError> {
        info!(
            grid = %tiles.grid(),
            count = tiles.grid().tile_count(),
            layout = %tiles.layout(),
            "Splitting image into tiles"
        );

        let summary = self
            .driver
            .run_tiled(image, config, tiles, output, report_tile)
            .map_err(|error| CliError::Output { error, tiled: true })?;

        info!(
            written = summary.written,
            failed = summary.failed,
            "Tiled conversion finished"
        );
        Ok(())
    }
}

fn report_tile(outcome: &TileOutcome) {
    match &outcome.result {
        Ok(_) => println!("Output file created."),
        Err(e) => {
            println!("Error during output file creation. Code : {}", e.code());
            print_encode_hint(e);
        }
    }
}

fn print_encode_hint(error: &TextureError) {
    if error.code() == codes::NOT_POWER_OF_TWO {
        println!("This error is probably due to an incorrect texture format.");
        println!("If you want to use DXTi format, the tiles must be 2^k x 2^l");
    }
}
