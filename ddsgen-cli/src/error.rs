//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::io;
use std::process;

use ddsgen::config::ResolveError;
use ddsgen::driver::DriverError;
use ddsgen::image::ImageError;
use ddsgen::params::ParamError;
use ddsgen::tile::{TileError, TileLayout};
use tracing::error;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(io::Error),
    /// Malformed or invalid command line
    Params(ParamError),
    /// Failed to load the input image
    Image(ImageError),
    /// Parameters do not fit the loaded image
    Resolve(ResolveError),
    /// Failed to create an output file
    Output { error: DriverError, tiled: bool },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        error!(error = %self, "Conversion aborted");
        eprintln!("Error : {}", self);

        match self {
            CliError::Resolve(ResolveError::Tile(TileError::InvalidSplitGeometry {
                layout,
                ..
            })) => {
                eprintln!("If you split the image in N*M tiles, remember that:");
                match layout {
                    TileLayout::Exact => eprintln!("IMG_X modulo N = 0 (same for Y)"),
                    TileLayout::SharedEdge => {
                        eprintln!("IMG_X + N - 1 modulo N = 0 (same for Y)")
                    }
                }
            }
            CliError::Output { tiled: true, .. } => {
                eprintln!("Not all DDS files were generated");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Params(e) => write!(f, "{}", e),
            CliError::Image(e) => write!(f, "{}", e),
            CliError::Resolve(e) => write!(f, "{}", e),
            CliError::Output { error, .. } => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::Params(e) => Some(e),
            CliError::Image(e) => Some(e),
            CliError::Resolve(e) => Some(e),
            CliError::Output { error, .. } => Some(error),
        }
    }
}

impl From<ParamError> for CliError {
    fn from(e: ParamError) -> Self {
        CliError::Params(e)
    }
}

impl From<ImageError> for CliError {
    fn from(e: ImageError) -> Self {
        CliError::Image(e)
    }
}

impl From<ResolveError> for CliError {
    fn from(e: ResolveError) -> Self {
        CliError::Resolve(e)
    }
}
