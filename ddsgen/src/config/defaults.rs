//! Default values and well-known names.

/// Extension of every file the tool writes.
pub const OUTPUT_EXTENSION: &str = "dds";

/// Log file created in the log directory at startup.
pub const LOG_FILE: &str = "ddsgen.log";

/// Log directory when [`LOG_DIR_ENV`] is unset.
pub const DEFAULT_LOG_DIR: &str = ".";

/// Overrides the log directory.
pub const LOG_DIR_ENV: &str = "DDSGEN_LOG_DIR";

/// Set to `1` to mirror log output on stdout.
pub const LOG_STDOUT_ENV: &str = "DDSGEN_LOG_STDOUT";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";
