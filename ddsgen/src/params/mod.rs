//! Command-line parameter parsing and validation.
//!
//! Parsing happens in two steps. [`parse_args`] turns raw tokens into a
//! [`ParameterMap`] keyed by option character, or decides that usage or
//! help should be shown. [`validate`] then checks every key and value and
//! produces the typed [`Parameters`] record everything downstream reads.
//!
//! # Example
//!
//! ```
//! use ddsgen::params::{parse_args, validate, Invocation};
//!
//! let Invocation::Convert(map) = parse_args(["-f", "DXT5", "terrain.png"]).unwrap() else {
//!     panic!("expected a conversion");
//! };
//! let params = validate(&map).unwrap();
//! assert_eq!(params.output.to_str(), Some("terrain.dds"));
//! ```

mod error;
mod keys;
mod tokens;
mod validate;

pub use error::ParamError;
pub use keys::ParamKey;
pub use tokens::{parse_args, ParameterMap};
pub use validate::{default_output, output_stem, validate, Parameters};

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments at all
    Usage,
    /// Help text was requested
    Help,
    /// Convert with these (unvalidated) parameters
    Convert(ParameterMap),
}
