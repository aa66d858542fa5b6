//! Parameter errors.

use thiserror::Error;

/// Errors raised while turning command-line tokens into [`Parameters`](super::Parameters).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A `-` token that carries no value.
    #[error("Syntax")]
    Syntax,

    #[error("Parameter already defined: -{0}")]
    DuplicateOption(char),

    /// A third positional token after input and output are both set.
    #[error("Too many file arguments: {0}")]
    DuplicatePositionalArgument(String),

    #[error("Unknown parameter {0}")]
    UnknownParameter(char),

    #[error("Invalid parameter ('{0}') value")]
    InvalidParameter(char),

    #[error("No input file defined")]
    InputFileUndefined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ParamError::Syntax.to_string(), "Syntax");
        assert_eq!(
            ParamError::UnknownParameter('z').to_string(),
            "Unknown parameter z"
        );
        assert_eq!(
            ParamError::InvalidParameter('f').to_string(),
            "Invalid parameter ('f') value"
        );
        assert_eq!(
            ParamError::DuplicatePositionalArgument("c.png".into()).to_string(),
            "Too many file arguments: c.png"
        );
    }
}
