//! The parser's error surface.

use thiserror::Error;

use crate::color::{ColorError, FormatError, RangeError};

/// Why a color string failed to parse.
///
/// Every variant carries the offending input so callers can report it; see
/// [`ParseError::input`]. Parse failures are ordinary values, never fatal:
/// the parser does not log, retry or exit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input matched a format but its internal structure is invalid
    /// (wrong hex length, wrong component count, unparseable component).
    #[error("malformed color {input:?}: {source}")]
    Format {
        input: String,
        source: FormatError,
    },
    /// The input's structure is fine but a value falls outside its domain.
    #[error("invalid color {input:?}: {source}")]
    Range { input: String, source: RangeError },
    /// No recognizer matched the input at all.
    #[error("unknown color format: {input:?}")]
    UnknownFormat { input: String },
}

impl ParseError {
    /// The input (or matched substring) that failed.
    pub fn input(&self) -> &str {
        match self {
            Self::Format { input, .. }
            | Self::Range { input, .. }
            | Self::UnknownFormat { input } => input,
        }
    }

    /// Attach the offending input to a model error.
    pub(crate) fn from_color(input: &str, err: ColorError) -> Self {
        match err {
            ColorError::Format(source) => Self::Format {
                input: input.to_string(),
                source,
            },
            ColorError::Range(source) => Self::Range {
                input: input.to_string(),
                source,
            },
        }
    }
}
