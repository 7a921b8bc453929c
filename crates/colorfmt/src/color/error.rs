//! Error types for the color model.
//!
//! The taxonomy separates structural defects ([`FormatError`]) from domain
//! defects ([`RangeError`]): a hex string of the wrong length is malformed,
//! while a channel value of 256 is well-formed but out of range.

use thiserror::Error;

/// The input's structure does not form a valid color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Hex strings carry 3 or 6 digits after the optional `#`.
    #[error("hex colors are 3 or 6 digits long, found {len}")]
    HexLength { len: usize },
    /// A character outside `0-9a-fA-F` in a hex string.
    #[error("invalid hex digit in {text:?}")]
    HexDigit { text: String },
    /// RGB forms carry exactly 3 components, RGBA forms 4.
    #[error("expected 3 or 4 color components, found {count}")]
    ComponentCount { count: usize },
    /// An integer channel that does not parse as an integer.
    #[error("invalid integer channel {text:?}")]
    IntChannel { text: String },
    /// A float channel that does not parse as a float.
    #[error("invalid float channel {text:?}")]
    FloatChannel { text: String },
    /// An alpha component that does not parse as a number.
    #[error("invalid alpha component {text:?}")]
    Alpha { text: String },
}

/// A value parsed correctly but falls outside its valid domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// Packed color values live in `0..=0xffffff`.
    #[error("color value {value:#x} exceeds 0xffffff")]
    Value { value: u64 },
    /// Integer channels live in `0..=255`.
    #[error("channel value {value} exceeds 255")]
    IntChannel { value: u32 },
    /// Float channels live in `0.0..=1.0`.
    #[error("float channel {value} outside 0.0..=1.0")]
    FloatChannel { value: f32 },
    /// Alpha lives in `0.0..=1.0`.
    #[error("alpha value {value} outside 0.0..=1.0")]
    Alpha { value: f32 },
}

/// Any color model failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Range(#[from] RangeError),
}
