//! Tagged color representations.
//!
//! Parsing preserves which textual format was recognized, so callers can
//! echo a color back in the format it arrived in and enumerate the other
//! formats it converts to. [`Representation`] is the closed set of formats;
//! conversion and rendering are exhaustive matches over it.

use std::fmt;

use crate::color::{Color, HexColor, RgbFloat, RgbInt, RgbaFloat, RgbaInt};

/// A color tagged with the representation it was written in.
///
/// Representations are immutable value types: conversions produce new
/// values, equality is component equality, and there is no identity beyond
/// the value itself.
///
/// # Example
///
/// ```
/// use colorfmt::{parse, Representation};
///
/// let rep = parse("rgba(255, 255, 255, 0.5)").unwrap();
/// assert!(matches!(rep, Representation::RgbaInt(_)));
/// assert_eq!(rep.format_name(), "RGBA");
/// assert_eq!(rep.color().value(), 0xffffff);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Representation {
    /// The packed canonical value itself.
    Canonical(Color),
    /// A hex digit string such as `#aabbcc` or `fff`.
    Hex(HexColor),
    /// Integer channels: `rgb(170, 187, 204)` or `170 187 204`.
    RgbInt(RgbInt),
    /// Float channels: `rgb(0.67, 0.73, 0.8)`.
    RgbFloat(RgbFloat),
    /// Integer channels with alpha: `rgba(170, 187, 204, 0.5)`.
    RgbaInt(RgbaInt),
    /// Float channels with alpha: `rgba(1.0, 1.0, 1.0, 0.5)`.
    RgbaFloat(RgbaFloat),
}

impl Representation {
    /// The canonical color common to every representation.
    ///
    /// Alpha variants drop their alpha here; alpha is orthogonal to the
    /// color itself.
    pub fn color(&self) -> Color {
        match self {
            Self::Canonical(c) => *c,
            Self::Hex(hex) => hex.color(),
            Self::RgbInt(rgb) => rgb.color(),
            Self::RgbFloat(rgb) => rgb.color(),
            Self::RgbaInt(rgba) => rgba.color(),
            Self::RgbaFloat(rgba) => rgba.color(),
        }
    }

    /// Stable display name of the recognized format.
    pub fn format_name(&self) -> &'static str {
        match self {
            Self::Canonical(_) => "sRGB",
            Self::Hex(_) => "hex",
            Self::RgbInt(_) | Self::RgbFloat(_) => "RGB",
            Self::RgbaInt(_) | Self::RgbaFloat(_) => "RGBA",
        }
    }
}

impl From<Color> for Representation {
    fn from(c: Color) -> Self {
        Self::Canonical(c)
    }
}

impl fmt::Display for Representation {
    /// Render in the tagged format.
    ///
    /// Every rendering parses back to the same canonical color. `Canonical`
    /// renders as bare hex digits; a decimal packed value would itself look
    /// like an (out-of-range) hex string to the parser.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical(c) => c.fmt(f),
            Self::Hex(hex) => hex.fmt(f),
            Self::RgbInt(rgb) => rgb.fmt(f),
            Self::RgbFloat(rgb) => rgb.fmt(f),
            Self::RgbaInt(rgba) => rgba.fmt(f),
            Self::RgbaFloat(rgba) => rgba.fmt(f),
        }
    }
}
