//! Channel-struct color representations.
//!
//! [`RgbInt`] and [`RgbFloat`] carry the three channels of a color as 8-bit
//! integers and as floats; [`RgbaInt`] and [`RgbaFloat`] add an alpha
//! channel. Alpha is never part of the canonical [`Color`]; converting an
//! RGBA value to a color drops it.
//!
//! Float structs retain the floats they were built or parsed from, so a
//! parsed `rgb(0.67, 0.67, 0.67)` renders back with its own values instead
//! of the quantized `0.666...`.

use std::fmt;

use super::channel::{channel_to_float, format_channel, quantize_channel, CHANNEL_EPSILON};
use super::packed::Color;

/// An RGB color as three 8-bit channels.
///
/// # Example
///
/// ```
/// use colorfmt::RgbInt;
///
/// let rgb = RgbInt::new(170, 187, 204);
/// assert_eq!(rgb.color().value(), 0xaabbcc);
/// assert_eq!(rgb.to_string(), "rgb(170, 187, 204)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbInt {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbInt {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the canonical color. Exact and infallible.
    #[inline]
    pub fn color(self) -> Color {
        Color::from_channels(self.r, self.g, self.b)
    }

    /// The bare `r g b` rendering.
    pub fn triplet(self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }

    /// The float view of the same channels.
    pub fn to_float(self) -> RgbFloat {
        RgbFloat::new(
            channel_to_float(self.r),
            channel_to_float(self.g),
            channel_to_float(self.b),
        )
    }
}

impl From<Color> for RgbInt {
    fn from(c: Color) -> Self {
        let (r, g, b) = c.channels();
        Self { r, g, b }
    }
}

impl fmt::Display for RgbInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An RGB color as three float channels in `0.0..=1.0`.
///
/// The floats are retained exactly as given. Conversion to [`Color`]
/// quantizes each channel with round-to-nearest; values outside the range
/// saturate there (parsing rejects them before a representation is built).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbFloat {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbFloat {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantize into the canonical color.
    #[inline]
    pub fn color(self) -> Color {
        Color::from_channels(
            quantize_channel(self.r),
            quantize_channel(self.g),
            quantize_channel(self.b),
        )
    }

    /// Compare within one quantization step per channel.
    ///
    /// Float channels are lossy approximations of 8-bit values; exact `==`
    /// only holds for values that came from the same computation.
    pub fn approx_eq(self, other: Self) -> bool {
        (self.r - other.r).abs() <= CHANNEL_EPSILON
            && (self.g - other.g).abs() <= CHANNEL_EPSILON
            && (self.b - other.b).abs() <= CHANNEL_EPSILON
    }
}

impl From<Color> for RgbFloat {
    fn from(c: Color) -> Self {
        let (r, g, b) = c.float_channels();
        Self { r, g, b }
    }
}

impl fmt::Display for RgbFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({}, {}, {})",
            format_channel(self.r),
            format_channel(self.g),
            format_channel(self.b)
        )
    }
}

/// An RGB color with 8-bit channels plus an alpha channel.
///
/// Alpha runs from `0.0` (fully transparent) to `1.0` (fully opaque) and is
/// orthogonal to the color itself: [`RgbaInt::color`] drops it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaInt {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl RgbaInt {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The canonical color; alpha is dropped.
    #[inline]
    pub fn color(self) -> Color {
        self.rgb().color()
    }

    /// The alpha-less view of the same channels.
    #[inline]
    pub fn rgb(self) -> RgbInt {
        RgbInt::new(self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbaInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_channel(self.a)
        )
    }
}

/// An RGB color with float channels plus an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaFloat {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RgbaFloat {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The canonical color; alpha is dropped.
    #[inline]
    pub fn color(self) -> Color {
        self.rgb().color()
    }

    /// The alpha-less view of the same channels.
    #[inline]
    pub fn rgb(self) -> RgbFloat {
        RgbFloat::new(self.r, self.g, self.b)
    }

    /// Compare all four channels within one quantization step.
    pub fn approx_eq(self, other: Self) -> bool {
        self.rgb().approx_eq(other.rgb()) && (self.a - other.a).abs() <= CHANNEL_EPSILON
    }
}

impl fmt::Display for RgbaFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            format_channel(self.r),
            format_channel(self.g),
            format_channel(self.b),
            format_channel(self.a)
        )
    }
}
