//! Color model: the canonical packed color and channel conversions.
//!
//! The canonical representation is [`Color`], a validated 24-bit packed sRGB
//! integer. Everything else converts to and from it:
//!
//! - [`HexColor`]: the lowercase 6-digit hex rendering
//! - [`RgbInt`] / [`RgbaInt`]: 8-bit integer channels
//! - [`RgbFloat`] / [`RgbaFloat`]: float channels in `0.0..=1.0`
//!
//! Integer and hex conversions are exact. Float channels are 8-bit
//! quantizations (`float = int / 255`, `int = round(float * 255)`), so float
//! round-trips are exact only to within one quantization step; comparisons
//! between float channels use [`CHANNEL_EPSILON`] instead of `==`.

mod channel;
mod error;
mod packed;
mod rgb;

pub use channel::{channel_to_float, float_to_channel, format_channel, CHANNEL_EPSILON};
pub use error::{ColorError, FormatError, RangeError};
pub use packed::{Color, HexColor};
pub use rgb::{RgbFloat, RgbInt, RgbaFloat, RgbaInt};
