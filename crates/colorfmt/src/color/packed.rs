//! The canonical packed color type.

use std::fmt;

use super::channel::channel_to_float;
use super::error::{ColorError, FormatError, RangeError};

/// A 24-bit sRGB color packed into a single integer.
///
/// Red occupies bits 16-23, green bits 8-15, blue bits 0-7. The value is
/// validated at construction and always lies in `0..=0xffffff`; fallible
/// constructors reject out-of-range input rather than clamp or wrap.
///
/// `Color` is the canonical representation: every other format converts to
/// and from it.
///
/// # Example
///
/// ```
/// use colorfmt::Color;
///
/// let c = Color::from_channels(0xaa, 0xbb, 0xcc);
/// assert_eq!(c.value(), 0xaabbcc);
/// assert_eq!(c.channels(), (0xaa, 0xbb, 0xcc));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u32);

impl Color {
    /// Black, the smallest packed value.
    pub const MIN: Color = Color(0x000000);
    /// White, the largest packed value.
    pub const MAX: Color = Color(0xffffff);

    /// Pack three 8-bit channels.
    ///
    /// Infallible: every channel combination is a valid color.
    #[inline]
    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// Validate a packed value.
    pub fn from_u32(v: u32) -> Result<Self, ColorError> {
        if v > Self::MAX.0 {
            return Err(RangeError::Value {
                value: u64::from(v),
            }
            .into());
        }
        Ok(Self(v))
    }

    /// The packed integer value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Unpack into 8-bit channels. Exact; plain shifts and masks.
    #[inline]
    pub fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// Unpack into float channels, each `channel / 255`.
    #[inline]
    pub fn float_channels(self) -> (f32, f32, f32) {
        let (r, g, b) = self.channels();
        (
            channel_to_float(r),
            channel_to_float(g),
            channel_to_float(b),
        )
    }

    /// Quantize three float channels in `0.0..=1.0` into a packed color.
    ///
    /// Each channel becomes `round(v * 255)`; `0.0` maps directly to channel
    /// `0`. Any channel outside `0.0..=1.0` fails with
    /// [`RangeError::FloatChannel`].
    pub fn from_float_channels(r: f32, g: f32, b: f32) -> Result<Self, ColorError> {
        let to_channel = |v| super::channel::float_to_channel(v).map_err(ColorError::from);
        Ok(Self::from_channels(
            to_channel(r)?,
            to_channel(g)?,
            to_channel(b)?,
        ))
    }

    /// The lowercase 6-digit hex rendering.
    ///
    /// The `#` prefix is a display concern; see [`HexColor::prefixed`].
    pub fn hex(self) -> HexColor {
        HexColor {
            digits: format!("{:06x}", self.0),
            color: self,
        }
    }

    /// Parse a hex color string.
    ///
    /// Accepts an optional leading `#` and exactly 3 or 6 hex digits,
    /// case-insensitive. A 3-digit shorthand expands by doubling each digit
    /// (`abc` -> `aabbcc`). Any other length fails with
    /// [`FormatError::HexLength`], any non-hex character with
    /// [`FormatError::HexDigit`].
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FormatError::HexDigit {
                text: digits.to_string(),
            }
            .into());
        }
        let expanded;
        let digits = match digits.len() {
            6 => digits,
            3 => {
                expanded = expand_shorthand(digits);
                &expanded
            }
            len => return Err(FormatError::HexLength { len }.into()),
        };
        // Cannot fail after the digit check, but keep the error typed.
        let v = u32::from_str_radix(digits, 16).map_err(|_| FormatError::HexDigit {
            text: digits.to_string(),
        })?;
        // Always in range for 6 digits; checked anyway.
        Self::from_u32(v)
    }
}

impl fmt::Display for Color {
    /// Bare lowercase 6-digit hex, the canonical textual form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

/// Double every digit of a 3-digit shorthand hex string.
fn expand_shorthand(digits: &str) -> String {
    let mut out = String::with_capacity(6);
    for c in digits.chars() {
        out.push(c);
        out.push(c);
    }
    out
}

/// An owned, normalized hex rendering of a color.
///
/// Always lowercase and 6 digits, without the `#` prefix. Produced by
/// [`Color::hex`] and by parsing hex input (shorthand input is expanded
/// before it lands here).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    digits: String,
    color: Color,
}

impl HexColor {
    /// The bare digit string, no prefix.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The `#`-prefixed form.
    pub fn prefixed(&self) -> String {
        format!("#{}", self.digits)
    }

    /// The packed color these digits encode.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Channel packing is exact in both directions for every channel value.
    #[test]
    fn test_channel_round_trip_exact() {
        for v in 0..=255u8 {
            assert_eq!(Color::from_channels(v, v, v).channels(), (v, v, v));
        }
        // Channels land in the right bit positions.
        assert_eq!(Color::from_channels(0x12, 0x34, 0x56).value(), 0x123456);
    }

    #[test]
    fn test_from_u32_range() {
        assert_eq!(Color::from_u32(0).unwrap(), Color::MIN);
        assert_eq!(Color::from_u32(0xffffff).unwrap(), Color::MAX);
        assert!(matches!(
            Color::from_u32(0x1000000),
            Err(ColorError::Range(RangeError::Value { value: 0x1000000 }))
        ));
    }

    #[test]
    fn test_hex_rendering() {
        assert_eq!(Color::MIN.hex().as_str(), "000000");
        assert_eq!(Color::MAX.hex().as_str(), "ffffff");

        let hex = Color::from_channels(0xaa, 0xbb, 0xcc).hex();
        assert_eq!(hex.as_str(), "aabbcc");
        assert_eq!(hex.prefixed(), "#aabbcc");
        assert_eq!(hex.color().value(), 0xaabbcc);
    }

    #[test]
    fn test_from_hex_full() {
        assert_eq!(Color::from_hex("#aabbcc").unwrap().value(), 0xaabbcc);
        assert_eq!(Color::from_hex("aabbcc").unwrap().value(), 0xaabbcc);
        // Case-insensitive.
        assert_eq!(Color::from_hex("#AABBCC").unwrap().value(), 0xaabbcc);
        assert_eq!(Color::from_hex("#AaBbCc").unwrap().value(), 0xaabbcc);
    }

    #[test]
    fn test_from_hex_shorthand() {
        // Each digit doubles: abc -> aabbcc.
        assert_eq!(
            Color::from_hex("#abc").unwrap(),
            Color::from_hex("#aabbcc").unwrap()
        );
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::MAX);
        assert_eq!(Color::from_hex("000").unwrap(), Color::MIN);
    }

    #[test]
    fn test_from_hex_errors() {
        assert!(matches!(
            Color::from_hex("#aaff"),
            Err(ColorError::Format(FormatError::HexLength { len: 4 }))
        ));
        assert!(matches!(
            Color::from_hex("#ggg"),
            Err(ColorError::Format(FormatError::HexDigit { .. }))
        ));
        assert!(matches!(
            Color::from_hex(""),
            Err(ColorError::Format(FormatError::HexLength { len: 0 }))
        ));
        assert!(matches!(
            Color::from_hex("#"),
            Err(ColorError::Format(FormatError::HexLength { len: 0 }))
        ));
    }

    #[test]
    fn test_from_float_channels() {
        assert_eq!(
            Color::from_float_channels(1.0, 1.0, 1.0).unwrap(),
            Color::MAX
        );
        assert_eq!(
            Color::from_float_channels(0.0, 0.0, 0.0).unwrap(),
            Color::MIN
        );
        assert!(matches!(
            Color::from_float_channels(1.1, 0.0, 0.0),
            Err(ColorError::Range(RangeError::FloatChannel { .. }))
        ));
    }

    #[test]
    fn test_display_is_bare_hex() {
        assert_eq!(Color::MAX.to_string(), "ffffff");
        assert_eq!(Color::MIN.to_string(), "000000");
        assert_eq!(Color::from_channels(0, 0x80, 0).to_string(), "008000");
    }
}
