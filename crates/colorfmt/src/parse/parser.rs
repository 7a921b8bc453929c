//! The ordered format recognizer table and its decoders.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Color, FormatError, RangeError, RgbFloat, RgbInt, RgbaFloat, RgbaInt};
use crate::representation::Representation;

use super::error::ParseError;

type Decoder = fn(&str) -> Result<Representation, ParseError>;

/// Recognizers in priority order, each paired with its decoder.
///
/// Order matters: `#`-prefixed strings can never match a numeric pattern, so
/// hex is tried first, and trying the integer pattern before the float
/// pattern resolves strings with no decimal point unambiguously. Patterns
/// only recognize the overall shape; decoders validate lengths, counts and
/// ranges so that recognized-but-invalid input reports what is wrong with it
/// instead of falling through to the next pattern.
static RECOGNIZERS: LazyLock<[(Regex, Decoder); 4]> = LazyLock::new(|| {
    [
        // Four or more hex digits: 6 is the full form; other lengths are
        // rejected at decode time with a length or range error.
        (
            Regex::new(r"^#?[0-9a-fA-F]{4,}$").unwrap(),
            decode_hex as Decoder,
        ),
        // Three digit shorthand hex (#fff).
        (Regex::new(r"^#?[0-9a-fA-F]{3}$").unwrap(), decode_hex),
        // Integer channels (rgb(255, 255, 255), 174,235,255, 255 255 255),
        // optionally with a trailing alpha component.
        (
            Regex::new(r"^(?:rgba?\()?\d{1,3}(?:(?:,\s*|\s+)\d{1,3}){2}(?:(?:,\s*|\s+)[0-9]*\.?[0-9]+)?\)?$").unwrap(),
            decode_rgb_int,
        ),
        // Float channels (rgb(1.0, 1.0, 1.0), 0.5 0.5 0.5), optionally with
        // a trailing alpha component.
        (
            Regex::new(r"^(?:rgba?\()?[0-9]*\.[0-9]+(?:(?:,\s*|\s+)[0-9]*\.[0-9]+){2}(?:(?:,\s*|\s+)[0-9]*\.?[0-9]+)?\)?$").unwrap(),
            decode_rgb_float,
        ),
    ]
});

/// Detect the format of `input` and parse it into a tagged representation.
///
/// Surrounding whitespace is trimmed; the first recognizer whose pattern
/// matches selects the decoder, and the matched text is handed to it. When
/// no recognizer matches, the failure is [`ParseError::UnknownFormat`] with
/// the original input.
///
/// # Examples
///
/// ```
/// use colorfmt::{parse, ParseError};
///
/// assert_eq!(parse("#fff").unwrap().color().value(), 0xffffff);
/// assert_eq!(parse("255 255 255").unwrap().color().value(), 0xffffff);
///
/// let err = parse("not a color").unwrap_err();
/// assert!(matches!(err, ParseError::UnknownFormat { .. }));
/// ```
pub fn parse(input: &str) -> Result<Representation, ParseError> {
    let trimmed = input.trim();
    for (pattern, decode) in RECOGNIZERS.iter() {
        if let Some(matched) = pattern.find(trimmed) {
            return decode(matched.as_str());
        }
    }
    Err(ParseError::UnknownFormat {
        input: input.to_string(),
    })
}

impl FromStr for Color {
    type Err = ParseError;

    /// Parse any recognized color format into its canonical color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|rep| rep.color())
    }
}

fn decode_hex(input: &str) -> Result<Representation, ParseError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() > 6 {
        // Over-long all-hex strings: digits above the 24-bit maximum are a
        // range failure (#1000000), anything else a length failure.
        if let Ok(value) = u64::from_str_radix(digits, 16) {
            if value > u64::from(Color::MAX.value()) {
                return Err(ParseError::Range {
                    input: input.to_string(),
                    source: RangeError::Value { value },
                });
            }
        }
        return Err(ParseError::Format {
            input: input.to_string(),
            source: FormatError::HexLength { len: digits.len() },
        });
    }
    let color = Color::from_hex(digits).map_err(|e| ParseError::from_color(input, e))?;
    Ok(Representation::Hex(color.hex()))
}

fn decode_rgb_int(input: &str) -> Result<Representation, ParseError> {
    let parts = components(input);
    let alpha = parse_optional_alpha(input, &parts)?;

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: u32 = part.parse().map_err(|_| ParseError::Format {
            input: input.to_string(),
            source: FormatError::IntChannel {
                text: part.to_string(),
            },
        })?;
        if value > 255 {
            return Err(ParseError::Range {
                input: input.to_string(),
                source: RangeError::IntChannel { value },
            });
        }
        *slot = value as u8;
    }

    let [r, g, b] = channels;
    Ok(match alpha {
        Some(a) => Representation::RgbaInt(RgbaInt::new(r, g, b, a)),
        None => Representation::RgbInt(RgbInt::new(r, g, b)),
    })
}

fn decode_rgb_float(input: &str) -> Result<Representation, ParseError> {
    let parts = components(input);
    let alpha = parse_optional_alpha(input, &parts)?;

    let mut channels = [0f32; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| ParseError::Format {
            input: input.to_string(),
            source: FormatError::FloatChannel {
                text: part.to_string(),
            },
        })?;
    }

    let [r, g, b] = channels;
    // Quantization validates the 0.0..=1.0 range per channel; the
    // representation retains the parsed floats.
    Color::from_float_channels(r, g, b).map_err(|e| ParseError::from_color(input, e))?;
    Ok(match alpha {
        Some(a) => Representation::RgbaFloat(RgbaFloat::new(r, g, b, a)),
        None => Representation::RgbFloat(RgbFloat::new(r, g, b)),
    })
}

/// Split a component string on commas when any comma is present, falling
/// back to whitespace only when there is none. Mixed separators therefore
/// produce the wrong component count and fail downstream.
fn components(s: &str) -> Vec<&str> {
    let body = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))
        .unwrap_or(s);
    let body = body.strip_suffix(')').unwrap_or(body);
    if body.contains(',') {
        body.split(',').map(str::trim).collect()
    } else {
        body.split_whitespace().collect()
    }
}

/// Validate the component count and parse the 4th component as alpha when
/// present. Three components carry no alpha; a fourth must be a number in
/// `0.0..=1.0`.
fn parse_optional_alpha(input: &str, parts: &[&str]) -> Result<Option<f32>, ParseError> {
    match parts.len() {
        3 => Ok(None),
        4 => {
            let text = parts[3];
            let a: f32 = text.parse().map_err(|_| ParseError::Format {
                input: input.to_string(),
                source: FormatError::Alpha {
                    text: text.to_string(),
                },
            })?;
            if !(0.0..=1.0).contains(&a) {
                return Err(ParseError::Range {
                    input: input.to_string(),
                    source: RangeError::Alpha { value: a },
                });
            }
            Ok(Some(a))
        }
        count => Err(ParseError::Format {
            input: input.to_string(),
            source: FormatError::ComponentCount { count },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Table of inputs and the canonical color they parse to, adapted from
    /// the formats the parser promises to recognize.
    #[test]
    fn test_parse_table() {
        let cases: &[(&str, u32)] = &[
            // Integer RGB in every separator style.
            ("rgb(0,0,0)", 0x000000),
            ("rgb(255,255,255)", 0xffffff),
            ("rgb(255, 255, 255)", 0xffffff),
            ("0,0,0", 0x000000),
            ("0, 0, 0", 0x000000),
            ("174,235,255", 0xaeebff),
            ("0 0 0", 0x000000),
            ("255 255 255", 0xffffff),
            // Integer RGB with a trailing alpha.
            ("rgb(255, 255, 255, 0.5)", 0xffffff),
            ("rgba(255,255,255,0.5)", 0xffffff),
            ("255 255 255 0.5", 0xffffff),
            // Float RGB.
            ("rgb(1.0,1.0,1.0)", 0xffffff),
            ("rgb(1.0, 1.0, 1.0)", 0xffffff),
            ("rgba(1.0, 1.0, 1.0, 0.5)", 0xffffff),
            ("rgba(0.0, 0.0, 0.0, 0.0)", 0x000000),
            ("rgba(1.0, 1.0, 1.0, 1.0)", 0xffffff),
            ("rgba(1.0,1.0,1.0)", 0xffffff),
            ("0.5 0.5 0.5", 0x808080),
            // Hex, with and without prefix, shorthand and full.
            ("#000", 0x000000),
            ("#FFF", 0xffffff),
            ("#fff", 0xffffff),
            ("#ABC", 0xaabbcc),
            ("#abc", 0xaabbcc),
            ("#AABBCC", 0xaabbcc),
            ("#aabbcc", 0xaabbcc),
            ("#def", 0xddeeff),
            ("def", 0xddeeff),
            ("aabbcc", 0xaabbcc),
        ];

        for &(input, expected) in cases {
            let rep = parse(input).unwrap_or_else(|e| panic!("parse({input:?}) failed: {e}"));
            assert_eq!(
                rep.color().value(),
                expected,
                "parse({input:?}) picked {rep:?}"
            );
        }
    }

    #[test]
    fn test_parse_failures() {
        let cases: &[&str] = &[
            "#aaff",      // 4 hex digits
            "#1000000",   // exceeds the 24-bit maximum
            "not a color",
            "",
            "256,0,0",    // channel above 255
            "rgb(1.1, 0.0, 0.0)", // float channel above 1.0
            "1 0,0 0",    // mixed separators
            "rgb(1,2)",   // too few components
            "1,2,3,4,5",  // too many components
            "rgba(255,255,255,2.0)", // alpha above 1.0
        ];

        for &input in cases {
            assert!(parse(input).is_err(), "parse({input:?}) should fail");
        }
    }

    #[test]
    fn test_error_taxonomy() {
        // Wrong hex length is structural.
        assert!(matches!(
            parse("#aaff"),
            Err(ParseError::Format {
                source: FormatError::HexLength { len: 4 },
                ..
            })
        ));
        // A 7-digit hex parses to a number beyond the packed maximum.
        assert!(matches!(
            parse("#1000000"),
            Err(ParseError::Range {
                source: RangeError::Value { value: 0x1000000 },
                ..
            })
        ));
        // A channel above 255 is a range failure, not a format one.
        assert!(matches!(
            parse("256,0,0"),
            Err(ParseError::Range {
                source: RangeError::IntChannel { value: 256 },
                ..
            })
        ));
        // No recognizer matched at all.
        let err = parse("not a color").unwrap_err();
        assert!(matches!(err, ParseError::UnknownFormat { .. }));
        assert_eq!(err.input(), "not a color");
    }

    #[test]
    fn test_recognized_formats_are_tagged() {
        assert!(matches!(
            parse("#fff").unwrap(),
            Representation::Hex(_)
        ));
        assert!(matches!(
            parse("255 255 255").unwrap(),
            Representation::RgbInt(_)
        ));
        assert!(matches!(
            parse("rgb(1.0, 1.0, 1.0)").unwrap(),
            Representation::RgbFloat(_)
        ));
        assert!(matches!(
            parse("rgba(255, 255, 255, 0.5)").unwrap(),
            Representation::RgbaInt(RgbaInt { a, .. }) if a == 0.5
        ));
        assert!(matches!(
            parse("rgba(0.0, 0.0, 0.0, 0.0)").unwrap(),
            Representation::RgbaFloat(_)
        ));
        // An rgba( head without a 4th component carries no alpha.
        assert!(matches!(
            parse("rgba(1.0,1.0,1.0)").unwrap(),
            Representation::RgbFloat(_)
        ));
    }

    #[test]
    fn test_inclusive_upper_bounds() {
        assert_eq!(parse("255,255,255").unwrap().color(), Color::MAX);
        assert_eq!(parse("rgb(1.0, 1.0, 1.0)").unwrap().color(), Color::MAX);
        assert!(parse("256,255,255").is_err());
        assert!(parse("rgb(1.1, 1.0, 1.0)").is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(parse("  #ffffff  ").unwrap().color(), Color::MAX);
        assert_eq!(parse("\trgb(0, 0, 0)\n").unwrap().color(), Color::MIN);
    }

    #[test]
    fn test_from_str_for_color() {
        let white: Color = "#fff".parse().unwrap();
        assert_eq!(white, Color::MAX);
        let black: Color = "rgb(0, 0, 0)".parse().unwrap();
        assert_eq!(black, Color::MIN);
        assert!("junk".parse::<Color>().is_err());
    }

    #[test]
    fn test_float_representation_retains_input_floats() {
        let rep = parse("0.5 0.5 0.5").unwrap();
        let Representation::RgbFloat(rgb) = rep else {
            panic!("expected a float representation, got {rep:?}");
        };
        assert_eq!(rgb.r, 0.5);
        assert_eq!(rgb.g, 0.5);
        assert_eq!(rgb.b, 0.5);
    }
}
