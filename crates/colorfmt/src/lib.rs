//! colorfmt: detection, parsing and conversion of sRGB color formats
//!
//! This library converts colors among a small set of textual and numeric
//! representations: a packed 24-bit sRGB integer, hexadecimal strings,
//! integer-channel RGB triplets, float-channel RGB triplets, and their
//! alpha-carrying RGBA variants.
//!
//! # Quick Start
//!
//! [`parse`] is the primary entry point. It detects the format of an input
//! string and returns a [`Representation`] tagged with the recognized format:
//!
//! ```
//! use colorfmt::{parse, Representation};
//!
//! let rep = parse("#abc").unwrap();
//! assert!(matches!(rep, Representation::Hex(_)));
//! assert_eq!(rep.color().value(), 0xaabbcc);
//!
//! let rep = parse("rgb(255, 255, 255)").unwrap();
//! assert_eq!(rep.color(), colorfmt::Color::MAX);
//! ```
//!
//! Every representation converts to the canonical [`Color`], and every
//! representation renders to a string that parses back to the same canonical
//! color.
//!
//! # Formats
//!
//! | Format | Example inputs | Representation |
//! |--------|----------------|----------------|
//! | Full hex | `#aabbcc`, `aabbcc` | [`Representation::Hex`] |
//! | Shorthand hex | `#abc`, `abc` | [`Representation::Hex`] (digits doubled) |
//! | Integer RGB | `rgb(170, 187, 204)`, `170 187 204` | [`Representation::RgbInt`] |
//! | Integer RGBA | `rgba(170, 187, 204, 0.5)` | [`Representation::RgbaInt`] |
//! | Float RGB | `rgb(0.67, 0.73, 0.8)`, `0.5 0.5 0.5` | [`Representation::RgbFloat`] |
//! | Float RGBA | `rgba(1.0, 1.0, 1.0, 0.5)` | [`Representation::RgbaFloat`] |
//!
//! # Parsing pipeline
//!
//! ```text
//! input string
//!     |
//!     v
//! ordered recognizers      (full hex, short hex, integer RGB(A), float RGB(A))
//!     |
//!     v
//! matched decoder          (extracts raw components)
//!     |
//!     v
//! color model              (quantization, range validation)
//!     |
//!     v
//! Representation           (tagged with the recognized format)
//! ```
//!
//! Recognizer order matters: `#`-prefixed strings can never match a numeric
//! pattern, so hex is tried first, and trying the integer pattern before the
//! float pattern resolves strings with no decimal point unambiguously.
//!
//! # Purity
//!
//! The crate is purely functional: no I/O, no logging, no shared mutable
//! state. Every operation is a bounded computation over its arguments and is
//! safe to call concurrently from any number of threads.

pub mod color;
pub mod parse;
pub mod representation;


pub use color::{
    Color, ColorError, FormatError, HexColor, RangeError, RgbFloat, RgbInt, RgbaFloat, RgbaInt,
};
pub use parse::{parse, ParseError};
pub use representation::Representation;
