//! Format detection and parsing.
//!
//! [`parse`] matches an input string against an ordered table of format
//! recognizers (full hex, short hex, integer RGB(A), float RGB(A)) and hands
//! the matched text to the corresponding decoder. Decoders extract raw
//! components and delegate numeric interpretation to the color model, so
//! every failure surfaces as a typed [`ParseError`] carrying the offending
//! input.

mod error;
mod parser;

pub use error::ParseError;
pub use parser::parse;
