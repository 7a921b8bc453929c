//! Channel quantization between 8-bit and float representations.
//!
//! A channel is a `u8` in `0..=255` or equivalently an `f32` in `0.0..=1.0`.
//! The two views are tied by a fixed quantization: `float = int / 255` and
//! `int = round(float * 255)`, rounding to nearest with ties away from zero.

use super::error::RangeError;

/// One quantization step at 8-bit precision.
///
/// Float channels are lossy approximations of 8-bit values, so comparisons
/// between them use this tolerance instead of exact equality.
pub const CHANNEL_EPSILON: f32 = 1.0 / 255.0;

/// Convert an 8-bit channel to its float form.
#[inline]
pub fn channel_to_float(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Convert a float channel in `0.0..=1.0` to its 8-bit form.
///
/// `0.0` maps straight to channel `0` without going through the rounding
/// formula. Out-of-range values (NaN included) fail with
/// [`RangeError::FloatChannel`].
#[inline]
pub fn float_to_channel(v: f32) -> Result<u8, RangeError> {
    if !(0.0..=1.0).contains(&v) {
        return Err(RangeError::FloatChannel { value: v });
    }
    if v == 0.0 {
        return Ok(0);
    }
    Ok((v * 255.0).round() as u8)
}

/// Quantize a retained display float back to an 8-bit channel, saturating
/// instead of failing. Parsing validates ranges up front, so saturation only
/// applies to hand-built values.
#[inline]
pub(crate) fn quantize_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Render a float channel for display.
///
/// One decimal place when the value has no more than one significant decimal
/// digit (`1.0`, `0.5`), two otherwise (`0.67`). Display only; parsing never
/// relies on this rule.
pub fn format_channel(v: f32) -> String {
    let hundredths = (f64::from(v) * 100.0).round() as i64;
    if hundredths % 10 == 0 {
        format!("{:.1}", hundredths as f64 / 100.0)
    } else {
        format!("{:.2}", hundredths as f64 / 100.0)
    }
}
