//! IEEE-754 single-precision transcoding
//!
//! Builds the f32 bit pattern for a Q7 raw value directly from its bits:
//! the highest set magnitude bit becomes the implicit leading one, its
//! position (offset by the fractional width) becomes the exponent, and the
//! bits below it are aligned into the 23-bit mantissa. Bits that do not fit
//! the mantissa are truncated, never rounded.

use crate::fixed::FRACTIONAL_BITS;

/// Single-precision exponent bias
pub const EXPONENT_BIAS: u32 = 127;

/// Width of the single-precision mantissa field
pub const MANTISSA_BITS: u32 = 23;

pub const SIGN_MASK: u32 = 0x8000_0000;
pub const MAGNITUDE_MASK: u32 = 0x7fff_ffff;
pub const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Absolute value of a raw value, as unsigned bits.
///
/// Returns 0 whenever the low 31 bits of `raw` are clear, which covers both
/// 0 and the sign-bit-only pattern `i32::MIN`.
pub const fn magnitude_bits(raw: i32) -> u32 {
    if raw as u32 & MAGNITUDE_MASK == 0 {
        0
    } else {
        raw.unsigned_abs()
    }
}

/// Position of the highest set bit, or `None` for 0
pub const fn leading_bit(magnitude: u32) -> Option<u32> {
    if magnitude == 0 {
        None
    } else {
        Some(u32::BITS - 1 - magnitude.leading_zeros())
    }
}

/// Biased f32 exponent for a raw value, `None` when the value encodes as zero
pub fn exponent_field(raw: i32) -> Option<u32> {
    leading_bit(magnitude_bits(raw)).map(|n| EXPONENT_BIAS - FRACTIONAL_BITS + n)
}

/// 23-bit f32 mantissa for a raw value, with the implicit leading one dropped
pub fn mantissa_field(raw: i32) -> u32 {
    let magnitude = magnitude_bits(raw);
    match leading_bit(magnitude) {
        None => 0,
        Some(n) if n > MANTISSA_BITS => (magnitude >> (n - MANTISSA_BITS)) & MANTISSA_MASK,
        Some(n) => (magnitude << (MANTISSA_BITS - n)) & MANTISSA_MASK,
    }
}

/// Full f32 bit pattern for a raw value
pub fn to_f32_bits(raw: i32) -> u32 {
    let Some(exponent) = exponent_field(raw) else {
        return 0;
    };
    ((exponent << MANTISSA_BITS) + mantissa_field(raw)) | (raw as u32 & SIGN_MASK)
}
