//! Q7 fixed-point scalar type

use std::fmt;

use crate::error::{overflow, FixedPointError, Result};
use crate::ieee;

/// Number of fractional bits (value represents raw / 2^7)
pub const FRACTIONAL_BITS: u32 = 7;

/// Raw value of 1.0
pub const SCALE: i32 = 1 << FRACTIONAL_BITS;

/// Whole numbers whose shifted form still fits in i32
const WHOLE_MIN: i32 = i32::MIN >> FRACTIONAL_BITS;
const WHOLE_MAX: i32 = i32::MAX >> FRACTIONAL_BITS;

/// A fixed-point number represented as i32 with implicit scaling factor 2^7
///
/// Arithmetic is checked: any result outside the raw i32 range is reported
/// as [`FixedPointError::Overflow`] instead of wrapping, so the representable
/// range is `[-16777216.0, 16777215.9921875]` in steps of `1/128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed7 {
    raw: i32,
}

impl Fixed7 {
    pub const ZERO: Self = Self::from_raw(0);
    pub const ONE: Self = Self::from_raw(SCALE);
    /// Smallest positive step, 1/128
    pub const EPSILON: Self = Self::from_raw(1);
    pub const MIN: Self = Self::from_raw(i32::MIN);
    pub const MAX: Self = Self::from_raw(i32::MAX);

    /// Wrap an already-scaled raw value
    pub const fn from_raw(raw: i32) -> Self {
        Self { raw }
    }

    /// Create a fixed-point value from a whole number
    pub fn from_whole(n: i32) -> Result<Self> {
        if !(WHOLE_MIN..=WHOLE_MAX).contains(&n) {
            return Err(overflow("from_whole", n.into(), SCALE.into()));
        }
        Ok(Self::from_raw(n << FRACTIONAL_BITS))
    }

    /// Create a fixed-point value from a float, rounding to the nearest step
    pub fn from_f32(value: f32) -> Result<Self> {
        if !value.is_finite() {
            return Err(FixedPointError::NotFinite { value });
        }

        let scaled = (f64::from(value) * f64::from(SCALE)).round();
        if scaled > f64::from(i32::MAX) || scaled < f64::from(i32::MIN) {
            return Err(overflow("from_f32", scaled as i64, SCALE.into()));
        }

        Ok(Self::from_raw(scaled as i32))
    }

    /// The raw scaled representation
    pub const fn raw(self) -> i32 {
        self.raw
    }

    /// The low fractional bits of the raw value
    pub const fn frac_bits(self) -> u32 {
        self.raw as u32 & (SCALE as u32 - 1)
    }

    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// Add two fixed-point values
    pub fn add(self, other: Self) -> Result<Self> {
        self.raw
            .checked_add(other.raw)
            .map(Self::from_raw)
            .ok_or_else(|| overflow("add", self.raw.into(), other.raw.into()))
    }

    /// Subtract two fixed-point values
    pub fn sub(self, other: Self) -> Result<Self> {
        self.raw
            .checked_sub(other.raw)
            .map(Self::from_raw)
            .ok_or_else(|| overflow("sub", self.raw.into(), other.raw.into()))
    }

    /// Multiply two fixed-point values
    /// The 2^14-scaled product is shifted right by 7 bits, rounding toward
    /// negative infinity
    pub fn mul(self, other: Self) -> Result<Self> {
        // Use i64 intermediate to avoid overflow before the rescale
        let product = i64::from(self.raw) * i64::from(other.raw);
        Self::narrow(product >> FRACTIONAL_BITS)
            .ok_or_else(|| overflow("mul", self.raw.into(), other.raw.into()))
    }

    /// Divide two fixed-point values
    /// The dividend is pre-scaled by 2^7; the quotient truncates toward zero
    pub fn div(self, other: Self) -> Result<Self> {
        if other.raw == 0 {
            tracing::trace!(dividend = self.raw, "fixed-point division by zero");
            return Err(FixedPointError::DivisionByZero);
        }

        let dividend = i64::from(self.raw) << FRACTIONAL_BITS;
        Self::narrow(dividend / i64::from(other.raw))
            .ok_or_else(|| overflow("div", self.raw.into(), other.raw.into()))
    }

    /// In-place addition; the receiver is untouched on error
    pub fn add_assign(&mut self, other: Self) -> Result<&mut Self> {
        *self = Self::add(*self, other)?;
        Ok(self)
    }

    /// In-place subtraction; the receiver is untouched on error
    pub fn sub_assign(&mut self, other: Self) -> Result<&mut Self> {
        *self = Self::sub(*self, other)?;
        Ok(self)
    }

    /// In-place multiplication; the receiver is untouched on error
    pub fn mul_assign(&mut self, other: Self) -> Result<&mut Self> {
        *self = Self::mul(*self, other)?;
        Ok(self)
    }

    /// In-place division; the receiver is untouched on error
    pub fn div_assign(&mut self, other: Self) -> Result<&mut Self> {
        *self = Self::div(*self, other)?;
        Ok(self)
    }

    /// Negate the value
    pub fn checked_neg(self) -> Result<Self> {
        self.raw
            .checked_neg()
            .map(Self::from_raw)
            .ok_or_else(|| overflow("neg", self.raw.into(), 0))
    }

    /// Get the absolute value
    pub fn checked_abs(self) -> Result<Self> {
        self.raw
            .checked_abs()
            .map(Self::from_raw)
            .ok_or_else(|| overflow("abs", self.raw.into(), 0))
    }

    /// Convert to f32 by assembling the IEEE-754 bit pattern directly
    pub fn to_f32(self) -> f32 {
        f32::from_bits(ieee::to_f32_bits(self.raw))
    }

    /// Whole part, rounded toward negative infinity
    pub const fn to_int(self) -> i32 {
        self.raw >> FRACTIONAL_BITS
    }

    fn narrow(wide: i64) -> Option<Self> {
        i32::try_from(wide).ok().map(Self::from_raw)
    }
}

impl TryFrom<i32> for Fixed7 {
    type Error = FixedPointError;

    fn try_from(n: i32) -> Result<Self> {
        Self::from_whole(n)
    }
}

impl TryFrom<f32> for Fixed7 {
    type Error = FixedPointError;

    fn try_from(value: f32) -> Result<Self> {
        Self::from_f32(value)
    }
}

impl From<Fixed7> for f32 {
    fn from(value: Fixed7) -> Self {
        value.to_f32()
    }
}

impl fmt::Display for Fixed7 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}
