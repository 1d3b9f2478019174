// Copyright 2020 CoD Team

//! Arbitrary-precision scaled decimal.

use crate::int::{BigInt, TEN};
use std::fmt;

/// Extra fractional digits of working precision used by division.
const DIV_GUARD_DIGITS: u32 = 10;

/// An arbitrary-precision decimal number.
///
/// The value is an unscaled [`BigInt`] paired with a non-negative scale
/// exponent and represents `unscaled * 10^(-scale)`; the scale is the
/// number of digits right of the decimal point in the canonical textual
/// form. All arithmetic aligns scales and delegates to the integer
/// engine. Values are immutable.
///
/// # Examples
///
/// ```
/// use bigdec::BigDecimal;
///
/// let a: BigDecimal = "-0.12345".parse().unwrap();
/// let b: BigDecimal = "0.345".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "0.22155");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: u32,
}

impl BigDecimal {
    /// Creates a value from an unscaled integer and a scale, representing
    /// `unscaled * 10^(-scale)`.
    #[inline]
    pub fn new(unscaled: BigInt, scale: u32) -> Self {
        BigDecimal { unscaled, scale }
    }

    /// Creates a zero value with scale 0.
    #[inline]
    pub fn zero() -> Self {
        BigDecimal::new(BigInt::zero(), 0)
    }

    /// The unscaled integer value.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Count of digits right of the decimal point.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Returns `-self`.
    #[inline]
    pub(crate) fn negated(&self) -> Self {
        BigDecimal::new(self.unscaled.negated(), self.scale)
    }

    /// The unscaled value brought up to `scale` by a power of ten.
    fn rescaled(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        self.unscaled
            .mul_common(&TEN.pow_abs(scale - self.scale))
    }

    /// Addition by scale alignment: both operands are brought to the
    /// larger scale, summed as integers, and the result keeps that scale.
    pub(crate) fn add_common(&self, other: &Self) -> Self {
        let scale = self.scale.max(other.scale);
        let sum = self.rescaled(scale).add_common(&other.rescaled(scale));
        BigDecimal::new(sum, scale)
    }

    /// Subtraction by scale alignment.
    pub(crate) fn sub_common(&self, other: &Self) -> Self {
        let scale = self.scale.max(other.scale);
        let diff = self.rescaled(scale).sub_common(&other.rescaled(scale));
        BigDecimal::new(diff, scale)
    }

    /// Multiplication: unscaled values multiply directly, scales add.
    pub(crate) fn mul_common(&self, other: &Self) -> Self {
        let product = self.unscaled.mul_common(&other.unscaled);
        BigDecimal::new(product, self.scale + other.scale)
    }

    /// Checked division.
    /// Computes `self / other`, returning `None` if `other == 0`.
    ///
    /// The dividend is scaled up by `other.scale() + 10` powers of ten
    /// of working precision, divided with truncating integer division,
    /// and the quotient keeps whatever precision that leaves. There is
    /// no rounding mode; the result is always truncated at the extended
    /// precision.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        let precision = other.scale + DIV_GUARD_DIGITS;

        let dividend = self.unscaled.mul_common(&TEN.pow_abs(precision));
        let quotient = dividend.checked_div(&other.unscaled)?;

        // precision - (other.scale - self.scale)
        let scale = precision - other.scale + self.scale;
        Some(BigDecimal::new(quotient, scale))
    }
}

impl Default for BigDecimal {
    #[inline]
    fn default() -> Self {
        BigDecimal::zero()
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.scale == 0 {
            return fmt::Display::fmt(&self.unscaled, f);
        }

        let mut s = self.unscaled.abs().to_string();
        // pad values between 0 and 1, e.g. 12345 at scale 5 -> 0.12345
        while s.len() <= self.scale as usize {
            s.insert(0, '0');
        }
        s.insert(s.len() - self.scale as usize, '.');
        if self.unscaled.is_negative() {
            s.insert(0, '-');
        }
        f.write_str(&s)
    }
}
