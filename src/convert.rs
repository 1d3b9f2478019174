// Copyright 2020 CoD Team

//! Numeric conversion utilities.
//!
//! Conversions from machine integers are exact. Extractions to
//! fixed-width types saturate at the target type's bounds instead of
//! failing.

use crate::dec::BigDecimal;
use crate::digits::DigitBuf;
use crate::error::ParseNumberError;
use crate::int::{BigInt, Sign};

/// Decomposes an unsigned value into decimal digits, least significant
/// first. Zero yields an empty buffer.
fn digits_of(mut value: u128) -> DigitBuf {
    let mut digits = DigitBuf::new();
    while value > 0 {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits
}

macro_rules! impl_from_signed {
    ($t: ty) => {
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                let sign = if value < 0 {
                    Sign::Negative
                } else {
                    Sign::Positive
                };
                BigInt::from_digits(sign, digits_of(value.unsigned_abs() as u128))
            }
        }
    };
}

impl_from_signed!(i8);
impl_from_signed!(i16);
impl_from_signed!(i32);
impl_from_signed!(i64);
impl_from_signed!(i128);

macro_rules! impl_from_unsigned {
    ($t: ty) => {
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                BigInt::from_digits(Sign::Positive, digits_of(value as u128))
            }
        }
    };
}

impl_from_unsigned!(u8);
impl_from_unsigned!(u16);
impl_from_unsigned!(u32);
impl_from_unsigned!(u64);
impl_from_unsigned!(u128);

impl BigInt {
    /// Converts to `i64`, saturating at `i64::MIN`/`i64::MAX`.
    pub fn to_i64(&self) -> i64 {
        let negative = self.is_negative();
        let mut result: i64 = 0;

        // accumulate on the negative side so i64::MIN itself survives
        for &d in self.digits().iter().rev() {
            let next = result
                .checked_mul(10)
                .and_then(|r| r.checked_sub(d as i64));
            match next {
                Some(r) => result = r,
                None => return if negative { i64::MIN } else { i64::MAX },
            }
        }

        if negative {
            result
        } else {
            match result.checked_neg() {
                Some(r) => r,
                None => i64::MAX,
            }
        }
    }

    /// Converts to `i32`, saturating at `i32::MIN`/`i32::MAX`.
    #[inline]
    pub fn to_i32(&self) -> i32 {
        let result = self.to_i64();
        if result < i32::MIN as i64 {
            i32::MIN
        } else if result > i32::MAX as i64 {
            i32::MAX
        } else {
            result as i32
        }
    }

    /// Converts to `f64`, saturating at `f64::MIN`/`f64::MAX`.
    pub fn to_f64(&self) -> f64 {
        let mut result = 0f64;
        for &d in self.digits().iter().rev() {
            result = result * 10.0 + d as f64;
        }
        if result.is_infinite() {
            result = f64::MAX;
        }
        if self.is_negative() {
            -result
        } else {
            result
        }
    }

    /// Converts to `f32`, saturating at `f32::MIN`/`f32::MAX`.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        let result = self.to_f64();
        if result < f32::MIN as f64 {
            f32::MIN
        } else if result > f32::MAX as f64 {
            f32::MAX
        } else {
            result as f32
        }
    }
}

macro_rules! impl_from_int_for_dec {
    ($t: ty) => {
        impl From<$t> for BigDecimal {
            #[inline]
            fn from(value: $t) -> Self {
                BigDecimal::new(BigInt::from(value), 0)
            }
        }
    };
}

impl_from_int_for_dec!(i8);
impl_from_int_for_dec!(i16);
impl_from_int_for_dec!(i32);
impl_from_int_for_dec!(i64);
impl_from_int_for_dec!(i128);
impl_from_int_for_dec!(u8);
impl_from_int_for_dec!(u16);
impl_from_int_for_dec!(u32);
impl_from_int_for_dec!(u64);
impl_from_int_for_dec!(u128);

macro_rules! impl_try_from_float_for_dec {
    ($t: ty) => {
        impl TryFrom<$t> for BigDecimal {
            type Error = ParseNumberError;

            /// Converts through the value's shortest decimal rendering;
            /// fails for NaN and infinities.
            #[inline]
            fn try_from(value: $t) -> Result<Self, Self::Error> {
                value.to_string().parse()
            }
        }
    };
}

impl_try_from_float_for_dec!(f32);
impl_try_from_float_for_dec!(f64);
