// Copyright 2020 CoD Team

//! Arbitrary-precision signed integer.

use crate::digits::{add_abs, cmp_abs, div_abs, mul_abs, strip, sub_abs, DigitBuf};
use crate::error::ArithmeticError;
use lazy_static::lazy_static;
use smallvec::smallvec;
use std::cmp::Ordering;
use std::fmt;

pub const DIVIDE_BY_ZERO_MSG: &str = "attempt to divide by zero";

lazy_static! {
    // 1
    pub(crate) static ref ONE: BigInt = BigInt {
        sign: Sign::Positive,
        digits: smallvec![1],
    };
    // 2
    static ref TWO: BigInt = BigInt {
        sign: Sign::Positive,
        digits: smallvec![2],
    };
    // 10
    pub(crate) static ref TEN: BigInt = BigInt {
        sign: Sign::Positive,
        digits: smallvec![0, 1],
    };
}

/// Sign of a [`BigInt`].
///
/// The derived ordering (`Negative < Zero < Positive`) is the numeric one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// The opposite sign; zero is its own opposite.
    #[inline]
    pub const fn negated(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Sign of a product of two values with these signs.
    #[inline]
    pub const fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// The value is kept in sign-magnitude form: a [`Sign`] plus a buffer of
/// decimal digits, least significant first. The magnitude never carries
/// high-order zero digits and is `[0]` exactly when the sign is
/// [`Sign::Zero`]. Values are immutable; every operation returns a fresh
/// instance.
///
/// # Examples
///
/// ```
/// use bigdec::BigInt;
///
/// let a: BigInt = "123456789123456789123456789".parse().unwrap();
/// let b: BigInt = "-987654321".parse().unwrap();
/// assert_eq!((&a * &b).to_string(), "-121932631234567900234567900112635269");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    digits: DigitBuf,
}

impl BigInt {
    /// Creates a zero value.
    #[inline]
    pub fn zero() -> Self {
        BigInt {
            sign: Sign::Zero,
            digits: smallvec![0],
        }
    }

    /// Creates a one value.
    #[inline]
    pub fn one() -> Self {
        ONE.clone()
    }

    /// Builds a value from a sign and a raw digit buffer, normalizing
    /// the buffer and canonicalizing zero.
    pub(crate) fn from_digits(sign: Sign, mut digits: DigitBuf) -> Self {
        strip(&mut digits);
        if digits.is_empty() {
            return BigInt::zero();
        }
        debug_assert_ne!(sign, Sign::Zero);
        BigInt { sign, digits }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Magnitude digits, least significant first.
    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns the absolute value of `self`.
    #[inline]
    pub fn abs(&self) -> Self {
        match self.sign {
            Sign::Negative => self.negated(),
            _ => self.clone(),
        }
    }

    /// Returns `-self`.
    #[inline]
    pub(crate) fn negated(&self) -> Self {
        BigInt {
            sign: self.sign.negated(),
            digits: self.digits.clone(),
        }
    }

    /// Returns `-1`, `0` or `1` as a value of the same type.
    pub fn signum(&self) -> Self {
        match self.sign {
            Sign::Negative => ONE.negated(),
            Sign::Zero => BigInt::zero(),
            Sign::Positive => ONE.clone(),
        }
    }

    /// Full addition, resolving signs before delegating to the
    /// magnitude layer.
    pub(crate) fn add_common(&self, other: &Self) -> Self {
        match (self.sign, other.sign) {
            (Sign::Zero, _) => other.clone(),
            (_, Sign::Zero) => self.clone(),
            (a, b) if a == b => {
                // same sign: |self| + |other| keeps the common sign
                BigInt::from_digits(a, add_abs(&self.digits, &other.digits))
            }
            _ => {
                // opposite signs: reduce to a subtraction of magnitudes,
                // the larger operand decides the sign
                match cmp_abs(&self.digits, &other.digits) {
                    Ordering::Equal => BigInt::zero(),
                    Ordering::Greater => {
                        BigInt::from_digits(self.sign, sub_abs(&self.digits, &other.digits))
                    }
                    Ordering::Less => {
                        BigInt::from_digits(other.sign, sub_abs(&other.digits, &self.digits))
                    }
                }
            }
        }
    }

    /// Full subtraction, resolving signs before delegating to the
    /// magnitude layer.
    pub(crate) fn sub_common(&self, other: &Self) -> Self {
        match (self.sign, other.sign) {
            (_, Sign::Zero) => self.clone(),
            (Sign::Zero, _) => other.negated(),
            (a, b) if a != b => {
                // opposite signs: |self| + |other| keeps the minuend's sign
                BigInt::from_digits(a, add_abs(&self.digits, &other.digits))
            }
            _ => match cmp_abs(&self.digits, &other.digits) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => {
                    BigInt::from_digits(self.sign, sub_abs(&self.digits, &other.digits))
                }
                Ordering::Less => BigInt::from_digits(
                    self.sign.negated(),
                    sub_abs(&other.digits, &self.digits),
                ),
            },
        }
    }

    /// Full multiplication.
    pub(crate) fn mul_common(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        BigInt::from_digits(
            self.sign.product(other.sign),
            mul_abs(&self.digits, &other.digits),
        )
    }

    /// Checked integer division, truncating toward zero.
    /// Computes `self / other`, returning `None` if `other == 0`.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some(BigInt::zero());
        }

        let sign = self.sign.product(other.sign);
        let result = match cmp_abs(&self.digits, &other.digits) {
            Ordering::Equal => BigInt::from_digits(sign, smallvec![1]),
            Ordering::Less => BigInt::zero(),
            Ordering::Greater => {
                BigInt::from_digits(sign, div_abs(&self.digits, &other.digits))
            }
        };
        Some(result)
    }

    /// Checked remainder.
    /// Computes `self % other`, returning `None` if `other == 0`.
    ///
    /// Defined as `self - (self / other) * other`; since division
    /// truncates toward zero, the remainder carries the sign of the
    /// dividend (`-10 % 3 == -1`, not `2`).
    pub fn checked_rem(&self, other: &Self) -> Option<Self> {
        let quotient = self.checked_div(other)?;
        Some(self.sub_common(&quotient.mul_common(other)))
    }

    /// Raises `self` to the power of `exponent` by repeated
    /// multiplication.
    ///
    /// A negative exponent is evaluated as `1 / self^|exponent|` with
    /// truncating integer division, so any base with magnitude above one
    /// yields zero. Returns `None` only for a zero base and a negative
    /// exponent (a division by zero).
    pub fn checked_pow(&self, exponent: i32) -> Option<Self> {
        if exponent == 0 {
            return Some(ONE.clone());
        }

        let power = self.pow_abs(exponent.unsigned_abs());
        if exponent < 0 {
            ONE.checked_div(&power)
        } else {
            Some(power)
        }
    }

    /// Raises `self` to the power of `exponent`.
    ///
    /// # Panics
    /// Panics if `self` is zero and `exponent` is negative.
    #[inline]
    pub fn pow(&self, exponent: i32) -> Self {
        self.checked_pow(exponent).expect(DIVIDE_BY_ZERO_MSG)
    }

    /// `self^exponent` for a non-negative exponent.
    pub(crate) fn pow_abs(&self, exponent: u32) -> Self {
        let mut result = ONE.clone();
        for _ in 0..exponent {
            result = result.mul_common(self);
        }
        result
    }

    /// Computes the factorial `n! = 2 * 3 * ... * n`, with
    /// `0! == 1! == 1`.
    ///
    /// A negative `n` is rejected.
    pub fn factorial(n: i64) -> Result<Self, ArithmeticError> {
        if n < 0 {
            return Err(ArithmeticError::negative_factorial());
        }

        let mut result = ONE.clone();
        for i in 2..=n {
            result = result.mul_common(&BigInt::from(i));
        }
        Ok(result)
    }

    /// Computes the integer (floor) square root of `self`.
    ///
    /// Binary search over `[1, self]`, keeping the largest candidate
    /// whose square does not exceed `self`. Zero is handled up front:
    /// the search range is empty for it and must not decide the result.
    ///
    /// # Panics
    /// Panics if `self` is negative.
    pub fn sqrt(&self) -> Self {
        assert!(!self.is_negative(), "square root of a negative number");

        if self.is_zero() {
            return BigInt::zero();
        }

        let mut result = ONE.clone();
        let mut low = ONE.clone();
        let mut high = self.clone();

        while low <= high {
            let half_span = high
                .sub_common(&low)
                .checked_div(&TWO)
                .expect("two is not zero");
            let mid = low.add_common(&half_span);

            if mid.mul_common(&mid) <= *self {
                // mid² <= self: keep it and search the upper half
                low = mid.add_common(&ONE);
                result = mid;
            } else {
                high = mid.sub_common(&ONE);
            }
        }

        result
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Positive => cmp_abs(&self.digits, &other.digits),
                Sign::Negative => cmp_abs(&other.digits, &self.digits),
                Sign::Zero => Ordering::Equal,
            },
            ord => ord,
        }
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        BigInt::zero()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        for d in self.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
