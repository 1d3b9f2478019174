// Copyright 2020 CoD Team

//! Implementing operators for the integer and decimal types.

use crate::dec::BigDecimal;
use crate::int::{BigInt, DIVIDE_BY_ZERO_MSG};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

// The main implementation
// &self + &other
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, other: &BigInt) -> Self::Output {
        self.add_common(other)
    }
}

// self + &other
impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, other: &BigInt) -> Self::Output {
        Add::add(&self, other)
    }
}

// &self + other
impl Add<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, other: BigInt) -> Self::Output {
        Add::add(self, &other)
    }
}

// self + other
impl Add<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, other: BigInt) -> Self::Output {
        Add::add(&self, &other)
    }
}

// &mut self += &other
impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: &BigInt) {
        let result = Add::add(self as &BigInt, other);
        *self = result;
    }
}

// &mut self += other
impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: BigInt) {
        let result = Add::add(self as &BigInt, &other);
        *self = result;
    }
}

// The main implementation
// &self - &other
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, other: &BigInt) -> Self::Output {
        self.sub_common(other)
    }
}

// self - &other
impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, other: &BigInt) -> Self::Output {
        Sub::sub(&self, other)
    }
}

// &self - other
impl Sub<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, other: BigInt) -> Self::Output {
        Sub::sub(self, &other)
    }
}

// self - other
impl Sub<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, other: BigInt) -> Self::Output {
        Sub::sub(&self, &other)
    }
}

// &mut self -= &other
impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: &BigInt) {
        let result = Sub::sub(self as &BigInt, other);
        *self = result;
    }
}

// &mut self -= other
impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: BigInt) {
        let result = Sub::sub(self as &BigInt, &other);
        *self = result;
    }
}

// The main implementation
// &self * &other
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: &BigInt) -> Self::Output {
        self.mul_common(other)
    }
}

// self * &other
impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: &BigInt) -> Self::Output {
        Mul::mul(&self, other)
    }
}

// &self * other
impl Mul<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: BigInt) -> Self::Output {
        Mul::mul(self, &other)
    }
}

// self * other
impl Mul<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: BigInt) -> Self::Output {
        Mul::mul(&self, &other)
    }
}

// &mut self *= &other
impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: &BigInt) {
        let result = Mul::mul(self as &BigInt, other);
        *self = result;
    }
}

// &mut self *= other
impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: BigInt) {
        let result = Mul::mul(self as &BigInt, &other);
        *self = result;
    }
}

// The main implementation
// &self / &other
impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: &BigInt) -> Self::Output {
        self.checked_div(other).expect(DIVIDE_BY_ZERO_MSG)
    }
}

// self / &other
impl Div<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: &BigInt) -> Self::Output {
        Div::div(&self, other)
    }
}

// &self / other
impl Div<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: BigInt) -> Self::Output {
        Div::div(self, &other)
    }
}

// self / other
impl Div<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: BigInt) -> Self::Output {
        Div::div(&self, &other)
    }
}

// &mut self /= &other
impl DivAssign<&BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: &BigInt) {
        let result = Div::div(self as &BigInt, other);
        *self = result;
    }
}

// &mut self /= other
impl DivAssign<BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: BigInt) {
        let result = Div::div(self as &BigInt, &other);
        *self = result;
    }
}

// The main implementation
// &self % &other
impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: &BigInt) -> Self::Output {
        self.checked_rem(other).expect(DIVIDE_BY_ZERO_MSG)
    }
}

// self % &other
impl Rem<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: &BigInt) -> Self::Output {
        Rem::rem(&self, other)
    }
}

// &self % other
impl Rem<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: BigInt) -> Self::Output {
        Rem::rem(self, &other)
    }
}

// self % other
impl Rem<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: BigInt) -> Self::Output {
        Rem::rem(&self, &other)
    }
}

// &mut self %= &other
impl RemAssign<&BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: &BigInt) {
        let result = Rem::rem(self as &BigInt, other);
        *self = result;
    }
}

// &mut self %= other
impl RemAssign<BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: BigInt) {
        let result = Rem::rem(self as &BigInt, &other);
        *self = result;
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> Self::Output {
        Neg::neg(&self)
    }
}

// The main implementation
// &self + &other
impl Add<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn add(self, other: &BigDecimal) -> Self::Output {
        self.add_common(other)
    }
}

// self + &other
impl Add<&BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn add(self, other: &BigDecimal) -> Self::Output {
        Add::add(&self, other)
    }
}

// &self + other
impl Add<BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn add(self, other: BigDecimal) -> Self::Output {
        Add::add(self, &other)
    }
}

// self + other
impl Add<BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn add(self, other: BigDecimal) -> Self::Output {
        Add::add(&self, &other)
    }
}

// &mut self += &other
impl AddAssign<&BigDecimal> for BigDecimal {
    #[inline]
    fn add_assign(&mut self, other: &BigDecimal) {
        let result = Add::add(self as &BigDecimal, other);
        *self = result;
    }
}

// &mut self += other
impl AddAssign<BigDecimal> for BigDecimal {
    #[inline]
    fn add_assign(&mut self, other: BigDecimal) {
        let result = Add::add(self as &BigDecimal, &other);
        *self = result;
    }
}

// The main implementation
// &self - &other
impl Sub<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn sub(self, other: &BigDecimal) -> Self::Output {
        self.sub_common(other)
    }
}

// self - &other
impl Sub<&BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn sub(self, other: &BigDecimal) -> Self::Output {
        Sub::sub(&self, other)
    }
}

// &self - other
impl Sub<BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn sub(self, other: BigDecimal) -> Self::Output {
        Sub::sub(self, &other)
    }
}

// self - other
impl Sub<BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn sub(self, other: BigDecimal) -> Self::Output {
        Sub::sub(&self, &other)
    }
}

// &mut self -= &other
impl SubAssign<&BigDecimal> for BigDecimal {
    #[inline]
    fn sub_assign(&mut self, other: &BigDecimal) {
        let result = Sub::sub(self as &BigDecimal, other);
        *self = result;
    }
}

// &mut self -= other
impl SubAssign<BigDecimal> for BigDecimal {
    #[inline]
    fn sub_assign(&mut self, other: BigDecimal) {
        let result = Sub::sub(self as &BigDecimal, &other);
        *self = result;
    }
}

// The main implementation
// &self * &other
impl Mul<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn mul(self, other: &BigDecimal) -> Self::Output {
        self.mul_common(other)
    }
}

// self * &other
impl Mul<&BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn mul(self, other: &BigDecimal) -> Self::Output {
        Mul::mul(&self, other)
    }
}

// &self * other
impl Mul<BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn mul(self, other: BigDecimal) -> Self::Output {
        Mul::mul(self, &other)
    }
}

// self * other
impl Mul<BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn mul(self, other: BigDecimal) -> Self::Output {
        Mul::mul(&self, &other)
    }
}

// &mut self *= &other
impl MulAssign<&BigDecimal> for BigDecimal {
    #[inline]
    fn mul_assign(&mut self, other: &BigDecimal) {
        let result = Mul::mul(self as &BigDecimal, other);
        *self = result;
    }
}

// &mut self *= other
impl MulAssign<BigDecimal> for BigDecimal {
    #[inline]
    fn mul_assign(&mut self, other: BigDecimal) {
        let result = Mul::mul(self as &BigDecimal, &other);
        *self = result;
    }
}

// The main implementation
// &self / &other
impl Div<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn div(self, other: &BigDecimal) -> Self::Output {
        self.checked_div(other).expect(DIVIDE_BY_ZERO_MSG)
    }
}

// self / &other
impl Div<&BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn div(self, other: &BigDecimal) -> Self::Output {
        Div::div(&self, other)
    }
}

// &self / other
impl Div<BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn div(self, other: BigDecimal) -> Self::Output {
        Div::div(self, &other)
    }
}

// self / other
impl Div<BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn div(self, other: BigDecimal) -> Self::Output {
        Div::div(&self, &other)
    }
}

// &mut self /= &other
impl DivAssign<&BigDecimal> for BigDecimal {
    #[inline]
    fn div_assign(&mut self, other: &BigDecimal) {
        let result = Div::div(self as &BigDecimal, other);
        *self = result;
    }
}

// &mut self /= other
impl DivAssign<BigDecimal> for BigDecimal {
    #[inline]
    fn div_assign(&mut self, other: BigDecimal) {
        let result = Div::div(self as &BigDecimal, &other);
        *self = result;
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Neg::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    fn assert_add(val1: &str, val2: &str, expected: &str) {
        let var1 = int(val1);
        let var2 = int(val2);

        let result1 = &var1 + &var2;
        assert_eq!(result1.to_string(), expected);

        let result2 = &var2 + &var1;
        assert_eq!(result2.to_string(), expected);

        let mut result3 = var1.clone();
        result3 += &var2;
        assert_eq!(result3.to_string(), expected);

        let mut result4 = var2.clone();
        result4 += var1.clone();
        assert_eq!(result4.to_string(), expected);
    }

    #[test]
    fn add() {
        assert_add("0", "0", "0");
        assert_add("123", "0", "123");
        assert_add("-123", "0", "-123");
        assert_add("123456789", "987654321", "1111111110");
        assert_add("999999999999999999", "1", "1000000000000000000");
        assert_add("123456789", "-123456789", "0");
        assert_add("123456789", "-987654321", "-864197532");
        assert_add("-123456789", "-987654321", "-1111111110");
        assert_add(
            "340282366920938463463374607431768211456",
            "340282366920938463463374607431768211456",
            "680564733841876926926749214863536422912",
        );
    }

    fn assert_sub(val1: &str, val2: &str, expected: &str) {
        let var1 = int(val1);
        let var2 = int(val2);

        let result1 = &var1 - &var2;
        assert_eq!(result1.to_string(), expected);

        let mut result2 = var1.clone();
        result2 -= &var2;
        assert_eq!(result2.to_string(), expected);

        let mut result3 = var1.clone();
        result3 -= var2.clone();
        assert_eq!(result3.to_string(), expected);
    }

    #[test]
    fn sub() {
        assert_sub("0", "5", "-5");
        assert_sub("5", "0", "5");
        assert_sub("0", "-5", "5");
        assert_sub("5", "5", "0");
        assert_sub("1234", "567", "667");
        assert_sub("567", "1234", "-667");
        assert_sub("-567", "-1234", "667");
        assert_sub("-1234", "567", "-1801");
        assert_sub("1000000000000000000", "1", "999999999999999999");
    }

    fn assert_mul(val1: &str, val2: &str, expected: &str) {
        let var1 = int(val1);
        let var2 = int(val2);

        let result1 = &var1 * &var2;
        assert_eq!(result1.to_string(), expected);

        let result2 = &var2 * &var1;
        assert_eq!(result2.to_string(), expected);

        let mut result3 = var1.clone();
        result3 *= &var2;
        assert_eq!(result3.to_string(), expected);
    }

    #[test]
    fn mul() {
        assert_mul("0", "12345", "0");
        assert_mul("1", "12345", "12345");
        assert_mul("123", "45", "5535");
        assert_mul("-123", "45", "-5535");
        assert_mul("-123", "-45", "5535");
        assert_mul("71045943470", "41564635484", "2952998742947420089480");
        assert_mul(
            "18446744073709551616",
            "18446744073709551616",
            "340282366920938463463374607431768211456",
        );
    }

    fn assert_div(val1: &str, val2: &str, expected: &str) {
        let var1 = int(val1);
        let var2 = int(val2);

        let result1 = &var1 / &var2;
        assert_eq!(result1.to_string(), expected);

        let mut result2 = var1.clone();
        result2 /= &var2;
        assert_eq!(result2.to_string(), expected);
    }

    #[test]
    fn div() {
        assert_div("0", "45", "0");
        assert_div("1234", "45", "27");
        // truncation toward zero in every sign combination
        assert_div("-1234", "45", "-27");
        assert_div("1234", "-45", "-27");
        assert_div("-1234", "-45", "27");
        assert_div("45", "45", "1");
        assert_div("-45", "45", "-1");
        assert_div("44", "45", "0");
        assert_div("2952998742947420089480", "41564635484", "71045943470");
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_by_zero() {
        let _ = int("1") / int("0");
    }

    fn assert_rem(val1: &str, val2: &str, expected: &str) {
        let var1 = int(val1);
        let var2 = int(val2);

        let result1 = &var1 % &var2;
        assert_eq!(result1.to_string(), expected);

        let mut result2 = var1.clone();
        result2 %= &var2;
        assert_eq!(result2.to_string(), expected);
    }

    #[test]
    fn rem() {
        assert_rem("10", "3", "1");
        assert_rem("-10", "3", "-1");
        assert_rem("10", "-3", "1");
        assert_rem("-10", "-3", "-1");
        assert_rem("1234", "45", "19");
        assert_rem("12", "4", "0");
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn rem_by_zero() {
        let _ = int("1") % int("0");
    }

    #[test]
    fn neg() {
        assert_eq!((-int("5")).to_string(), "-5");
        assert_eq!((-&int("-5")).to_string(), "5");
        assert_eq!((-int("0")).to_string(), "0");
        assert_eq!((-dec("1.5")).to_string(), "-1.5");
        assert_eq!((-&dec("-1.5")).to_string(), "1.5");
    }

    #[test]
    fn div_rem_law() {
        for (a, b) in [
            ("10", "3"),
            ("-10", "3"),
            ("10", "-3"),
            ("-10", "-3"),
            ("71045943470", "41564635484"),
            ("0", "7"),
        ] {
            let a = int(a);
            let b = int(b);
            let q = &a / &b;
            let r = &a % &b;
            assert_eq!(q * &b + r, a);
        }
    }

    fn assert_dec_add(val1: &str, val2: &str, expected: &str) {
        let var1 = dec(val1);
        let var2 = dec(val2);

        let result1 = &var1 + &var2;
        assert_eq!(result1.to_string(), expected);

        let mut result2 = var1.clone();
        result2 += &var2;
        assert_eq!(result2.to_string(), expected);
    }

    #[test]
    fn dec_ops() {
        assert_dec_add("-0.12345", "0.345", "0.22155");
        assert_dec_add("1.5", "2.5", "4.0");

        let result = dec("12345") * dec("-0.345");
        assert_eq!(result.to_string(), "-4259.025");

        let mut result = dec("180.239");
        result -= dec("56.789");
        assert_eq!(result.to_string(), "123.450");

        let mut result = dec("12.34");
        result /= dec("2.345");
        assert_eq!(result.to_string(), "5.262260127931");
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn dec_div_by_zero() {
        let _ = dec("1.5") / dec("0.0");
    }
}
