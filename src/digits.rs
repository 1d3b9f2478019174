// Copyright 2020 CoD Team

//! Magnitude arithmetic over decimal digit buffers.
//!
//! A magnitude is stored one decimal digit per byte, least significant
//! digit first. All functions here ignore sign; the signed layer in
//! `int` is responsible for sign resolution and for guaranteeing the
//! preconditions below. Every operation builds a fresh buffer, operands
//! are never mutated.

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;

/// A single decimal digit, `0..=9`.
pub(crate) type Digit = u8;

/// Digit buffer with inline storage for small values.
pub(crate) type DigitBuf = SmallVec<[Digit; 16]>;

/// Removes non-significant high-order zero digits.
///
/// The buffer may become empty; callers that need the canonical zero
/// magnitude `[0]` (the `BigInt` constructor) restore it themselves.
pub(crate) fn strip(digits: &mut DigitBuf) {
    while let Some(&0) = digits.last() {
        digits.pop();
    }
}

/// Computes `a + b` digit-wise with carry propagation.
///
/// The final carry digit is emitted only when non-zero, so the result
/// carries no high-order zero unless an operand did.
pub(crate) fn add_abs(a: &[Digit], b: &[Digit]) -> DigitBuf {
    let len = a.len().max(b.len());
    let mut result = DigitBuf::with_capacity(len + 1);

    let mut carry = 0;
    for i in 0..len {
        let mut sum = carry;
        if let Some(&d) = a.get(i) {
            sum += d;
        }
        if let Some(&d) = b.get(i) {
            sum += d;
        }
        result.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        result.push(carry);
    }

    result
}

/// Computes `a - b` digit-wise with borrow propagation.
///
/// NOTE: ABS(`a`) MUST BE GREATER OR EQUAL ABS(`b`) !!!
/// The result is stripped of high-order zeros before return.
pub(crate) fn sub_abs(a: &[Digit], b: &[Digit]) -> DigitBuf {
    debug_assert_ne!(cmp_abs(a, b), Ordering::Less);

    let mut result = DigitBuf::with_capacity(a.len());

    let mut borrow: i8 = 0;
    for i in 0..a.len() {
        let mut diff = a[i] as i8 - borrow - *b.get(i).unwrap_or(&0) as i8;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(diff as Digit);
    }
    debug_assert_eq!(borrow, 0); // else caller gave us a < b

    strip(&mut result);
    result
}

/// Schoolbook multiplication, each digit product accumulated into
/// position `i + j` with the carry pushed one position further.
pub(crate) fn mul_abs(a: &[Digit], b: &[Digit]) -> DigitBuf {
    let mut result: DigitBuf = smallvec![0; a.len() + b.len()];

    for (i, &da) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, &db) in b.iter().enumerate() {
            let product = result[i + j] + da * db + carry;
            result[i + j] = product % 10;
            carry = product / 10;
        }
        if carry > 0 {
            result[i + b.len()] += carry;
        }
    }

    strip(&mut result);
    result
}

/// Compares two normalized magnitudes: longer wins, equal lengths are
/// decided digit-by-digit from the most significant end.
pub(crate) fn cmp_abs(a: &[Digit], b: &[Digit]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }

    for (da, db) in a.iter().rev().zip(b.iter().rev()) {
        if da != db {
            return da.cmp(db);
        }
    }

    Ordering::Equal
}

/// Long division of `a` by `b`, returning the normalized quotient.
///
/// Walks the dividend digits from most to least significant; at each
/// step the running remainder is shifted up one position, the next
/// dividend digit appended, and the divisor subtracted until the
/// remainder is smaller than it. The subtraction count is the next
/// quotient digit. The final remainder is discarded here; callers
/// recover it as `a - quotient * b`.
///
/// NOTE: `b` MUST BE NON-ZERO !!!
pub(crate) fn div_abs(a: &[Digit], b: &[Digit]) -> DigitBuf {
    debug_assert!(b.iter().any(|&d| d != 0));

    // quotient digits are produced most significant first
    let mut quotient = DigitBuf::with_capacity(a.len());
    let mut remainder = DigitBuf::new();

    for &digit in a.iter().rev() {
        remainder.insert(0, digit);
        strip(&mut remainder);

        let mut count = 0;
        while cmp_abs(&remainder, b) != Ordering::Less {
            remainder = sub_abs(&remainder, b);
            count += 1;
        }
        quotient.push(count);
    }

    quotient.reverse();
    strip(&mut quotient);
    quotient
}
