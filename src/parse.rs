// Copyright 2020 CoD Team

//! Literal parsing.
//!
//! The accepted grammar is deliberately narrow: an integer literal is an
//! optional `-` followed by one or more ASCII digits, and a decimal
//! literal is an integer literal optionally followed by `.` and one or
//! more digits. No leading `+`, no whitespace, no grouping separators,
//! no exponent notation.

use crate::dec::BigDecimal;
use crate::digits::DigitBuf;
use crate::error::ParseNumberError;
use crate::int::{BigInt, Sign};
use std::str::FromStr;

/// Splits the leading `-`, if any, from the rest of the literal.
#[inline]
fn extract_sign(s: &[u8]) -> (Sign, &[u8]) {
    match s.first() {
        Some(b'-') => (Sign::Negative, &s[1..]),
        _ => (Sign::Positive, s),
    }
}

/// Carves off decimal digits up to the first non-digit character.
#[inline]
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|&i| i.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

/// Builds a least-significant-first digit buffer from ASCII digit bytes.
#[inline]
fn read_digits(integral: &[u8], fractional: &[u8]) -> DigitBuf {
    integral
        .iter()
        .chain(fractional.iter())
        .rev()
        .map(|&b| b - b'0')
        .collect()
}

/// Parses an integer literal into sign and magnitude.
fn parse_int(s: &[u8]) -> Result<BigInt, ParseNumberError> {
    if s.is_empty() {
        return Err(ParseNumberError::empty());
    }

    let (sign, s) = extract_sign(s);
    let (integral, rest) = eat_digits(s);

    if integral.is_empty() || !rest.is_empty() {
        return Err(ParseNumberError::invalid());
    }

    Ok(BigInt::from_digits(sign, read_digits(integral, b"")))
}

impl FromStr for BigInt {
    type Err = ParseNumberError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_int(s.as_bytes())
    }
}

/// Parses a decimal literal, splitting at the point; the digit count
/// after the point becomes the scale and the concatenated digit string
/// becomes the unscaled integer.
fn parse_dec(s: &[u8]) -> Result<BigDecimal, ParseNumberError> {
    if s.is_empty() {
        return Err(ParseNumberError::empty());
    }

    let (sign, s) = extract_sign(s);
    let (integral, rest) = eat_digits(s);

    if integral.is_empty() {
        return Err(ParseNumberError::invalid());
    }

    let (fractional, rest, has_point) = match rest.first() {
        Some(b'.') => {
            let (fractional, rest) = eat_digits(&rest[1..]);
            (fractional, rest, true)
        }
        _ => (b"".as_ref(), rest, false),
    };

    // the point, when present, must be followed by at least one digit
    if !rest.is_empty() || (has_point && fractional.is_empty()) {
        return Err(ParseNumberError::invalid());
    }

    let unscaled = BigInt::from_digits(sign, read_digits(integral, fractional));
    Ok(BigDecimal::new(unscaled, fractional.len() as u32))
}

impl FromStr for BigDecimal {
    type Err = ParseNumberError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dec(s.as_bytes())
    }
}
