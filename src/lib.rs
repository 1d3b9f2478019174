// Copyright 2020 CoD Team

//! Arbitrary-precision decimal arithmetic.
//!
//! This crate provides two immutable value types built on a
//! sign-magnitude decimal digit representation:
//!
//! - [`BigInt`], an arbitrary-precision signed integer with addition,
//!   subtraction, multiplication, truncating division, remainder,
//!   integer power, integer square root and factorial;
//! - [`BigDecimal`], a scaled decimal (`unscaled * 10^(-scale)`) that
//!   reuses the integer engine for fixed-point addition, subtraction,
//!   multiplication and division.
//!
//! Division truncates toward zero, so the remainder carries the sign of
//! the dividend. Conversions to machine-width types saturate at the
//! target's bounds instead of failing.
//!
//! # Examples
//!
//! ```
//! use bigdec::{BigDecimal, BigInt};
//!
//! let a: BigInt = "71045943470".parse().unwrap();
//! let b: BigInt = "41564635484".parse().unwrap();
//! assert_eq!((&a * &b).to_string(), "2952998742947420089480");
//!
//! assert_eq!(BigInt::factorial(20).unwrap().to_string(), "2432902008176640000");
//!
//! let x: BigDecimal = "12345".parse().unwrap();
//! let y: BigDecimal = "-0.345".parse().unwrap();
//! assert_eq!((&x * &y).to_string(), "-4259.025");
//! ```
//!
//! A minimal expression form `"<integer> <operator> <integer>"` is also
//! supported:
//!
//! ```
//! use bigdec::evaluate;
//!
//! assert_eq!(evaluate("2 ^ 64").unwrap().to_string(), "18446744073709551616");
//! ```

mod convert;
mod dec;
mod digits;
mod error;
mod eval;
mod int;
mod ops;
mod parse;

pub use crate::dec::BigDecimal;
pub use crate::error::{ArithmeticError, EvalError, ParseNumberError};
pub use crate::eval::evaluate;
pub use crate::int::{BigInt, Sign, DIVIDE_BY_ZERO_MSG};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_scenarios() {
        let a: BigDecimal = "-0.12345".parse().unwrap();
        let b: BigDecimal = "0.345".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "0.22155");

        let x: BigInt = "0".parse().unwrap();
        let y: BigInt = "5".parse().unwrap();
        assert_eq!((x - y).to_string(), "-5");

        assert_eq!(evaluate("-10 % 3").unwrap().to_string(), "-1");
    }
}
