// Copyright 2020 CoD Team

//! Three-token integer expression evaluation.

use crate::error::{ArithmeticError, EvalError};
use crate::int::BigInt;

/// Evaluates an expression of the form `"<integer> <operator> <integer>"`
/// where the operator is one of `+`, `-`, `*`, `/`, `%` or `^`.
///
/// The right operand of `^` is coerced through the saturating `to_i32`
/// conversion. Division and remainder by zero, malformed expressions,
/// unknown operators and invalid operand literals are all reported as
/// [`EvalError`]s.
///
/// # Examples
///
/// ```
/// use bigdec::evaluate;
///
/// let result = evaluate("-10 % 3").unwrap();
/// assert_eq!(result.to_string(), "-1");
/// ```
pub fn evaluate(expression: &str) -> Result<BigInt, EvalError> {
    let mut tokens = expression.split_whitespace();
    let (lhs, operator, rhs) = match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(lhs), Some(operator), Some(rhs), None) => (lhs, operator, rhs),
        _ => return Err(EvalError::malformed()),
    };

    let x: BigInt = lhs.parse()?;
    let y: BigInt = rhs.parse()?;

    match operator {
        "+" => Ok(x.add_common(&y)),
        "-" => Ok(x.sub_common(&y)),
        "*" => Ok(x.mul_common(&y)),
        "/" => x
            .checked_div(&y)
            .ok_or_else(|| ArithmeticError::division_by_zero().into()),
        "%" => x
            .checked_rem(&y)
            .ok_or_else(|| ArithmeticError::division_by_zero().into()),
        "^" => x
            .checked_pow(y.to_i32())
            .ok_or_else(|| ArithmeticError::division_by_zero().into()),
        _ => Err(EvalError::unknown_operator()),
    }
}
