// Copyright 2020 CoD Team

//! Error types.

use std::error::Error;
use std::fmt;

/// An error which can be returned when parsing a big integer or a big decimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNumberError {
    kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseErrorKind {
    Empty,
    Invalid,
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind {
            ParseErrorKind::Empty => write!(f, "cannot parse number from empty string"),
            ParseErrorKind::Invalid => write!(f, "invalid number literal"),
        }
    }
}

impl Error for ParseNumberError {}

impl ParseNumberError {
    #[inline]
    pub(crate) const fn new(kind: ParseErrorKind) -> Self {
        ParseNumberError { kind }
    }

    #[inline]
    pub(crate) const fn empty() -> Self {
        Self::new(ParseErrorKind::Empty)
    }

    #[inline]
    pub(crate) const fn invalid() -> Self {
        Self::new(ParseErrorKind::Invalid)
    }
}

/// An error which can be returned by fallible arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticError {
    kind: ArithmeticErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ArithmeticErrorKind {
    DivisionByZero,
    NegativeFactorial,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind {
            ArithmeticErrorKind::DivisionByZero => write!(f, "attempt to divide by zero"),
            ArithmeticErrorKind::NegativeFactorial => {
                write!(f, "factorial of a negative number is undefined")
            }
        }
    }
}

impl Error for ArithmeticError {}

impl ArithmeticError {
    #[inline]
    pub(crate) const fn new(kind: ArithmeticErrorKind) -> Self {
        ArithmeticError { kind }
    }

    #[inline]
    pub(crate) const fn division_by_zero() -> Self {
        Self::new(ArithmeticErrorKind::DivisionByZero)
    }

    #[inline]
    pub(crate) const fn negative_factorial() -> Self {
        Self::new(ArithmeticErrorKind::NegativeFactorial)
    }
}

/// An error which can be returned when evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError {
    kind: EvalErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EvalErrorKind {
    Parse(ParseNumberError),
    Arithmetic(ArithmeticError),
    Malformed,
    UnknownOperator,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match &self.kind {
            EvalErrorKind::Parse(e) => write!(f, "invalid operand: {}", e),
            EvalErrorKind::Arithmetic(e) => write!(f, "{}", e),
            EvalErrorKind::Malformed => {
                write!(f, "expression must be \"<integer> <operator> <integer>\"")
            }
            EvalErrorKind::UnknownOperator => write!(f, "operation not supported"),
        }
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            EvalErrorKind::Parse(e) => Some(e),
            EvalErrorKind::Arithmetic(e) => Some(e),
            _ => None,
        }
    }
}

impl EvalError {
    #[inline]
    pub(crate) const fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    #[inline]
    pub(crate) const fn malformed() -> Self {
        Self::new(EvalErrorKind::Malformed)
    }

    #[inline]
    pub(crate) const fn unknown_operator() -> Self {
        Self::new(EvalErrorKind::UnknownOperator)
    }
}

impl From<ParseNumberError> for EvalError {
    #[inline]
    fn from(e: ParseNumberError) -> Self {
        EvalError::new(EvalErrorKind::Parse(e))
    }
}

impl From<ArithmeticError> for EvalError {
    #[inline]
    fn from(e: ArithmeticError) -> Self {
        EvalError::new(EvalErrorKind::Arithmetic(e))
    }
}
