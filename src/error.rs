//! # Errors
//!
//! The two failure kinds of this crate. Both are plain values that propagate through `Result`;
//! there is no logging and no recovery, callers decide what a failure means.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use num::bigint::ParseBigIntError;

/// A denominator would be zero.
///
/// Returned when constructing a rational number with a zero denominator, or when dividing by a
/// rational number with a zero numerator.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DivisionByZero;

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("rational number with a denominator equal to zero")
    }
}

impl Error for DivisionByZero {}

/// Text could not be interpreted as a rational number.
///
/// Produced while parsing the `<numerator>/<denominator>` form. The variant indicates which
/// section of the input was rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The numerator section is not a valid integer literal.
    Numerator(ParseBigIntError),
    /// The denominator section is not a valid integer literal.
    Denominator(ParseBigIntError),
    /// Both sections are valid integers, but the denominator is zero.
    DivisionByZero(DivisionByZero),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Numerator(error) => {
                write!(f, "Failed to parse the numerator section: {}", error)
            },
            ParseError::Denominator(error) => {
                write!(f, "Failed to parse the denominator section: {}", error)
            },
            ParseError::DivisionByZero(error) => write!(f, "{}", error),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Numerator(error) | ParseError::Denominator(error) => Some(error),
            ParseError::DivisionByZero(error) => Some(error),
        }
    }
}

impl From<DivisionByZero> for ParseError {
    fn from(error: DivisionByZero) -> Self {
        Self::DivisionByZero(error)
    }
}
