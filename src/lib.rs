//! # Exact rational numbers
//!
//! Arithmetic with ratios of arbitrary precision integers. Values are always kept in canonical
//! form: fully reduced, with a positive denominator. Computation is exact; there is no rounding
//! and no overflow, regardless of how large the numerator and denominator grow.
//!
//! The [`Rational`] type carries the four basic operations, negation, a total ordering and
//! conversion from and to the `<numerator>/<denominator>` text form. [`InclusiveRange`] pairs two
//! values into an inclusive interval with a containment test.
pub use error::DivisionByZero;
pub use error::ParseError;
pub use rational::InclusiveRange;
pub use rational::Rational;

mod error;
mod rational;
