//! # Rational numbers
//!
//! An exact ratio of two arbitrary precision integers, the value type of this crate.
//!
//! Every observable value is canonical: numerator and denominator share no divisor larger than
//! one and the denominator is positive. Operations validate or preserve these invariants, so the
//! derived structural equality coincides with value equality.
pub use range::InclusiveRange;

use num::{BigInt, Integer, Signed, Zero};

use crate::error::DivisionByZero;

mod arithmetic;
mod cmp;
mod fmt;
mod macros;
mod range;

/// An exact rational number.
///
/// The sign of the value, if any, lives in the numerator. A zero value is represented as `0/1`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rational {
    /// Carries the sign; zero exactly when the value is zero.
    numerator: BigInt,
    /// Strictly positive.
    denominator: BigInt,
}

impl Rational {
    /// Create a rational number from a pair of arbitrary precision integers.
    ///
    /// The result is canonical regardless of the input pair: `new(2.into(), (-4).into())` equals
    /// `new((-1).into(), 2.into())`.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: Any integer except zero. Its sign is absorbed into the numerator.
    ///
    /// # Errors
    ///
    /// When `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, DivisionByZero> {
        let raw = Self::new_raw(numerator, denominator)?;

        Ok(Self::canonical(raw.numerator, raw.denominator))
    }

    /// Create a rational number from a pair of 32-bit integers.
    ///
    /// # Errors
    ///
    /// When `denominator` is zero.
    pub fn from_i32(numerator: i32, denominator: i32) -> Result<Self, DivisionByZero> {
        Self::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    /// Create a rational number from a pair of 64-bit integers.
    ///
    /// # Errors
    ///
    /// When `denominator` is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, DivisionByZero> {
        Self::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    /// Validate a pair of integers as a rational number without reducing it.
    ///
    /// The unreduced pair is a valid intermediate within this crate only; every constructor that
    /// hands a value to a caller reduces it first. Keeping this constructor private is what makes
    /// the derived equality of the type correct.
    fn new_raw(numerator: BigInt, denominator: BigInt) -> Result<Self, DivisionByZero> {
        if denominator.is_zero() {
            Err(DivisionByZero)
        } else {
            Ok(Self { numerator, denominator })
        }
    }

    /// Reduce a pair of integers to the unique canonical representation of their ratio.
    ///
    /// The greatest common divisor is unsigned, so dividing it out leaves the sign of each side
    /// untouched; a negative denominator is then repaired by negating both sides. A zero
    /// numerator ends up as `0/1` because `gcd(0, d) = |d|`.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: Any integer except zero; this precondition was validated by the caller
    /// and is not re-checked.
    fn canonical(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        let gcd = numerator.gcd(&denominator);
        let mut numerator = numerator / &gcd;
        let mut denominator = denominator / gcd;

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Self { numerator, denominator }
    }

    /// The numerator of the canonical form.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator of the canonical form. Always positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }
}

impl From<BigInt> for Rational {
    /// An integer is the rational number with denominator one; no reduction is needed.
    fn from(integer: BigInt) -> Self {
        Self {
            numerator: integer,
            denominator: BigInt::from(1),
        }
    }
}

impl From<i32> for Rational {
    fn from(integer: i32) -> Self {
        Self::from(BigInt::from(integer))
    }
}

impl From<i64> for Rational {
    fn from(integer: i64) -> Self {
        Self::from(BigInt::from(integer))
    }
}
