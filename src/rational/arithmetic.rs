//! # Arithmetic
//!
//! The four binary operations, their assignment variants, negation and the additive and
//! multiplicative identities. Every binary result is built as a raw numerator and denominator
//! pair and reduced to canonical form before it is returned.
//!
//! The reference implementations operate on two borrowed values; the owned and assignment
//! variants forward to them, so large operands are never cloned.
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{BigInt, One, Zero};

use crate::error::DivisionByZero;
use crate::rational::Rational;

impl Rational {
    /// Divide by another rational number, rejecting a zero divisor.
    ///
    /// This is the failure-reporting counterpart of the `/` operator: dividing by a value with
    /// numerator zero would put a zero denominator on the result, which canonicalization cannot
    /// accept.
    ///
    /// # Errors
    ///
    /// When `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, DivisionByZero> {
        if rhs.numerator.is_zero() {
            Err(DivisionByZero)
        } else {
            Ok(Self::canonical(
                &self.numerator * &rhs.denominator,
                &self.denominator * &rhs.numerator,
            ))
        }
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Self::Output {
        Rational::canonical(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Rational::canonical(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Rational::canonical(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Div<&Rational> for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// When `rhs` is zero. Use [`Rational::checked_div`] to handle the failure as a value.
    fn div(self, rhs: &Rational) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Forward the owned and assignment variants of a binary operator to its two-reference
/// implementation.
macro_rules! forward_binary_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl $op<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $op<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl $op_assign<Rational> for Rational {
            fn $method_assign(&mut self, rhs: Rational) {
                *self = (&*self).$method(&rhs);
            }
        }

        impl $op_assign<&Rational> for Rational {
            fn $method_assign(&mut self, rhs: &Rational) {
                *self = (&*self).$method(rhs);
            }
        }
    }
}

forward_binary_op!(Add, add, AddAssign, add_assign);
forward_binary_op!(Sub, sub, SubAssign, sub_assign);
forward_binary_op!(Mul, mul, MulAssign, mul_assign);
forward_binary_op!(Div, div, DivAssign, div_assign);

impl Neg for Rational {
    type Output = Self;

    /// Flip the sign of the numerator.
    ///
    /// A canonical value stays canonical under negation, so the result is not reduced again.
    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            numerator: BigInt::one(),
            denominator: BigInt::one(),
        }
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
