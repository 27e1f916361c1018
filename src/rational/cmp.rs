//! # Ordering
//!
//! Rational numbers are totally ordered. Comparing `a.n/a.d` with `b.n/b.d` multiplies both sides
//! by the product of the denominators, which reduces to comparing the two cross products
//! `a.n * b.d` and `b.n * a.d`. Both denominators are positive in canonical form, so the
//! multiplication never flips the ordering.
use std::cmp::Ordering;

use crate::rational::Rational;

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
