//! # Inclusive ranges
//!
//! An interval between two rational endpoints, both included. `std::ops::RangeInclusive` is not
//! reused because its containment test returns `false` for everything once the endpoints are
//! reversed; here the endpoints themselves remain contained.
use crate::rational::Rational;

/// An inclusive interval between two rational numbers.
///
/// The endpoints are kept exactly as given; no `lower <= upper` ordering is enforced. When the
/// endpoints are reversed, no value lies strictly between them and containment holds only for the
/// endpoints themselves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InclusiveRange {
    lower: Rational,
    upper: Rational,
}

impl InclusiveRange {
    /// Create an interval from its two endpoints.
    pub fn new(lower: Rational, upper: Rational) -> Self {
        Self { lower, upper }
    }

    /// Whether a value lies within this interval, endpoints included.
    pub fn contains(&self, value: &Rational) -> bool {
        (&self.lower < value && value < &self.upper)
            || value == &self.lower
            || value == &self.upper
    }

    /// The endpoint the interval was constructed from first.
    pub fn lower(&self) -> &Rational {
        &self.lower
    }

    /// The endpoint the interval was constructed from second.
    pub fn upper(&self) -> &Rational {
        &self.upper
    }
}

impl Rational {
    /// Create an inclusive interval running from this value up to and including `upper`.
    pub fn range_to(self, upper: Self) -> InclusiveRange {
        InclusiveRange::new(self, upper)
    }
}
