//! # Text form
//!
//! A rational number reads and writes as `<numerator>/<denominator>`, or as the numerator alone
//! when the denominator is one. The written form is canonical; the read form may be any valid
//! pair and is reduced on the way in.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num::{BigInt, One};

use crate::error::ParseError;
use crate::rational::Rational;

impl Display for Rational {
    /// The value is canonical by invariant, so an integral value has denominator one exactly and
    /// any sign sits on the numerator.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    /// Read a rational number from its decimal-slash text form.
    ///
    /// Without a `/`, the entire text is the numerator and the denominator is one. With one, the
    /// sections before and after it are the numerator and denominator. Any text after a second
    /// `/` is ignored.
    ///
    /// # Errors
    ///
    /// When a used section is not a valid decimal integer, or when the denominator section is
    /// zero.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (numerator_text, denominator_text) = match text.find('/') {
            None => (text, None),
            Some(index) => {
                let after = &text[(index + 1)..];
                let denominator_text = match after.find('/') {
                    None => after,
                    Some(second_index) => &after[..second_index],
                };

                (&text[..index], Some(denominator_text))
            },
        };

        let numerator = numerator_text.parse::<BigInt>()
            .map_err(ParseError::Numerator)?;
        let denominator = match denominator_text {
            None => BigInt::one(),
            Some(denominator_text) => denominator_text.parse::<BigInt>()
                .map_err(ParseError::Denominator)?,
        };

        Ok(Self::new(numerator, denominator)?)
    }
}
