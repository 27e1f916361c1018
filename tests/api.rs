//! # Reference scenarios
//!
//! The usage walk the crate was built against, exercised through the public API only.
use exact_rational::{DivisionByZero, InclusiveRange, ParseError, Rational};
use exact_rational::R;

fn half() -> Rational {
    Rational::from_i32(1, 2).unwrap()
}

fn third() -> Rational {
    Rational::from_i32(1, 3).unwrap()
}

#[test]
fn basic_operations() {
    assert_eq!((half() + third()).to_string(), "5/6");
    assert_eq!((half() - third()).to_string(), "1/6");
    assert_eq!((half() * third()).to_string(), "1/6");
    assert_eq!((half() / third()).to_string(), "3/2");
    assert_eq!((-half()).to_string(), "-1/2");
}

#[test]
fn formatting() {
    assert_eq!(Rational::from_i32(2, 1).unwrap().to_string(), "2");
    assert_eq!(Rational::from_i32(-2, 4).unwrap().to_string(), "-1/2");
    assert_eq!(Rational::from(7_i64).to_string(), "7");
}

#[test]
fn parsing() {
    let parsed: Rational = "117/1098".parse().unwrap();
    assert_eq!(parsed.to_string(), "13/122");

    assert!(matches!("abc/2".parse::<Rational>(), Err(ParseError::Numerator(_))));
    assert!(matches!("2/xyz".parse::<Rational>(), Err(ParseError::Denominator(_))));
}

#[test]
fn comparison() {
    assert!(half() < Rational::from_i32(2, 3).unwrap());
    assert_eq!(half(), Rational::from_i32(2, 4).unwrap());
    assert!(Rational::from(1_i32) <= Rational::from(1_i64));
}

#[test]
fn range_membership() {
    let range = third().range_to(Rational::from_i32(2, 3).unwrap());
    assert!(range.contains(&half()));

    let reversed = InclusiveRange::new(Rational::from_i32(2, 3).unwrap(), third());
    assert!(!reversed.contains(&half()));
    assert!(reversed.contains(&third()));
}

#[test]
fn arbitrary_precision() {
    assert_eq!(Rational::from_i64(2_000_000_000, 4_000_000_000).unwrap(), half());

    let numerator = "1234567890123456789012345678901234567890".parse().unwrap();
    let denominator = "2469135780246913578024691357802469135780".parse().unwrap();
    assert_eq!(Rational::new(numerator, denominator).unwrap(), half());
}

#[test]
fn failures_are_values() {
    assert_eq!(Rational::from_i32(1, 0), Err(DivisionByZero));
    assert_eq!(half().checked_div(&R!(0)), Err(DivisionByZero));
}
