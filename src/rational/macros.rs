/// Shorthand for creating a rational number in tests.
///
/// With one argument the value is an integer, with two it is a numerator and denominator pair.
/// The pair form panics on a zero denominator.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::Rational::from($value as i64)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Rational::from_i64($numerator, $denominator).unwrap()
    };
}
