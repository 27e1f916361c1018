use criterion::{black_box, Criterion, criterion_group};
use num::BigInt;

use exact_rational::Rational;

pub fn reduce_small(c: &mut Criterion) {
    c.bench_function("reduce a machine word sized pair", |b| b.iter(|| {
        Rational::new(black_box(BigInt::from(117)), black_box(BigInt::from(1098)))
    }));
}

pub fn reduce_large(c: &mut Criterion) {
    let numerator: BigInt = "1234567890123456789012345678901234567890".parse().unwrap();
    let denominator: BigInt = "2469135780246913578024691357802469135780".parse().unwrap();

    c.bench_function("reduce a 40 digit pair", |b| b.iter(|| {
        Rational::new(black_box(numerator.clone()), black_box(denominator.clone()))
    }));
}

pub fn parse_small(c: &mut Criterion) {
    c.bench_function("parse a machine word sized pair", |b| b.iter(|| {
        black_box("117/1098").parse::<Rational>()
    }));
}

criterion_group!(canonical,
    reduce_small,
    reduce_large,
    parse_small,
);
