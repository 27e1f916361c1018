use criterion::{black_box, Criterion, criterion_group};

use exact_rational::{R, Rational};

pub fn add_small(c: &mut Criterion) {
    let a = R!(1, 2);
    let b = R!(1, 3);

    c.bench_function("add two small values", |bencher| bencher.iter(|| {
        black_box(&a) + black_box(&b)
    }));
}

pub fn multiply_small(c: &mut Criterion) {
    let a = R!(117, 1098);
    let b = R!(1098, 117);

    c.bench_function("multiply two small values", |bencher| bencher.iter(|| {
        black_box(&a) * black_box(&b)
    }));
}

pub fn divide_large(c: &mut Criterion) {
    let a: Rational = "1234567890123456789012345678901234567890/7".parse().unwrap();
    let b: Rational = "7/1234567890123456789012345678901234567891".parse().unwrap();

    c.bench_function("divide two 40 digit values", |bencher| bencher.iter(|| {
        black_box(&a).checked_div(black_box(&b))
    }));
}

criterion_group!(arithmetic,
    add_small,
    multiply_small,
    divide_large,
);
