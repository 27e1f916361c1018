use criterion::criterion_main;

mod arithmetic;
mod canonical;

criterion_main!(
    canonical::canonical,
    arithmetic::arithmetic,
);
