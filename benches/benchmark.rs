// Copyright 2020 CoD Team

//! bigdec benchmark

use bigdec::{BigDecimal, BigInt};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn parse(s: &str) -> BigInt {
    s.parse().unwrap()
}

fn parse_dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_small", |b| {
        b.iter(|| {
            let _n = parse(black_box("12345"));
        })
    });
    c.bench_function("parse_large", |b| {
        b.iter(|| {
            let _n = parse(black_box(
                "-340282366920938463463374607431768211455000000000",
            ));
        })
    });
    c.bench_function("parse_decimal", |b| {
        b.iter(|| {
            let _n = parse_dec(black_box("-123456789.987654321"));
        })
    });
}

fn to_string_benchmark(c: &mut Criterion) {
    let n = parse("-340282366920938463463374607431768211455000000000");
    c.bench_function("to_string", |b| {
        b.iter(|| {
            let _s = black_box(&n).to_string();
        })
    });
}

fn arith_benchmark(c: &mut Criterion) {
    let x = parse("71045943470123456789123456789");
    let y = parse("-41564635484987654321");

    c.bench_function("add", |b| {
        b.iter(|| {
            let _n = black_box(&x) + black_box(&y);
        })
    });
    c.bench_function("mul", |b| {
        b.iter(|| {
            let _n = black_box(&x) * black_box(&y);
        })
    });
    c.bench_function("div", |b| {
        b.iter(|| {
            let _n = black_box(&x) / black_box(&y);
        })
    });

    let dx = parse_dec("123456789.987654321");
    let dy = parse_dec("-2.345");
    c.bench_function("dec_div", |b| {
        b.iter(|| {
            let _n = black_box(&dx) / black_box(&dy);
        })
    });
}

fn sqrt_benchmark(c: &mut Criterion) {
    let n = parse("99999999999999999999");
    c.bench_function("sqrt", |b| {
        b.iter(|| {
            let _n = black_box(&n).sqrt();
        })
    });
}

fn factorial_benchmark(c: &mut Criterion) {
    c.bench_function("factorial_20", |b| {
        b.iter(|| {
            let _n = BigInt::factorial(black_box(20)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    parse_benchmark,
    to_string_benchmark,
    arith_benchmark,
    sqrt_benchmark,
    factorial_benchmark
);
criterion_main!(benches);
