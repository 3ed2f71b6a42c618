// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::{hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fp2_math::{
    fields::PrimeField,
    utils::{batch_inversion, next_prime},
    BaseField, QuadField,
};
use num_bigint::BigUint;
use rand::{rngs::StdRng, SeedableRng};

const SIZES: [usize; 3] = [256, 1_024, 4_096];

fn reference_prime() -> BigUint {
    next_prime(&((BigUint::from(1u32) << 256u32) + 82u32))
}

pub fn prime_field_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_field");
    let field = PrimeField::new(reference_prime()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let x = field.rand_element(&mut rng);
    let y = field.rand_element(&mut rng);

    group.bench_function("add", |bench| bench.iter(|| field.add(black_box(&x), black_box(&y))));
    group.bench_function("mul", |bench| bench.iter(|| field.mul(black_box(&x), black_box(&y))));
    group.bench_function("inv", |bench| bench.iter(|| field.inv(black_box(&x))));

    let square = field.square(&x);
    group.bench_function("sqrt", |bench| bench.iter(|| field.sqrt(black_box(&square))));
}

pub fn quad_extension_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad_extension");
    let field = QuadField::new(PrimeField::new(reference_prime()).unwrap()).unwrap();

    let values = field.prng_vector([1; 32], 2);
    let (x, y) = (&values[0], &values[1]);

    group.bench_function("add", |bench| bench.iter(|| black_box(x) + black_box(y)));
    group.bench_function("mul", |bench| bench.iter(|| black_box(x) * black_box(y)));
    group.bench_function("square", |bench| bench.iter(|| black_box(x).square()));
    group.bench_function("inv", |bench| bench.iter(|| black_box(x).inv()));
    group.bench_function("is_square", |bench| bench.iter(|| black_box(x).is_square()));

    let square = x.square();
    group.bench_function("sqrt", |bench| bench.iter(|| black_box(&square).sqrt()));
}

pub fn batch_inv(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_inversion");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));

    let field = QuadField::new(PrimeField::new(reference_prime()).unwrap()).unwrap();
    for &size in SIZES.iter() {
        let values = field.prng_vector([2; 32], size);
        group.bench_function(BenchmarkId::new("quad", size), |bench| {
            bench.iter(|| batch_inversion(black_box(&values)))
        });
    }

    group.finish();
}

criterion_group!(field_group, prime_field_ops, quad_extension_ops, batch_inv);
criterion_main!(field_group);
