// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use num_bigint::BigUint;

use super::{batch_inversion, is_probable_prime, next_prime};
use crate::{
    errors::FieldError,
    field::{prime::PrimeField, QuadField},
};

fn mersenne_61() -> QuadField {
    let base = PrimeField::new(BigUint::from((1u64 << 61) - 1)).unwrap();
    QuadField::new(base).unwrap()
}

// PRIMES
// ================================================================================================

#[test]
fn is_probable_prime_small_values() {
    let primes = [2u64, 3, 5, 7, 71, 73, 97, 7919, 65537];
    for p in primes {
        assert!(is_probable_prime(&BigUint::from(p)), "{p} should be prime");
    }

    let composites = [0u64, 1, 4, 9, 15, 5183, 7917, 65535];
    for n in composites {
        assert!(!is_probable_prime(&BigUint::from(n)), "{n} should be composite");
    }
}

#[test]
fn is_probable_prime_pseudoprimes() {
    // Carmichael numbers
    assert!(!is_probable_prime(&BigUint::from(561u32)));
    assert!(!is_probable_prime(&BigUint::from(41_041u32)));
    assert!(!is_probable_prime(&BigUint::from(1_152_271u32)));

    // strong pseudoprime to bases 2, 3, 5 and 7
    assert!(!is_probable_prime(&BigUint::from(3_215_031_751u64)));
}

#[test]
fn is_probable_prime_large_values() {
    let m61 = BigUint::from((1u64 << 61) - 1);
    assert!(is_probable_prime(&m61));

    let m89 = (BigUint::from(1u32) << 89u32) - 1u32;
    assert!(is_probable_prime(&m89));

    // product of two primes
    assert!(!is_probable_prime(&(&m61 * &m89)));

    // 2^67 - 1 = 193707721 * 761838257287
    let m67 = (BigUint::from(1u32) << 67u32) - 1u32;
    assert!(!is_probable_prime(&m67));
}

#[test]
fn next_prime_small_values() {
    let cases = [(0u64, 2u64), (1, 2), (2, 3), (3, 5), (13, 17), (89, 97), (7919, 7927)];
    for (n, expected) in cases {
        assert_eq!(BigUint::from(expected), next_prime(&BigUint::from(n)), "next_prime({n})");
    }
}

#[test]
fn next_prime_of_reference_value() {
    let start = (BigUint::from(1u32) << 256u32) + 82u32;
    let p = next_prime(&start);
    assert!(p > start);
    assert!(is_probable_prime(&p));

    let mut candidate = &start + 1u32;
    while candidate < p {
        assert!(!is_probable_prime(&candidate));
        candidate += 1u32;
    }
}

// BATCH INVERSION
// ================================================================================================

#[test]
fn batch_inversion_matches_single_inversion() {
    let field = mersenne_61();
    let mut values = field.prng_vector([3; 32], 32);
    values[5].set_zero();
    values[17].set_zero();

    let inverses = batch_inversion(&values).unwrap();
    assert_eq!(values.len(), inverses.len());
    for (value, inverse) in values.iter().zip(inverses.iter()) {
        if value.is_zero() {
            assert!(inverse.is_zero());
        } else {
            assert_eq!(value.inv().unwrap(), *inverse);
            assert!((value * inverse).is_one());
        }
    }
}

#[test]
fn batch_inversion_of_empty_slice() {
    let values = Vec::<crate::field::QuadElement>::new();
    assert!(batch_inversion(&values).unwrap().is_empty());
}

#[test]
fn batch_inversion_of_zeros() {
    let field = mersenne_61();
    let values = vec![field.zero(); 4];
    let inverses = batch_inversion(&values).unwrap();
    assert!(inverses.iter().all(|value| value.is_zero()));
}

#[test]
fn batch_inversion_rejects_mixed_fields() {
    let field1 = mersenne_61();
    let field2 = mersenne_61();
    let values = vec![field1.from_u64s(1, 2), field2.from_u64s(3, 4)];
    assert_eq!(Err(FieldError::MismatchedFields), batch_inversion(&values));
}
