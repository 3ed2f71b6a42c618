// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use num_bigint::BigUint;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use utils::{ByteReader, SliceReader};

use super::{BaseElement, BaseField, LegendreSymbol, PrimeField};
use crate::{
    errors::{ElementDecodingError, FieldError},
    utils::next_prime,
};

const M61: u64 = (1 << 61) - 1;

fn field(p: u64) -> PrimeField {
    PrimeField::new(BigUint::from(p)).unwrap()
}

fn reference_field() -> PrimeField {
    let start = (BigUint::from(1u32) << 256u32) + 82u32;
    PrimeField::new(next_prime(&start)).unwrap()
}

// CONSTRUCTION
// ================================================================================================

#[test]
fn new_rejects_invalid_moduli() {
    for p in [0u64, 1, 2, 4, 9, 15, 561, 1 << 20] {
        let result = PrimeField::new(BigUint::from(p));
        assert!(
            matches!(result, Err(FieldError::InvalidConstruction(_))),
            "modulus {p} should be rejected"
        );
    }
}

#[test]
fn from_decimal() {
    let f = PrimeField::from_decimal(" 2305843009213693951 ").unwrap();
    assert_eq!(&BigUint::from(M61), f.modulus());
    assert_eq!(61, f.modulus_bits());
    assert_eq!(8, f.element_bytes());

    assert!(matches!(PrimeField::from_decimal("12ab"), Err(FieldError::InvalidConstruction(_))));
    assert!(matches!(PrimeField::from_decimal("21"), Err(FieldError::InvalidConstruction(_))));
}

#[test]
fn element_bytes() {
    assert_eq!(1, field(3).element_bytes());
    assert_eq!(1, field(251).element_bytes());
    assert_eq!(2, field(257).element_bytes());
    assert_eq!(33, reference_field().element_bytes());
}

#[test]
fn two_adicity() {
    assert_eq!(1, field(103).two_adicity());
    assert_eq!(5, field(97).two_adicity());
    assert_eq!(8, field(257).two_adicity());
    assert_eq!(16, field(65537).two_adicity());
}

// ALGEBRA
// ================================================================================================

#[test]
fn arithmetic_matches_reference() {
    let f = reference_field();
    let p = f.modulus().clone();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let a = f.rand_element(&mut rng);
        let b = f.rand_element(&mut rng);
        let (ai, bi) = (a.as_int(), b.as_int());

        assert_eq!((ai + bi) % &p, *f.add(&a, &b).as_int());
        assert_eq!((ai + &p - bi) % &p, *f.sub(&a, &b).as_int());
        assert_eq!((ai * bi) % &p, *f.mul(&a, &b).as_int());
        assert_eq!((&p - ai) % &p, *f.neg(&a).as_int());
        assert_eq!((ai * ai) % &p, *f.square(&a).as_int());
        assert_eq!((ai << 1u32) % &p, *f.double(&a).as_int());
    }
}

#[test]
fn from_biguint_reduces() {
    let f = field(103);
    assert_eq!(f.from_u64(5), f.from_biguint(&BigUint::from(108u32)));
    assert_eq!(f.zero(), f.from_u64(103));
    assert_eq!(BigUint::from(1u32), f.to_biguint(&f.from_u64(104)));
}

#[test]
fn neg_of_zero() {
    let f = field(103);
    assert_eq!(f.zero(), f.neg(&f.zero()));
}

#[test]
fn exp() {
    let f = field(103);
    let a = f.from_u64(5);
    assert_eq!(f.one(), f.exp(&a, &BigUint::from(0u32)));
    assert_eq!(f.from_u64(125), f.exp(&a, &BigUint::from(3u32)));
    // a^(p-1) = 1
    assert_eq!(f.one(), f.exp(&a, &BigUint::from(102u32)));
}

#[test]
fn inv() {
    let f = reference_field();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let a = f.rand_element(&mut rng);
        let a_inv = f.inv(&a).unwrap();
        assert_eq!(f.one(), f.mul(&a, &a_inv));
    }
    assert_eq!(Err(FieldError::DivideByZero), f.inv(&f.zero()));
}

// SQUARES
// ================================================================================================

#[test]
fn legendre() {
    let f = field(13);
    // squares mod 13: 1, 3, 4, 9, 10, 12
    let squares = [1u64, 3, 4, 9, 10, 12];
    assert_eq!(LegendreSymbol::Zero, f.legendre(&f.zero()));
    for a in 1..13u64 {
        let expected = if squares.contains(&a) {
            LegendreSymbol::QuadraticResidue
        } else {
            LegendreSymbol::QuadraticNonResidue
        };
        assert_eq!(expected, f.legendre(&f.from_u64(a)), "legendre({a})");
    }
    assert!(f.is_square(&f.zero()));
    assert!(!f.is_square(&f.from_u64(2)));
}

#[test]
fn sqrt_small_fields() {
    // covers p = 3 (mod 4) and Tonelli-Shanks with various 2-adicities
    for p in [3u64, 7, 13, 17, 41, 97, 103, 257] {
        let f = field(p);
        for a in 0..p {
            let a = f.from_u64(a);
            match f.sqrt(&a) {
                Ok(root) => {
                    assert!(f.is_square(&a));
                    assert_eq!(a, f.square(&root), "sqrt in GF({p})");
                },
                Err(err) => {
                    assert_eq!(FieldError::NotASquare, err);
                    assert!(!f.is_square(&a));
                },
            }
        }
    }
}

#[test]
fn sqrt_large_fields() {
    let mut rng = StdRng::seed_from_u64(11);
    for f in [field(65537), field(M61), reference_field()] {
        for _ in 0..50 {
            let a = f.rand_element(&mut rng);
            let square = f.square(&a);
            let root = f.sqrt(&square).unwrap();
            assert!(root == a || root == f.neg(&a));
        }
    }
}

// RANDOMNESS
// ================================================================================================

#[test]
fn rand_element_in_range() {
    let f = field(257);
    let mut rng = StdRng::seed_from_u64(1);
    let mut seen_large = false;
    for _ in 0..5000 {
        let a = f.rand_element(&mut rng);
        assert!(*a.as_int() < BigUint::from(257u32));
        seen_large |= *a.as_int() >= BigUint::from(256u32);
    }
    // 256 is reachable because sampling covers the full bit length of the modulus
    assert!(seen_large);
}

#[test]
fn rand_element_is_deterministic_for_seeded_rng() {
    let f = reference_field();
    let mut rng1 = StdRng::from_seed([5; 32]);
    let mut rng2 = StdRng::from_seed([5; 32]);
    let a = (0..4).map(|_| f.rand_element(&mut rng1)).collect::<Vec<_>>();
    let b = (0..4).map(|_| f.rand_element(&mut rng2)).collect::<Vec<_>>();
    assert_eq!(a, b);
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

#[test]
fn write_element_is_fixed_width_big_endian() {
    let f = field(65537);
    let mut bytes = Vec::new();
    f.write_element(&f.from_u64(0x1234), &mut bytes);
    f.write_element(&f.from_u64(7), &mut bytes);
    assert_eq!(vec![0x00, 0x12, 0x34, 0x00, 0x00, 0x07], bytes);

    let mut reader = SliceReader::new(&bytes);
    assert_eq!(f.from_u64(0x1234), f.read_element(&mut reader).unwrap());
    assert_eq!(f.from_u64(7), f.read_element(&mut reader).unwrap());
    assert!(!reader.has_more_bytes());
}

#[test]
fn read_element_rejects_values_out_of_range() {
    let f = field(257);
    let bytes = [0x01, 0x01];
    let mut reader = SliceReader::new(&bytes);
    assert!(f.read_element(&mut reader).is_err());

    let short = [0x01];
    let mut reader = SliceReader::new(&short);
    assert!(f.read_element(&mut reader).is_err());
}

#[test]
fn parse_element() {
    let f = field(257);
    assert_eq!(f.from_u64(200), f.parse_element("200").unwrap());
    assert_eq!(f.from_u64(0xff), f.parse_element(" 0xff ").unwrap());
    assert_eq!(f.from_u64(0xab), f.parse_element("0XAB").unwrap());

    assert_eq!(
        Err(ElementDecodingError::ValueTooLarge("257".to_string())),
        f.parse_element("257")
    );
    assert!(matches!(f.parse_element("12z"), Err(ElementDecodingError::InvalidDigits(_))));
    assert!(matches!(f.parse_element(""), Err(ElementDecodingError::InvalidDigits(_))));
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_seed_rejects_values_out_of_range() {
    use serde::de::{
        value::{Error, SeqDeserializer},
        DeserializeSeed,
    };

    // BigUint is encoded as a sequence of little-endian u32 digits
    let digits = |value: u32| SeqDeserializer::<_, Error>::new(vec![value].into_iter());

    let f = field(103);
    assert_eq!(f.from_u64(97), (&f).deserialize(digits(97)).unwrap());
    assert!((&f).deserialize(digits(103)).is_err());
    assert!((&f).deserialize(digits(200)).is_err());
}

#[test]
fn display() {
    let f = field(257);
    let a: BaseElement = f.from_u64(255);
    assert_eq!("255", format!("{a}"));
    assert_eq!("ff", format!("{a:x}"));
    assert_eq!("0xff", format!("{a:#x}"));
    assert_eq!("GF(257)", format!("{f}"));
}

// RANDOMIZED TESTS
// ================================================================================================

proptest! {
    #[test]
    fn add_mul_match_u128_reference(a in 0..M61, b in 0..M61) {
        let f = field(M61);
        let (x, y) = (f.from_u64(a), f.from_u64(b));

        let expected_sum = (a as u128 + b as u128) % M61 as u128;
        let expected_product = (a as u128 * b as u128) % M61 as u128;
        prop_assert_eq!(BigUint::from(expected_sum), f.to_biguint(&f.add(&x, &y)));
        prop_assert_eq!(BigUint::from(expected_product), f.to_biguint(&f.mul(&x, &y)));
        prop_assert_eq!(f.zero(), f.add(&x, &f.neg(&x)));
    }

    #[test]
    fn sub_then_add(a in 0..M61, b in 0..M61) {
        let f = field(M61);
        let (x, y) = (f.from_u64(a), f.from_u64(b));
        prop_assert_eq!(x.clone(), f.add(&f.sub(&x, &y), &y));
    }
}
