// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of a prime field with a modulus selected at runtime.
//!
//! Residues are stored in their canonical form as [BigUint] values in the range [0, p). The
//! modulus can be any odd prime; square roots are computed with a single exponentiation when
//! p = 3 (mod 4) and with the Tonelli-Shanks algorithm otherwise.

use core::fmt::{self, Debug, Display, Formatter, LowerHex};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{
    de::{DeserializeSeed, Error as _},
    Deserialize, Deserializer, Serialize,
};
use tracing::debug;
use utils::{bytes_for_bits, ByteReader, ByteWriter, DeserializationError};

use super::{BaseField, LegendreSymbol, MAX_NON_RESIDUE_CANDIDATES};
use crate::{
    errors::{ElementDecodingError, FieldError},
    utils::is_probable_prime,
};

#[cfg(test)]
mod tests;

// BASE ELEMENT
// ================================================================================================

/// Represents an element of a [PrimeField].
///
/// Internal values are stored in their canonical form in the range [0, p). Elements can only be
/// created through a [PrimeField], which guarantees the range invariant; with the `serde`
/// feature, elements are deserialized through `&PrimeField` as a [DeserializeSeed].
#[derive(Clone, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BaseElement(BigUint);

impl BaseElement {
    /// Returns a canonical integer representation of this element.
    pub fn as_int(&self) -> &BigUint {
        &self.0
    }

    /// Consumes this element and returns its canonical integer representation.
    pub fn into_int(self) -> BigUint {
        self.0
    }
}

impl Debug for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Display for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl LowerHex for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

// SQUARE ROOT STRATEGY
// ================================================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum SqrtStrategy {
    /// p = 3 (mod 4): a square root of a is a^((p + 1) / 4).
    ThreeModFour { power: BigUint },
    /// p - 1 = 2^s * t with t odd; `root_of_unity` is z^t for the smallest non-residue z.
    TonelliShanks {
        two_adicity: u64,
        t_minus_one_div_two: BigUint,
        root_of_unity: BigUint,
    },
}

// PRIME FIELD
// ================================================================================================

/// A prime field GF(p) for an odd prime p chosen at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    modulus_bits: u64,
    element_bytes: usize,
    /// (p - 1) / 2; exponent of Euler's criterion.
    legendre_power: BigUint,
    sqrt_strategy: SqrtStrategy,
}

impl PrimeField {
    /// Returns a new prime field with the specified modulus.
    ///
    /// # Errors
    /// Returns [FieldError::InvalidConstruction] if the modulus is not an odd prime.
    pub fn new(modulus: BigUint) -> Result<Self, FieldError> {
        if modulus <= BigUint::from(2u32) {
            return Err(FieldError::InvalidConstruction(format!(
                "modulus must be greater than 2, but was {modulus}"
            )));
        }
        if !modulus.bit(0) {
            return Err(FieldError::InvalidConstruction(format!(
                "modulus must be odd, but was {modulus}"
            )));
        }
        if !is_probable_prime(&modulus) {
            return Err(FieldError::InvalidConstruction(format!(
                "modulus {modulus} is not a prime"
            )));
        }

        let p_minus_one = &modulus - 1u32;
        let legendre_power = &p_minus_one >> 1u32;

        let sqrt_strategy = if modulus.bit(1) {
            SqrtStrategy::ThreeModFour { power: (&modulus + 1u32) >> 2u32 }
        } else {
            let two_adicity = p_minus_one.trailing_zeros().unwrap_or(0);
            let t = &p_minus_one >> two_adicity;
            let z = smallest_non_residue(&modulus, &legendre_power)?;
            SqrtStrategy::TonelliShanks {
                two_adicity,
                t_minus_one_div_two: (&t - 1u32) >> 1u32,
                root_of_unity: z.modpow(&t, &modulus),
            }
        };

        let modulus_bits = modulus.bits();
        let field = PrimeField {
            element_bytes: bytes_for_bits(modulus_bits),
            modulus,
            modulus_bits,
            legendre_power,
            sqrt_strategy,
        };
        debug!(
            bits = field.modulus_bits,
            two_adicity = field.two_adicity(),
            "initialized prime field"
        );
        Ok(field)
    }

    /// Returns a new prime field with a modulus parsed from a decimal string.
    ///
    /// # Errors
    /// Returns an error if the string is not a decimal number or the number is not an odd prime.
    pub fn from_decimal(modulus: &str) -> Result<Self, FieldError> {
        let modulus = BigUint::parse_bytes(modulus.trim().as_bytes(), 10).ok_or_else(|| {
            FieldError::InvalidConstruction(format!("'{modulus}' is not a decimal number"))
        })?;
        Self::new(modulus)
    }

    /// Returns the number of bits needed to represent the modulus.
    pub fn modulus_bits(&self) -> u64 {
        self.modulus_bits
    }

    /// Returns s such that p - 1 = 2^s * t for an odd t.
    pub fn two_adicity(&self) -> u64 {
        match &self.sqrt_strategy {
            SqrtStrategy::ThreeModFour { .. } => 1,
            SqrtStrategy::TonelliShanks { two_adicity, .. } => *two_adicity,
        }
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    fn reduce(&self, value: BigUint) -> BaseElement {
        if value < self.modulus {
            BaseElement(value)
        } else {
            BaseElement(value % &self.modulus)
        }
    }

    fn mul_int(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    fn tonelli_shanks(
        &self,
        a: &BigUint,
        two_adicity: u64,
        t_minus_one_div_two: &BigUint,
        root_of_unity: &BigUint,
    ) -> Result<BigUint, FieldError> {
        let p = &self.modulus;
        let mut z = root_of_unity.clone();
        let mut w = a.modpow(t_minus_one_div_two, p);
        let mut x = self.mul_int(a, &w);
        let mut b = self.mul_int(&x, &w);
        let mut v = two_adicity;

        // invariant: x^2 = a * b and b is a 2^(v-1)-th root of unity
        while !b.is_one() {
            let mut k = 0;
            let mut b2k = b.clone();
            while !b2k.is_one() && k < v {
                b2k = self.mul_int(&b2k, &b2k);
                k += 1;
            }
            if k >= v {
                return Err(FieldError::NotASquare);
            }

            w = z;
            for _ in 0..(v - k - 1) {
                w = self.mul_int(&w, &w);
            }
            z = self.mul_int(&w, &w);
            b = self.mul_int(&b, &z);
            x = self.mul_int(&x, &w);
            v = k;
        }
        Ok(x)
    }
}

impl Display for PrimeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}

impl BaseField for PrimeField {
    type Element = BaseElement;

    fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn element_bytes(&self) -> usize {
        self.element_bytes
    }

    fn zero(&self) -> BaseElement {
        BaseElement(BigUint::zero())
    }

    fn one(&self) -> BaseElement {
        BaseElement(BigUint::one())
    }

    fn from_u64(&self, value: u64) -> BaseElement {
        self.reduce(BigUint::from(value))
    }

    fn from_biguint(&self, value: &BigUint) -> BaseElement {
        self.reduce(value.clone())
    }

    fn to_biguint(&self, x: &BaseElement) -> BigUint {
        x.0.clone()
    }

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    fn add(&self, a: &BaseElement, b: &BaseElement) -> BaseElement {
        let sum = &a.0 + &b.0;
        if sum >= self.modulus {
            BaseElement(sum - &self.modulus)
        } else {
            BaseElement(sum)
        }
    }

    fn sub(&self, a: &BaseElement, b: &BaseElement) -> BaseElement {
        if a.0 >= b.0 {
            BaseElement(&a.0 - &b.0)
        } else {
            BaseElement(&self.modulus - &b.0 + &a.0)
        }
    }

    fn mul(&self, a: &BaseElement, b: &BaseElement) -> BaseElement {
        BaseElement(self.mul_int(&a.0, &b.0))
    }

    fn neg(&self, a: &BaseElement) -> BaseElement {
        if a.0.is_zero() {
            a.clone()
        } else {
            BaseElement(&self.modulus - &a.0)
        }
    }

    fn exp(&self, a: &BaseElement, power: &BigUint) -> BaseElement {
        BaseElement(a.0.modpow(power, &self.modulus))
    }

    fn inv(&self, a: &BaseElement) -> Result<BaseElement, FieldError> {
        if a.0.is_zero() {
            return Err(FieldError::DivideByZero);
        }
        // a^(p - 2) = a^(-1) by Fermat's little theorem
        let power = &self.modulus - 2u32;
        Ok(BaseElement(a.0.modpow(&power, &self.modulus)))
    }

    fn is_zero(&self, a: &BaseElement) -> bool {
        a.0.is_zero()
    }

    // SQUARES
    // --------------------------------------------------------------------------------------------

    fn legendre(&self, a: &BaseElement) -> LegendreSymbol {
        euler_criterion(&a.0, &self.legendre_power, &self.modulus)
    }

    fn sqrt(&self, a: &BaseElement) -> Result<BaseElement, FieldError> {
        if a.0.is_zero() {
            return Ok(self.zero());
        }

        match &self.sqrt_strategy {
            SqrtStrategy::ThreeModFour { power } => {
                let x = a.0.modpow(power, &self.modulus);
                if self.mul_int(&x, &x) == a.0 {
                    Ok(BaseElement(x))
                } else {
                    Err(FieldError::NotASquare)
                }
            }
            SqrtStrategy::TonelliShanks {
                two_adicity,
                t_minus_one_div_two,
                root_of_unity,
            } => {
                if self.legendre(a).is_qnr() {
                    return Err(FieldError::NotASquare);
                }
                self.tonelli_shanks(&a.0, *two_adicity, t_minus_one_div_two, root_of_unity)
                    .map(BaseElement)
            }
        }
    }

    // RANDOMNESS
    // --------------------------------------------------------------------------------------------

    fn rand_element<R: RngCore + ?Sized>(&self, rng: &mut R) -> BaseElement {
        // sample ceil(bits / 8) bytes with the excess high bits cleared; at least half of the
        // candidates fall below p, so rejection terminates quickly
        let mut bytes = vec![0u8; self.element_bytes];
        let top_bits = (self.modulus_bits % 8) as u32;
        let mask = if top_bits == 0 { 0xff } else { (1u8 << top_bits) - 1 };
        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= mask;
            let value = BigUint::from_bytes_be(&bytes);
            if value < self.modulus {
                return BaseElement(value);
            }
        }
    }

    // SERIALIZATION / DESERIALIZATION
    // --------------------------------------------------------------------------------------------

    fn write_element<W: ByteWriter>(&self, a: &BaseElement, target: &mut W) {
        target.write_padded_be(&a.0.to_bytes_be(), self.element_bytes);
    }

    fn read_element<R: ByteReader>(
        &self,
        source: &mut R,
    ) -> Result<BaseElement, DeserializationError> {
        let bytes = source.read_slice(self.element_bytes)?;
        let value = BigUint::from_bytes_be(bytes);
        if value >= self.modulus {
            return Err(DeserializationError::InvalidValue(format!(
                "invalid field element: value {value} is greater than or equal to the field modulus"
            )));
        }
        Ok(BaseElement(value))
    }

    fn parse_element(&self, source: &str) -> Result<BaseElement, ElementDecodingError> {
        let source = source.trim();
        let parsed = match source.strip_prefix("0x").or_else(|| source.strip_prefix("0X")) {
            Some(digits) => BigUint::parse_bytes(digits.as_bytes(), 16),
            None => BigUint::parse_bytes(source.as_bytes(), 10),
        };
        let value = parsed.ok_or_else(|| ElementDecodingError::InvalidDigits(source.to_string()))?;
        if value >= self.modulus {
            return Err(ElementDecodingError::ValueTooLarge(value.to_string()));
        }
        Ok(BaseElement(value))
    }
}

#[cfg(feature = "serde")]
impl<'de> DeserializeSeed<'de> for &PrimeField {
    type Value = BaseElement;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<BaseElement, D::Error> {
        let value = BigUint::deserialize(deserializer)?;
        if value >= self.modulus {
            return Err(D::Error::custom(format!(
                "invalid field element: value {value} is greater than or equal to the field modulus"
            )));
        }
        Ok(BaseElement(value))
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn euler_criterion(value: &BigUint, legendre_power: &BigUint, modulus: &BigUint) -> LegendreSymbol {
    if value.is_zero() {
        return LegendreSymbol::Zero;
    }
    if value.modpow(legendre_power, modulus).is_one() {
        LegendreSymbol::QuadraticResidue
    } else {
        LegendreSymbol::QuadraticNonResidue
    }
}

/// Returns the smallest n >= 2 which is a quadratic non-residue modulo `modulus`.
fn smallest_non_residue(modulus: &BigUint, legendre_power: &BigUint) -> Result<BigUint, FieldError> {
    (2..MAX_NON_RESIDUE_CANDIDATES + 2)
        .map(BigUint::from)
        .take_while(|candidate| candidate < modulus)
        .find(|candidate| euler_criterion(candidate, legendre_power, modulus).is_qnr())
        .ok_or_else(|| {
            FieldError::InvalidConstruction(format!(
                "no quadratic non-residue below {} for modulus {modulus}",
                MAX_NON_RESIDUE_CANDIDATES + 2
            ))
        })
}
