// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt::{Debug, Display, LowerHex};

use num_bigint::BigUint;
use rand::RngCore;
use utils::{ByteReader, ByteWriter, DeserializationError};

use crate::errors::{ElementDecodingError, FieldError};

// LEGENDRE SYMBOL
// ================================================================================================

/// Quadratic character of a field element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LegendreSymbol {
    Zero,
    QuadraticResidue,
    QuadraticNonResidue,
}

impl LegendreSymbol {
    pub fn is_zero(&self) -> bool {
        *self == LegendreSymbol::Zero
    }

    pub fn is_qr(&self) -> bool {
        *self == LegendreSymbol::QuadraticResidue
    }

    pub fn is_qnr(&self) -> bool {
        *self == LegendreSymbol::QuadraticNonResidue
    }
}

// BASE FIELD
// ================================================================================================

/// Arithmetic over a prime field whose modulus is selected at runtime.
///
/// This is the only interface through which the quadratic extension touches big-integer
/// arithmetic. Elements are plain values which carry no reference to their field; every
/// operation is a method on the field descriptor, and every returned element is reduced into
/// [0, p).
pub trait BaseField: Debug + Display + Send + Sync {
    /// Residue type; always holds a canonical value in [0, p).
    type Element: Clone + Debug + Display + LowerHex + PartialEq + Eq + Send + Sync;

    // PARAMETERS
    // --------------------------------------------------------------------------------------------

    /// Returns the prime modulus p of this field.
    fn modulus(&self) -> &BigUint;

    /// Returns the number of bytes in the fixed-width encoding of an element.
    fn element_bytes(&self) -> usize;

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns the additive identity.
    fn zero(&self) -> Self::Element;

    /// Returns the multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Returns `value` reduced modulo p.
    fn from_u64(&self, value: u64) -> Self::Element;

    /// Returns `value` reduced modulo p.
    fn from_biguint(&self, value: &BigUint) -> Self::Element;

    /// Returns the canonical integer representation of `x`.
    fn to_biguint(&self, x: &Self::Element) -> BigUint;

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn neg(&self, a: &Self::Element) -> Self::Element;

    /// Returns `a` added to itself.
    fn double(&self, a: &Self::Element) -> Self::Element {
        self.add(a, a)
    }

    /// Returns `a` raised to power 2.
    fn square(&self, a: &Self::Element) -> Self::Element {
        self.mul(a, a)
    }

    /// Returns `a` raised to the specified power.
    fn exp(&self, a: &Self::Element, power: &BigUint) -> Self::Element;

    /// Returns the multiplicative inverse of `a`.
    ///
    /// # Errors
    /// Returns [FieldError::DivideByZero] if `a` is zero.
    fn inv(&self, a: &Self::Element) -> Result<Self::Element, FieldError>;

    fn is_zero(&self, a: &Self::Element) -> bool;

    // SQUARES
    // --------------------------------------------------------------------------------------------

    /// Returns the quadratic character of `a`.
    fn legendre(&self, a: &Self::Element) -> LegendreSymbol;

    /// Returns true if `a` has a square root in this field; zero is a square.
    fn is_square(&self, a: &Self::Element) -> bool {
        !self.legendre(a).is_qnr()
    }

    /// Returns a square root of `a`.
    ///
    /// # Errors
    /// Returns [FieldError::NotASquare] if `a` is a quadratic non-residue.
    fn sqrt(&self, a: &Self::Element) -> Result<Self::Element, FieldError>;

    // RANDOMNESS
    // --------------------------------------------------------------------------------------------

    /// Returns an element drawn uniformly from [0, p) using the provided generator.
    fn rand_element<R: RngCore + ?Sized>(&self, rng: &mut R) -> Self::Element;

    // SERIALIZATION / DESERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Writes `a` into `target` using exactly [element_bytes()](Self::element_bytes) bytes.
    fn write_element<W: ByteWriter>(&self, a: &Self::Element, target: &mut W);

    /// Reads an element written by [write_element()](Self::write_element).
    ///
    /// # Errors
    /// Returns an error if the source is exhausted or the value is not smaller than p.
    fn read_element<R: ByteReader>(
        &self,
        source: &mut R,
    ) -> Result<Self::Element, DeserializationError>;

    /// Parses an element from a decimal string or a `0x`-prefixed hexadecimal string.
    ///
    /// # Errors
    /// Returns an error if the string is not a number or if the value is not smaller than p.
    fn parse_element(&self, source: &str) -> Result<Self::Element, ElementDecodingError>;
}
