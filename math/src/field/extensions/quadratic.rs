// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::{
    fmt::{self, Debug, Display, Formatter, LowerHex},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    ptr,
};

use num_bigint::BigUint;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::{debug, trace};
use utils::{
    ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable, SliceReader,
};

use crate::{
    errors::{ElementDecodingError, FieldError},
    field::{prime::PrimeField, BaseField, LegendreSymbol, MAX_NON_RESIDUE_CANDIDATES},
};

// QUADRATIC EXTENSION FIELD
// ================================================================================================

/// Descriptor of the quadratic extension GF(p)[β] / (β² - qnr) of a base field.
///
/// The non-residue qnr is fixed at construction and the descriptor is immutable afterwards, so a
/// constructed descriptor can be shared by reference across threads. Elements borrow the
/// descriptor they were created from and therefore cannot outlive it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadField<B: BaseField = PrimeField> {
    base: B,
    non_residue: B::Element,
    non_residue_inv: B::Element,
    two_inv: B::Element,
}

impl<B: BaseField> QuadField<B> {
    /// Returns a quadratic extension of the provided base field.
    ///
    /// The non-residue is the smallest integer n >= 2 which is a quadratic non-residue in the
    /// base field. Given the same prime, the extension is therefore always the same.
    ///
    /// # Errors
    /// Returns [FieldError::InvalidConstruction] if the base field modulus is not an odd number
    /// greater than 2, or if no non-residue exists among the first
    /// [MAX_NON_RESIDUE_CANDIDATES] candidates.
    pub fn new(base: B) -> Result<Self, FieldError> {
        validate_base(&base)?;
        let non_residue = (2..MAX_NON_RESIDUE_CANDIDATES + 2)
            .take_while(|&candidate| BigUint::from(candidate) < *base.modulus())
            .map(|candidate| base.from_u64(candidate))
            .find(|candidate| base.legendre(candidate).is_qnr())
            .ok_or_else(|| {
                FieldError::InvalidConstruction(format!(
                    "no quadratic non-residue among the first {MAX_NON_RESIDUE_CANDIDATES} \
                    candidates for {base}"
                ))
            })?;
        Self::build(base, non_residue)
    }

    /// Returns a quadratic extension of the provided base field defined by the specified
    /// non-residue.
    ///
    /// # Errors
    /// Returns [FieldError::InvalidConstruction] if the base field modulus is not an odd number
    /// greater than 2, or if `non_residue` is zero or a square in the base field.
    pub fn with_non_residue(base: B, non_residue: B::Element) -> Result<Self, FieldError> {
        validate_base(&base)?;
        match base.legendre(&non_residue) {
            LegendreSymbol::QuadraticNonResidue => Self::build(base, non_residue),
            LegendreSymbol::Zero => Err(FieldError::InvalidConstruction(
                "zero cannot define a quadratic extension".to_string(),
            )),
            LegendreSymbol::QuadraticResidue => Err(FieldError::InvalidConstruction(format!(
                "{non_residue} is a square in {base} and cannot define a quadratic extension"
            ))),
        }
    }

    fn build(base: B, non_residue: B::Element) -> Result<Self, FieldError> {
        let non_residue_inv = base.inv(&non_residue)?;
        let two_inv = base.inv(&base.from_u64(2))?;
        debug!(%non_residue, "initialized quadratic extension field");
        Ok(QuadField { base, non_residue, non_residue_inv, two_inv })
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the base field of this extension.
    pub fn base_field(&self) -> &B {
        &self.base
    }

    /// Returns the non-residue qnr = β² defining this extension.
    pub fn non_residue(&self) -> &B::Element {
        &self.non_residue
    }

    /// Returns the characteristic p of this extension.
    pub fn modulus(&self) -> &BigUint {
        self.base.modulus()
    }

    /// Returns the number of bytes in the encoding of an extension element.
    pub fn element_bytes(&self) -> usize {
        self.base.element_bytes() * 2
    }

    // ELEMENT CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns the element c0 + c1·β.
    pub fn element(&self, c0: B::Element, c1: B::Element) -> QuadElement<'_, B> {
        QuadElement { field: self, c0, c1 }
    }

    /// Returns the additive identity (0, 0).
    pub fn zero(&self) -> QuadElement<'_, B> {
        self.element(self.base.zero(), self.base.zero())
    }

    /// Returns the multiplicative identity (1, 0).
    pub fn one(&self) -> QuadElement<'_, B> {
        self.element(self.base.one(), self.base.zero())
    }

    /// Returns the base field element `c0` embedded into this extension.
    pub fn from_base(&self, c0: B::Element) -> QuadElement<'_, B> {
        self.element(c0, self.base.zero())
    }

    /// Returns the element c0 + c1·β with both components reduced modulo p.
    pub fn from_u64s(&self, c0: u64, c1: u64) -> QuadElement<'_, B> {
        self.element(self.base.from_u64(c0), self.base.from_u64(c1))
    }

    /// Returns the element c0 + c1·β with both components reduced modulo p.
    pub fn from_ints(&self, c0: &BigUint, c1: &BigUint) -> QuadElement<'_, B> {
        self.element(self.base.from_biguint(c0), self.base.from_biguint(c1))
    }

    // RANDOMNESS
    // --------------------------------------------------------------------------------------------

    /// Returns an element with both components drawn uniformly from the base field using the
    /// thread-local random generator.
    pub fn rand(&self) -> QuadElement<'_, B> {
        self.rand_with(&mut rand::rng())
    }

    /// Returns an element with both components drawn uniformly from the base field using the
    /// provided generator.
    pub fn rand_with<R: RngCore + ?Sized>(&self, rng: &mut R) -> QuadElement<'_, B> {
        let c0 = self.base.rand_element(rng);
        let c1 = self.base.rand_element(rng);
        self.element(c0, c1)
    }

    /// Returns a vector of `n` pseudo-random elements generated deterministically from `seed`.
    pub fn prng_vector(&self, seed: [u8; 32], n: usize) -> Vec<QuadElement<'_, B>> {
        let mut rng = StdRng::from_seed(seed);
        (0..n).map(|_| self.rand_with(&mut rng)).collect()
    }

    // DESERIALIZATION / PARSING
    // --------------------------------------------------------------------------------------------

    /// Reads an element written by [Serializable::write_into()] from `source`.
    ///
    /// # Errors
    /// Returns an error if `source` is exhausted or if either component is not smaller than p.
    pub fn read_element<R: ByteReader>(
        &self,
        source: &mut R,
    ) -> Result<QuadElement<'_, B>, DeserializationError> {
        let c0 = self.base.read_element(source)?;
        let c1 = self.base.read_element(source)?;
        Ok(self.element(c0, c1))
    }

    /// Decodes an element from exactly [element_bytes()](Self::element_bytes) bytes.
    ///
    /// # Errors
    /// Returns an error if the length of `bytes` is wrong or if either component is not smaller
    /// than p.
    pub fn element_from_bytes(
        &self,
        bytes: &[u8],
    ) -> Result<QuadElement<'_, B>, DeserializationError> {
        let expected = self.element_bytes();
        if bytes.len() < expected {
            return Err(DeserializationError::InvalidValue(format!(
                "not enough bytes for a full field element; expected {} bytes, but was {} bytes",
                expected,
                bytes.len(),
            )));
        }
        if bytes.len() > expected {
            return Err(DeserializationError::InvalidValue(format!(
                "too many bytes for a field element; expected {} bytes, but was {} bytes",
                expected,
                bytes.len(),
            )));
        }
        let mut reader = SliceReader::new(bytes);
        self.read_element(&mut reader)
    }

    /// Parses an element printed by the [Display] or [LowerHex] implementations of
    /// [QuadElement], e.g. `[3, 5]` or `[0x3, 0x5]`.
    ///
    /// # Errors
    /// Returns an error if the string is not of the form `[c0, c1]` or if either component is not
    /// a valid base field element.
    pub fn parse_element(&self, source: &str) -> Result<QuadElement<'_, B>, ElementDecodingError> {
        let malformed =
            || ElementDecodingError::MalformedElement(format!("expected '[c0, c1]', but was '{source}'"));

        let inner = source
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(malformed)?;

        let mut parts = inner.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(c0), Some(c1), None) => {
                let c0 = self.base.parse_element(c0)?;
                let c1 = self.base.parse_element(c1)?;
                Ok(self.element(c0, c1))
            },
            _ => Err(malformed()),
        }
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    #[inline]
    fn mul_by_non_residue(&self, value: &B::Element) -> B::Element {
        self.base.mul(value, &self.non_residue)
    }
}

impl<B: BaseField> Display for QuadField<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}[b]/(b^2 - {})", self.base, self.non_residue)
    }
}

// QUADRATIC EXTENSION ELEMENT
// ================================================================================================

/// Represents an element c0 + c1·β of a [QuadField].
///
/// Both components are always canonical base field elements. Binary operations require both
/// operands to be bound to the same descriptor; the `try_*` methods report a mismatch as
/// [FieldError::MismatchedFields], while the overloaded operators panic.
pub struct QuadElement<'f, B: BaseField = PrimeField> {
    field: &'f QuadField<B>,
    c0: B::Element,
    c1: B::Element,
}

impl<'f, B: BaseField> QuadElement<'f, B> {
    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the descriptor this element is bound to.
    pub fn field(&self) -> &'f QuadField<B> {
        self.field
    }

    /// Returns the base component c0.
    pub fn c0(&self) -> &B::Element {
        &self.c0
    }

    /// Returns the β component c1.
    pub fn c1(&self) -> &B::Element {
        &self.c1
    }

    /// Consumes this element and returns (c0, c1).
    pub fn into_components(self) -> (B::Element, B::Element) {
        (self.c0, self.c1)
    }

    pub fn is_zero(&self) -> bool {
        let base = self.field.base_field();
        base.is_zero(&self.c0) && base.is_zero(&self.c1)
    }

    pub fn is_one(&self) -> bool {
        let base = self.field.base_field();
        self.c0 == base.one() && base.is_zero(&self.c1)
    }

    /// Returns true if both operands hold the same value.
    ///
    /// # Errors
    /// Returns [FieldError::MismatchedFields] if the operands are bound to different descriptors.
    pub fn equals(&self, other: &Self) -> Result<bool, FieldError> {
        self.check_field(other)?;
        Ok(self.c0 == other.c0 && self.c1 == other.c1)
    }

    // MUTATORS
    // --------------------------------------------------------------------------------------------

    /// Replaces both components of this element.
    pub fn set(&mut self, c0: B::Element, c1: B::Element) {
        self.c0 = c0;
        self.c1 = c1;
    }

    /// Replaces both components of this element with the provided integers reduced modulo p.
    pub fn set_ints(&mut self, c0: &BigUint, c1: &BigUint) {
        let base = self.field.base_field();
        self.c0 = base.from_biguint(c0);
        self.c1 = base.from_biguint(c1);
    }

    pub fn set_zero(&mut self) {
        let base = self.field.base_field();
        self.set(base.zero(), base.zero());
    }

    pub fn set_one(&mut self) {
        let base = self.field.base_field();
        self.set(base.one(), base.zero());
    }

    // CHECKED ARITHMETIC
    // --------------------------------------------------------------------------------------------

    /// Returns self + rhs.
    ///
    /// # Errors
    /// Returns [FieldError::MismatchedFields] if the operands are bound to different descriptors.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_field(rhs)?;
        Ok(self.add_unchecked(rhs))
    }

    /// Returns self - rhs.
    ///
    /// # Errors
    /// Returns [FieldError::MismatchedFields] if the operands are bound to different descriptors.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_field(rhs)?;
        Ok(self.sub_unchecked(rhs))
    }

    /// Returns self * rhs.
    ///
    /// # Errors
    /// Returns [FieldError::MismatchedFields] if the operands are bound to different descriptors.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_field(rhs)?;
        Ok(self.mul_unchecked(rhs))
    }

    /// Returns self / rhs.
    ///
    /// # Errors
    /// Returns an error if:
    /// * The operands are bound to different descriptors.
    /// * `rhs` is zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_field(rhs)?;
        Ok(self.mul_unchecked(&rhs.inv()?))
    }

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns this element added to itself.
    pub fn double(&self) -> Self {
        let base = self.field.base_field();
        self.with_components(base.double(&self.c0), base.double(&self.c1))
    }

    /// Returns this element divided by two.
    pub fn halve(&self) -> Self {
        self.mul_base(&self.field.two_inv)
    }

    /// Returns this element multiplied by a base field element.
    pub fn mul_base(&self, k: &B::Element) -> Self {
        let base = self.field.base_field();
        self.with_components(base.mul(&self.c0, k), base.mul(&self.c1, k))
    }

    /// Returns this element raised to power 2.
    ///
    /// (c0 + c1·β)² = (c0² + qnr·c1²) + 2·c0·c1·β; the first component is computed as
    /// (c0 - c1)(c0 - qnr·c1) + (1 + qnr)·c0·c1, which needs two base multiplications instead of
    /// three.
    pub fn square(&self) -> Self {
        let field = self.field;
        let base = field.base_field();

        let v0 = base.sub(&self.c0, &self.c1);
        let v3 = base.sub(&self.c0, &field.mul_by_non_residue(&self.c1));
        let v2 = base.mul(&self.c0, &self.c1);
        let v0 = base.add(&base.mul(&v0, &v3), &v2);

        let c0 = base.add(&v0, &field.mul_by_non_residue(&v2));
        let c1 = base.double(&v2);
        self.with_components(c0, c1)
    }

    /// Squares this element in place.
    pub fn square_in_place(&mut self) {
        *self = self.square();
    }

    /// Returns the conjugate c0 - c1·β.
    pub fn conjugate(&self) -> Self {
        let base = self.field.base_field();
        self.with_components(self.c0.clone(), base.neg(&self.c1))
    }

    /// Returns this element raised to power p.
    ///
    /// β^p = β·qnr^((p-1)/2) = -β because qnr is a non-residue, so the Frobenius map of a
    /// quadratic extension coincides with conjugation.
    pub fn frobenius(&self) -> Self {
        self.conjugate()
    }

    /// Returns the norm N(x) = x·x^p = c0² - qnr·c1².
    pub fn norm(&self) -> B::Element {
        let field = self.field;
        let base = field.base_field();
        let t0 = base.square(&self.c0);
        let t1 = field.mul_by_non_residue(&base.square(&self.c1));
        base.sub(&t0, &t1)
    }

    /// Returns the multiplicative inverse of this element.
    ///
    /// # Errors
    /// Returns [FieldError::DivideByZero] if this element is zero.
    pub fn inv(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivideByZero);
        }
        let base = self.field.base_field();

        // x^(-1) = conj(x) / N(x); N(x) != 0 for x != 0 because qnr is a non-residue
        let norm_inv = base.inv(&self.norm())?;
        let c0 = base.mul(&self.c0, &norm_inv);
        let c1 = base.neg(&base.mul(&self.c1, &norm_inv));
        Ok(self.with_components(c0, c1))
    }

    /// Returns this element raised to the specified power.
    pub fn exp(&self, power: &BigUint) -> Self {
        let mut result = self.field.one();
        for i in (0..power.bits()).rev() {
            result.square_in_place();
            if power.bit(i) {
                result = result.mul_unchecked(self);
            }
        }
        result
    }

    // SQUARES
    // --------------------------------------------------------------------------------------------

    /// Returns the quadratic character of this element, which equals the quadratic character of
    /// its norm in the base field.
    pub fn legendre(&self) -> LegendreSymbol {
        self.field.base_field().legendre(&self.norm())
    }

    /// Returns true if this element has a square root in the extension; zero is a square.
    pub fn is_square(&self) -> bool {
        !self.legendre().is_qnr()
    }

    /// Returns a square root of this element.
    ///
    /// When c1 = 0 the element lies in the base field: if c0 is a base field square its root is
    /// returned directly, otherwise c0/qnr is a square and the root is (0, sqrt(c0/qnr)).
    ///
    /// Otherwise, with δ = sqrt(N(x)), exactly one of (c0 + δ)/2 and (c0 - δ)/2 is a base field
    /// square α; (c0 + δ)/2 is tried first. The root is (sqrt(α), c1 / (2·sqrt(α))).
    ///
    /// # Errors
    /// Returns [FieldError::NotASquare] if this element is not a square.
    pub fn sqrt(&self) -> Result<Self, FieldError> {
        let field = self.field;
        let base = field.base_field();

        if base.is_zero(&self.c1) {
            if base.is_square(&self.c0) {
                trace!("sqrt: base field square");
                let root = base.sqrt(&self.c0)?;
                return Ok(self.with_components(root, base.zero()));
            }
            trace!("sqrt: base field non-residue lifted through b");
            let root = base.sqrt(&base.mul(&self.c0, &field.non_residue_inv))?;
            return Ok(self.with_components(base.zero(), root));
        }

        let delta = base.sqrt(&self.norm())?;
        let mut alpha = base.mul(&base.add(&self.c0, &delta), &field.two_inv);
        if !base.is_square(&alpha) {
            trace!("sqrt: (a0 + delta) / 2 is a non-residue, taking (a0 - delta) / 2");
            alpha = base.mul(&base.sub(&self.c0, &delta), &field.two_inv);
        }

        let c0 = base.sqrt(&alpha)?;
        let c1 = base.mul(&self.c1, &base.inv(&base.double(&c0))?);
        Ok(self.with_components(c0, c1))
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    fn with_components(&self, c0: B::Element, c1: B::Element) -> Self {
        QuadElement { field: self.field, c0, c1 }
    }

    fn same_field(&self, other: &Self) -> bool {
        ptr::eq(self.field, other.field)
    }

    fn check_field(&self, other: &Self) -> Result<(), FieldError> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(FieldError::MismatchedFields)
        }
    }

    fn assert_field(&self, other: &Self) {
        assert!(self.same_field(other), "operands belong to different extension fields");
    }

    fn add_unchecked(&self, rhs: &Self) -> Self {
        let base = self.field.base_field();
        self.with_components(base.add(&self.c0, &rhs.c0), base.add(&self.c1, &rhs.c1))
    }

    fn sub_unchecked(&self, rhs: &Self) -> Self {
        let base = self.field.base_field();
        self.with_components(base.sub(&self.c0, &rhs.c0), base.sub(&self.c1, &rhs.c1))
    }

    /// Karatsuba multiplication: three base multiplications plus one multiplication by qnr.
    fn mul_unchecked(&self, rhs: &Self) -> Self {
        let field = self.field;
        let base = field.base_field();

        let t0 = base.mul(&self.c0, &rhs.c0);
        let t1 = base.mul(&self.c1, &rhs.c1);
        let t2 = base.mul(&base.add(&self.c0, &self.c1), &base.add(&rhs.c0, &rhs.c1));

        let c0 = base.add(&t0, &field.mul_by_non_residue(&t1));
        let c1 = base.sub(&base.sub(&t2, &t0), &t1);
        self.with_components(c0, c1)
    }
}

impl<B: BaseField> Clone for QuadElement<'_, B> {
    fn clone(&self) -> Self {
        self.with_components(self.c0.clone(), self.c1.clone())
    }
}

impl<B: BaseField> PartialEq for QuadElement<'_, B> {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other) && self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl<B: BaseField> Eq for QuadElement<'_, B> {}

impl<B: BaseField> Debug for QuadElement<'_, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "QuadElement({:?}, {:?})", self.c0, self.c1)
    }
}

impl<B: BaseField> Display for QuadElement<'_, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.c0, self.c1)
    }
}

impl<B: BaseField> LowerHex for QuadElement<'_, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "[{:#x}, {:#x}]", self.c0, self.c1)
        } else {
            write!(f, "[{:x}, {:x}]", self.c0, self.c1)
        }
    }
}

// OVERLOADED OPERATORS
// ------------------------------------------------------------------------------------------------

impl<'f, B: BaseField> Add for &QuadElement<'f, B> {
    type Output = QuadElement<'f, B>;

    /// # Panics
    /// Panics if the operands are bound to different descriptors.
    fn add(self, rhs: Self) -> QuadElement<'f, B> {
        self.assert_field(rhs);
        self.add_unchecked(rhs)
    }
}

impl<'f, B: BaseField> Add for QuadElement<'f, B> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<'f, B: BaseField> AddAssign<&QuadElement<'f, B>> for QuadElement<'f, B> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs;
    }
}

impl<'f, B: BaseField> Sub for &QuadElement<'f, B> {
    type Output = QuadElement<'f, B>;

    /// # Panics
    /// Panics if the operands are bound to different descriptors.
    fn sub(self, rhs: Self) -> QuadElement<'f, B> {
        self.assert_field(rhs);
        self.sub_unchecked(rhs)
    }
}

impl<'f, B: BaseField> Sub for QuadElement<'f, B> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<'f, B: BaseField> SubAssign<&QuadElement<'f, B>> for QuadElement<'f, B> {
    fn sub_assign(&mut self, rhs: &Self) {
        *self = &*self - rhs;
    }
}

impl<'f, B: BaseField> Mul for &QuadElement<'f, B> {
    type Output = QuadElement<'f, B>;

    /// # Panics
    /// Panics if the operands are bound to different descriptors.
    fn mul(self, rhs: Self) -> QuadElement<'f, B> {
        self.assert_field(rhs);
        self.mul_unchecked(rhs)
    }
}

impl<'f, B: BaseField> Mul for QuadElement<'f, B> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<'f, B: BaseField> MulAssign<&QuadElement<'f, B>> for QuadElement<'f, B> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = &*self * rhs;
    }
}

impl<'f, B: BaseField> Neg for &QuadElement<'f, B> {
    type Output = QuadElement<'f, B>;

    fn neg(self) -> QuadElement<'f, B> {
        let base = self.field.base_field();
        self.with_components(base.neg(&self.c0), base.neg(&self.c1))
    }
}

impl<'f, B: BaseField> Neg for QuadElement<'f, B> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// SERIALIZATION / DESERIALIZATION
// ------------------------------------------------------------------------------------------------

impl<B: BaseField> Serializable for QuadElement<'_, B> {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        let base = self.field.base_field();
        base.write_element(&self.c0, target);
        base.write_element(&self.c1, target);
    }

    fn get_size_hint(&self) -> usize {
        self.field.element_bytes()
    }
}

/// A descriptor is encoded as the byte length of p (u32, little-endian), p in big-endian order,
/// and the non-residue in the fixed base field element width.
///
/// # Panics
/// Panics if the modulus is longer than `u32::MAX` bytes.
impl<B: BaseField> Serializable for QuadField<B> {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        let modulus = self.base.modulus().to_bytes_be();
        let num_bytes = u32::try_from(modulus.len()).unwrap_or_else(|_| {
            panic!("modulus of {} bytes is too long to serialize", modulus.len())
        });
        target.write_u32(num_bytes);
        target.write_u8_slice(&modulus);
        self.base.write_element(&self.non_residue, target);
    }
}

impl Deserializable for QuadField<PrimeField> {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let num_bytes = source.read_u32()? as usize;
        let modulus = BigUint::from_bytes_be(source.read_slice(num_bytes)?);
        let base = PrimeField::new(modulus)
            .map_err(|err| DeserializationError::InvalidValue(err.to_string()))?;
        let non_residue = base.read_element(source)?;
        QuadField::with_non_residue(base, non_residue)
            .map_err(|err| DeserializationError::InvalidValue(err.to_string()))
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn validate_base<B: BaseField>(base: &B) -> Result<(), FieldError> {
    let modulus = base.modulus();
    if *modulus <= BigUint::from(2u32) || !modulus.bit(0) {
        return Err(FieldError::InvalidConstruction(format!(
            "quadratic extensions require an odd characteristic greater than 2, but was {modulus}"
        )));
    }
    Ok(())
}
