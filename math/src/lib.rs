// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains modules with mathematical operations needed for working with quadratic
//! extensions of prime fields selected at runtime.
//!
//! # Base field
//! The [BaseField] trait is the seam between the extension and big-integer arithmetic. A single
//! implementation is provided: [PrimeField](fields::PrimeField), which performs arithmetic modulo
//! any odd prime using [num_bigint::BigUint] residues.
//!
//! # Quadratic extension
//! [QuadField] is an immutable descriptor of GF(p²) = GF(p)[β] / (β² - qnr), where qnr is the
//! smallest integer n >= 2 which is a quadratic non-residue modulo p. Elements are represented
//! by [QuadElement] and borrow the descriptor they were created from:
//!
//! ```
//! use fp2_math::{fields::PrimeField, QuadField};
//! use num_bigint::BigUint;
//!
//! let base = PrimeField::new(BigUint::from(103u32)).unwrap();
//! let field = QuadField::new(base).unwrap();
//!
//! let a = field.from_u64s(3, 5);
//! let b = a.square();
//! assert!(b.is_square());
//!
//! let root = b.sqrt().unwrap();
//! assert!(root == a || root == -&a);
//! assert!((&a * &a.inv().unwrap()).is_one());
//! ```
//!
//! # Utilities
//! The [utils] module contains batch inversion and the probable-prime helpers used to select
//! moduli.

pub mod utils;

mod field;
pub use field::{BaseField, LegendreSymbol, QuadElement, QuadField, MAX_NON_RESIDUE_CANDIDATES};
pub mod fields {
    //! Finite field implementations.
    //!
    //! This module contains a concrete implementation of a prime field with a runtime modulus.

    pub use super::field::prime::{BaseElement, PrimeField};
}

mod errors;
pub use errors::{ElementDecodingError, FieldError};
