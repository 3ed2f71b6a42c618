// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors reported by field construction and by the partial field operations.
///
/// None of these conditions is retried internally; the caller decides whether to sample a fresh
/// value, pick another modulus, or give up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The base field is degenerate or no usable quadratic non-residue could be established.
    #[error("invalid field construction: {0}")]
    InvalidConstruction(String),

    /// An inverse of zero was requested.
    #[error("division by zero")]
    DivideByZero,

    /// A square root was requested for an element which is not a square.
    #[error("element is not a square")]
    NotASquare,

    /// Operands are bound to different extension field descriptors.
    #[error("operands belong to different extension fields")]
    MismatchedFields,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementDecodingError {
    #[error("malformed element: {0}")]
    MalformedElement(String),

    #[error("invalid digits in field element component: {0}")]
    InvalidDigits(String),

    #[error("invalid field element: value {0} is greater than or equal to the field modulus")]
    ValueTooLarge(String),
}
