// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the byte-level serialization traits shared by the fp2 crates.
//!
//! Field elements of a runtime-selected prime field have a width which is only known once the
//! modulus is known. For this reason, the [ByteWriter] trait exposes a fixed-width big-endian
//! writer, and field types read their values through a field descriptor rather than through
//! [Deserializable] directly.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod serde;
pub use serde::{ByteReader, ByteWriter, Deserializable, Serializable, SliceReader};

mod errors;
pub use errors::DeserializationError;


// FEATURE-BASED RE-EXPORTS
// ================================================================================================

#[cfg(feature = "concurrent")]
pub use rayon;

// BYTE HELPERS
// ================================================================================================

/// Returns the number of bytes needed to hold a value with the specified number of bits.
///
/// # Example
/// ```
/// # use fp2_utils::bytes_for_bits;
/// assert_eq!(0, bytes_for_bits(0));
/// assert_eq!(1, bytes_for_bits(8));
/// assert_eq!(33, bytes_for_bits(257));
/// ```
pub const fn bytes_for_bits(bits: u64) -> usize {
    bits.div_ceil(8) as usize
}
