// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

// BYTE WRITER TRAIT
// ================================================================================================

/// Sink for serialized bytes.
pub trait ByteWriter: Sized {
    /// Writes a single byte into `self`.
    fn write_u8(&mut self, value: u8);

    /// Writes a sequence of bytes into `self`.
    fn write_u8_slice(&mut self, values: &[u8]);

    /// Writes a u32 value in little-endian byte order into `self`.
    fn write_u32(&mut self, value: u32) {
        self.write_u8_slice(&value.to_le_bytes());
    }

    /// Writes a big-endian byte string left-padded with zeros to exactly `width` bytes.
    ///
    /// Every residue of a prime field occupies the same number of bytes regardless of its
    /// magnitude.
    ///
    /// # Panics
    /// Panics if `bytes` is longer than `width`.
    fn write_padded_be(&mut self, bytes: &[u8], width: usize) {
        assert!(
            bytes.len() <= width,
            "value of {} bytes does not fit into {} bytes",
            bytes.len(),
            width
        );
        for _ in bytes.len()..width {
            self.write_u8(0);
        }
        self.write_u8_slice(bytes);
    }
}

impl ByteWriter for Vec<u8> {
    fn write_u8(&mut self, value: u8) {
        self.push(value);
    }

    fn write_u8_slice(&mut self, values: &[u8]) {
        self.extend_from_slice(values);
    }
}
