// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::DeserializationError;

// BYTE READER TRAIT
// ================================================================================================

/// Source of the bytes produced by a [ByteWriter](super::ByteWriter).
///
/// Every successful read advances the reader. A failed read leaves the reader where it was.
pub trait ByteReader {
    /// Returns the next `len` bytes of `self`.
    ///
    /// # Errors
    /// Returns [DeserializationError::UnexpectedEOF] if fewer than `len` bytes are left.
    fn read_slice(&mut self, len: usize) -> Result<&[u8], DeserializationError>;

    /// Returns the next `N` bytes of `self` as an array.
    ///
    /// # Errors
    /// Returns [DeserializationError::UnexpectedEOF] if fewer than `N` bytes are left.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DeserializationError>;

    /// Returns true if there are more bytes left to be read from `self`.
    fn has_more_bytes(&self) -> bool;

    /// Returns a u32 value read from `self` in little-endian byte order.
    ///
    /// # Errors
    /// Returns [DeserializationError::UnexpectedEOF] if fewer than 4 bytes are left.
    fn read_u32(&mut self) -> Result<u32, DeserializationError> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }
}

// SLICE READER
// ================================================================================================

/// Implements [ByteReader] trait for a slice of bytes.
pub struct SliceReader<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    /// Creates a new slice reader from the specified slice.
    pub fn new(source: &'a [u8]) -> Self {
        SliceReader { source, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DeserializationError> {
        let end = self.pos.checked_add(len).ok_or(DeserializationError::UnexpectedEOF)?;
        let result = self.source.get(self.pos..end).ok_or(DeserializationError::UnexpectedEOF)?;
        self.pos = end;
        Ok(result)
    }
}

impl ByteReader for SliceReader<'_> {
    fn read_slice(&mut self, len: usize) -> Result<&[u8], DeserializationError> {
        self.take(len)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DeserializationError> {
        let mut result = [0u8; N];
        result.copy_from_slice(self.take(N)?);
        Ok(result)
    }

    fn has_more_bytes(&self) -> bool {
        self.pos < self.source.len()
    }
}
