// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

mod traits;
pub use traits::{BaseField, LegendreSymbol};

mod extensions;
pub use extensions::{QuadElement, QuadField};

pub mod prime;

// CONSTANTS
// ================================================================================================

/// Number of consecutive integers, starting from 2, tried when searching for a quadratic
/// non-residue.
pub const MAX_NON_RESIDUE_CANDIDATES: u64 = 1 << 16;
