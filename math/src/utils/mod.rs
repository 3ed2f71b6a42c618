// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use tracing::info_span;
#[cfg(feature = "concurrent")]
use utils::rayon::prelude::*;

use crate::{
    errors::FieldError,
    field::{BaseField, QuadElement},
};

mod primes;
pub use primes::{is_probable_prime, next_prime};

#[cfg(test)]
mod tests;

// MATH FUNCTIONS
// ================================================================================================

/// Computes a multiplicative inverse of a sequence of elements using batch inversion method.
/// Any ZEROs in the provided sequence are mapped to ZEROs.
///
/// When `concurrent` feature is enabled, long sequences are split into batches which are
/// inverted in multiple threads.
///
/// # Errors
/// Returns [FieldError::MismatchedFields] if the elements are not all bound to the same
/// extension field.
pub fn batch_inversion<'f, B: BaseField>(
    values: &[QuadElement<'f, B>],
) -> Result<Vec<QuadElement<'f, B>>, FieldError> {
    let Some(first) = values.first() else {
        return Ok(Vec::new());
    };
    let field = first.field();
    if values.iter().any(|value| !core::ptr::eq(value.field(), field)) {
        return Err(FieldError::MismatchedFields);
    }

    let _span = info_span!("batch_inversion", num_values = values.len()).entered();

    #[cfg(feature = "concurrent")]
    {
        const MIN_CONCURRENT_SIZE: usize = 1024;
        if values.len() >= MIN_CONCURRENT_SIZE {
            let num_batches = utils::rayon::current_num_threads().next_power_of_two();
            let batch_size = values.len().div_ceil(num_batches);
            let batches = values
                .par_chunks(batch_size)
                .map(serial_batch_inversion)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(batches.into_iter().flatten().collect());
        }
    }

    serial_batch_inversion(values)
}

// HELPER FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn serial_batch_inversion<'f, B: BaseField>(
    values: &[QuadElement<'f, B>],
) -> Result<Vec<QuadElement<'f, B>>, FieldError> {
    let Some(first) = values.first() else {
        return Ok(Vec::new());
    };
    let field = first.field();

    let mut result = Vec::with_capacity(values.len());
    let mut last = field.one();
    for value in values {
        result.push(last.clone());
        if !value.is_zero() {
            last *= value;
        }
    }

    last = last.inv()?;

    for (result, value) in result.iter_mut().zip(values).rev() {
        if value.is_zero() {
            result.set_zero();
        } else {
            *result *= &last;
            last *= value;
        }
    }

    Ok(result)
}
