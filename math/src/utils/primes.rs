// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// The first 20 primes; used both for trial division and as Miller-Rabin bases.
const SMALL_PRIMES: [u32; 20] =
    [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71];

// PRIMALITY
// ================================================================================================

/// Returns true if `n` is a probable prime.
///
/// Candidates are first checked by trial division against small primes and then subjected to
/// Miller-Rabin rounds with each of the first 20 primes as a base. The result is exact for all
/// n < 3.3 * 10^24.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        if *n == BigUint::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    SMALL_PRIMES
        .iter()
        .all(|&a| miller_rabin_round(n, &n_minus_one, &d, s, &BigUint::from(a)))
}

/// Returns the smallest probable prime strictly greater than `n`.
pub fn next_prime(n: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    if *n < two {
        return two;
    }

    let mut candidate = n + 1u32;
    if !candidate.bit(0) {
        candidate += 1u32;
    }
    while !is_probable_prime(&candidate) {
        candidate += 2u32;
    }
    candidate
}

// HELPER FUNCTIONS
// ================================================================================================

/// n - 1 = 2^s * d with d odd; returns false if `a` witnesses that n is composite.
fn miller_rabin_round(n: &BigUint, n_minus_one: &BigUint, d: &BigUint, s: u64, a: &BigUint) -> bool {
    let mut x = a.modpow(d, n);
    if x.is_one() || x == *n_minus_one {
        return true;
    }
    for _ in 1..s {
        x = &x * &x % n;
        if x == *n_minus_one {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }
    false
}
