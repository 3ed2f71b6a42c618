// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core_utils::Serializable;
use math::{fields::PrimeField, utils::next_prime, FieldError, QuadElement, QuadField};
use num_bigint::BigUint;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use structopt::StructOpt;
use thiserror::Error;
use tracing::{debug, info, info_span};


// DEMO OPTIONS
// ================================================================================================

#[derive(StructOpt, Debug)]
#[structopt(name = "fp2-demo", about = "Quadratic extension field walkthrough")]
pub struct DemoOptions {
    #[structopt(subcommand)]
    pub command: Command,

    /// Bit set in the starting value of the prime search
    #[structopt(short = "b", long = "bits", default_value = "256")]
    pub bits: u64,

    /// Offset added to 2^bits before searching for the next prime
    #[structopt(short = "o", long = "offset", default_value = "82")]
    pub offset: u64,

    /// Decimal prime to use instead of searching from 2^bits + offset
    #[structopt(short = "p", long = "prime")]
    pub prime: Option<String>,

    /// Seed of the random generator; OS entropy is used when omitted
    #[structopt(short = "s", long = "seed")]
    pub seed: Option<u64>,

    /// Number of random samples drawn while searching for a square
    #[structopt(short = "t", long = "max-tries", default_value = "1000")]
    pub max_tries: usize,

    /// Print elements in hexadecimal
    #[structopt(short = "x", long = "hex")]
    pub hex: bool,
}

#[derive(StructOpt, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add, multiply, take a square root of and invert random elements
    Walkthrough,
    /// Print the parameters of the extension field
    Params,
}

impl DemoOptions {
    /// Returns the prime selected by these options.
    pub fn prime(&self) -> Result<BigUint, DemoError> {
        match &self.prime {
            Some(prime) => BigUint::parse_bytes(prime.trim().as_bytes(), 10)
                .ok_or_else(|| DemoError::InvalidPrime(prime.clone())),
            None => {
                let start = (BigUint::from(1u32) << self.bits) + self.offset;
                Ok(next_prime(&start))
            },
        }
    }

    /// Builds the prime field and its quadratic extension.
    pub fn build_field(&self) -> Result<QuadField, DemoError> {
        let base = PrimeField::new(self.prime()?)?;
        Ok(QuadField::new(base)?)
    }

    /// Returns the random generator selected by these options.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn format(&self, x: &QuadElement) -> String {
        if self.hex {
            format!("{x:#x}")
        } else {
            x.to_string()
        }
    }
}

// ERRORS
// ================================================================================================

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("'{0}' is not a decimal number")]
    InvalidPrime(String),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("no square found among {0} random samples")]
    NoSquareFound(usize),
}

// FIELD PARAMETERS
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParams {
    pub modulus: BigUint,
    pub modulus_bits: u64,
    pub modulus_mod_4: u32,
    pub non_residue: String,
    pub element_bytes: usize,
}

impl FieldParams {
    pub fn new(field: &QuadField) -> Self {
        let modulus = field.modulus().clone();
        FieldParams {
            modulus_bits: modulus.bits(),
            // p is odd, so bit 1 decides between 1 and 3
            modulus_mod_4: if modulus.bit(1) { 3 } else { 1 },
            non_residue: field.non_residue().to_string(),
            element_bytes: field.element_bytes(),
            modulus,
        }
    }

    pub fn log(&self) {
        info!("p = {}", self.modulus);
        info!("p bits = {}", self.modulus_bits);
        info!("p mod 4 = {}", self.modulus_mod_4);
        info!("non-residue = {}", self.non_residue);
        info!("element size = {} bytes", self.element_bytes);
    }
}

// WALKTHROUGH
// ================================================================================================

/// Elements produced by a single walkthrough run.
#[derive(Debug)]
pub struct Walkthrough<'f> {
    pub a: QuadElement<'f>,
    pub b: QuadElement<'f>,
    pub sum: QuadElement<'f>,
    pub product: QuadElement<'f>,
    pub square: QuadElement<'f>,
    pub root: QuadElement<'f>,
    pub inverse: QuadElement<'f>,
    pub tries: usize,
}

/// Draws two random elements, adds and multiplies them, searches for a random square and takes
/// its root, and finally inverts the first element.
///
/// # Errors
/// Returns an error if no square is found within `options.max_tries` samples or if the first
/// element happens to be zero.
pub fn run_walkthrough<'f, R: RngCore>(
    field: &'f QuadField,
    options: &DemoOptions,
    rng: &mut R,
) -> Result<Walkthrough<'f>, DemoError> {
    let _span = info_span!("walkthrough").entered();

    let a = field.rand_with(rng);
    let b = field.rand_with(rng);
    info!("a = {}", options.format(&a));
    info!("b = {}", options.format(&b));
    debug!("a bytes = {}", hex::encode(a.to_bytes()));

    let sum = &a + &b;
    info!("a + b = {}", options.format(&sum));
    let product = &a * &b;
    info!("a * b = {}", options.format(&product));

    let mut tries = 0;
    let square = loop {
        if tries == options.max_tries {
            return Err(DemoError::NoSquareFound(options.max_tries));
        }
        tries += 1;
        let x = field.rand_with(rng);
        if x.is_square() {
            break x;
        }
    };
    debug!("found a square after {} samples", tries);

    let root = square.sqrt()?;
    info!("x = {}", options.format(&square));
    info!("sqrt(x) = {}", options.format(&root));
    info!("sqrt(x)^2 = {}", options.format(&root.square()));

    let inverse = a.inv()?;
    info!("1/a = {}", options.format(&inverse));
    info!("1/a * a = {}", options.format(&(&inverse * &a)));

    Ok(Walkthrough { a, b, sum, product, square, root, inverse, tries })
}
