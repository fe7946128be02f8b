//! Core module tree: one module per exercise plus shared arithmetic.
//! Everything here is pure; rendering lives in `commands`.

pub mod cipher;
pub mod diagnostics;
pub mod divisors;
pub mod error;
pub mod number;
pub mod perfect;
pub mod primes;
pub mod triples;

pub use error::ExerciseError;
