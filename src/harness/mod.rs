/*!
Staged workflows over one algorithm.

A [`SignatureHarness`] drives a signature scheme through key generation,
signing, verification and a tamper check. A [`KemHarness`] drives a KEM
through key generation, encapsulation, decapsulation and agreement. Both
check every provider output against the algorithm's descriptor.
*/

pub mod kem;
pub mod signature;
pub mod state;

pub use kem::KemHarness;
pub use signature::{SignatureHarness, Verification};
pub use state::{KemState, SignatureState};

use crate::core::error::{Error, Result};

/// Fail with `InvariantViolation` unless `actual == expected`
pub(crate) fn check_exact_len(algorithm: &str, what: &str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvariantViolation {
            algorithm: algorithm.to_string(),
            detail: format!("{what} is {actual} bytes, descriptor declares {expected}"),
        });
    }
    Ok(())
}

pub(crate) fn invalid_state(algorithm: &str, expected: impl ToString, actual: impl ToString) -> Error {
    Error::InvalidState {
        algorithm: algorithm.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod testing;
