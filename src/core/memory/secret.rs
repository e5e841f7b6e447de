/*!
Zero-on-drop buffers for secret key material.

Secret keys and shared secrets live in [`SecretBytes`] from the moment a
provider hands them over. The buffer is wiped when it is dropped, on every
path out of a harness: normal completion, early return, or error.
*/

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::error::{ProviderError, ProviderResult};
use crate::core::security::constant_time_eq;

/// Copy provider output into a buffer of exactly `bytes.len()` bytes.
///
/// Allocation failure is reported instead of aborting the process.
pub fn try_copy(bytes: &[u8], what: &'static str) -> ProviderResult<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(bytes.len())
        .map_err(|_| ProviderError::Allocation {
            what,
            requested: bytes.len(),
        })?;
    buffer.extend_from_slice(bytes);
    Ok(buffer)
}

/// Secret byte buffer, wiped on drop.
///
/// Not `Clone`: a secret has exactly one owner.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// Take ownership of an existing buffer
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Copy a provider-owned slice into a fresh secret buffer
    pub fn try_from_slice(bytes: &[u8], what: &'static str) -> ProviderResult<Self> {
        try_copy(bytes, what).map(Self)
    }

    /// Borrow the secret bytes for a provider call
    pub fn expose(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compare with another secret in constant time
    pub fn ct_eq(&self, other: &SecretBytes) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes([REDACTED; {} bytes])", self.0.len())
    }
}
