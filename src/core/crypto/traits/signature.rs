/*!
Traits for signature operations.

This module defines the interface a signature provider implements.
*/

use crate::core::crypto::types::{AlgorithmDescriptor, KeyPair, Signature};
use crate::core::error::ProviderResult;
use crate::core::memory::SecretBytes;

/// A signature scheme backed by some cryptographic provider
pub trait SignatureScheme: Send + Sync {
    /// Sizes reported by the provider for this parameter set
    fn descriptor(&self) -> &AlgorithmDescriptor;

    /// Generate a key pair
    fn keypair(&self) -> ProviderResult<KeyPair>;

    /// Produce a detached signature over `message`
    fn sign(&self, message: &[u8], secret_key: &SecretBytes) -> ProviderResult<Signature>;

    /// Check a detached signature.
    ///
    /// A signature that does not match is `Ok(false)`. `Err` is reserved
    /// for the provider being unable to run the check at all.
    fn verify(&self, message: &[u8], signature: &Signature, public_key: &[u8]) -> ProviderResult<bool>;
}
