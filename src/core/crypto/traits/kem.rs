/*!
Traits for key encapsulation operations.

This module defines the interface a KEM provider implements.
*/

use crate::core::crypto::types::{AlgorithmDescriptor, Ciphertext, Encapsulation, KeyPair, SharedSecret};
use crate::core::error::ProviderResult;
use crate::core::memory::SecretBytes;

/// A key-encapsulation mechanism backed by some cryptographic provider
pub trait KemScheme: Send + Sync {
    /// Sizes reported by the provider for this parameter set
    fn descriptor(&self) -> &AlgorithmDescriptor;

    /// Generate a key pair
    fn keypair(&self) -> ProviderResult<KeyPair>;

    /// Encapsulate a fresh shared secret to the receiver's public key (sender side)
    fn encapsulate(&self, public_key: &[u8]) -> ProviderResult<Encapsulation>;

    /// Recover the shared secret from a ciphertext (receiver side)
    fn decapsulate(&self, ciphertext: &Ciphertext, secret_key: &SecretBytes) -> ProviderResult<SharedSecret>;
}
